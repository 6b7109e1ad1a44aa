#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web server for the fire map dashboard.
//!
//! Serves the single-page dashboard (embedded at compile time) and a small
//! JSON API. The page keeps the current markers, cards and selection and
//! posts them back with every interaction to `/api/reconcile`; the server
//! holds no per-client state.

mod assets;
mod handlers;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use fire_map_dashboard::MapSettings;
use fire_map_incident::IncidentStore;

/// Shared application state.
pub struct AppState {
    /// Read-only incident store.
    pub store: Arc<IncidentStore>,
    /// Map pane presentation settings.
    pub map: MapSettings,
}

impl AppState {
    /// State backed by the compiled-in sample incidents.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            store: Arc::new(IncidentStore::sample()),
            map: MapSettings::default(),
        }
    }
}

/// Registers the API routes and the embedded page.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/incidents", web::get().to(handlers::incidents))
            .route("/incidents/{id}", web::get().to(handlers::incident))
            .route("/map", web::get().to(handlers::map_settings))
            .route("/view", web::get().to(handlers::view))
            .route("/reconcile", web::post().to(handlers::reconcile)),
    )
    .route("/assets/{file}", web::get().to(assets::asset))
    .route("/", web::get().to(assets::index));
}

/// Starts the fire map server.
///
/// Binds to `BIND_ADDR` (default `127.0.0.1`) and `PORT` (default `8080`).
/// This is a regular async function; the caller provides the runtime (e.g.
/// via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let state = web::Data::new(AppState::sample());
    log::info!("Loaded {} incidents", state.store.len());

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
