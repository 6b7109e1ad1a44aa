//! The single-page dashboard and its static assets, embedded at compile
//! time.

use actix_web::{HttpResponse, web};
use include_dir::{Dir, include_dir};

static ASSETS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// `GET /`
pub async fn index() -> HttpResponse {
    serve("index.html")
}

/// `GET /assets/{file}`
pub async fn asset(file: web::Path<String>) -> HttpResponse {
    serve(&file)
}

fn serve(name: &str) -> HttpResponse {
    ASSETS_DIR.get_file(name).map_or_else(
        || {
            log::debug!("No embedded asset named {name}");
            HttpResponse::NotFound().finish()
        },
        |file| {
            HttpResponse::Ok()
                .content_type(content_type(name))
                .body(file.contents())
        },
    )
}

fn content_type(name: &str) -> &'static str {
    match name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, http::header, test, web};

    use crate::{AppState, configure};

    #[actix_web::test]
    async fn serves_dashboard_page() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::sample()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );

        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("id=\"incident-map\""));
        assert!(html.contains("id=\"card-container\""));
    }

    #[actix_web::test]
    async fn serves_marker_icons() {
        let app = test::init_service(App::new().configure(configure)).await;

        for icon in ["blue_marker.svg", "red_marker.svg"] {
            let req = test::TestRequest::get()
                .uri(&format!("/assets/{icon}"))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
            assert_eq!(
                resp.headers().get(header::CONTENT_TYPE).unwrap(),
                "image/svg+xml"
            );
        }

        let req = test::TestRequest::get()
            .uri("/assets/missing.png")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn dashboard_script_drops_out_of_order_responses() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/assets/dashboard.js")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/javascript; charset=utf-8"
        );

        let body = test::read_body(resp).await;
        let script = std::str::from_utf8(&body).unwrap();
        assert!(script.contains("const seq = ++latest;"));
        assert_eq!(script.matches("if (seq !== latest)").count(), 2);
    }
}
