//! HTTP handler functions for the fire map API.

use actix_web::{HttpResponse, web};
use fire_map_dashboard::{ReconcileError, reconcile as reconcile_view, render};
use fire_map_incident_models::IncidentId;
use fire_map_server_models::{
    ApiError, ApiHealth, ApiIncident, ApiView, ReconcileRequest, ViewQueryParams,
};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/incidents`
pub async fn incidents(state: web::Data<AppState>) -> HttpResponse {
    let incidents: Vec<ApiIncident> = state
        .store
        .incidents()
        .iter()
        .map(ApiIncident::from)
        .collect();

    HttpResponse::Ok().json(incidents)
}

/// `GET /api/incidents/{id}`
pub async fn incident(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let id: IncidentId = match path.parse() {
        Ok(id) => id,
        Err(e) => return HttpResponse::BadRequest().json(ApiError::new(e.to_string())),
    };

    match state.store.get(id) {
        Some(incident) => HttpResponse::Ok().json(ApiIncident::from(incident)),
        None => HttpResponse::NotFound().json(ApiError::new(format!("incident {id} not found"))),
    }
}

/// `GET /api/map`
///
/// Returns the map pane's center, zoom and tile layer.
pub async fn map_settings(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(&state.map)
}

/// `GET /api/view`
///
/// Renders markers and cards for every incident, optionally with one
/// incident highlighted.
pub async fn view(state: web::Data<AppState>, params: web::Query<ViewQueryParams>) -> HttpResponse {
    if let Some(selected) = params.selected.filter(|id| !state.store.contains(*id)) {
        return HttpResponse::NotFound()
            .json(ApiError::new(format!("incident {selected} not found")));
    }

    let view = render(state.store.incidents(), params.selected);
    HttpResponse::Ok().json(ApiView::new(params.selected, &view))
}

/// `POST /api/reconcile`
///
/// Applies one interaction to the page's current view and returns the
/// replacement markers, cards and selection.
pub async fn reconcile(
    state: web::Data<AppState>,
    body: web::Json<ReconcileRequest>,
) -> HttpResponse {
    let (selection, trigger, current) = body.into_inner().into_view();

    match reconcile_view(&state.store, selection, trigger.as_ref(), current) {
        Ok(result) => HttpResponse::Ok().json(ApiView::new(result.selection, &result.view)),
        Err(e @ (ReconcileError::InvalidFeature(_) | ReconcileError::NotAMarker(_))) => {
            log::warn!("Rejected interaction: {e}");
            HttpResponse::BadRequest().json(ApiError::new(e.to_string()))
        }
        Err(e @ ReconcileError::UnknownIncident(_)) => {
            log::warn!("Rejected interaction: {e}");
            HttpResponse::NotFound().json(ApiError::new(e.to_string()))
        }
    }
}
