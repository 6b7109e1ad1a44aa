#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the fire map server.
//!
//! Responses decorate the typed markers and cards with what the page needs
//! to draw them: the encoded element ID, the icon URL and the card
//! background. Requests carry the page's current collections back; the
//! decorations are ignored on the way in.

use fire_map_dashboard_models::{Card, ElementId, Marker, RenderedView, Trigger};
use fire_map_incident_models::{Incident, IncidentId};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Human-readable error message.
    pub error: String,
}

impl ApiError {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// A fire incident as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiIncident {
    /// Unique incident ID.
    pub id: u32,
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
    /// Report text.
    pub report: String,
}

impl From<&Incident> for ApiIncident {
    fn from(incident: &Incident) -> Self {
        Self {
            id: incident.id.value(),
            latitude: incident.latitude,
            longitude: incident.longitude,
            report: incident.report.clone(),
        }
    }
}

/// A marker as drawn by the page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMarker {
    /// Encoded element ID, `marker-<id>`.
    pub id: ElementId,
    #[serde(flatten)]
    pub marker: Marker,
    /// Icon image URL for the marker's current state.
    pub icon_url: &'static str,
}

impl From<&Marker> for ApiMarker {
    fn from(marker: &Marker) -> Self {
        Self {
            id: marker.element_id(),
            marker: marker.clone(),
            icon_url: marker.icon.icon_url(),
        }
    }
}

/// A card as drawn by the page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCard {
    /// Encoded element ID, `card-<id>`.
    pub id: ElementId,
    #[serde(flatten)]
    pub card: Card,
    /// CSS background color, absent for unhighlighted cards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<&'static str>,
}

impl From<&Card> for ApiCard {
    fn from(card: &Card) -> Self {
        Self {
            id: card.element_id(),
            card: card.clone(),
            background_color: card.style.background_color(),
        }
    }
}

/// Rendered dashboard state returned to the page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiView {
    /// Currently highlighted incident.
    pub selection: Option<IncidentId>,
    /// Map markers, in store order.
    pub markers: Vec<ApiMarker>,
    /// Summary cards, in store order.
    pub cards: Vec<ApiCard>,
}

impl ApiView {
    #[must_use]
    pub fn new(selection: Option<IncidentId>, view: &RenderedView) -> Self {
        Self {
            selection,
            markers: view.markers.iter().map(ApiMarker::from).collect(),
            cards: view.cards.iter().map(ApiCard::from).collect(),
        }
    }
}

/// Query parameters for the view endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewQueryParams {
    /// Incident to render highlighted.
    pub selected: Option<IncidentId>,
}

/// Body of the reconcile endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileRequest {
    /// Selection the page currently shows.
    #[serde(default)]
    pub selection: Option<IncidentId>,
    /// Interaction that fired, absent on initial load.
    #[serde(default)]
    pub trigger: Option<Trigger>,
    /// Markers the page currently shows.
    #[serde(default)]
    pub markers: Vec<Marker>,
    /// Cards the page currently shows.
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl ReconcileRequest {
    /// Splits the request's current collections out as a [`RenderedView`].
    #[must_use]
    pub fn into_view(self) -> (Option<IncidentId>, Option<Trigger>, RenderedView) {
        (
            self.selection,
            self.trigger,
            RenderedView {
                markers: self.markers,
                cards: self.cards,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fire_map_dashboard_models::{CardStyle, MarkerIcon};
    use fire_map_incident_models::LatLng;

    fn id(value: u32) -> IncidentId {
        IncidentId::new(value).unwrap()
    }

    #[test]
    fn marker_response_carries_element_id_and_icon() {
        let marker = Marker {
            incident_id: id(2),
            position: LatLng::new(53.3478, -6.2583),
            icon: MarkerIcon::Highlighted,
        };
        let json = serde_json::to_value(ApiMarker::from(&marker)).unwrap();

        assert_eq!(json["id"], "marker-2");
        assert_eq!(json["incidentId"], 2);
        assert_eq!(json["icon"], "highlighted");
        assert_eq!(json["iconUrl"], "assets/red_marker.svg");
        assert_eq!(json["position"]["lat"], 53.3478);
    }

    #[test]
    fn card_background_only_when_highlighted() {
        let mut card = Card {
            incident_id: id(1),
            title: "Incident 1".to_string(),
            report: "Incident A details...".to_string(),
            style: CardStyle::Default,
        };
        let json = serde_json::to_value(ApiCard::from(&card)).unwrap();
        assert_eq!(json["id"], "card-1");
        assert!(json.get("backgroundColor").is_none());

        card.style = CardStyle::Highlighted;
        let json = serde_json::to_value(ApiCard::from(&card)).unwrap();
        assert_eq!(json["backgroundColor"], "red");
    }

    #[test]
    fn reconcile_request_accepts_echoed_view() {
        let body = r#"{
            "selection": null,
            "trigger": {"source": "map", "feature": {"id": "marker-2"}},
            "markers": [{"id": "marker-1", "incidentId": 1, "position": {"lat": 1.0, "lng": 2.0},
                         "icon": "default", "iconUrl": "assets/blue_marker.svg"}],
            "cards": [{"id": "card-1", "incidentId": 1, "title": "Incident 1",
                       "report": "A", "style": "default"}]
        }"#;
        let request: ReconcileRequest = serde_json::from_str(body).unwrap();
        let (selection, trigger, view) = request.into_view();

        assert_eq!(selection, None);
        assert!(matches!(trigger, Some(Trigger::Map { feature: Some(_) })));
        assert_eq!(view.markers.len(), 1);
        assert_eq!(view.cards[0].incident_id, id(1));
    }

    #[test]
    fn reconcile_request_fields_are_optional() {
        let request: ReconcileRequest = serde_json::from_str("{}").unwrap();
        let (selection, trigger, view) = request.into_view();
        assert_eq!(selection, None);
        assert_eq!(trigger, None);
        assert_eq!(view, RenderedView::default());
    }
}
