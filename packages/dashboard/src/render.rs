//! Derives markers and cards from incidents.

use fire_map_dashboard_models::{Card, CardStyle, Marker, MarkerIcon, RenderedView};
use fire_map_incident_models::{Incident, IncidentId};

/// Renders one marker and one card per incident, in input order, with
/// `selection` (if any) highlighted.
#[must_use]
pub fn render(incidents: &[Incident], selection: Option<IncidentId>) -> RenderedView {
    let markers = incidents
        .iter()
        .map(|incident| Marker {
            incident_id: incident.id,
            position: incident.position(),
            icon: MarkerIcon::for_selected(selection == Some(incident.id)),
        })
        .collect();

    let cards = incidents
        .iter()
        .map(|incident| Card {
            incident_id: incident.id,
            title: Card::title_for(incident.id),
            report: incident.report.clone(),
            style: CardStyle::for_selected(selection == Some(incident.id)),
        })
        .collect();

    RenderedView { markers, cards }
}
