//! Highlight reconciliation.
//!
//! A reconcile takes the caller's current selection, the interaction that
//! fired, and the most recently rendered collections. When the interaction
//! resolves to an incident, both collections are rebuilt from the current
//! ones with exactly that incident highlighted. Otherwise the inputs are
//! returned unchanged.

use fire_map_dashboard_models::{
    Card, CardStyle, ElementId, ElementKind, Marker, MarkerIcon, ParseElementIdError,
    RenderedView, Trigger,
};
use fire_map_incident::IncidentStore;
use fire_map_incident_models::IncidentId;

/// Errors raised while resolving an interaction to an incident.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReconcileError {
    /// The clicked map feature's ID could not be decoded.
    #[error("invalid map feature id: {0}")]
    InvalidFeature(#[from] ParseElementIdError),
    /// The clicked map feature is not a marker.
    #[error("map feature {0} is not a marker")]
    NotAMarker(ElementId),
    /// The interaction named an incident without both a marker and a card
    /// in the current view.
    #[error("incident {0} is not in the current view")]
    UnknownIncident(IncidentId),
}

/// Result of a reconcile: the new selection and the replacement view.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    /// Highlighted incident after the interaction.
    pub selection: Option<IncidentId>,
    /// Replacement markers and cards.
    pub view: RenderedView,
}

/// Recomputes the highlighted incident for `trigger` and rebuilds `current`
/// accordingly.
///
/// * A map click with a feature highlights the clicked marker's incident.
/// * A card-area click highlights the **last** card in `current`, since the
///   pane's click counter does not say which card was hit.
/// * A card click highlights that card's incident.
///
/// Anything else, including a card-area click with no cards, leaves
/// `selection` and `current` untouched.
///
/// # Errors
///
/// * [`ReconcileError::InvalidFeature`] if a map feature ID cannot be decoded
/// * [`ReconcileError::NotAMarker`] if a map feature ID names a card
/// * [`ReconcileError::UnknownIncident`] if the resolved incident is missing
///   its marker or its card in `current`
pub fn reconcile(
    store: &IncidentStore,
    selection: Option<IncidentId>,
    trigger: Option<&Trigger>,
    current: RenderedView,
) -> Result<Reconciled, ReconcileError> {
    let Some(highlighted) = highlighted_id(trigger, &current)? else {
        log::debug!("Interaction {trigger:?} changes nothing; keeping current view");
        return Ok(Reconciled {
            selection,
            view: current,
        });
    };

    if !current.contains(highlighted) {
        log::warn!("Incident {highlighted} is not rendered as both a marker and a card");
        return Err(ReconcileError::UnknownIncident(highlighted));
    }

    log::debug!("Highlighting incident {highlighted}");

    Ok(Reconciled {
        selection: Some(highlighted),
        view: apply_highlight(store, current, highlighted),
    })
}

/// Resolves the incident an interaction should highlight, if any.
fn highlighted_id(
    trigger: Option<&Trigger>,
    current: &RenderedView,
) -> Result<Option<IncidentId>, ReconcileError> {
    match trigger {
        Some(Trigger::Map {
            feature: Some(feature),
        }) => {
            let element: ElementId = feature.id.parse()?;
            if element.kind != ElementKind::Marker {
                return Err(ReconcileError::NotAMarker(element));
            }
            Ok(Some(element.incident_id))
        }
        Some(Trigger::CardArea { clicks: Some(_) }) => {
            Ok(current.cards.last().map(|card| card.incident_id))
        }
        Some(Trigger::Card { incident_id }) => Ok(Some(*incident_id)),
        Some(Trigger::Map { feature: None } | Trigger::CardArea { clicks: None }) | None => {
            Ok(None)
        }
    }
}

/// Rebuilds every marker and card from `current`, re-reading report text
/// from the store, with only `highlighted` styled as selected.
fn apply_highlight(
    store: &IncidentStore,
    current: RenderedView,
    highlighted: IncidentId,
) -> RenderedView {
    let markers = current
        .markers
        .into_iter()
        .map(|marker| Marker {
            icon: MarkerIcon::for_selected(marker.incident_id == highlighted),
            ..marker
        })
        .collect();

    let cards = current
        .cards
        .into_iter()
        .map(|card| {
            let incident_id = card.incident_id;
            // Cards for incidents the store doesn't know keep their text.
            let report = store.report(incident_id).map_or(card.report, str::to_string);

            Card {
                incident_id,
                title: Card::title_for(incident_id),
                report,
                style: CardStyle::for_selected(incident_id == highlighted),
            }
        })
        .collect();

    RenderedView { markers, cards }
}
