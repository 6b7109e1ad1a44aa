#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! View and interaction types for the fire map dashboard.
//!
//! Markers and cards are strongly typed records carrying the incident ID
//! they represent. The encoded DOM identifiers (`marker-<id>`,
//! `card-<id>`) exist only at the page boundary, via [`ElementId`].

use std::fmt;
use std::str::FromStr;

use fire_map_incident_models::{IncidentId, LatLng, ParseIncidentIdError};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

// ---------------------------------------------------------------------------
// Element identifiers
// ---------------------------------------------------------------------------

/// Kind of page element an [`ElementId`] refers to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ElementKind {
    /// A map marker.
    Marker,
    /// A summary card.
    Card,
}

/// Encoded page element identifier, `<kind>-<incident id>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ElementId {
    /// Element kind.
    pub kind: ElementKind,
    /// Incident the element represents.
    pub incident_id: IncidentId,
}

impl ElementId {
    /// Separator between the kind prefix and the incident ID.
    pub const SEPARATOR: char = '-';

    /// Identifier of the marker for `incident_id`.
    #[must_use]
    pub const fn marker(incident_id: IncidentId) -> Self {
        Self {
            kind: ElementKind::Marker,
            incident_id,
        }
    }

    /// Identifier of the card for `incident_id`.
    #[must_use]
    pub const fn card(incident_id: IncidentId) -> Self {
        Self {
            kind: ElementKind::Card,
            incident_id,
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.kind, Self::SEPARATOR, self.incident_id)
    }
}

/// Error returned when an encoded element identifier cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseElementIdError {
    /// No `-` between the kind and the ID.
    #[error("element id {0:?} has no '-' separator")]
    MissingSeparator(String),
    /// The prefix is neither `marker` nor `card`.
    #[error("unknown element kind {0:?}")]
    UnknownKind(String),
    /// The suffix is not a valid incident ID.
    #[error(transparent)]
    IncidentId(#[from] ParseIncidentIdError),
}

impl FromStr for ElementId {
    type Err = ParseElementIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, id) = s
            .split_once(Self::SEPARATOR)
            .ok_or_else(|| ParseElementIdError::MissingSeparator(s.to_string()))?;

        let kind: ElementKind = kind
            .parse()
            .map_err(|_| ParseElementIdError::UnknownKind(kind.to_string()))?;

        Ok(Self {
            kind,
            incident_id: id.parse()?,
        })
    }
}

impl TryFrom<String> for ElementId {
    type Error = ParseElementIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ElementId> for String {
    fn from(id: ElementId) -> Self {
        id.to_string()
    }
}

// ---------------------------------------------------------------------------
// Rendered entities
// ---------------------------------------------------------------------------

/// Icon state of a map marker.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MarkerIcon {
    /// Blue marker.
    #[default]
    Default,
    /// Red marker.
    Highlighted,
}

impl MarkerIcon {
    /// Returns the icon for a marker given whether it is selected.
    #[must_use]
    pub const fn for_selected(selected: bool) -> Self {
        if selected {
            Self::Highlighted
        } else {
            Self::Default
        }
    }

    /// Page-relative URL of the icon image.
    #[must_use]
    pub const fn icon_url(self) -> &'static str {
        match self {
            Self::Default => "assets/blue_marker.svg",
            Self::Highlighted => "assets/red_marker.svg",
        }
    }
}

/// Style state of a summary card.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CardStyle {
    /// No background.
    #[default]
    Default,
    /// Red background.
    Highlighted,
}

impl CardStyle {
    /// Returns the style for a card given whether it is selected.
    #[must_use]
    pub const fn for_selected(selected: bool) -> Self {
        if selected {
            Self::Highlighted
        } else {
            Self::Default
        }
    }

    /// CSS background color, if any.
    #[must_use]
    pub const fn background_color(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Highlighted => Some("red"),
        }
    }
}

/// Map-pane representation of one incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    /// Incident this marker represents.
    pub incident_id: IncidentId,
    /// Marker position.
    pub position: LatLng,
    /// Icon state.
    #[serde(default)]
    pub icon: MarkerIcon,
}

impl Marker {
    /// Encoded page identifier, `marker-<id>`.
    #[must_use]
    pub const fn element_id(&self) -> ElementId {
        ElementId::marker(self.incident_id)
    }

    /// Whether the marker shows the red icon.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.icon == MarkerIcon::Highlighted
    }
}

/// List-pane representation of one incident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Incident this card represents.
    pub incident_id: IncidentId,
    /// Card heading, `Incident <id>`.
    pub title: String,
    /// Report text.
    pub report: String,
    /// Style state.
    #[serde(default)]
    pub style: CardStyle,
}

impl Card {
    /// Formats the heading shown on a card.
    #[must_use]
    pub fn title_for(incident_id: IncidentId) -> String {
        format!("Incident {incident_id}")
    }

    /// Encoded page identifier, `card-<id>`.
    #[must_use]
    pub const fn element_id(&self) -> ElementId {
        ElementId::card(self.incident_id)
    }

    /// Whether the card shows the red background.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.style == CardStyle::Highlighted
    }
}

/// The two rendered collections, replaced together on every interaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderedView {
    /// One marker per incident, in store order.
    pub markers: Vec<Marker>,
    /// One card per incident, in store order.
    pub cards: Vec<Card>,
}

impl RenderedView {
    /// Whether `incident_id` has both a marker and a card in this view.
    #[must_use]
    pub fn contains(&self, incident_id: IncidentId) -> bool {
        self.markers.iter().any(|m| m.incident_id == incident_id)
            && self.cards.iter().any(|c| c.incident_id == incident_id)
    }

    /// Incident IDs of all highlighted markers.
    #[must_use]
    pub fn highlighted_markers(&self) -> Vec<IncidentId> {
        self.markers
            .iter()
            .filter(|m| m.is_highlighted())
            .map(|m| m.incident_id)
            .collect()
    }

    /// Incident IDs of all highlighted cards.
    #[must_use]
    pub fn highlighted_cards(&self) -> Vec<IncidentId> {
        self.cards
            .iter()
            .filter(|c| c.is_highlighted())
            .map(|c| c.incident_id)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Interactions
// ---------------------------------------------------------------------------

/// The map feature delivered with a map click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapClickFeature {
    /// Encoded identifier of the clicked marker, e.g. `marker-2`.
    pub id: String,
}

/// The user interaction that fired a reconcile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Trigger {
    /// A click on the map, with the clicked marker if one was hit.
    Map {
        /// Clicked marker.
        feature: Option<MapClickFeature>,
    },
    /// A click anywhere in the card-list pane. Carries only the pane's
    /// click counter, not which card was clicked.
    CardArea {
        /// Number of clicks the pane has received.
        clicks: Option<u32>,
    },
    /// A click on a specific card.
    Card {
        /// Incident of the clicked card.
        incident_id: IncidentId,
    },
}
