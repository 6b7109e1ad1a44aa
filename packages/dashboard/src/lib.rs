#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Fire map dashboard logic.
//!
//! [`render`] derives the marker and card collections from the incident
//! store, and [`reconcile`] recomputes the highlighted incident in response
//! to a user interaction, rebuilding both collections so that exactly the
//! selected incident's marker and card are highlighted.

pub mod reconcile;
pub mod render;

pub use reconcile::{ReconcileError, Reconciled, reconcile};
pub use render::render;

use fire_map_incident_models::LatLng;
use serde::Serialize;

/// Presentation settings for the map pane.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSettings {
    /// Initial map center.
    pub center: LatLng,
    /// Initial zoom level.
    pub zoom: u8,
    /// Tile layer URL template.
    pub tile_url: String,
    /// Tile layer attribution HTML.
    pub attribution: String,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center: LatLng::new(53.3498, -6.2603),
            zoom: 13,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                .to_string(),
        }
    }
}
