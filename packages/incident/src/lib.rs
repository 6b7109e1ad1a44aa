#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Read-only incident store.
//!
//! The store holds the ordered list of incidents the dashboard displays.
//! It is built once at startup, either from the compiled-in sample dataset
//! ([`IncidentStore::sample`]) or from a caller-supplied list, and exposes
//! no mutation.

use std::collections::BTreeSet;

use fire_map_incident_models::{Incident, IncidentId};

/// Sample fire incidents around Dublin city centre: `(id, lat, lng, report)`.
const SAMPLE_INCIDENTS: &[(u32, f64, f64, &str)] = &[
    (1, 53.3498, -6.2603, "Incident A details..."),
    (2, 53.3478, -6.2583, "Incident B details..."),
    (3, 53.3518, -6.2623, "Incident C details..."),
];

/// Errors raised while building an [`IncidentStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Two incidents share an ID.
    #[error("duplicate incident id {0}")]
    DuplicateId(IncidentId),
}

/// Ordered, immutable collection of incidents.
#[derive(Debug, Clone, PartialEq)]
pub struct IncidentStore {
    incidents: Vec<Incident>,
}

impl IncidentStore {
    /// Builds a store from `incidents`, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if any ID appears twice.
    pub fn new(incidents: Vec<Incident>) -> Result<Self, StoreError> {
        let mut seen = BTreeSet::new();
        for incident in &incidents {
            if !seen.insert(incident.id) {
                return Err(StoreError::DuplicateId(incident.id));
            }
        }

        log::debug!("Loaded {} incidents", incidents.len());

        Ok(Self { incidents })
    }

    /// Returns the compiled-in sample dataset.
    #[must_use]
    pub fn sample() -> Self {
        let incidents = SAMPLE_INCIDENTS
            .iter()
            .filter_map(|&(id, latitude, longitude, report)| {
                Some(Incident {
                    id: IncidentId::new(id)?,
                    latitude,
                    longitude,
                    report: report.to_string(),
                })
            })
            .collect();

        Self { incidents }
    }

    /// All incidents, in store order.
    #[must_use]
    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    /// Looks up an incident by ID.
    #[must_use]
    pub fn get(&self, id: IncidentId) -> Option<&Incident> {
        self.incidents.iter().find(|incident| incident.id == id)
    }

    /// Looks up the report text for an incident.
    #[must_use]
    pub fn report(&self, id: IncidentId) -> Option<&str> {
        self.get(id).map(|incident| incident.report.as_str())
    }

    /// Whether an incident with `id` exists.
    #[must_use]
    pub fn contains(&self, id: IncidentId) -> bool {
        self.get(id).is_some()
    }

    /// Number of incidents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    /// Whether the store holds no incidents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: u32) -> IncidentId {
        IncidentId::new(value).unwrap()
    }

    #[test]
    fn sample_has_three_ordered_incidents() {
        let store = IncidentStore::sample();
        let ids: Vec<u32> = store.incidents().iter().map(|i| i.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let second = store.get(id(2)).unwrap();
        assert!((second.latitude - 53.3478).abs() < f64::EPSILON);
        assert!((second.longitude - -6.2583).abs() < f64::EPSILON);
        assert_eq!(second.report, "Incident B details...");
    }

    #[test]
    fn sample_ids_are_unique() {
        let sample = IncidentStore::sample();
        let rebuilt = IncidentStore::new(sample.incidents().to_vec()).unwrap();
        assert_eq!(rebuilt, sample);
    }

    #[test]
    fn report_lookup() {
        let store = IncidentStore::sample();
        assert_eq!(store.report(id(3)), Some("Incident C details..."));
        assert_eq!(store.report(id(4)), None);
        assert!(store.contains(id(1)));
        assert!(!store.contains(id(9)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let incident = Incident {
            id: id(5),
            latitude: 0.0,
            longitude: 0.0,
            report: String::new(),
        };
        let err = IncidentStore::new(vec![incident.clone(), incident]).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId(id(5)));
    }

    #[test]
    fn empty_store() {
        let store = IncidentStore::new(Vec::new()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
