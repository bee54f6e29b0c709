// src/analysis/item.rs

use serde::{Deserialize, Serialize};

use super::classify::ClassifiedPlace;

/// One classified place with its accumulated occurrence count: the unit
/// of aggregation. Cloning deep-copies the place, preserving status, key
/// and the current inclusion flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisItem {
    place: ClassifiedPlace,
    count: u64,
}

impl AnalysisItem {
    /// Starts at count 0; the first observation increments it to 1.
    #[must_use]
    pub fn new(place: ClassifiedPlace) -> Self {
        Self { place, count: 0 }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        self.place.key()
    }

    #[must_use]
    pub fn place(&self) -> &ClassifiedPlace {
        &self.place
    }

    pub fn place_mut(&mut self) -> &mut ClassifiedPlace {
        &mut self.place
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Records one more observation. Returns the item for chaining.
    pub fn increment(&mut self) -> &mut Self {
        self.count += 1;
        self
    }
}
