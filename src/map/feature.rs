// src/map/feature.rs
//! Map features as immutable property bags.
//!
//! Geometry is owned by the host application's map files; the engine only
//! reads the matching property and writes annotation properties, so a
//! feature is just its property map here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Property holding a feature's place count after adaptation.
pub const COUNT_PROPERTY: &str = "count";
/// Property holding a feature's count / places-found ratio.
pub const RATIO_PROPERTY: &str = "ratio";
/// Property holding the contributing place display names.
pub const PLACES_PROPERTY: &str = "places";

/// One drawable region of an external map, identified by a property
/// value. Features are value types: annotation produces a new feature
/// rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapFeature {
    properties: Map<String, Value>,
}

impl MapFeature {
    #[must_use]
    pub fn new(properties: Map<String, Value>) -> Self {
        Self { properties }
    }

    /// Convenience constructor for a feature with a single string
    /// property, the common case in tests and fixtures.
    #[must_use]
    pub fn with_key(property: &str, value: &str) -> Self {
        let mut properties = Map::new();
        properties.insert(property.to_string(), Value::String(value.to_string()));
        Self { properties }
    }

    /// String property lookup; a missing or non-string property is None.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).and_then(Value::as_str)
    }

    /// Returns a new feature carrying `name` set to `value`.
    #[must_use]
    pub fn with_property(&self, name: &str, value: Value) -> Self {
        let mut properties = self.properties.clone();
        properties.insert(name.to_string(), value);
        Self { properties }
    }

    #[must_use]
    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// Annotated place count, absent on a pass-through feature.
    #[must_use]
    pub fn count(&self) -> Option<u64> {
        self.properties.get(COUNT_PROPERTY).and_then(Value::as_u64)
    }

    /// Annotated count ratio, absent on a pass-through feature.
    #[must_use]
    pub fn ratio(&self) -> Option<f64> {
        self.properties.get(RATIO_PROPERTY).and_then(Value::as_f64)
    }

    /// Annotated contributing place names, absent on a pass-through
    /// feature.
    #[must_use]
    pub fn places(&self) -> Option<Vec<&str>> {
        self.properties
            .get(PLACES_PROPERTY)
            .and_then(Value::as_array)
            .map(|values| values.iter().filter_map(Value::as_str).collect())
    }
}

/// An external map: identity plus an ordered feature list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDefinition {
    id: String,
    title: String,
    features: Vec<MapFeature>,
}

impl MapDefinition {
    #[must_use]
    pub fn new(id: &str, title: &str, features: Vec<MapFeature>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            features,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn features(&self) -> &[MapFeature] {
        &self.features
    }
}
