// src/map/mapper.rs
//! The pluggable place-to-feature resolution seam.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::place::PlaceName;

/// Opaque, strategy-specific configuration as a plain key-value
/// structure, so the host application can persist and restore it as a
/// blob without knowing the concrete strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapperConfig {
    values: Map<String, Value>,
}

impl MapperConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserializes from an arbitrary JSON value. Malformed input (not
    /// an object) falls back to the empty default rather than failing:
    /// a broken stored configuration must never abort an analysis.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(values) => Self { values },
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.values.clone())
    }

    pub fn set(&mut self, key: &str, value: Value) -> &mut Self {
        self.values.insert(key.to_string(), value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// String-list accessor for configuration entries holding an array;
    /// non-string elements are skipped.
    #[must_use]
    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        self.values
            .get(key)
            .and_then(Value::as_array)
            .map(|values| {
                values
                    .iter()
                    .filter_map(Value::as_str)
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Resolves a classified place to an external feature identifier.
///
/// Lifecycle: `configure` then `boot` exactly once, then any number of
/// `map` calls. `map` must be a pure function of its inputs plus the
/// booted state. A strategy instance is owned by one adapter for the
/// duration of a conversion; it is not designed for shared use.
pub trait PlaceMapper {
    fn configure(&mut self, config: MapperConfig);

    fn config(&self) -> &MapperConfig;

    /// One-time setup after configuration and before any `map` call.
    fn boot(&mut self);

    /// Scratch storage for the strategy's own use within one boot cycle.
    fn set_data(&mut self, key: &str, value: Value);

    fn data(&self, key: &str) -> Option<&Value>;

    /// The core resolution: the feature identifier for this place under
    /// the map's matching property, or None when the place has no
    /// representation on the map.
    fn map(&self, place: &PlaceName, feature_property: &str) -> Option<String>;
}

/// Common strategy plumbing: configuration, scratch data and the booted
/// flag. Concrete strategies embed one of these.
#[derive(Debug, Default)]
pub struct MapperState {
    config: MapperConfig,
    data: HashMap<String, Value>,
    booted: bool,
}

impl MapperState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configure(&mut self, config: MapperConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    pub fn mark_booted(&mut self) {
        self.booted = true;
    }

    /// Mapping before boot is a programming defect, not a runtime
    /// condition; it trips in debug builds only.
    pub fn assert_booted(&self) {
        debug_assert!(self.booted, "PlaceMapper::map called before boot()");
    }

    pub fn set_data(&mut self, key: &str, value: Value) {
        self.data.insert(key.to_string(), value);
    }

    #[must_use]
    pub fn data(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}
