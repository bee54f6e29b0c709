// src/map/mappers.rs
//! Built-in place mapping strategies.

use serde_json::{json, Value};

use crate::place::PlaceName;

use super::mapper::{MapperConfig, MapperState, PlaceMapper};

/// Maps a place to its most specific segment, unconditionally. Suitable
/// when feature identifiers on the target map are plain town or region
/// names at the analysis depth.
#[derive(Debug, Default)]
pub struct SimplePlaceMapper {
    state: MapperState,
}

impl SimplePlaceMapper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlaceMapper for SimplePlaceMapper {
    fn configure(&mut self, config: MapperConfig) {
        self.state.configure(config);
    }

    fn config(&self) -> &MapperConfig {
        self.state.config()
    }

    fn boot(&mut self) {
        self.state.mark_booted();
    }

    fn set_data(&mut self, key: &str, value: Value) {
        self.state.set_data(key, value);
    }

    fn data(&self, key: &str) -> Option<&Value> {
        self.state.data(key)
    }

    fn map(&self, place: &PlaceName, _feature_property: &str) -> Option<String> {
        self.state.assert_booted();
        let head = place.head();
        if head.is_empty() {
            return None;
        }
        Some(head.to_string())
    }
}

/// Configuration key of [`FilteredTopPlaceMapper`]: the list of
/// most-general segment names the map covers.
pub const TOP_PLACES_KEY: &str = "top_places";

const TOP_PLACES_DATA: &str = "top_places_folded";

/// Like [`SimplePlaceMapper`], but only for places whose most general
/// segment is in a configured set. Everything outside the set resolves
/// to nothing and ends up excluded by the adapter.
///
/// `boot` folds the configured names to lowercase once; `map` compares
/// against that folded set.
#[derive(Debug, Default)]
pub struct FilteredTopPlaceMapper {
    state: MapperState,
}

impl FilteredTopPlaceMapper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn is_covered(&self, top: &str) -> bool {
        self.state
            .data(TOP_PLACES_DATA)
            .and_then(Value::as_array)
            .map(|tops| {
                let folded = top.to_lowercase();
                tops.iter().filter_map(Value::as_str).any(|t| t == folded)
            })
            .unwrap_or(false)
    }
}

impl PlaceMapper for FilteredTopPlaceMapper {
    fn configure(&mut self, config: MapperConfig) {
        self.state.configure(config);
    }

    fn config(&self) -> &MapperConfig {
        self.state.config()
    }

    fn boot(&mut self) {
        let folded: Vec<String> = self
            .state
            .config()
            .get_string_list(TOP_PLACES_KEY)
            .iter()
            .map(|name| name.to_lowercase())
            .collect();
        self.state.set_data(TOP_PLACES_DATA, json!(folded));
        self.state.mark_booted();
    }

    fn set_data(&mut self, key: &str, value: Value) {
        self.state.set_data(key, value);
    }

    fn data(&self, key: &str) -> Option<&Value> {
        self.state.data(key)
    }

    fn map(&self, place: &PlaceName, _feature_property: &str) -> Option<String> {
        self.state.assert_booted();
        if place.is_empty() || !self.is_covered(place.top()) {
            return None;
        }
        Some(place.head().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_mapper_returns_most_specific_segment() {
        let mut mapper = SimplePlaceMapper::new();
        mapper.boot();

        let place = PlaceName::new("Paris, Île-de-France, France");
        assert_eq!(mapper.map(&place, "name"), Some("Paris".to_string()));
    }

    #[test]
    fn test_simple_mapper_rejects_empty_place() {
        let mut mapper = SimplePlaceMapper::new();
        mapper.boot();
        assert_eq!(mapper.map(&PlaceName::new(""), "name"), None);
    }

    #[test]
    fn test_filtered_mapper_honors_configured_set() {
        let mut config = MapperConfig::new();
        config.set(TOP_PLACES_KEY, json!(["France"]));

        let mut mapper = FilteredTopPlaceMapper::new();
        mapper.configure(config);
        mapper.boot();

        let paris = PlaceName::new("Paris, France");
        let roma = PlaceName::new("Roma, Italia");
        assert_eq!(mapper.map(&paris, "name"), Some("Paris".to_string()));
        assert_eq!(mapper.map(&roma, "name"), None);
    }

    #[test]
    fn test_filtered_mapper_folds_case() {
        let mut config = MapperConfig::new();
        config.set(TOP_PLACES_KEY, json!(["FRANCE"]));

        let mut mapper = FilteredTopPlaceMapper::new();
        mapper.configure(config);
        mapper.boot();

        let paris = PlaceName::new("Paris, france");
        assert_eq!(mapper.map(&paris, "name"), Some("Paris".to_string()));
    }

    #[test]
    fn test_filtered_mapper_without_config_maps_nothing() {
        let mut mapper = FilteredTopPlaceMapper::new();
        mapper.boot();
        assert_eq!(mapper.map(&PlaceName::new("Paris, France"), "name"), None);
    }
}
