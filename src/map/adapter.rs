// src/map/adapter.rs
//! Adaptation of a finished aggregation onto an external map.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::analysis::{CategoryResult, ClassifiedPlace};
use crate::error::{DispersionError, Result};

use super::feature::{MapDefinition, MapFeature, COUNT_PROPERTY, PLACES_PROPERTY, RATIO_PROPERTY};
use super::mapper::PlaceMapper;

/// User-authored view configuration: which feature property identifies a
/// feature on this map. Serialized as-is by the host application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapViewConfig {
    map_mapping_property: String,
}

impl MapViewConfig {
    #[must_use]
    pub fn new(map_mapping_property: &str) -> Self {
        Self { map_mapping_property: map_mapping_property.to_string() }
    }

    #[must_use]
    pub fn map_mapping_property(&self) -> &str {
        &self.map_mapping_property
    }
}

/// Per-feature-identifier accumulator used during conversion. A group
/// whose identifier never matches a feature on the map is an orphan: its
/// contributing places are excluded from the corrected result so the
/// reported totals agree with what is actually rendered.
#[derive(Debug, Default)]
struct FeatureAnalysisData {
    places: Vec<ClassifiedPlace>,
    count: u64,
    exists_in_map: bool,
}

impl FeatureAnalysisData {
    fn add(&mut self, place: ClassifiedPlace, count: u64) {
        self.places.push(place);
        self.count += count;
    }
}

/// The corrected aggregation plus the map's features, annotated where a
/// place group was attributed to them.
#[derive(Debug)]
pub struct MapAdapterResult {
    result: CategoryResult,
    features: Vec<MapFeature>,
}

impl MapAdapterResult {
    #[must_use]
    pub fn result(&self) -> &CategoryResult {
        &self.result
    }

    #[must_use]
    pub fn features(&self) -> &[MapFeature] {
        &self.features
    }

    /// Combines two adaptations: merges the corrected results (with the
    /// merge semantics of [`CategoryResult::merge`]) and concatenates the
    /// feature lists.
    pub fn merge(&mut self, other: MapAdapterResult) -> &mut Self {
        self.result.merge(&other.result);
        self.features.extend(other.features);
        self
    }
}

/// Adapts category results onto one external map through a mapping
/// strategy. The strategy is booted once at construction and owned
/// exclusively by this adapter.
pub struct MapAdapter {
    map: MapDefinition,
    mapper: Box<dyn PlaceMapper>,
    view_config: MapViewConfig,
}

impl MapAdapter {
    /// # Errors
    ///
    /// Fails when the view configuration names no mapping property, as
    /// no feature could ever be matched.
    pub fn new(
        map: MapDefinition,
        mut mapper: Box<dyn PlaceMapper>,
        view_config: MapViewConfig,
    ) -> Result<Self> {
        if view_config.map_mapping_property().is_empty() {
            return Err(DispersionError::MissingMappingProperty);
        }
        mapper.boot();
        Ok(Self { map, mapper, view_config })
    }

    #[must_use]
    pub fn map(&self) -> &MapDefinition {
        &self.map
    }

    /// Adapts `result` onto this adapter's map.
    ///
    /// Operates on a private copy; the caller's aggregation is never
    /// mutated. Places the strategy cannot resolve, and places resolved
    /// to an identifier absent from the map, end up excluded in the
    /// corrected result rather than silently dropped. Never fails.
    #[must_use]
    pub fn convert<C>(&self, result: &CategoryResult, cmp: C) -> MapAdapterResult
    where
        C: Fn(&str, &str) -> Ordering + Copy,
    {
        let mut corrected = result.clone();
        let mut groups = self.group_by_feature(&mut corrected);

        // Found total is fixed after the grouping pass, before orphan
        // exclusion: ratios describe what the strategy could resolve.
        let places_found = corrected.count_found();
        let features = self.annotate_features(&mut groups, places_found, cmp);

        for group in groups.values() {
            if !group.exists_in_map {
                for place in &group.places {
                    corrected.exclude_place(place);
                }
            }
        }

        MapAdapterResult { result: corrected, features }
    }

    /// Grouping pass: runs every known item (Invalid ones included, they
    /// are still part of the aggregation) through the strategy, excluding
    /// what cannot be resolved.
    fn group_by_feature(&self, corrected: &mut CategoryResult) -> HashMap<String, FeatureAnalysisData> {
        let property = self.view_config.map_mapping_property();
        let items: Vec<(ClassifiedPlace, u64)> = corrected
            .known_places(false)
            .into_iter()
            .map(|item| (item.place().clone(), item.count()))
            .collect();

        let mut groups: HashMap<String, FeatureAnalysisData> = HashMap::new();
        for (place, count) in items {
            let feature_id = place
                .place()
                .and_then(|source| self.mapper.map(source, property))
                .filter(|id| !id.is_empty());

            match feature_id {
                Some(id) => groups.entry(id).or_default().add(place, count),
                None => corrected.exclude_place(&place),
            }
        }
        groups
    }

    /// Annotation pass: walks the map's feature list in order, attaching
    /// count, ratio and contributing place names where a group matches.
    /// Features without a matching group pass through untouched.
    fn annotate_features<C>(
        &self,
        groups: &mut HashMap<String, FeatureAnalysisData>,
        places_found: u64,
        cmp: C,
    ) -> Vec<MapFeature>
    where
        C: Fn(&str, &str) -> Ordering + Copy,
    {
        let property = self.view_config.map_mapping_property();
        self.map
            .features()
            .iter()
            .map(|feature| {
                let group = feature
                    .property(property)
                    .and_then(|id| groups.get_mut(id));
                match group {
                    Some(group) => {
                        group.exists_in_map = true;
                        annotate(feature, group, places_found, cmp)
                    }
                    None => feature.clone(),
                }
            })
            .collect()
    }
}

#[allow(clippy::cast_precision_loss)]
fn annotate<C>(
    feature: &MapFeature,
    group: &FeatureAnalysisData,
    places_found: u64,
    cmp: C,
) -> MapFeature
where
    C: Fn(&str, &str) -> Ordering,
{
    let ratio = if places_found == 0 {
        0.0
    } else {
        group.count as f64 / places_found as f64
    };

    let mut names: Vec<&str> = group.places.iter().map(ClassifiedPlace::display_name).collect();
    names.sort_by(|a, b| cmp(a, b));

    feature
        .with_property(COUNT_PROPERTY, json!(group.count))
        .with_property(RATIO_PROPERTY, json!(ratio))
        .with_property(PLACES_PROPERTY, json!(names))
}
