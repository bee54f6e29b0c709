// src/map/tests.rs
//! Integration tests for the map adaptation pipeline.
//!
//! These run full conversions (aggregation -> strategy -> annotated
//! features) rather than individual functions.

#[cfg(test)]
#[allow(clippy::indexing_slicing)] // Safe in tests with prior assertions
#[allow(clippy::float_cmp)] // Ratios are exact fractions in these fixtures
mod integration {
    use crate::analysis::{classify, CategoryResult};
    use crate::map::adapter::{MapAdapter, MapViewConfig};
    use crate::map::feature::{MapDefinition, MapFeature};
    use crate::map::mappers::SimplePlaceMapper;
    use crate::place::{fold_case_compare, PlaceName};

    fn aggregate(names: &[&str], depth: usize) -> CategoryResult {
        let mut result = CategoryResult::new("", 0);
        for name in names {
            let place = PlaceName::new(name);
            result.add_place(&classify(Some(&place), depth, false));
        }
        result
    }

    fn french_towns_map() -> MapDefinition {
        MapDefinition::new(
            "fr-towns",
            "Towns of France",
            vec![
                MapFeature::with_key("name", "Paris"),
                MapFeature::with_key("name", "Lyon"),
            ],
        )
    }

    fn adapter(map: MapDefinition) -> MapAdapter {
        MapAdapter::new(
            map,
            Box::new(SimplePlaceMapper::new()),
            MapViewConfig::new("name"),
        )
        .unwrap()
    }

    // ========================================================================
    // Scenario: every place resolves to a feature present on the map.
    // Both features get annotated, ratios split the found total, and the
    // corrected result keeps everything found.
    // ========================================================================
    #[test]
    fn test_full_mapping_annotates_every_feature() {
        let result = aggregate(&["Paris, France", "Lyon, France"], 2);
        let adapted = adapter(french_towns_map()).convert(&result, fold_case_compare);

        assert_eq!(adapted.result().count_found(), 2);
        assert_eq!(adapted.result().count_excluded(), 0);

        let features = adapted.features();
        assert_eq!(features.len(), 2);
        for feature in features {
            assert_eq!(feature.count(), Some(1));
            assert_eq!(feature.ratio(), Some(0.5));
        }
        assert_eq!(features[0].places(), Some(vec!["Paris"]));
        assert_eq!(features[1].places(), Some(vec!["Lyon"]));
    }

    // ========================================================================
    // Scenario: an absent place only ever reaches the unknown counter,
    // and conversion has nothing to annotate.
    // ========================================================================
    #[test]
    fn test_absent_place_stays_unknown_through_conversion() {
        let mut result = CategoryResult::new("", 0);
        result.add_place(&classify(None, 2, false));

        let adapted = adapter(french_towns_map()).convert(&result, fold_case_compare);

        assert_eq!(adapted.result().count_unknown(), 1);
        assert_eq!(adapted.result().count_known(), 0);
        assert!(adapted.features().iter().all(|f| f.count().is_none()));
    }

    // ========================================================================
    // Scenario: the strategy resolves a place to an identifier the map
    // does not carry. The orphan pass excludes it, no feature is
    // annotated, and the totals stay consistent.
    // ========================================================================
    #[test]
    fn test_orphan_identifier_is_excluded_not_dropped() {
        let result = aggregate(&["Marseille, France"], 2);
        let adapted = adapter(french_towns_map()).convert(&result, fold_case_compare);

        assert_eq!(adapted.result().count_excluded(), 1);
        assert_eq!(adapted.result().count_found(), 0);
        assert_eq!(adapted.result().count_known(), 1);
        assert_eq!(adapted.result().excluded_places().len(), 1);
        assert!(adapted.features().iter().all(|f| f.count().is_none()));
    }

    // ========================================================================
    // Ratio bounds: annotated ratios stay within [0, 1] and counts sum
    // to the found total when everything maps.
    // ========================================================================
    #[test]
    fn test_ratios_are_bounded_and_consistent() {
        let result = aggregate(
            &["Paris, France", "Paris, France", "Paris, France", "Lyon, France"],
            2,
        );
        let adapted = adapter(french_towns_map()).convert(&result, fold_case_compare);

        let annotated: Vec<_> = adapted
            .features()
            .iter()
            .filter(|f| f.count().is_some())
            .collect();
        assert_eq!(annotated.len(), 2);

        let mut total = 0;
        for feature in &annotated {
            let ratio = feature.ratio().unwrap();
            assert!((0.0..=1.0).contains(&ratio));
            total += feature.count().unwrap();
        }
        assert_eq!(total, adapted.result().count_found());
        assert_eq!(annotated[0].ratio(), Some(0.75));
    }

    // ========================================================================
    // The caller's aggregation is never mutated by a conversion.
    // ========================================================================
    #[test]
    fn test_convert_leaves_original_result_untouched() {
        let result = aggregate(&["Marseille, France"], 2);
        let adapted = adapter(french_towns_map()).convert(&result, fold_case_compare);

        assert_eq!(adapted.result().count_excluded(), 1);
        assert_eq!(result.count_excluded(), 0, "conversion leaked into caller's result");
        assert_eq!(result.count_found(), 1);
    }

    // ========================================================================
    // Features with no matching group pass through without annotation,
    // preserving the map's feature order.
    // ========================================================================
    #[test]
    fn test_unmatched_features_pass_through_in_order() {
        let result = aggregate(&["Paris, France"], 2);
        let adapted = adapter(french_towns_map()).convert(&result, fold_case_compare);

        let features = adapted.features();
        assert_eq!(features[0].property("name"), Some("Paris"));
        assert_eq!(features[0].count(), Some(1));
        assert_eq!(features[1].property("name"), Some("Lyon"));
        assert_eq!(features[1].count(), None);
        assert_eq!(features[1].ratio(), None);
    }

    // ========================================================================
    // Shared feature: two distinct places resolved to one identifier
    // accumulate into a single group, names sorted by the comparator.
    // ========================================================================
    #[test]
    fn test_places_sharing_a_feature_accumulate() {
        // Depth 3 keeps the parish level distinct; both parishes sit in
        // the town of Paris on this map.
        let result = aggregate(
            &["Paris, Île-de-France, France", "Paris, Centre, France"],
            3,
        );
        let adapted = adapter(french_towns_map()).convert(&result, fold_case_compare);

        let paris = &adapted.features()[0];
        assert_eq!(paris.count(), Some(2));
        assert_eq!(paris.ratio(), Some(1.0));
        assert_eq!(paris.places(), Some(vec!["Paris", "Paris"]));
    }

    // ========================================================================
    // Merging two adaptations combines corrected results and
    // concatenates feature lists.
    // ========================================================================
    #[test]
    fn test_adapter_result_merge() {
        let left_result = aggregate(&["Paris, France"], 2);
        let right_result = aggregate(&["Lyon, France"], 2);

        let map_adapter = adapter(french_towns_map());
        let mut left = map_adapter.convert(&left_result, fold_case_compare);
        let right = map_adapter.convert(&right_result, fold_case_compare);

        left.merge(right);

        assert_eq!(left.result().count_known(), 2);
        assert_eq!(left.features().len(), 4);
    }

    // ========================================================================
    // Construction contract: an empty mapping property is refused.
    // ========================================================================
    #[test]
    fn test_empty_mapping_property_is_an_error() {
        let built = MapAdapter::new(
            french_towns_map(),
            Box::new(SimplePlaceMapper::new()),
            MapViewConfig::new(""),
        );
        assert!(built.is_err());
    }
}
