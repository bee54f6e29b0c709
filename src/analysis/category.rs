// src/analysis/category.rs
//! Named, ordered aggregation bucket over classified places.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::classify::{ClassifiedPlace, PlaceStatus};
use super::item::AnalysisItem;

/// A named bucket of place observations with a sort precedence.
///
/// Invariant: the sum of item counts plus `unknown_count` equals the
/// number of observations ever added. Exclusion flags items, it never
/// deletes them, so excluded observations stay in the totals.
///
/// `Clone` is the deep copy of the aggregation: all fields are owned, so
/// mutating a clone (including item inclusion flags) never touches the
/// original.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResult {
    description: String,
    order: i32,
    unknown_count: u64,
    items: HashMap<String, AnalysisItem>,
}

impl CategoryResult {
    #[must_use]
    pub fn new(description: &str, order: i32) -> Self {
        Self {
            description: description.to_string(),
            order,
            unknown_count: 0,
            items: HashMap::new(),
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn order(&self) -> i32 {
        self.order
    }

    /// Records one observation. `Unknown` places bump the unknown
    /// counter; everything else (`Invalid` included - its exclusion is
    /// surfaced through `is_excluded`, not here) lands in an item keyed
    /// by the classified key.
    pub fn add_place(&mut self, place: &ClassifiedPlace) {
        if place.status() == PlaceStatus::Unknown {
            self.unknown_count += 1;
            return;
        }
        self.items
            .entry(place.key().to_string())
            .or_insert_with(|| AnalysisItem::new(place.clone()))
            .increment();
    }

    /// Flags the item holding this place's key as excluded. No-op when
    /// the key was never observed.
    pub fn exclude_place(&mut self, place: &ClassifiedPlace) {
        if let Some(item) = self.items.get_mut(place.key()) {
            item.place_mut().set_included(false);
        }
    }

    /// Folds `other` into `self`, leaving `other` untouched.
    ///
    /// Overlapping keys keep their inclusion only when included on both
    /// sides. Foreign keys are inserted item-by-item, NOT count-by-count:
    /// a foreign item with count > 1 lands with count 1, and
    /// `unknown_count` is not combined at all. Both behaviors are
    /// longstanding contracts of this operation; callers relying on full
    /// count replay must add places individually instead.
    pub fn merge(&mut self, other: &CategoryResult) -> &mut Self {
        for (key, item) in &mut self.items {
            if let Some(theirs) = other.items.get(key) {
                let included = item.place().included() && theirs.place().included();
                item.place_mut().set_included(included);
            }
        }
        for (key, theirs) in &other.items {
            if !self.items.contains_key(key) {
                self.add_place(theirs.place());
            }
        }
        self
    }

    /// Total observations that produced an item, excluded ones included.
    #[must_use]
    pub fn count_known(&self) -> u64 {
        self.items.values().map(AnalysisItem::count).sum()
    }

    /// Observations attributable to a non-excluded place.
    #[must_use]
    pub fn count_found(&self) -> u64 {
        self.items
            .values()
            .filter(|item| !item.place().is_excluded())
            .map(AnalysisItem::count)
            .sum()
    }

    /// Observations held by excluded places. Always satisfies
    /// `count_found() + count_excluded() == count_known()`.
    #[must_use]
    pub fn count_excluded(&self) -> u64 {
        self.items
            .values()
            .filter(|item| item.place().is_excluded())
            .map(AnalysisItem::count)
            .sum()
    }

    #[must_use]
    pub fn count_unknown(&self) -> u64 {
        self.unknown_count
    }

    /// Largest single item count, 0 when empty.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.items.values().map(AnalysisItem::count).max().unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.unknown_count == 0
    }

    /// All items, or only non-excluded ones when `exclude_other` is set.
    /// Iteration order is unspecified; use [`Self::sorted_known_places`]
    /// for anything user-visible.
    #[must_use]
    pub fn known_places(&self, exclude_other: bool) -> Vec<&AnalysisItem> {
        self.items
            .values()
            .filter(|item| !exclude_other || !item.place().is_excluded())
            .collect()
    }

    /// Items by descending count; ties broken ascending by the injected
    /// comparator over the place key.
    #[must_use]
    pub fn sorted_known_places<C>(&self, exclude_other: bool, cmp: C) -> Vec<&AnalysisItem>
    where
        C: Fn(&str, &str) -> Ordering,
    {
        let mut items = self.known_places(exclude_other);
        items.sort_by(|a, b| {
            b.count()
                .cmp(&a.count())
                .then_with(|| cmp(a.key(), b.key()))
        });
        items
    }

    #[must_use]
    pub fn excluded_places(&self) -> Vec<&AnalysisItem> {
        self.items
            .values()
            .filter(|item| item.place().is_excluded())
            .collect()
    }
}
