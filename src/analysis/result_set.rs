// src/analysis/result_set.rs
//! Routing of place observations to a global result and named categories.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::category::CategoryResult;
use super::classify::ClassifiedPlace;

/// One global aggregation plus lazily created named categories.
///
/// Categories are meant to be created once with a fixed precedence: an
/// `order` passed for an already existing description is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSet {
    global: CategoryResult,
    categories: HashMap<String, CategoryResult>,
}

impl ResultSet {
    #[must_use]
    pub fn new() -> Self {
        Self {
            global: CategoryResult::new("", 0),
            categories: HashMap::new(),
        }
    }

    #[must_use]
    pub fn global(&self) -> &CategoryResult {
        &self.global
    }

    pub fn add_place(&mut self, place: &ClassifiedPlace) {
        self.global.add_place(place);
    }

    /// Creates the category when absent; an existing category keeps its
    /// original order.
    pub fn add_category(&mut self, description: &str, order: i32) {
        self.categories
            .entry(description.to_string())
            .or_insert_with(|| CategoryResult::new(description, order));
    }

    /// Forwards to an already created category; silently drops the
    /// observation when the category does not exist.
    pub fn add_place_in_created_category(&mut self, category: &str, place: &ClassifiedPlace) {
        if let Some(result) = self.categories.get_mut(category) {
            result.add_place(place);
        }
    }

    /// Ensures the category exists (created with `order` when new), then
    /// records the observation in it.
    pub fn add_place_in_category(&mut self, category: &str, order: i32, place: &ClassifiedPlace) {
        self.add_category(category, order);
        self.add_place_in_created_category(category, place);
    }

    #[must_use]
    pub fn category(&self, description: &str) -> Option<&CategoryResult> {
        self.categories.get(description)
    }

    /// Named categories ascending by order, ties broken by the injected
    /// comparator over the description.
    #[must_use]
    pub fn sorted_detailed<C>(&self, cmp: C) -> Vec<&CategoryResult>
    where
        C: Fn(&str, &str) -> Ordering,
    {
        let mut results: Vec<_> = self.categories.values().collect();
        results.sort_by(|a, b| {
            a.order()
                .cmp(&b.order())
                .then_with(|| cmp(a.description(), b.description()))
        });
        results
    }
}

impl Default for ResultSet {
    fn default() -> Self {
        Self::new()
    }
}
