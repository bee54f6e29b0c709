// src/place.rs
//! Hierarchical place names, most-specific segment first.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A hierarchical place name: comma-delimited segments ordered from the
/// most specific level ("Paris") up to the most general ("France").
///
/// Construction normalizes separators to `", "` and trims each segment,
/// so two names differing only in whitespace compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaceName {
    segments: Vec<String>,
}

impl PlaceName {
    #[must_use]
    pub fn new(name: &str) -> Self {
        let segments = name
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect();
        Self { segments }
    }

    /// The canonical comma-delimited form, most specific first.
    #[must_use]
    pub fn canonical(&self) -> String {
        self.segments.join(", ")
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of hierarchy levels.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The `n` most general levels (the tail of the hierarchy).
    /// Returns the whole name when it has `n` levels or fewer.
    #[must_use]
    pub fn last(&self, n: usize) -> Self {
        let start = self.segments.len().saturating_sub(n);
        Self { segments: self.segments.get(start..).unwrap_or_default().to_vec() }
    }

    /// The `n` most specific levels (the head of the hierarchy).
    #[must_use]
    pub fn first(&self, n: usize) -> Self {
        let end = n.min(self.segments.len());
        Self { segments: self.segments.get(..end).unwrap_or_default().to_vec() }
    }

    /// The single most specific segment, or `""` for an empty name.
    #[must_use]
    pub fn head(&self) -> &str {
        self.segments.first().map_or("", String::as_str)
    }

    /// The single most general segment, or `""` for an empty name.
    #[must_use]
    pub fn top(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }
}

impl fmt::Display for PlaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

/// Simple case-folded ordering, usable as the injected comparator where a
/// caller has no locale collator at hand. Every user-visible sort in this
/// crate takes the comparator as an argument rather than assuming one.
#[must_use]
pub fn fold_case_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
