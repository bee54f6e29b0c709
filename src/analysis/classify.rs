// src/analysis/classify.rs
//! Depth-bounded place classification with an explicit status lattice.

use serde::{Deserialize, Serialize};

use crate::place::PlaceName;

/// Aggregation key reserved for places rejected by strict-depth
/// classification. Contains a NUL byte, which can never appear in a
/// canonical place name, so it cannot collide with a real key.
pub const INVALID_KEY: &str = "\u{0}invalid\u{0}";

/// Validity of a classified place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceStatus {
    /// No place was supplied, or the supplied name was empty.
    Unknown,
    /// Strict depth was requested and the place is shallower than it.
    Invalid,
    Valid,
}

/// One place after depth truncation.
///
/// `status` and `key` are fixed at construction; only the `included` flag
/// mutates, driven by the owning aggregation or the map adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedPlace {
    place: Option<PlaceName>,
    key: String,
    status: PlaceStatus,
    included: bool,
}

impl ClassifiedPlace {
    fn new(place: Option<PlaceName>, key: String, status: PlaceStatus) -> Self {
        Self { place, key, status, included: true }
    }

    /// The underlying raw place source, absent for `Unknown`.
    #[must_use]
    pub fn place(&self) -> Option<&PlaceName> {
        self.place.as_ref()
    }

    /// Canonical aggregation key (empty for `Unknown`).
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn status(&self) -> PlaceStatus {
        self.status
    }

    #[must_use]
    pub fn included(&self) -> bool {
        self.included
    }

    pub fn set_included(&mut self, included: bool) {
        self.included = included;
    }

    /// A place is excluded when it is not `Valid`, or when its owning
    /// aggregation flagged it out.
    #[must_use]
    pub fn is_excluded(&self) -> bool {
        self.status != PlaceStatus::Valid || !self.included
    }

    /// The most specific segment of the raw place, used as the display
    /// name when a place is attributed to a map feature.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.place.as_ref().map_or("", PlaceName::head)
    }
}

/// Classifies a raw place against a target depth.
///
/// Keeps the last `depth` comma-delimited segments (the most general
/// levels of the hierarchy). With `strict`, a place shallower than
/// `depth` is `Invalid` and keyed by [`INVALID_KEY`]; without it, the
/// full available name is accepted as `Valid`.
#[must_use]
pub fn classify(raw: Option<&PlaceName>, depth: usize, strict: bool) -> ClassifiedPlace {
    let Some(place) = raw.filter(|p| !p.is_empty()) else {
        return ClassifiedPlace::new(None, String::new(), PlaceStatus::Unknown);
    };

    if strict && place.depth() < depth {
        return ClassifiedPlace::new(Some(place.clone()), INVALID_KEY.to_string(), PlaceStatus::Invalid);
    }

    let key = place.last(depth).canonical();
    ClassifiedPlace::new(Some(place.clone()), key, PlaceStatus::Valid)
}
