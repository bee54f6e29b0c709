// src/lib.rs
//! Geographic dispersion analysis for hierarchical place data.
//!
//! The pipeline flows one direction: raw place names are classified to a
//! bounded depth (`analysis::classify`), aggregated into per-category
//! statistics ([`analysis::CategoryResult`] / [`analysis::ResultSet`]),
//! then adapted onto an external map through a pluggable mapping strategy
//! ([`map::MapAdapter`]). The adapter never mutates the aggregation it is
//! given; it works on a private copy and degrades by exclusion when a
//! place cannot be represented on the target map.

pub mod analysis;
pub mod error;
pub mod map;
pub mod place;
pub mod report;

pub use analysis::{classify, AnalysisItem, CategoryResult, ClassifiedPlace, PlaceStatus, ResultSet};
pub use error::{DispersionError, Result};
pub use map::{MapAdapter, MapAdapterResult, MapDefinition, MapFeature, PlaceMapper};
pub use place::{fold_case_compare, PlaceName};
