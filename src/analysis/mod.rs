// src/analysis/mod.rs
//! Place classification and dispersion aggregation.
//!
//! Pure counting over classified places: no knowledge of maps, no I/O.
//! The map adapter consumes a finished [`CategoryResult`] downstream.

pub mod category;
pub mod classify;
pub mod item;
pub mod result_set;

pub use category::CategoryResult;
pub use classify::{classify, ClassifiedPlace, PlaceStatus, INVALID_KEY};
pub use item::AnalysisItem;
pub use result_set::ResultSet;
