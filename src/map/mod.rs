// src/map/mod.rs
//! Map adaptation: resolving aggregated places onto external map
//! features through a pluggable strategy.

pub mod adapter;
pub mod feature;
pub mod mapper;
pub mod mappers;

pub use adapter::{MapAdapter, MapAdapterResult, MapViewConfig};
pub use feature::{MapDefinition, MapFeature, COUNT_PROPERTY, PLACES_PROPERTY, RATIO_PROPERTY};
pub use mapper::{MapperConfig, MapperState, PlaceMapper};
pub use mappers::{FilteredTopPlaceMapper, SimplePlaceMapper, TOP_PLACES_KEY};

#[cfg(test)]
mod tests;
