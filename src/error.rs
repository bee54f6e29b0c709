// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispersionError {
    #[error("Map adapter requires a non-empty mapping property name")]
    MissingMappingProperty,

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DispersionError>;
