//! Error type shared by every `iso-*` crate.
//!
//! The taxonomy is deliberately flat: collaborators (geocoders, travel-time
//! oracles) collapse their transport-level failures into one of these
//! variants at the crate boundary.  Running out of rounds is not an error;
//! see `Termination` in `iso-solver`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IsoError {
    /// A caller-supplied value is outside its domain (angle count below 3,
    /// non-positive distance, non-finite coordinate, …).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Geocoding found no match for the address.
    #[error("no match for address {0:?}")]
    NotFound(String),

    /// The travel-time oracle failed for a whole batch.
    #[error("travel time unavailable: {0}")]
    TravelTimeUnavailable(String),
}

impl IsoError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        IsoError::InvalidArgument(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        IsoError::TravelTimeUnavailable(msg.into())
    }
}

/// Shorthand result type for all `iso-*` crates.
pub type IsoResult<T> = Result<T, IsoError>;
