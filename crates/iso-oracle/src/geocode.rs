//! Address → coordinate resolution.

use std::collections::HashMap;

use iso_core::{GeoPoint, IsoError, IsoResult};

/// Pluggable geocoding service.
///
/// Implementations return the single best match for `address`, or
/// [`IsoError::NotFound`] when there is none.  Ambiguity handling (several
/// candidates) is up to the implementation; callers only ever see one point.
pub trait Geocoder: Send + Sync {
    fn geocode(&self, address: &str) -> IsoResult<GeoPoint>;
}

/// A geocoder backed by a fixed address table.
///
/// Lookups ignore leading/trailing whitespace.  Useful for demos, tests, and
/// for pinning well-known locations so they never hit a paid service.
#[derive(Clone, Debug, Default)]
pub struct StaticGeocoder {
    entries: HashMap<String, GeoPoint>,
}

impl StaticGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an address.  Chainable.
    pub fn with(mut self, address: &str, point: GeoPoint) -> Self {
        self.insert(address, point);
        self
    }

    pub fn insert(&mut self, address: &str, point: GeoPoint) {
        self.entries.insert(address.trim().to_owned(), point);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Geocoder for StaticGeocoder {
    fn geocode(&self, address: &str) -> IsoResult<GeoPoint> {
        match self.entries.get(address.trim()) {
            Some(&p) => Ok(p),
            None => {
                log::debug!("static geocoder: no entry for {address:?}");
                Err(IsoError::NotFound(address.to_owned()))
            }
        }
    }
}
