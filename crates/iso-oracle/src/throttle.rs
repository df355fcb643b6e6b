//! Minimum-interval throttling for shared, rate-limited oracles.
//!
//! Web distance-matrix services meter requests per second.  Wrapping the
//! oracle in [`Throttled`] spaces consecutive batch calls at least
//! `min_interval` apart, across every solve that shares the wrapper
//! (including solves running on other threads).

use std::sync::Mutex;
use std::time::{Duration, Instant};

use iso_core::{GeoPoint, IsoResult, TravelOptions};

use crate::TravelTimeOracle;

/// An oracle wrapper that sleeps so calls start at least `min_interval` apart.
pub struct Throttled<O> {
    inner:        O,
    min_interval: Duration,
    /// Start time of the previous call.  Held across the call itself so
    /// concurrent callers queue up instead of bursting.
    last_call:    Mutex<Option<Instant>>,
}

impl<O: TravelTimeOracle> Throttled<O> {
    pub fn new(inner: O, min_interval: Duration) -> Self {
        Self {
            inner,
            min_interval,
            last_call: Mutex::new(None),
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: TravelTimeOracle> TravelTimeOracle for Throttled<O> {
    fn travel_times(
        &self,
        origin:       GeoPoint,
        destinations: &[GeoPoint],
        options:      &TravelOptions,
    ) -> IsoResult<Vec<f64>> {
        // A poisoned lock only means another caller panicked mid-call; the
        // timestamp inside is still meaningful.
        let mut last = self.last_call.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                log::trace!("throttle: sleeping {wait:?} before next batch");
                std::thread::sleep(wait);
            }
        }
        *last = Some(Instant::now());
        self.inner.travel_times(origin, destinations, options)
    }
}
