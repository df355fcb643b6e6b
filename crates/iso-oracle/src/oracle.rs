//! The travel-time oracle trait.
//!
//! # Pluggability
//!
//! `iso-solver` queries travel times only through [`TravelTimeOracle`], so an
//! application can plug in a distance-matrix web service, a local router, or
//! a synthetic model without touching the solver.  The offline
//! [`SpeedModelOracle`][crate::SpeedModelOracle] is enough for demos and
//! tests.
//!
//! # Units
//!
//! Durations are minutes as `f64`.  Fractional minutes are fine; services
//! that only report whole minutes simply return integral values.

use std::sync::Arc;

use iso_core::{GeoPoint, IsoError, IsoResult, TravelOptions};

/// Batch travel-time estimation from one origin to many destinations.
///
/// # Contract
///
/// - The result has exactly one duration per destination, in the same order.
/// - Any failure (transport error, timeout, an element the service could
///   not route) fails the whole batch with
///   [`IsoError::TravelTimeUnavailable`].  Never skip or pad elements.
/// - Timeouts and retries are the implementation's business; the solver
///   calls once per round and never retries.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so that one oracle can serve solves
/// for several locations running on different threads.
pub trait TravelTimeOracle: Send + Sync {
    fn travel_times(
        &self,
        origin:       GeoPoint,
        destinations: &[GeoPoint],
        options:      &TravelOptions,
    ) -> IsoResult<Vec<f64>>;
}

impl<O: TravelTimeOracle + ?Sized> TravelTimeOracle for &O {
    fn travel_times(
        &self,
        origin:       GeoPoint,
        destinations: &[GeoPoint],
        options:      &TravelOptions,
    ) -> IsoResult<Vec<f64>> {
        (**self).travel_times(origin, destinations, options)
    }
}

impl<O: TravelTimeOracle + ?Sized> TravelTimeOracle for Box<O> {
    fn travel_times(
        &self,
        origin:       GeoPoint,
        destinations: &[GeoPoint],
        options:      &TravelOptions,
    ) -> IsoResult<Vec<f64>> {
        (**self).travel_times(origin, destinations, options)
    }
}

impl<O: TravelTimeOracle + ?Sized> TravelTimeOracle for Arc<O> {
    fn travel_times(
        &self,
        origin:       GeoPoint,
        destinations: &[GeoPoint],
        options:      &TravelOptions,
    ) -> IsoResult<Vec<f64>> {
        (**self).travel_times(origin, destinations, options)
    }
}

// ── Closure adapter ───────────────────────────────────────────────────────────

/// A [`TravelTimeOracle`] backed by a closure.  Build with [`from_fn`].
pub struct FnOracle<F>(F);

/// Wrap a closure as an oracle.
///
/// ```rust,ignore
/// // Every destination is 30 minutes away.
/// let oracle = from_fn(|_origin, dests, _opts| Ok(vec![30.0; dests.len()]));
/// ```
pub fn from_fn<F>(f: F) -> FnOracle<F>
where
    F: Fn(GeoPoint, &[GeoPoint], &TravelOptions) -> IsoResult<Vec<f64>> + Send + Sync,
{
    FnOracle(f)
}

impl<F> TravelTimeOracle for FnOracle<F>
where
    F: Fn(GeoPoint, &[GeoPoint], &TravelOptions) -> IsoResult<Vec<f64>> + Send + Sync,
{
    fn travel_times(
        &self,
        origin:       GeoPoint,
        destinations: &[GeoPoint],
        options:      &TravelOptions,
    ) -> IsoResult<Vec<f64>> {
        (self.0)(origin, destinations, options)
    }
}

// ── Response validation ───────────────────────────────────────────────────────

/// Check a batch response against the contract above.
///
/// Returns the durations unchanged if there is one finite, non-negative value
/// per destination; otherwise [`IsoError::TravelTimeUnavailable`].
pub fn validate_durations(expected: usize, durations: Vec<f64>) -> IsoResult<Vec<f64>> {
    if durations.len() != expected {
        return Err(IsoError::unavailable(format!(
            "oracle returned {} durations for {} destinations",
            durations.len(),
            expected
        )));
    }
    if let Some((i, d)) = durations
        .iter()
        .enumerate()
        .find(|(_, d)| !d.is_finite() || **d < 0.0)
    {
        return Err(IsoError::unavailable(format!(
            "oracle returned invalid duration {d} for destination {i}"
        )));
    }
    Ok(durations)
}
