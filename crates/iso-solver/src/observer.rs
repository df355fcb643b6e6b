//! Solve observer trait for progress reporting and diagnostics.

use iso_core::{GeoPoint, IsoError};

use crate::Termination;

/// Summary of one finished round.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoundReport {
    /// 1-based round index.
    pub round:   u32,
    /// Step used for this round's adjustments.
    pub step:    f64,
    /// Angles whose travel time was inside the band.
    pub within:  usize,
    /// Angles pushed outward (too quick).
    pub outward: usize,
    /// Angles pulled inward (too slow).
    pub inward:  usize,
}

impl RoundReport {
    #[inline]
    pub fn unconverged(&self) -> usize {
        self.outward + self.inward
    }

    #[inline]
    pub fn is_converged(&self) -> bool {
        self.unconverged() == 0
    }
}

/// Callbacks invoked by [`IsochroneSolver::solve`][crate::IsochroneSolver::solve]
/// and by [`solve_locations`][crate::solve_locations].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: stop watching after the first round
///
/// ```rust,ignore
/// struct FirstRound(Option<RoundReport>);
///
/// impl SolveObserver for FirstRound {
///     fn on_round_end(&mut self, report: &RoundReport) {
///         self.0.get_or_insert(*report);
///     }
/// }
/// ```
pub trait SolveObserver {
    /// Called by the multi-location driver before each location is geocoded.
    fn on_location(&mut self, _name: &str) {}

    /// Called at the very start of each round, before projecting.
    fn on_round_start(&mut self, _round: u32) {}

    /// Called after every angle has been adjusted for this round.
    fn on_round_end(&mut self, _report: &RoundReport) {}

    /// Called once when the solve stops without error.  The termination
    /// tells success (`Converged`) apart from partial results.
    fn on_solve_end(&mut self, _origin: GeoPoint, _termination: &Termination) {}

    /// Called by the multi-location driver when one location fails.
    fn on_location_failed(&mut self, _name: &str, _error: &IsoError) {}
}

/// A [`SolveObserver`] that does nothing.
pub struct NoopObserver;

impl SolveObserver for NoopObserver {}

/// A [`SolveObserver`] that reports through the `log` facade.
///
/// | Event                  | Level   |
/// |------------------------|---------|
/// | round finished         | `debug` |
/// | converged              | `info`  |
/// | budget exhausted       | `warn`  |
/// | cancelled              | `warn`  |
/// | location failed        | `warn`  |
#[derive(Default)]
pub struct LogObserver {
    location: Option<String>,
}

impl LogObserver {
    /// Prefix every record with `label` (e.g. the location name).
    pub fn labelled(label: &str) -> Self {
        Self { location: Some(label.to_owned()) }
    }

    fn label(&self) -> &str {
        self.location.as_deref().unwrap_or("isochrone")
    }
}

impl SolveObserver for LogObserver {
    fn on_location(&mut self, name: &str) {
        self.location = Some(name.to_owned());
    }

    fn on_round_end(&mut self, r: &RoundReport) {
        log::debug!(
            "{}: round {} step {:.4}: {} within, {} outward, {} inward",
            self.label(),
            r.round,
            r.step,
            r.within,
            r.outward,
            r.inward,
        );
    }

    fn on_solve_end(&mut self, origin: GeoPoint, termination: &Termination) {
        match termination {
            Termination::Converged { rounds } => {
                log::info!("{}: converged around {origin} after {rounds} rounds", self.label());
            }
            Termination::BudgetExhausted { rounds } => {
                log::warn!(
                    "{}: round budget exhausted after {rounds} rounds around {origin}; \
                     returning best-effort polygon",
                    self.label()
                );
            }
            Termination::Cancelled { rounds } => {
                log::warn!("{}: cancelled after {rounds} rounds around {origin}", self.label());
            }
        }
    }

    fn on_location_failed(&mut self, name: &str, error: &IsoError) {
        log::warn!("{name}: skipped: {error}");
    }
}
