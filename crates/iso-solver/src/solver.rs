//! The `IsochroneSolver` struct and its round loop.

use std::fmt;

use iso_core::{GeoPoint, IsoError, IsoResult, SolveConfig, TravelOptions};
use iso_oracle::{TravelTimeOracle, validate_durations};

use crate::{
    Adjustment, AngleState, CancelToken, IsochronePolygon, LogObserver, RoundReport,
    SolveObserver, SolverBuilder,
};

// ── Termination ───────────────────────────────────────────────────────────────

/// Why a solve stopped.  Every variant carries a usable polygon.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// Every angle landed inside the band in round `rounds`.
    Converged { rounds: u32 },
    /// `max_rounds` rounds ran without global convergence; the polygon is the
    /// last round's best effort.
    BudgetExhausted { rounds: u32 },
    /// The cancel token was set before round `rounds + 1` started.
    Cancelled { rounds: u32 },
}

impl Termination {
    /// Number of oracle rounds that ran.
    pub fn rounds(self) -> u32 {
        match self {
            Termination::Converged { rounds }
            | Termination::BudgetExhausted { rounds }
            | Termination::Cancelled { rounds } => rounds,
        }
    }

    #[inline]
    pub fn is_converged(self) -> bool {
        matches!(self, Termination::Converged { .. })
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Converged { .. }       => f.write_str("converged"),
            Termination::BudgetExhausted { .. } => f.write_str("budget exhausted"),
            Termination::Cancelled { .. }       => f.write_str("cancelled"),
        }
    }
}

// ── Solution ──────────────────────────────────────────────────────────────────

/// Result of one solve.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// The last probed candidates, ordered by bearing around the origin.
    pub polygon:       IsochronePolygon,
    pub termination:   Termination,
    /// Radius behind each polygon candidate, in sampling order
    /// (bearing `i·360/n` at index `i`).
    pub radii_km:      Vec<f64>,
    /// Travel time the oracle reported for each candidate, in sampling
    /// order.  Empty if the solve was cancelled before the first round.
    pub durations_min: Vec<f64>,
}

/// The candidate set sent to the oracle in one round.
struct Probe {
    candidates: Vec<GeoPoint>,
    radii_km:   Vec<f64>,
    durations:  Vec<f64>,
}

// ── IsochroneSolver ───────────────────────────────────────────────────────────

/// Fits isochrone polygons by repeatedly querying `O`.
///
/// The solver holds no per-solve state: each [`solve`][Self::solve] call owns
/// its own angle array, so one solver (and its oracle) can serve many
/// locations, including from several threads at once.
///
/// Create via [`SolverBuilder`][crate::SolverBuilder].
pub struct IsochroneSolver<O: TravelTimeOracle> {
    /// Travel-time source.  Called exactly once per round.
    pub oracle: O,

    /// Forwarded unchanged with every oracle call.
    pub options: TravelOptions,

    /// Default configuration used by [`solve`][Self::solve].
    pub config: SolveConfig,

    /// Checked at the top of every round.
    pub cancel: Option<CancelToken>,
}

impl<O: TravelTimeOracle> IsochroneSolver<O> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Solve around `origin` with the solver's own configuration.
    pub fn solve<Obs: SolveObserver>(
        &self,
        origin:   GeoPoint,
        observer: &mut Obs,
    ) -> IsoResult<Solution> {
        self.solve_with(origin, &self.config, observer)
    }

    /// Solve around `origin` with an explicit configuration.
    ///
    /// # Errors
    ///
    /// - [`IsoError::InvalidArgument`] for an invalid `config` (fewer than 3
    ///   angles, zero rounds, …) or a non-finite origin.  Nothing is queried.
    /// - [`IsoError::TravelTimeUnavailable`] if any oracle call fails or
    ///   returns a malformed batch.  The solve is abandoned; no retry.
    ///
    /// Running out of rounds is not an error: see
    /// [`Termination::BudgetExhausted`].
    pub fn solve_with<Obs: SolveObserver>(
        &self,
        origin:   GeoPoint,
        config:   &SolveConfig,
        observer: &mut Obs,
    ) -> IsoResult<Solution> {
        config.validate()?;
        if !origin.is_finite() {
            return Err(IsoError::invalid(format!("origin {origin} is not finite")));
        }

        let seed = config.seed_radius_km();
        let mut angles: Vec<AngleState> = config
            .bearings()
            .into_iter()
            .map(|b| AngleState::new(b, seed))
            .collect();
        let band = config.duration_band();
        let mut step = config.initial_step;
        let mut round = 0;
        let mut last: Option<Probe> = None;

        let termination = loop {
            if self.is_cancelled() {
                break Termination::Cancelled { rounds: round };
            }
            round += 1;
            observer.on_round_start(round);

            let probe = self.query_round(origin, &angles)?;
            let report = adjust_all(&mut angles, &probe.durations, band, step, round);
            observer.on_round_end(&report);
            last = Some(probe);

            if report.is_converged() {
                break Termination::Converged { rounds: round };
            }
            if round >= config.max_rounds {
                break Termination::BudgetExhausted { rounds: round };
            }
            step = config.decay_step(step, round);
        };

        let probe = match last {
            Some(p) => p,
            // Cancelled before any oracle call: fall back to the seed ring.
            None => Probe {
                candidates: project_all(origin, &angles)?,
                radii_km:   angles.iter().map(|a| a.radius_km).collect(),
                durations:  Vec::new(),
            },
        };

        observer.on_solve_end(origin, &termination);
        Ok(Solution {
            polygon:       IsochronePolygon::from_points(origin, &probe.candidates),
            termination,
            radii_km:      probe.radii_km,
            durations_min: probe.durations,
        })
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }

    // ── Round internals ───────────────────────────────────────────────────

    /// Project every angle and issue the round's single oracle call.
    fn query_round(&self, origin: GeoPoint, angles: &[AngleState]) -> IsoResult<Probe> {
        let candidates = project_all(origin, angles)?;
        let durations = self.oracle.travel_times(origin, &candidates, &self.options)?;
        let durations = validate_durations(candidates.len(), durations)?;
        Ok(Probe {
            radii_km: angles.iter().map(|a| a.radius_km).collect(),
            candidates,
            durations,
        })
    }
}

/// One candidate per angle, in angle order.
///
/// With the `parallel` Cargo feature the projections run on Rayon's thread
/// pool; the output order is identical either way.
fn project_all(origin: GeoPoint, angles: &[AngleState]) -> IsoResult<Vec<GeoPoint>> {
    #[cfg(not(feature = "parallel"))]
    {
        angles.iter().map(|a| a.candidate(origin)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        angles.par_iter().map(|a| a.candidate(origin)).collect()
    }
}

/// Apply one round's durations to every angle independently.
fn adjust_all(
    angles:    &mut [AngleState],
    durations: &[f64],
    band:      (f64, f64),
    step:      f64,
    round:     u32,
) -> RoundReport {
    let mut report = RoundReport { round, step, within: 0, outward: 0, inward: 0 };
    for (angle, &d) in angles.iter_mut().zip(durations) {
        match angle.adjust(d, band, step) {
            Adjustment::Outward => report.outward += 1,
            Adjustment::Inward  => report.inward += 1,
            Adjustment::Within  => report.within += 1,
        }
    }
    report
}

// ── Convenience entry point ───────────────────────────────────────────────────

/// One-shot solve with default travel options and step schedule.
///
/// Progress and the final outcome are reported through the `log` facade.
pub fn solve<O: TravelTimeOracle>(
    origin:              GeoPoint,
    target_duration_min: f64,
    tolerance_min:       f64,
    number_of_angles:    usize,
    max_rounds:          u32,
    oracle:              O,
) -> IsoResult<Solution> {
    let config = SolveConfig::new(target_duration_min, tolerance_min, number_of_angles, max_rounds);
    SolverBuilder::new(oracle)
        .config(config)
        .build()?
        .solve(origin, &mut LogObserver::default())
}
