//! Solve configuration.
//!
//! # Seed radius
//!
//! Every angle starts at the same radius:
//!
//!   seed_radius_km = target_duration_min / 60 * seed_speed_kmh
//!
//! With the default `seed_speed_kmh = 5.0` (a brisk walk) this is
//! `target_duration_min / 12`.  The value is only a starting guess; faster
//! modes simply spend their first rounds pushing outward.  Raise it for
//! driving isochrones to save oracle calls.
//!
//! # Step schedule
//!
//! Radii move by a factor of `1 + step`.  `step` starts at `initial_step`
//! and after round `k` (1-based) becomes `step / (1 + step_decay * k)`, a
//! time-based decay like a learning-rate schedule.

use crate::{IsoError, IsoResult};

/// Parameters for one isochrone solve.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolveConfig {
    /// Travel-time budget the boundary is fitted to, in minutes.
    pub target_duration_min: f64,

    /// Accepted deviation from the target, in minutes (either side).
    pub tolerance_min: f64,

    /// Number of evenly spaced bearings, and of polygon vertices.  At least 3.
    pub number_of_angles: usize,

    /// Round budget.  The solve stops after this many oracle calls even if
    /// some angles are still outside tolerance.  At least 1.
    pub max_rounds: u32,

    /// Step used in round 1.
    pub initial_step: f64,

    /// Decay coefficient of the step schedule.
    pub step_decay: f64,

    /// Assumed speed behind the seed radius, in km/h.
    pub seed_speed_kmh: f64,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            target_duration_min: 25.0,
            tolerance_min:       10.0,
            number_of_angles:    20,
            max_rounds:          15,
            initial_step:        0.5,
            step_decay:          0.025,
            seed_speed_kmh:      5.0,
        }
    }
}

impl SolveConfig {
    /// Default schedule with the given target, tolerance, angle count and
    /// round budget.
    pub fn new(
        target_duration_min: f64,
        tolerance_min:       f64,
        number_of_angles:    usize,
        max_rounds:          u32,
    ) -> Self {
        Self {
            target_duration_min,
            tolerance_min,
            number_of_angles,
            max_rounds,
            ..Self::default()
        }
    }

    /// Check every field against its domain.
    pub fn validate(&self) -> IsoResult<()> {
        if self.number_of_angles < 3 {
            return Err(IsoError::invalid(format!(
                "number_of_angles must be at least 3 to form a polygon, got {}",
                self.number_of_angles
            )));
        }
        if self.max_rounds < 1 {
            return Err(IsoError::invalid("max_rounds must be at least 1"));
        }
        positive("target_duration_min", self.target_duration_min)?;
        positive("initial_step", self.initial_step)?;
        positive("seed_speed_kmh", self.seed_speed_kmh)?;
        non_negative("tolerance_min", self.tolerance_min)?;
        non_negative("step_decay", self.step_decay)?;
        Ok(())
    }

    /// Starting radius for every angle, in kilometres.
    #[inline]
    pub fn seed_radius_km(&self) -> f64 {
        self.target_duration_min / 60.0 * self.seed_speed_kmh
    }

    /// The sampled bearings `i * 360 / n` for `i in 0..n`, in degrees.
    pub fn bearings(&self) -> Vec<f64> {
        let n = self.number_of_angles;
        (0..n).map(|i| i as f64 * 360.0 / n as f64).collect()
    }

    /// Lower and upper edge of the accepted duration band.
    #[inline]
    pub fn duration_band(&self) -> (f64, f64) {
        (
            self.target_duration_min - self.tolerance_min,
            self.target_duration_min + self.tolerance_min,
        )
    }

    /// Step to use in the round after `round` (1-based), given the step used
    /// in `round`.
    #[inline]
    pub fn decay_step(&self, step: f64, round: u32) -> f64 {
        step / (1.0 + self.step_decay * round as f64)
    }
}

fn positive(name: &str, v: f64) -> IsoResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(IsoError::invalid(format!("{name} must be positive and finite, got {v}")))
    }
}

fn non_negative(name: &str, v: f64) -> IsoResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(IsoError::invalid(format!("{name} must be non-negative and finite, got {v}")))
    }
}
