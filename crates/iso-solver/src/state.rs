//! Per-angle solver state.

use iso_core::{GeoPoint, IsoResult, project};

/// What one round did to one angle's radius.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Adjustment {
    /// Travel time was under the band; the radius grew.
    Outward,
    /// Travel time was over the band; the radius shrank.
    Inward,
    /// Travel time was inside the band; the radius is unchanged.
    Within,
}

/// One sampled direction.  The bearing is fixed for the whole solve; only
/// the radius moves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AngleState {
    /// Degrees clockwise from north, in `[0, 360)`.
    pub bearing:   f64,
    /// Current probe distance from the origin.  Always positive.
    pub radius_km: f64,
    /// Whether the most recent round landed inside the band.
    pub converged: bool,
}

impl AngleState {
    pub fn new(bearing: f64, radius_km: f64) -> Self {
        Self { bearing, radius_km, converged: false }
    }

    /// The point probed this round.
    #[inline]
    pub fn candidate(&self, origin: GeoPoint) -> IsoResult<GeoPoint> {
        project(origin, self.bearing, self.radius_km)
    }

    /// Move the radius according to the observed travel time.
    ///
    /// The band is inclusive on both ends.  Multiplying and dividing by the
    /// same `1 + step` keeps the radius positive for any positive step.
    pub fn adjust(&mut self, duration_min: f64, band: (f64, f64), step: f64) -> Adjustment {
        let (low, high) = band;
        let adj = if duration_min < low {
            self.radius_km *= 1.0 + step;
            Adjustment::Outward
        } else if duration_min > high {
            self.radius_km /= 1.0 + step;
            Adjustment::Inward
        } else {
            Adjustment::Within
        };
        self.converged = adj == Adjustment::Within;
        adj
    }
}
