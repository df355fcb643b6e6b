//! Offline oracle: great-circle distance over an assumed speed per mode.
//!
//! | Mode      | Default speed        |
//! |-----------|----------------------|
//! | Driving   | 40 km/h              |
//! | Walking   | 1.4 m/s (5.04 km/h)  |
//! | Bicycling | 4.2 m/s (15.12 km/h) |
//! | Transit   | 8.3 m/s (29.88 km/h) |
//!
//! Straight-line distance is stretched by `detour_factor` to stand in for the
//! street network, and `overhead_min` is added to every trip (waiting for a
//! train, finding the car).  Travel time is strictly increasing in distance,
//! which makes this oracle a convenient monotone reference for the solver.

use iso_core::{GeoPoint, IsoError, IsoResult, TravelMode, TravelOptions};

use crate::TravelTimeOracle;

/// Assumed average speed for each travel mode, in km/h.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeSpeeds {
    pub driving_kmh:   f64,
    pub walking_kmh:   f64,
    pub bicycling_kmh: f64,
    pub transit_kmh:   f64,
}

impl Default for ModeSpeeds {
    fn default() -> Self {
        Self {
            driving_kmh:   40.0,
            walking_kmh:   1.4 * 3.6,
            bicycling_kmh: 4.2 * 3.6,
            transit_kmh:   8.3 * 3.6,
        }
    }
}

impl ModeSpeeds {
    /// Speed for `mode`, or `None` for a mode this table doesn't know.
    pub fn speed_kmh(&self, mode: TravelMode) -> Option<f64> {
        match mode {
            TravelMode::Driving   => Some(self.driving_kmh),
            TravelMode::Walking   => Some(self.walking_kmh),
            TravelMode::Bicycling => Some(self.bicycling_kmh),
            TravelMode::Transit   => Some(self.transit_kmh),
            _ => None,
        }
    }
}

/// Distance-over-speed travel-time model.
#[derive(Clone, Debug)]
pub struct SpeedModelOracle {
    pub speeds:        ModeSpeeds,
    /// Network distance / straight-line distance.  1.0 = as the crow flies.
    pub detour_factor: f64,
    /// Added to every trip, in minutes.
    pub overhead_min:  f64,
}

impl Default for SpeedModelOracle {
    fn default() -> Self {
        Self {
            speeds:        ModeSpeeds::default(),
            detour_factor: 1.3,
            overhead_min:  0.0,
        }
    }
}

impl SpeedModelOracle {
    /// Straight-line travel at the default speeds with no overhead.
    pub fn crow_flies() -> Self {
        Self { detour_factor: 1.0, ..Self::default() }
    }

    /// Travel time in minutes from `origin` to `destination`.
    pub fn minutes(&self, origin: GeoPoint, destination: GeoPoint, mode: TravelMode) -> IsoResult<f64> {
        let speed = self
            .speeds
            .speed_kmh(mode)
            .filter(|s| s.is_finite() && *s > 0.0)
            .ok_or_else(|| IsoError::unavailable(format!("no usable speed for mode {mode}")))?;
        let km = origin.distance_km(destination) * self.detour_factor;
        Ok(km / speed * 60.0 + self.overhead_min)
    }
}

impl TravelTimeOracle for SpeedModelOracle {
    fn travel_times(
        &self,
        origin:       GeoPoint,
        destinations: &[GeoPoint],
        options:      &TravelOptions,
    ) -> IsoResult<Vec<f64>> {
        destinations
            .iter()
            .map(|&d| self.minutes(origin, d, options.mode))
            .collect()
    }
}
