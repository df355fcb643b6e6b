//! Geographic coordinate type and spherical-Earth geodesy.
//!
//! Everything here works on a sphere of radius [`EARTH_RADIUS_KM`]
//! (the WGS-84 equatorial radius).  Over the few tens of kilometres an
//! isochrone spans, the error against the ellipsoid is far below what a
//! travel-time oracle can resolve.
//!
//! Angles cross the API in degrees; radians only exist inside the formulas.

use std::fmt;

use crate::{IsoError, IsoResult};

/// Sphere radius used by projection, bearing and distance, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_378.137;

/// Points closer than this (in degrees, per axis) count as coincident.
const COINCIDENT_EPS_DEG: f64 = 1e-12;

/// A geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Destination reached by travelling `distance_km` along the great circle
    /// that leaves `self` with initial bearing `bearing_deg`.
    ///
    /// This is the raw direct formula with no argument checks.  A distance of
    /// zero returns `self` (up to rounding); negative distances travel
    /// backwards.  Use [`project`] for the validated version.
    ///
    /// The returned longitude is normalised to `[-180, 180)`.
    pub fn destination(self, bearing_deg: f64, distance_km: f64) -> GeoPoint {
        let delta = distance_km / EARTH_RADIUS_KM;
        let theta = bearing_deg.to_radians();
        let lat1 = self.lat.to_radians();

        let sin_lat2 = lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos();
        // Rounding can push the argument a hair outside asin's domain.
        let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();
        let d_lon = (theta.sin() * delta.sin() * lat1.cos())
            .atan2(delta.cos() - lat1.sin() * lat2.sin());

        // Offset the longitude in degrees so a zero offset (due north or
        // south) leaves it bit-identical and the bearing back is exact.
        GeoPoint::new(lat2.to_degrees(), normalize_lon(self.lon + d_lon.to_degrees()))
    }

    /// Initial great-circle bearing from `self` to `other`, in `[0, 360)`
    /// degrees with 0 = north and 90 = east.
    ///
    /// Coincident points have no defined bearing; by convention this returns
    /// `0.0`.  Antipodal points return whatever direction the rounding of the
    /// formula favours, but never panic or return NaN.
    pub fn bearing_to(self, other: GeoPoint) -> f64 {
        if (self.lat - other.lat).abs() < COINCIDENT_EPS_DEG
            && (self.lon - other.lon).abs() < COINCIDENT_EPS_DEG
        {
            return 0.0;
        }

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        normalize_bearing(y.atan2(x).to_degrees())
    }

    /// Haversine great-circle distance in kilometres.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── Validated operations ──────────────────────────────────────────────────────

/// Project a point `distance_km` from `origin` along `bearing_deg`.
///
/// # Errors
///
/// [`IsoError::InvalidArgument`] if `distance_km` is not strictly positive,
/// or if any input is not finite.
pub fn project(origin: GeoPoint, bearing_deg: f64, distance_km: f64) -> IsoResult<GeoPoint> {
    if !origin.is_finite() {
        return Err(IsoError::invalid(format!("origin {origin} is not finite")));
    }
    if !bearing_deg.is_finite() {
        return Err(IsoError::invalid(format!("bearing {bearing_deg} is not finite")));
    }
    if !distance_km.is_finite() || distance_km <= 0.0 {
        return Err(IsoError::invalid(format!(
            "projection distance must be positive, got {distance_km} km"
        )));
    }
    Ok(origin.destination(bearing_deg, distance_km))
}

/// Initial bearing from `origin` to `destination`; see [`GeoPoint::bearing_to`].
#[inline]
pub fn bearing(origin: GeoPoint, destination: GeoPoint) -> f64 {
    origin.bearing_to(destination)
}

// ── Normalisation helpers ─────────────────────────────────────────────────────

/// Map any angle in degrees onto `[0, 360)`.
pub fn normalize_bearing(deg: f64) -> f64 {
    let b = deg.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0.
    if b >= 360.0 { 0.0 } else { b }
}

fn normalize_lon(deg: f64) -> f64 {
    if (-180.0..180.0).contains(&deg) {
        deg
    } else {
        (deg + 180.0).rem_euclid(360.0) - 180.0
    }
}
