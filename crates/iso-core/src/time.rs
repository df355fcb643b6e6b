//! Departure time model.
//!
//! Oracles that schedule transit need a concrete departure instant.  It is
//! carried as a plain Unix timestamp so this crate stays free of datetime
//! dependencies; adapters convert to whatever their service expects.

use std::fmt;

/// A departure instant in Unix seconds (UTC).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepartureTime(pub i64);

impl DepartureTime {
    /// 2017-06-12 13:00 UTC, a weekday early afternoon with regular service.
    pub const REFERENCE: DepartureTime = DepartureTime(1_497_272_400);

    #[inline]
    pub fn unix_secs(self) -> i64 {
        self.0
    }

    /// Break the timestamp into (days since epoch, hour, minute) in UTC.
    pub fn days_hm(self) -> (i64, u32, u32) {
        let days = self.0.div_euclid(86_400);
        let secs = self.0.rem_euclid(86_400);
        (days, (secs / 3_600) as u32, ((secs % 3_600) / 60) as u32)
    }
}

impl Default for DepartureTime {
    fn default() -> Self {
        DepartureTime::REFERENCE
    }
}

impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (d, h, m) = self.days_hm();
        write!(f, "day {} {:02}:{:02} UTC", d, h, m)
    }
}
