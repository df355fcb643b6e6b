//! Travel mode and per-query options passed through to the travel-time oracle.
//!
//! The solver never interprets these values; it forwards them unchanged with
//! every batch call.  Oracles that don't support a mode should fail with
//! `IsoError::TravelTimeUnavailable`.

use std::fmt;

use crate::DepartureTime;

/// How the traveller moves between the origin and a candidate point.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum TravelMode {
    /// Private vehicle.
    Driving,
    /// On foot.
    Walking,
    /// Bicycle.
    Bicycling,
    /// Scheduled public transport (bus, rail, ferry…).
    #[default]
    Transit,
}

impl TravelMode {
    /// Lower-case label, matching distance-matrix service parameters.
    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Driving   => "driving",
            TravelMode::Walking   => "walking",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Transit   => "transit",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preferred vehicle type when `mode` is [`TravelMode::Transit`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum TransitSubmode {
    Bus,
    Subway,
    Train,
    Tram,
    /// Any rail service (train, tram, subway).
    #[default]
    Rail,
}

impl TransitSubmode {
    pub fn as_str(self) -> &'static str {
        match self {
            TransitSubmode::Bus    => "bus",
            TransitSubmode::Subway => "subway",
            TransitSubmode::Train  => "train",
            TransitSubmode::Tram   => "tram",
            TransitSubmode::Rail   => "rail",
        }
    }
}

/// Transit routing bias.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoutingPreference {
    LessWalking,
    #[default]
    FewerTransfers,
}

impl RoutingPreference {
    pub fn as_str(self) -> &'static str {
        match self {
            RoutingPreference::LessWalking    => "less_walking",
            RoutingPreference::FewerTransfers => "fewer_transfers",
        }
    }
}

/// Everything an oracle needs besides the coordinates themselves.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelOptions {
    pub mode:               TravelMode,
    pub departure:          DepartureTime,
    /// Only meaningful for [`TravelMode::Transit`].
    pub transit_submode:    TransitSubmode,
    /// Only meaningful for [`TravelMode::Transit`].
    pub routing_preference: RoutingPreference,
}

impl TravelOptions {
    /// Default options with a different travel mode.
    pub fn with_mode(mode: TravelMode) -> Self {
        Self { mode, ..Self::default() }
    }
}
