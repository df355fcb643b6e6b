//! `iso-core`: foundational types for the isochrone fitter.
//!
//! This crate is a dependency of every other `iso-*` crate.  It has no
//! `iso-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, geodesic projection, initial bearing      |
//! | [`transport`]   | `TravelMode`, `TransitSubmode`, `TravelOptions`, …    |
//! | [`time`]        | `DepartureTime`                                       |
//! | [`config`]      | `SolveConfig`                                         |
//! | [`error`]       | `IsoError`, `IsoResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod time;
pub mod transport;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SolveConfig;
pub use error::{IsoError, IsoResult};
pub use geo::{EARTH_RADIUS_KM, GeoPoint, bearing, project};
pub use time::DepartureTime;
pub use transport::{RoutingPreference, TransitSubmode, TravelMode, TravelOptions};
