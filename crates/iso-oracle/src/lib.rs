//! `iso-oracle`: the solver's view of the outside world.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`oracle`]   | `TravelTimeOracle` trait, batch response validation       |
//! | [`geocode`]  | `Geocoder` trait, `StaticGeocoder`                        |
//! | [`speed`]    | `SpeedModelOracle` (great-circle distance / mode speed)   |
//! | [`throttle`] | `Throttled<O>`, minimum interval between batch calls      |
//! | [`text`]     | Parsing of "1 hour 5 mins" style duration text            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod geocode;
pub mod oracle;
pub mod speed;
pub mod text;
pub mod throttle;


pub use geocode::{Geocoder, StaticGeocoder};
pub use oracle::{FnOracle, TravelTimeOracle, from_fn, validate_durations};
pub use speed::{ModeSpeeds, SpeedModelOracle};
pub use text::parse_duration_text;
pub use throttle::Throttled;
