//! `iso-solver`: iterative isochrone polygon fitting.
//!
//! # Round loop
//!
//! ```text
//! radius[i] = seed for every bearing i·360/n
//! for round in 1..=max_rounds:
//!   ① Cancel    : stop with a partial result if the token is set.
//!   ② Project   : one candidate per bearing at its current radius
//!                 (parallel with the `parallel` feature).
//!   ③ Query     : one batch call to the travel-time oracle.
//!   ④ Adjust    : per angle: too quick → radius *= 1+step,
//!                            too slow  → radius /= 1+step,
//!                            in band   → unchanged.
//!   ⑤ Converged if every angle was in band; otherwise decay step.
//! order the last candidates by bearing around the origin
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the projection step on Rayon's thread pool.       |
//! | `serde`    | Derives `Serialize`/`Deserialize` on result types.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use iso_core::{GeoPoint, SolveConfig};
//! use iso_oracle::SpeedModelOracle;
//! use iso_solver::{LogObserver, SolverBuilder};
//!
//! let solver = SolverBuilder::new(SpeedModelOracle::default())
//!     .config(SolveConfig::new(45.0, 5.0, 20, 15))
//!     .build()?;
//! let solution = solver.solve(GeoPoint::new(35.6595, 139.7005), &mut LogObserver::default())?;
//! println!("{} after {} rounds", solution.termination, solution.termination.rounds());
//! ```

pub mod batch;
pub mod builder;
pub mod cancel;
pub mod observer;
pub mod polygon;
pub mod solver;
pub mod state;

#[cfg(test)]
mod tests;

pub use batch::{LocationOutcome, LocationQuery, solve_locations};
pub use builder::SolverBuilder;
pub use cancel::CancelToken;
pub use observer::{LogObserver, NoopObserver, RoundReport, SolveObserver};
pub use polygon::{IsochronePolygon, order_by_bearing};
pub use solver::{IsochroneSolver, Solution, Termination, solve};
pub use state::{Adjustment, AngleState};
