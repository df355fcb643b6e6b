//! Driving many locations through one solver.
//!
//! Each location is geocoded and solved independently.  A failure at one
//! location (address not found, oracle outage, bad per-location override) is
//! recorded in that location's [`LocationOutcome`] and the batch moves on.
//!
//! Locations run sequentially.  If the oracle is rate limited, wrap it in
//! [`iso_oracle::Throttled`] before building the solver.

use iso_core::IsoResult;
use iso_oracle::{Geocoder, TravelTimeOracle};

use crate::{IsochroneSolver, SolveObserver, Solution};

/// One location to solve.  `None` overrides fall back to the solver's config.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationQuery {
    /// Display name, used in logs and outcomes.
    pub name:                String,
    /// Free-form address handed to the geocoder.
    pub address:             String,
    pub target_duration_min: Option<f64>,
    pub number_of_angles:    Option<usize>,
}

impl LocationQuery {
    pub fn new(name: &str, address: &str) -> Self {
        Self {
            name:                name.to_owned(),
            address:             address.to_owned(),
            target_duration_min: None,
            number_of_angles:    None,
        }
    }

    pub fn duration(mut self, minutes: f64) -> Self {
        self.target_duration_min = Some(minutes);
        self
    }

    pub fn angles(mut self, n: usize) -> Self {
        self.number_of_angles = Some(n);
        self
    }
}

/// The result for one [`LocationQuery`].
#[derive(Debug)]
pub struct LocationOutcome {
    pub name:   String,
    /// The solution's polygon carries the geocoded origin.
    pub result: IsoResult<Solution>,
}

impl LocationOutcome {
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Geocode and solve every query, in order.  Always returns one outcome per
/// query.
pub fn solve_locations<G, O, Obs>(
    geocoder: &G,
    solver:   &IsochroneSolver<O>,
    queries:  &[LocationQuery],
    observer: &mut Obs,
) -> Vec<LocationOutcome>
where
    G: Geocoder,
    O: TravelTimeOracle,
    Obs: SolveObserver,
{
    queries
        .iter()
        .map(|q| {
            observer.on_location(&q.name);
            let result = solve_one(geocoder, solver, q, observer);
            if let Err(e) = &result {
                observer.on_location_failed(&q.name, e);
            }
            LocationOutcome { name: q.name.clone(), result }
        })
        .collect()
}

fn solve_one<G, O, Obs>(
    geocoder: &G,
    solver:   &IsochroneSolver<O>,
    query:    &LocationQuery,
    observer: &mut Obs,
) -> IsoResult<Solution>
where
    G: Geocoder,
    O: TravelTimeOracle,
    Obs: SolveObserver,
{
    let mut config = solver.config.clone();
    if let Some(d) = query.target_duration_min {
        config.target_duration_min = d;
    }
    if let Some(n) = query.number_of_angles {
        config.number_of_angles = n;
    }

    let origin = geocoder.geocode(&query.address)?;
    solver.solve_with(origin, &config, observer)
}
