//! Fluent builder for constructing an [`IsochroneSolver`].

use iso_core::{IsoResult, SolveConfig, TravelMode, TravelOptions};
use iso_oracle::TravelTimeOracle;

use crate::{CancelToken, IsochroneSolver};

/// Fluent builder for [`IsochroneSolver<O>`].
///
/// # Required inputs
///
/// - `O: TravelTimeOracle`: the travel-time source
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                    |
/// |---------------------|--------------------------------------------|
/// | `.config(c)`        | `SolveConfig::default()` (25 ± 10 min, 20 angles, 15 rounds) |
/// | `.options(o)`       | `TravelOptions::default()` (transit, rail) |
/// | `.mode(m)`          | replaces only `options.mode`               |
/// | `.cancel_token(t)`  | none (never cancelled)                     |
///
/// # Example
///
/// ```rust,ignore
/// let solver = SolverBuilder::new(oracle)
///     .config(SolveConfig::new(30.0, 5.0, 24, 20))
///     .mode(TravelMode::Walking)
///     .build()?;
/// ```
pub struct SolverBuilder<O: TravelTimeOracle> {
    oracle:  O,
    config:  Option<SolveConfig>,
    options: Option<TravelOptions>,
    cancel:  Option<CancelToken>,
}

impl<O: TravelTimeOracle> SolverBuilder<O> {
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            config:  None,
            options: None,
            cancel:  None,
        }
    }

    pub fn config(mut self, config: SolveConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn options(mut self, options: TravelOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Shorthand for changing only the travel mode.
    pub fn mode(mut self, mode: TravelMode) -> Self {
        self.options.get_or_insert_with(TravelOptions::default).mode = mode;
        self
    }

    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Validate the configuration and return a ready-to-use solver.
    pub fn build(self) -> IsoResult<IsochroneSolver<O>> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        Ok(IsochroneSolver {
            oracle:  self.oracle,
            options: self.options.unwrap_or_default(),
            config,
            cancel:  self.cancel,
        })
    }
}
