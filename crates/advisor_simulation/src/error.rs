//! Simulation configuration errors.

use advisor_core::types::AssetClass;
use thiserror::Error;

/// Simulation configuration errors.
///
/// Raised at build time by [`SimulationConfigBuilder`]; an engine can
/// only be constructed over a validated configuration, so degenerate
/// iteration or horizon counts never reach the simulation loop.
///
/// [`SimulationConfigBuilder`]: crate::config::SimulationConfigBuilder
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Iteration count outside [1, `MAX_ITERATIONS`].
    #[error("invalid iteration count: {0}")]
    InvalidIterationCount(usize),

    /// Horizon outside [1, `MAX_HORIZON`].
    #[error("invalid horizon: {0}")]
    InvalidHorizon(usize),

    /// A required parameter was not supplied or is malformed.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the problem.
        value: String,
    },
}

/// Assumption-table validation errors.
///
/// The market assumption and rate-sensitivity tables are externally
/// supplied configuration; loading one that does not cover every asset
/// class, or carries a negative volatility, fails fast.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssumptionsError {
    /// The table has no entry for an asset class.
    #[error("assumption table has no entry for {class}")]
    MissingClass {
        /// The uncovered class.
        class: AssetClass,
    },

    /// A class volatility is negative.
    #[error("volatility {value} for {class} is negative")]
    NegativeVolatility {
        /// The offending class.
        class: AssetClass,
        /// The offending volatility.
        value: f64,
    },
}
