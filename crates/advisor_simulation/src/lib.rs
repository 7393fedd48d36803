//! # Advisor Simulation (L3: Engine)
//!
//! Stochastic projection of a portfolio snapshot: Monte Carlo value
//! distributions and discrete rate-shock scenarios.
//!
//! This crate provides:
//! - [`SimRng`]: seeded random number generation with derived per-run
//!   streams, so sequential and parallel execution produce identical
//!   ensembles
//! - [`MarketAssumptions`] / [`RateSensitivity`]: externally supplied
//!   model tables, validated at load
//! - [`SimulationConfig`]: validated builder configuration
//! - [`MonteCarloEngine`]: compounded daily-return trajectories with
//!   final-value summary statistics
//! - [`RateScenarioEngine`]: 12-month projections under the fixed
//!   rate-cut / current / rate-hike shock set
//!
//! All computation is synchronous and free of I/O; every entry point is
//! a pure function of the snapshot, the configuration and the seed. The
//! Monte Carlo iteration loop may fan out across cores with Rayon;
//! each run owns its own generator, so results are bit-identical either
//! way.
//!
//! ## Example
//!
//! ```
//! use advisor_portfolio::demo::demo_portfolio;
//! use advisor_simulation::{MarketAssumptions, MonteCarloEngine, SimulationConfig};
//!
//! let snapshot = demo_portfolio().unwrap().snapshot();
//!
//! let config = SimulationConfig::builder()
//!     .iterations(1_000)
//!     .horizon(252)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let engine = MonteCarloEngine::new(config, MarketAssumptions::default()).unwrap();
//! let run = engine.simulate(&snapshot);
//!
//! assert_eq!(run.trajectories.len(), 1_000);
//! assert!(run.statistics.probability_of_loss >= 0.0);
//! assert!(run.statistics.probability_of_loss <= 1.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod assumptions;
pub mod config;
pub mod error;
pub mod monte_carlo;
pub mod rng;
pub mod scenarios;

pub use assumptions::{ClassAssumption, MarketAssumptions, RateSensitivity};
pub use config::{SimulationConfig, SimulationConfigBuilder, MAX_HORIZON, MAX_ITERATIONS};
pub use error::{AssumptionsError, ConfigError};
pub use monte_carlo::{MonteCarloEngine, SimulationRun, SummaryStatistics};
pub use rng::{derive_stream_seed, SimRng};
pub use scenarios::{
    RateScenario, RateScenarioEngine, ScenarioResult, DEFAULT_MONTHLY_VOLATILITY,
    PROJECTION_MONTHS,
};
