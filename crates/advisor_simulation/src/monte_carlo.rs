//! Monte Carlo projection engine.
//!
//! Projects a portfolio snapshot's value distribution by compounding
//! normally distributed period returns. The portfolio's expected return
//! is the allocation-weighted sum of class returns; its volatility is
//! `√Σ(wᵢσᵢ)²`, which treats class returns as independent. That is a
//! deliberate modelling simplification: no cross-asset covariance.
//!
//! Every run draws from its own generator seeded from the top-level seed
//! and the run index, so the ensemble is identical under sequential and
//! parallel execution and bit-reproducible across calls.

use rayon::prelude::*;
use tracing::debug;

use advisor_core::stats;
use advisor_portfolio::PortfolioSnapshot;

use crate::assumptions::MarketAssumptions;
use crate::config::SimulationConfig;
use crate::error::ConfigError;
use crate::rng::{derive_stream_seed, SimRng};

/// Business days per year, for scaling annualised assumptions to
/// per-period draws.
const TRADING_DAYS: f64 = 252.0;

/// Final-value distribution summary of a simulation ensemble.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct SummaryStatistics {
    /// Starting portfolio value.
    pub initial_value: f64,
    /// Mean final value.
    pub mean: f64,
    /// Median final value.
    pub median: f64,
    /// Population standard deviation of final values.
    pub std_dev: f64,
    /// 5th percentile of final values (linear interpolation).
    pub percentile_5: f64,
    /// 95th percentile of final values (linear interpolation).
    pub percentile_95: f64,
    /// Fraction of runs ending below the initial value, in [0, 1].
    pub probability_of_loss: f64,
    /// `(mean − initial) / initial`, as a decimal.
    pub expected_return: f64,
}

impl SummaryStatistics {
    /// Aggregates an ensemble's final values.
    ///
    /// A pure reduction with no ordering dependency: any permutation of
    /// `final_values` yields the same statistics.
    pub fn from_final_values(final_values: &[f64], initial_value: f64) -> Self {
        let mean = stats::mean(final_values);
        let losses = final_values.iter().filter(|&&v| v < initial_value).count();
        let probability_of_loss = if final_values.is_empty() {
            0.0
        } else {
            losses as f64 / final_values.len() as f64
        };
        let expected_return = if initial_value > 0.0 {
            (mean - initial_value) / initial_value
        } else {
            0.0
        };

        Self {
            initial_value,
            mean,
            median: stats::median(final_values),
            std_dev: stats::population_std_dev(final_values),
            percentile_5: stats::percentile(final_values, 5.0),
            percentile_95: stats::percentile(final_values, 95.0),
            probability_of_loss,
            expected_return,
        }
    }
}

/// A completed simulation: configuration echo, inputs, trajectory
/// ensemble and summary statistics.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct SimulationRun {
    /// Number of independent runs.
    pub iterations: usize,
    /// Periods per trajectory.
    pub horizon: usize,
    /// Starting portfolio value.
    pub initial_value: f64,
    /// Annualised portfolio expected return fed into the model (decimal).
    pub expected_return: f64,
    /// Annualised portfolio volatility fed into the model (decimal).
    pub volatility: f64,
    /// Value trajectories; each has length `horizon + 1` with the
    /// initial value at index 0.
    pub trajectories: Vec<Vec<f64>>,
    /// Final-value distribution summary.
    pub statistics: SummaryStatistics,
}

/// Monte Carlo projection engine.
///
/// # Examples
///
/// ```
/// use advisor_portfolio::demo::demo_portfolio;
/// use advisor_simulation::{MarketAssumptions, MonteCarloEngine, SimulationConfig};
///
/// let snapshot = demo_portfolio().unwrap().snapshot();
/// let config = SimulationConfig::builder()
///     .iterations(200)
///     .horizon(21)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// let engine = MonteCarloEngine::new(config, MarketAssumptions::default()).unwrap();
/// let run = engine.simulate(&snapshot);
///
/// assert_eq!(run.trajectories[0].len(), 22);
/// assert_eq!(run.trajectories[0][0], snapshot.total_value);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloEngine {
    config: SimulationConfig,
    assumptions: MarketAssumptions,
}

impl MonteCarloEngine {
    /// Creates an engine, re-validating the configuration.
    ///
    /// The builder already validates, but a configuration can also
    /// arrive deserialised from a collaborator; validating here keeps
    /// degenerate iteration counts out of the engine either way.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid.
    pub fn new(
        config: SimulationConfig,
        assumptions: MarketAssumptions,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            assumptions,
        })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Computes the portfolio-level model moments from a snapshot:
    /// allocation-weighted expected return and the independence-assumption
    /// volatility, both annualised decimals.
    pub fn portfolio_moments(&self, snapshot: &PortfolioSnapshot) -> (f64, f64) {
        let total_weight: f64 = snapshot.allocation_by_class.values().sum();
        if total_weight <= 0.0 {
            return (0.0, 0.0);
        }

        let mut expected_return = 0.0;
        let mut variance = 0.0;
        for (&class, &allocation) in &snapshot.allocation_by_class {
            let weight = allocation / total_weight;
            let assumption = self.assumptions.get(class);
            expected_return += weight * assumption.expected_return;
            variance += (weight * assumption.volatility).powi(2);
        }

        (expected_return, variance.sqrt())
    }

    /// Runs the simulation over a snapshot.
    ///
    /// Deterministic for a given configuration seed; with
    /// `parallel(true)` the iteration loop fans out with Rayon and still
    /// produces a bit-identical ensemble, because each run owns a
    /// generator seeded from the run index.
    pub fn simulate(&self, snapshot: &PortfolioSnapshot) -> SimulationRun {
        let iterations = self.config.iterations();
        let horizon = self.config.horizon();
        let initial_value = snapshot.total_value;

        let (expected_return, volatility) = self.portfolio_moments(snapshot);
        debug!(
            iterations,
            horizon, expected_return, volatility, "starting Monte Carlo simulation"
        );

        let period_mean = expected_return / TRADING_DAYS;
        let period_std = volatility / TRADING_DAYS.sqrt();
        let base_seed = self.config.seed().unwrap_or(0);

        let run = |run_idx: usize| -> Vec<f64> {
            let mut rng = SimRng::from_seed(derive_stream_seed(base_seed, run_idx as u64));
            let mut trajectory = Vec::with_capacity(horizon + 1);
            let mut value = initial_value;
            trajectory.push(value);
            for _ in 0..horizon {
                let period_return = period_mean + period_std * rng.gen_normal();
                value *= 1.0 + period_return;
                trajectory.push(value);
            }
            trajectory
        };

        let trajectories: Vec<Vec<f64>> = if self.config.parallel() {
            (0..iterations).into_par_iter().map(run).collect()
        } else {
            (0..iterations).map(run).collect()
        };

        let final_values: Vec<f64> = trajectories
            .iter()
            .map(|t| t.last().copied().unwrap_or(initial_value))
            .collect();
        let statistics = SummaryStatistics::from_final_values(&final_values, initial_value);

        debug!(
            mean = statistics.mean,
            probability_of_loss = statistics.probability_of_loss,
            "Monte Carlo simulation finished"
        );

        SimulationRun {
            iterations,
            horizon,
            initial_value,
            expected_return,
            volatility,
            trajectories,
            statistics,
        }
    }
}
