//! Portfolio tail-risk analysis.

use tracing::debug;

use advisor_core::stats;
use advisor_portfolio::PortfolioSnapshot;
use advisor_simulation::{
    ConfigError, MarketAssumptions, MonteCarloEngine, SimulationConfig,
};

/// Analyzer configuration.
///
/// The defaults mirror a one-month horizon at high iteration count; all
/// knobs are externally tunable and the seed is explicit.
#[derive(Clone, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RiskAnalyzerConfig {
    /// Monte Carlo iteration count.
    pub iterations: usize,
    /// Horizon in trading days.
    pub horizon: usize,
    /// Number of trajectories sampled for the drawdown estimate.
    pub drawdown_sample: usize,
    /// Seed for the internal simulation.
    pub seed: Option<u64>,
    /// Whether the internal simulation fans out across cores.
    pub parallel: bool,
}

impl Default for RiskAnalyzerConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            horizon: 21,
            drawdown_sample: 100,
            seed: None,
            parallel: false,
        }
    }
}

/// Value-at-Risk at the two standard confidence levels, in currency and
/// as a percentage of initial value.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ValueAtRisk {
    /// Loss bound not expected to be exceeded with 95% confidence.
    pub var_95: f64,
    /// Loss bound not expected to be exceeded with 99% confidence.
    pub var_99: f64,
    /// `var_95` as a percentage of initial value.
    pub var_95_percent: f64,
    /// `var_99` as a percentage of initial value.
    pub var_99_percent: f64,
}

/// The analyzer's serialisable output.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RiskReport {
    /// Value-at-Risk at 95% and 99% confidence.
    pub value_at_risk: ValueAtRisk,
    /// Mean loss conditional on breaching the 95% VaR boundary, in
    /// currency units.
    pub expected_shortfall: f64,
    /// Expected shortfall as a percentage of initial value.
    pub expected_shortfall_percent: f64,
    /// Worst running-peak drawdown observed across the sampled
    /// trajectories, in percent. A lower-bound estimate: only a bounded
    /// sample of the ensemble is scanned.
    pub max_drawdown_estimate: f64,
    /// Annualised portfolio volatility, passed through from the
    /// snapshot's metrics.
    pub portfolio_volatility: f64,
    /// Sharpe ratio, passed through from the snapshot's metrics.
    pub sharpe_ratio: f64,
}

/// Derives tail-risk statistics from an internal Monte Carlo run.
///
/// # Examples
///
/// ```
/// use advisor_portfolio::demo::demo_portfolio;
/// use advisor_risk::{RiskAnalyzer, RiskAnalyzerConfig};
/// use advisor_simulation::MarketAssumptions;
///
/// let snapshot = demo_portfolio().unwrap().snapshot();
/// let config = RiskAnalyzerConfig {
///     iterations: 1_000,
///     seed: Some(7),
///     ..RiskAnalyzerConfig::default()
/// };
///
/// let analyzer = RiskAnalyzer::new(config, MarketAssumptions::default()).unwrap();
/// let report = analyzer.analyze(&snapshot);
///
/// assert!(report.expected_shortfall >= report.value_at_risk.var_95);
/// ```
#[derive(Clone, Debug)]
pub struct RiskAnalyzer {
    engine: MonteCarloEngine,
    drawdown_sample: usize,
}

impl RiskAnalyzer {
    /// Creates an analyzer, validating the embedded simulation
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the iteration count or horizon is
    /// out of bounds.
    pub fn new(
        config: RiskAnalyzerConfig,
        assumptions: MarketAssumptions,
    ) -> Result<Self, ConfigError> {
        let mut builder = SimulationConfig::builder()
            .iterations(config.iterations)
            .horizon(config.horizon)
            .parallel(config.parallel);
        if let Some(seed) = config.seed {
            builder = builder.seed(seed);
        }

        Ok(Self {
            engine: MonteCarloEngine::new(builder.build()?, assumptions)?,
            drawdown_sample: config.drawdown_sample,
        })
    }

    /// Analyzes a snapshot.
    ///
    /// Deterministic for a given seed; pure function of the snapshot and
    /// the configuration.
    pub fn analyze(&self, snapshot: &PortfolioSnapshot) -> RiskReport {
        let initial_value = snapshot.total_value;

        debug!(
            iterations = self.engine.config().iterations(),
            horizon = self.engine.config().horizon(),
            "running risk analysis"
        );

        let run = self.engine.simulate(snapshot);

        let final_values: Vec<f64> = run
            .trajectories
            .iter()
            .map(|t| t.last().copied().unwrap_or(initial_value))
            .collect();

        let percentile_5 = stats::percentile(&final_values, 5.0);
        let percentile_1 = stats::percentile(&final_values, 1.0);
        let var_95 = initial_value - percentile_5;
        let var_99 = initial_value - percentile_1;

        // Conditional mean beyond the 95% VaR boundary. The subset is
        // never empty (the minimum is always at or below the 5th
        // percentile), but the guard keeps the reduction total.
        let tail: Vec<f64> = final_values
            .iter()
            .copied()
            .filter(|&v| v <= percentile_5)
            .collect();
        let expected_shortfall = if tail.is_empty() {
            var_95
        } else {
            initial_value - stats::mean(&tail)
        };

        let mut worst_drawdown = 0.0_f64;
        for trajectory in run.trajectories.iter().take(self.drawdown_sample) {
            let drawdown = stats::max_drawdown(trajectory);
            if drawdown > worst_drawdown {
                worst_drawdown = drawdown;
            }
        }

        let as_percent = |value: f64| {
            if initial_value > 0.0 {
                value / initial_value * 100.0
            } else {
                0.0
            }
        };

        RiskReport {
            value_at_risk: ValueAtRisk {
                var_95,
                var_99,
                var_95_percent: as_percent(var_95),
                var_99_percent: as_percent(var_99),
            },
            expected_shortfall,
            expected_shortfall_percent: as_percent(expected_shortfall),
            max_drawdown_estimate: worst_drawdown * 100.0,
            portfolio_volatility: snapshot.metrics.portfolio_volatility,
            sharpe_ratio: snapshot.metrics.sharpe_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use advisor_portfolio::demo::demo_portfolio;

    fn analyzer(iterations: usize, seed: u64) -> RiskAnalyzer {
        RiskAnalyzer::new(
            RiskAnalyzerConfig {
                iterations,
                seed: Some(seed),
                ..RiskAnalyzerConfig::default()
            },
            MarketAssumptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_var_confidence_ordering() {
        let snapshot = demo_portfolio().unwrap().snapshot();
        let report = analyzer(2_000, 42).analyze(&snapshot);

        assert!(report.value_at_risk.var_99 >= report.value_at_risk.var_95);
        assert!(report.value_at_risk.var_99_percent >= report.value_at_risk.var_95_percent);
    }

    #[test]
    fn test_expected_shortfall_exceeds_var() {
        let snapshot = demo_portfolio().unwrap().snapshot();
        let report = analyzer(2_000, 42).analyze(&snapshot);

        // The conditional tail mean lies beyond the VaR boundary.
        assert!(report.expected_shortfall >= report.value_at_risk.var_95);
    }

    #[test]
    fn test_drawdown_estimate_is_a_percentage() {
        let snapshot = demo_portfolio().unwrap().snapshot();
        let report = analyzer(500, 42).analyze(&snapshot);

        assert!(report.max_drawdown_estimate >= 0.0);
        assert!(report.max_drawdown_estimate <= 100.0);
    }

    #[test]
    fn test_analysis_is_reproducible() {
        let snapshot = demo_portfolio().unwrap().snapshot();
        let first = analyzer(1_000, 7).analyze(&snapshot);
        let second = analyzer(1_000, 7).analyze(&snapshot);
        assert_eq!(first, second);
    }

    #[test]
    fn test_metrics_pass_through() {
        let snapshot = demo_portfolio().unwrap().snapshot();
        let report = analyzer(200, 1).analyze(&snapshot);

        assert_relative_eq!(
            report.portfolio_volatility,
            snapshot.metrics.portfolio_volatility
        );
        assert_relative_eq!(report.sharpe_ratio, snapshot.metrics.sharpe_ratio);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = RiskAnalyzer::new(
            RiskAnalyzerConfig {
                iterations: 0,
                ..RiskAnalyzerConfig::default()
            },
            MarketAssumptions::default(),
        );
        assert!(matches!(result, Err(ConfigError::InvalidIterationCount(0))));
    }

    #[test]
    fn test_report_serialises() {
        let snapshot = demo_portfolio().unwrap().snapshot();
        let report = analyzer(200, 1).analyze(&snapshot);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"value_at_risk\""));
        assert!(json.contains("\"max_drawdown_estimate\""));
    }
}
