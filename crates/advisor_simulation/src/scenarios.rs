//! Discrete rate-shock scenarios.
//!
//! Stress-tests a portfolio snapshot against a fixed set of
//! percentage-point rate shocks. Each asset class responds through a
//! configured sensitivity coefficient; the combined impact phases in
//! linearly over a 12-month projection with seeded monthly noise.

use std::collections::BTreeMap;

use tracing::debug;

use advisor_portfolio::PortfolioSnapshot;

use crate::assumptions::RateSensitivity;
use crate::rng::{derive_stream_seed, SimRng};

/// Length of the scenario projection, in months.
pub const PROJECTION_MONTHS: usize = 12;

/// Default standard deviation of the monthly noise term, in percentage
/// points.
pub const DEFAULT_MONTHLY_VOLATILITY: f64 = 2.0;

/// The fixed rate-shock scenario set.
///
/// Closed by design: collaborators can rely on the result map holding
/// exactly these three keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateScenario {
    /// Rates fall by two percentage points.
    RateCut,
    /// Rates hold.
    Current,
    /// Rates rise by two percentage points.
    RateHike,
}

impl RateScenario {
    /// All scenarios, in canonical order.
    pub const ALL: [RateScenario; 3] = [
        RateScenario::RateCut,
        RateScenario::Current,
        RateScenario::RateHike,
    ];

    /// Returns the stable snake_case key.
    pub fn key(&self) -> &'static str {
        match self {
            RateScenario::RateCut => "rate_cut",
            RateScenario::Current => "current",
            RateScenario::RateHike => "rate_hike",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            RateScenario::RateCut => "Rate Cut (-2%)",
            RateScenario::Current => "Current Rates",
            RateScenario::RateHike => "Rate Hike (+2%)",
        }
    }

    /// Returns the rate shock in percentage points.
    pub fn rate_change(&self) -> f64 {
        match self {
            RateScenario::RateCut => -2.0,
            RateScenario::Current => 0.0,
            RateScenario::RateHike => 2.0,
        }
    }
}

/// Outcome of one rate scenario.
#[derive(Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ScenarioResult {
    /// Scenario display name.
    pub name: String,
    /// Applied rate shock in percentage points.
    pub rate_change: f64,
    /// Full-phase-in portfolio impact in percent:
    /// `Σ rate_change × sensitivity × weight`.
    pub portfolio_impact: f64,
    /// Month-end values, months 1 through 12.
    pub monthly_values: Vec<f64>,
    /// Value at month 12.
    pub final_value: f64,
    /// Total return over the projection, in percent of initial value.
    pub total_return: f64,
}

/// Rate-shock scenario engine.
///
/// # Examples
///
/// ```
/// use advisor_portfolio::demo::demo_portfolio;
/// use advisor_simulation::{RateScenario, RateScenarioEngine};
///
/// let snapshot = demo_portfolio().unwrap().snapshot();
/// let results = RateScenarioEngine::default().rate_scenarios(&snapshot);
///
/// assert_eq!(results.len(), 3);
/// assert!(results.contains_key(&RateScenario::RateHike));
/// ```
#[derive(Clone, Debug)]
pub struct RateScenarioEngine {
    sensitivity: RateSensitivity,
    monthly_volatility: f64,
    seed: u64,
}

impl Default for RateScenarioEngine {
    fn default() -> Self {
        Self::new(RateSensitivity::default())
    }
}

impl RateScenarioEngine {
    /// Creates an engine with the given sensitivity table, the default
    /// monthly noise volatility and seed 0.
    pub fn new(sensitivity: RateSensitivity) -> Self {
        Self {
            sensitivity,
            monthly_volatility: DEFAULT_MONTHLY_VOLATILITY,
            seed: 0,
        }
    }

    /// Overrides the monthly noise volatility (percentage points).
    ///
    /// Zero silences the noise term entirely, making projections exact;
    /// useful for testing the deterministic impact path.
    pub fn with_monthly_volatility(mut self, monthly_volatility: f64) -> Self {
        self.monthly_volatility = monthly_volatility;
        self
    }

    /// Overrides the noise seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Evaluates every scenario over a snapshot.
    ///
    /// The result map holds exactly the keys of [`RateScenario::ALL`].
    /// Each scenario draws noise from its own stream of the configured
    /// seed, so results are deterministic and independent of evaluation
    /// order.
    pub fn rate_scenarios(
        &self,
        snapshot: &PortfolioSnapshot,
    ) -> BTreeMap<RateScenario, ScenarioResult> {
        let initial_value = snapshot.total_value;
        let mut results = BTreeMap::new();

        for (idx, &scenario) in RateScenario::ALL.iter().enumerate() {
            let rate_change = scenario.rate_change();

            let portfolio_impact: f64 = snapshot
                .allocation_by_class
                .iter()
                .map(|(&class, &allocation)| {
                    rate_change * self.sensitivity.get(class) * (allocation / 100.0)
                })
                .sum();

            debug!(
                scenario = scenario.key(),
                portfolio_impact, "evaluating rate scenario"
            );

            let mut rng = SimRng::from_seed(derive_stream_seed(self.seed, idx as u64));
            let mut value = initial_value;
            let mut monthly_values = Vec::with_capacity(PROJECTION_MONTHS);

            for month in 1..=PROJECTION_MONTHS {
                // Impact phases in linearly over the year; noise is drawn
                // per month on top of it.
                let time_factor = month as f64 / PROJECTION_MONTHS as f64;
                let noise = self.monthly_volatility * rng.gen_normal();
                let monthly_return = (portfolio_impact * time_factor + noise) / 100.0;
                value *= 1.0 + monthly_return;
                monthly_values.push(value);
            }

            let final_value = value;
            let total_return = if initial_value > 0.0 {
                (final_value - initial_value) / initial_value * 100.0
            } else {
                0.0
            };

            results.insert(
                scenario,
                ScenarioResult {
                    name: scenario.display_name().to_string(),
                    rate_change,
                    portfolio_impact,
                    monthly_values,
                    final_value,
                    total_return,
                },
            );
        }

        results
    }
}
