//! Simulation configuration.
//!
//! Immutable, validated configuration for Monte Carlo runs. Built
//! through [`SimulationConfigBuilder`] so that zero or absurd iteration
//! and horizon counts are rejected before an engine ever exists.

use crate::error::ConfigError;

/// Maximum number of simulation runs allowed.
pub const MAX_ITERATIONS: usize = 1_000_000;

/// Maximum number of periods per trajectory.
pub const MAX_HORIZON: usize = 10_000;

/// Monte Carlo simulation configuration.
///
/// # Examples
///
/// ```
/// use advisor_simulation::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .iterations(10_000)
///     .horizon(252)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.iterations(), 10_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct SimulationConfig {
    iterations: usize,
    horizon: usize,
    seed: Option<u64>,
    parallel: bool,
}

impl SimulationConfig {
    /// Creates a configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of simulation runs.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the number of periods per trajectory.
    #[inline]
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Returns the explicit seed, if one was configured.
    ///
    /// An unset seed means seed 0, never an ambient entropy source, so
    /// runs stay reproducible either way.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns whether the iteration loop fans out across cores.
    #[inline]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Validates the configuration bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when iterations or horizon fall outside
    /// their permitted ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 || self.iterations > MAX_ITERATIONS {
            return Err(ConfigError::InvalidIterationCount(self.iterations));
        }
        if self.horizon == 0 || self.horizon > MAX_HORIZON {
            return Err(ConfigError::InvalidHorizon(self.horizon));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    iterations: Option<usize>,
    horizon: Option<usize>,
    seed: Option<u64>,
    parallel: bool,
}

impl SimulationConfigBuilder {
    /// Sets the number of simulation runs, in [1, `MAX_ITERATIONS`].
    #[inline]
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Sets the number of periods per trajectory, in [1, `MAX_HORIZON`].
    #[inline]
    pub fn horizon(mut self, horizon: usize) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables the parallel iteration loop (default off).
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required field is missing or a
    /// bound is violated.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let iterations = self.iterations.ok_or(ConfigError::InvalidParameter {
            name: "iterations",
            value: "must be specified".to_string(),
        })?;

        let horizon = self.horizon.ok_or(ConfigError::InvalidParameter {
            name: "horizon",
            value: "must be specified".to_string(),
        })?;

        let config = SimulationConfig {
            iterations,
            horizon,
            seed: self.seed,
            parallel: self.parallel,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_valid() {
        let config = SimulationConfig::builder()
            .iterations(1_000)
            .horizon(252)
            .build()
            .unwrap();

        assert_eq!(config.iterations(), 1_000);
        assert_eq!(config.horizon(), 252);
        assert_eq!(config.seed(), None);
        assert!(!config.parallel());
    }

    #[test]
    fn test_builder_zero_iterations_rejected() {
        let result = SimulationConfig::builder().iterations(0).horizon(10).build();
        assert!(matches!(result, Err(ConfigError::InvalidIterationCount(0))));
    }

    #[test]
    fn test_builder_excess_iterations_rejected() {
        let result = SimulationConfig::builder()
            .iterations(MAX_ITERATIONS + 1)
            .horizon(10)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidIterationCount(_))
        ));
    }

    #[test]
    fn test_builder_zero_horizon_rejected() {
        let result = SimulationConfig::builder().iterations(10).horizon(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidHorizon(0))));
    }

    #[test]
    fn test_builder_missing_fields_rejected() {
        let result = SimulationConfig::builder().horizon(10).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "iterations",
                ..
            })
        ));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = SimulationConfig::builder()
            .iterations(500)
            .horizon(21)
            .seed(7)
            .parallel(true)
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let back: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.iterations(), 500);
        assert_eq!(back.seed(), Some(7));
        assert!(back.parallel());
    }
}
