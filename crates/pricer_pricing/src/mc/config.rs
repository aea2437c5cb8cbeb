//! Monte Carlo simulation configuration.
//!
//! This module provides the configuration type and builder for Monte Carlo
//! pricing runs. Every field has a sensible default, so
//! `MonteCarloConfig::default()` is a valid configuration.

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(50_000)
///     .n_steps(252)
///     .spot(105.0)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 50_000);
/// assert_eq!(config.spot(), 105.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MonteCarloConfig {
    /// Number of simulation paths.
    n_paths: usize,
    /// Number of time steps per path.
    n_steps: usize,
    /// Initial asset price.
    spot: f64,
}

impl Default for MonteCarloConfig {
    /// 10_000 paths, 252 daily steps, spot 100.
    fn default() -> Self {
        Self {
            n_paths: 10_000,
            n_steps: 252,
            spot: 100.0,
        }
    }
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the initial asset price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0 or greater than 10,000,000
    /// - `n_steps` is 0 or greater than 10,000
    /// - `spot` is not strictly positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(self.n_steps));
        }
        if self.spot <= 0.0 || !self.spot.is_finite() {
            return Err(ConfigError::InvalidSpot(self.spot.to_string()));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Unset fields take the defaults of [`MonteCarloConfig::default`].
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    spot: Option<f64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths, in [1, 10_000_000].
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path, in [1, 10_000].
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the initial asset price (must be strictly positive).
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any field is outside its valid range.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let defaults = MonteCarloConfig::default();
        let config = MonteCarloConfig {
            n_paths: self.n_paths.unwrap_or(defaults.n_paths),
            n_steps: self.n_steps.unwrap_or(defaults.n_steps),
            spot: self.spot.unwrap_or(defaults.spot),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = MonteCarloConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.n_paths(), 10_000);
        assert_eq!(config.n_steps(), 252);
        assert_eq!(config.spot(), 100.0);
    }

    #[test]
    fn test_builder_applies_defaults() {
        let config = MonteCarloConfig::builder().n_paths(500).build().unwrap();
        assert_eq!(config.n_paths(), 500);
        assert_eq!(config.n_steps(), 252);
        assert_eq!(config.spot(), 100.0);
    }

    #[test]
    fn test_builder_full() {
        let config = MonteCarloConfig::builder()
            .n_paths(1_000)
            .n_steps(100)
            .spot(95.0)
            .build()
            .unwrap();
        assert_eq!(config.n_steps(), 100);
        assert_eq!(config.spot(), 95.0);
    }

    #[test]
    fn test_invalid_zero_paths() {
        let result = MonteCarloConfig::builder().n_paths(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidPathCount(0))));
    }

    #[test]
    fn test_invalid_too_many_paths() {
        let result = MonteCarloConfig::builder().n_paths(MAX_PATHS + 1).build();
        assert!(matches!(result, Err(ConfigError::InvalidPathCount(_))));
    }

    #[test]
    fn test_invalid_zero_steps() {
        let result = MonteCarloConfig::builder().n_steps(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidStepCount(0))));
    }

    #[test]
    fn test_invalid_too_many_steps() {
        let result = MonteCarloConfig::builder().n_steps(MAX_STEPS + 1).build();
        assert!(matches!(result, Err(ConfigError::InvalidStepCount(_))));
    }

    #[test]
    fn test_invalid_spot() {
        for spot in [0.0, -100.0, f64::NAN] {
            let result = MonteCarloConfig::builder().spot(spot).build();
            assert!(matches!(result, Err(ConfigError::InvalidSpot(_))));
        }
    }
}
