//! Monte Carlo simulation kernel.
//!
//! # Key Components
//!
//! - [`MonteCarloConfig`]: validated simulation parameters with a builder
//! - [`MonteCarloPricer`]: the generate / evaluate / discount / average loop
//! - [`PricingResult`]: price estimate with standard error
//! - [`McError`]: everything that can go wrong end to end

mod config;
mod error;
mod pricer;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, MAX_PATHS, MAX_STEPS};
pub use error::{ConfigError, McError};
pub use pricer::{MonteCarloPricer, PricingResult};
