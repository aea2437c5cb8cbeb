//! Shared value types: trajectories and error taxonomy.

pub mod error;
pub mod path;

pub use error::PricingError;
pub use path::Path;
