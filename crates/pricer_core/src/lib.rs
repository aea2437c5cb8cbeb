//! # pricer_core: Foundation for the mcpricer Monte Carlo pricing workspace
//!
//! ## Foundation layer role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - The `Path` trajectory type and its statistics (`types::path`)
//! - Error types shared across layers: `PricingError` (`types::error`)
//! - The seeded random source used by every model (`rng`)
//!
//! ## Zero dependency principle
//!
//! The foundation layer has no dependencies on other pricer_* crates, with
//! minimal external dependencies:
//! - rand / rand_distr: seeded pseudo-random generation
//!
//! ## Usage examples
//!
//! ```rust
//! use pricer_core::rng::PathRng;
//! use pricer_core::types::Path;
//!
//! // Seeded, reproducible random source
//! let mut rng = PathRng::from_seed(42);
//! let z = rng.gen_normal();
//! assert!(z.is_finite());
//!
//! // Trajectory statistics
//! let path = Path::new(vec![100.0, 105.0, 95.0, 102.0]);
//! assert_eq!(path.spot(), 100.0);
//! assert_eq!(path.terminal(), 102.0);
//! assert_eq!(path.minimum(), 95.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod rng;
pub mod types;
