//! Random number generation for Monte Carlo simulations.
//!
//! This module provides [`PathRng`], the seeded pseudo-random source every
//! path model owns. Draws are consumed as one continuing stream across
//! successive path generations; the stream is never reset unless a fresh
//! seed is requested.

mod prng;

pub use prng::PathRng;
