//! Data sources.
//!
//! - seeded synthetic samples drawn from a model (`sample`)

pub mod sample;

pub use sample::*;
