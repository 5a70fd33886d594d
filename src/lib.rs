//! `fit-models` library crate.
//!
//! Analytic fit functions for lab data (peaks, oscillations, trap and Rabi
//! frequencies, step edges) plus the plot style the figures are drawn with.
//!
//! The binary (`fitm`) is a thin wrapper around this library so that:
//!
//! - the model functions can be called directly by any fitting driver
//! - core logic is testable without spawning processes

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod report;
pub mod style;
