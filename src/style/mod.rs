//! Plot styling.
//!
//! - `sheet`: the raw `key: value` format and the bundled sheet
//! - `color`: named and hex colors
//! - `plot_style`: typed settings resolved from a sheet
//! - `plotters_style`: conversion to Plotters colors, shape styles and fonts

pub mod color;
pub mod plot_style;
pub mod plotters_style;
pub mod sheet;

pub use color::Rgb;
pub use plot_style::{DashPatterns, MarkerShape, PlotStyle, TickDirection, TickStyle};
pub use sheet::{BUILTIN_STYLE, StyleSheet};
