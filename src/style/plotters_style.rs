//! Plotters adapters for a resolved `PlotStyle`.
//!
//! Sizes in a style sheet are in points; Plotters wants pixels. The
//! conversion uses the sheet's `figure.dpi`.

use plotters::prelude::*;

use crate::style::color::Rgb;
use crate::style::plot_style::PlotStyle;

impl From<Rgb> for RGBColor {
    fn from(c: Rgb) -> Self {
        RGBColor(c.0, c.1, c.2)
    }
}

impl PlotStyle {
    /// Points to whole pixels, never below one.
    pub fn points_to_px(&self, points: f64) -> u32 {
        let px = (points * self.dpi / 72.0).round();
        if px.is_finite() && px >= 1.0 { px as u32 } else { 1 }
    }

    /// Figure size in pixels, as Plotters backends take it.
    pub fn figure_px(&self) -> (u32, u32) {
        let (w, h) = self.figure_size;
        ((w * self.dpi).round().max(1.0) as u32, (h * self.dpi).round().max(1.0) as u32)
    }

    pub fn series_color(&self, i: usize) -> RGBColor {
        self.color(i).into()
    }

    /// Line style for the `i`-th fitted curve.
    pub fn series_style(&self, i: usize) -> ShapeStyle {
        ShapeStyle {
            color: self.series_color(i).to_rgba(),
            filled: false,
            stroke_width: self.points_to_px(self.line_width),
        }
    }

    /// Filled marker style for the `i`-th data series.
    pub fn marker_style(&self, i: usize) -> ShapeStyle {
        ShapeStyle {
            color: self.series_color(i).to_rgba(),
            filled: true,
            stroke_width: self.points_to_px(self.marker_edge_width),
        }
    }

    /// Marker radius in pixels (`lines.markersize` is a diameter).
    pub fn marker_radius(&self) -> u32 {
        self.points_to_px(self.marker_size / 2.0)
    }

    pub fn axes_style(&self) -> ShapeStyle {
        ShapeStyle {
            color: RGBColor::from(self.edge_color).to_rgba(),
            filled: false,
            stroke_width: self.points_to_px(self.axes_line_width),
        }
    }

    pub fn background(&self) -> RGBColor {
        self.face_color.into()
    }

    pub fn font(&self) -> FontDesc<'_> {
        (self.font_family.as_str(), self.font_size).into_font()
    }
}
