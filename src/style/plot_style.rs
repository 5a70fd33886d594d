//! Typed view over a style sheet.
//!
//! `PlotStyle` pulls the settings a figure builder actually needs out of the
//! raw `key: value` entries. Keys that are absent fall back to the plotting
//! library's own defaults; keys that are present but unparsable are errors,
//! so a typo in a sheet is caught instead of silently ignored.

use serde::{Deserialize, Serialize};

use crate::error::StyleError;
use crate::style::color::Rgb;
use crate::style::sheet::StyleSheet;

/// Marker glyphs used in the marker cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerShape {
    Point,
    Circle,
    Square,
    TriangleUp,
    TriangleDown,
    Diamond,
    Pentagon,
    Hexagon,
    Star,
    Plus,
    Cross,
}

impl MarkerShape {
    /// Parse a single marker glyph (`o`, `s`, `^`, ...).
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        let shape = match glyph.trim() {
            "." => MarkerShape::Point,
            "o" => MarkerShape::Circle,
            "s" => MarkerShape::Square,
            "^" => MarkerShape::TriangleUp,
            "v" => MarkerShape::TriangleDown,
            "D" | "d" => MarkerShape::Diamond,
            "p" => MarkerShape::Pentagon,
            "h" | "H" => MarkerShape::Hexagon,
            "*" => MarkerShape::Star,
            "+" => MarkerShape::Plus,
            "x" | "X" => MarkerShape::Cross,
            _ => return None,
        };
        Some(shape)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickDirection {
    In,
    Out,
    InOut,
}

/// On/off segment lengths, in units of the line width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashPatterns {
    pub dashed: Vec<f64>,
    pub dashdot: Vec<f64>,
    pub dotted: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickStyle {
    pub direction: TickDirection,
    pub major_size: f64,
    pub minor_size: f64,
    pub major_width: f64,
    pub minor_visible: bool,
    /// Mirror ticks on the top and right axes.
    pub mirror: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotStyle {
    pub figure_size: (f64, f64),
    pub dpi: f64,
    pub font_family: String,
    pub font_size: f64,
    pub face_color: Rgb,
    pub edge_color: Rgb,
    pub axes_line_width: f64,
    pub colors: Vec<Rgb>,
    pub markers: Vec<MarkerShape>,
    pub line_width: f64,
    pub marker_size: f64,
    pub marker_edge_width: f64,
    pub dashes: DashPatterns,
    pub ticks: TickStyle,
    pub errorbar_capsize: f64,
    pub legend_frame: bool,
}

impl Default for PlotStyle {
    /// The plotting library's stock settings.
    fn default() -> Self {
        PlotStyle {
            figure_size: (6.4, 4.8),
            dpi: 100.0,
            font_family: "sans-serif".to_string(),
            font_size: 10.0,
            face_color: Rgb(255, 255, 255),
            edge_color: Rgb(0, 0, 0),
            axes_line_width: 0.8,
            colors: vec![
                Rgb(0x1f, 0x77, 0xb4),
                Rgb(0xff, 0x7f, 0x0e),
                Rgb(0x2c, 0xa0, 0x2c),
                Rgb(0xd6, 0x27, 0x28),
                Rgb(0x94, 0x67, 0xbd),
                Rgb(0x8c, 0x56, 0x4b),
                Rgb(0xe3, 0x77, 0xc2),
                Rgb(0x7f, 0x7f, 0x7f),
                Rgb(0xbc, 0xbd, 0x22),
                Rgb(0x17, 0xbe, 0xcf),
            ],
            markers: Vec::new(),
            line_width: 1.5,
            marker_size: 6.0,
            marker_edge_width: 1.0,
            dashes: DashPatterns {
                dashed: vec![3.7, 1.6],
                dashdot: vec![6.4, 1.6, 1.0, 1.6],
                dotted: vec![1.0, 1.65],
            },
            ticks: TickStyle {
                direction: TickDirection::Out,
                major_size: 3.5,
                minor_size: 2.0,
                major_width: 0.8,
                minor_visible: false,
                mirror: false,
            },
            errorbar_capsize: 0.0,
            legend_frame: true,
        }
    }
}

impl PlotStyle {
    /// The bundled sheet, resolved.
    pub fn builtin() -> Result<Self, StyleError> {
        Self::from_sheet(&StyleSheet::builtin()?)
    }

    /// Resolve a sheet on top of the library defaults.
    pub fn from_sheet(sheet: &StyleSheet) -> Result<Self, StyleError> {
        let mut s = PlotStyle::default();

        if let Some(v) = sheet.get("figure.figsize") {
            match number_list("figure.figsize", v)?.as_slice() {
                [w, h] => s.figure_size = (*w, *h),
                _ => return Err(invalid("figure.figsize", v)),
            }
        }
        read_number(sheet, "figure.dpi", &mut s.dpi)?;
        if let Some(v) = sheet.get("font.family") {
            s.font_family = v.trim().to_string();
        }
        read_number(sheet, "font.size", &mut s.font_size)?;
        read_color(sheet, "axes.facecolor", &mut s.face_color)?;
        read_color(sheet, "axes.edgecolor", &mut s.edge_color)?;
        read_number(sheet, "axes.linewidth", &mut s.axes_line_width)?;

        if let Some(v) = sheet.get("axes.prop_cycle") {
            let cycle = parse_cycler(v).ok_or_else(|| invalid("axes.prop_cycle", v))?;
            for (prop, values) in cycle {
                match prop.as_str() {
                    "color" => {
                        s.colors = values.iter().map(|c| Rgb::parse(c)).collect::<Result<_, _>>()?;
                    }
                    "marker" => {
                        s.markers = values
                            .iter()
                            .map(|m| MarkerShape::from_glyph(m).ok_or_else(|| invalid("axes.prop_cycle", m)))
                            .collect::<Result<_, _>>()?;
                    }
                    _ => {}
                }
            }
        }

        read_number(sheet, "lines.linewidth", &mut s.line_width)?;
        read_number(sheet, "lines.markersize", &mut s.marker_size)?;
        read_number(sheet, "lines.markeredgewidth", &mut s.marker_edge_width)?;
        read_numbers(sheet, "lines.dashed_pattern", &mut s.dashes.dashed)?;
        read_numbers(sheet, "lines.dashdot_pattern", &mut s.dashes.dashdot)?;
        read_numbers(sheet, "lines.dotted_pattern", &mut s.dashes.dotted)?;

        if let Some(v) = sheet.get("xtick.direction") {
            s.ticks.direction = match v.trim() {
                "in" => TickDirection::In,
                "out" => TickDirection::Out,
                "inout" => TickDirection::InOut,
                _ => return Err(invalid("xtick.direction", v)),
            };
        }
        read_number(sheet, "xtick.major.size", &mut s.ticks.major_size)?;
        read_number(sheet, "xtick.minor.size", &mut s.ticks.minor_size)?;
        read_number(sheet, "xtick.major.width", &mut s.ticks.major_width)?;
        read_bool(sheet, "xtick.minor.visible", &mut s.ticks.minor_visible)?;
        read_bool(sheet, "xtick.top", &mut s.ticks.mirror)?;

        read_number(sheet, "errorbar.capsize", &mut s.errorbar_capsize)?;
        read_bool(sheet, "legend.frameon", &mut s.legend_frame)?;

        Ok(s)
    }

    /// Color for the `i`-th data series, cycling.
    pub fn color(&self, i: usize) -> Rgb {
        if self.colors.is_empty() {
            return self.edge_color;
        }
        self.colors[i % self.colors.len()]
    }

    /// Marker for the `i`-th data series, cycling. `None` if no marker cycle.
    pub fn marker(&self, i: usize) -> Option<MarkerShape> {
        if self.markers.is_empty() {
            return None;
        }
        Some(self.markers[i % self.markers.len()])
    }
}

fn invalid(key: &str, value: &str) -> StyleError {
    StyleError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn read_number(sheet: &StyleSheet, key: &str, out: &mut f64) -> Result<(), StyleError> {
    if let Some(v) = sheet.get(key) {
        *out = v.trim().parse::<f64>().map_err(|_| invalid(key, v))?;
    }
    Ok(())
}

fn read_numbers(sheet: &StyleSheet, key: &str, out: &mut Vec<f64>) -> Result<(), StyleError> {
    if let Some(v) = sheet.get(key) {
        *out = number_list(key, v)?;
    }
    Ok(())
}

fn read_color(sheet: &StyleSheet, key: &str, out: &mut Rgb) -> Result<(), StyleError> {
    if let Some(v) = sheet.get(key) {
        *out = Rgb::parse(v)?;
    }
    Ok(())
}

fn read_bool(sheet: &StyleSheet, key: &str, out: &mut bool) -> Result<(), StyleError> {
    if let Some(v) = sheet.get(key) {
        *out = match v.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => true,
            "false" | "no" | "off" | "0" => false,
            _ => return Err(invalid(key, v)),
        };
    }
    Ok(())
}

fn number_list(key: &str, value: &str) -> Result<Vec<f64>, StyleError> {
    value
        .split(',')
        .map(|part| part.trim().parse::<f64>().map_err(|_| invalid(key, value)))
        .collect()
}

/// Parse a cycler expression into `[(prop, [items])]`. Items have their
/// quotes removed. Both call forms are accepted and may be chained with `+`:
/// `cycler('color', [a, b]) + cycler('marker', [c, d])` and
/// `cycler(color=[a, b], marker=[c, d])`.
fn parse_cycler(expr: &str) -> Option<Vec<(String, Vec<String>)>> {
    let mut out = Vec::new();
    let mut rest = expr.trim();
    while !rest.is_empty() {
        let body = rest.strip_prefix("cycler(")?;
        let close = body.find(')')?;
        let (inner, tail) = (body[..close].trim(), &body[close + 1..]);

        if inner.starts_with(|c: char| c == '\'' || c == '"') {
            let (prop, list) = inner.split_once(',')?;
            out.push((unquote_item(prop), parse_items(list)?));
        } else {
            let mut args = inner;
            while !args.is_empty() {
                let (name, after) = args.split_once('=')?;
                let name = name.trim();
                if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                    return None;
                }
                let after = after.trim_start();
                let end = after.find(']')?;
                out.push((name.to_string(), parse_items(&after[..=end])?));
                let next = after[end + 1..].trim_start();
                args = next.strip_prefix(',').unwrap_or(next).trim_start();
            }
        }

        rest = tail.trim();
        if let Some(next) = rest.strip_prefix('+') {
            rest = next.trim();
        } else if !rest.is_empty() {
            return None;
        }
    }
    if out.is_empty() { None } else { Some(out) }
}

/// `[a, 'b', "c"]` -> `["a", "b", "c"]`
fn parse_items(list: &str) -> Option<Vec<String>> {
    let list = list.trim().strip_prefix('[')?.strip_suffix(']')?;
    Some(
        list.split(',')
            .map(unquote_item)
            .filter(|item| !item.is_empty())
            .collect(),
    )
}

fn unquote_item(item: &str) -> String {
    item.trim().trim_matches(|c: char| c == '\'' || c == '"').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_style_resolves() {
        let s = PlotStyle::builtin().unwrap();
        assert_eq!(s.figure_size, (6.0, 4.0));
        assert_eq!(s.font_size, 12.0);
        assert_eq!(s.colors.len(), 8);
        assert_eq!(s.colors[0], Rgb(0, 0, 255));
        assert_eq!(s.colors[1], Rgb(255, 0, 0));
        assert_eq!(s.markers.len(), 8);
        assert_eq!(s.markers[0], MarkerShape::Circle);
        assert_eq!(s.markers[3], MarkerShape::Diamond);
        assert_eq!(s.ticks.direction, TickDirection::In);
        assert!(s.ticks.minor_visible);
        assert!(s.ticks.mirror);
        assert!(!s.legend_frame);
        assert_eq!(s.dashes.dashdot, vec![6.4, 1.6, 1.0, 1.6]);
        assert_eq!(s.errorbar_capsize, 2.0);
    }

    #[test]
    fn empty_sheet_gives_library_defaults() {
        let s = PlotStyle::from_sheet(&StyleSheet::default()).unwrap();
        assert_eq!(s, PlotStyle::default());
        assert_eq!(s.marker(0), None);
    }

    #[test]
    fn cycles_wrap_around() {
        let s = PlotStyle::builtin().unwrap();
        assert_eq!(s.color(8), s.color(0));
        assert_eq!(s.marker(9), Some(MarkerShape::Square));
    }

    #[test]
    fn bad_values_name_the_key() {
        let sheet = StyleSheet::parse("lines.linewidth: thick\n").unwrap();
        let err = PlotStyle::from_sheet(&sheet).unwrap_err();
        assert_eq!(
            err,
            StyleError::InvalidValue {
                key: "lines.linewidth".to_string(),
                value: "thick".to_string()
            }
        );

        let sheet = StyleSheet::parse("axes.facecolor: not-a-color\n").unwrap();
        assert!(matches!(
            PlotStyle::from_sheet(&sheet),
            Err(StyleError::UnknownColor(_))
        ));

        let sheet = StyleSheet::parse("figure.figsize: 1, 2, 3\n").unwrap();
        assert!(PlotStyle::from_sheet(&sheet).is_err());
    }

    #[test]
    fn cycler_expression() {
        let c = parse_cycler("cycler('color', ['r', 'g']) + cycler(\"marker\", ['o'])").unwrap();
        assert_eq!(
            c,
            vec![
                ("color".to_string(), vec!["r".to_string(), "g".to_string()]),
                ("marker".to_string(), vec!["o".to_string()]),
            ]
        );
        assert!(parse_cycler("cycler('color', ['r']) * 2").is_none());
        assert!(parse_cycler("cycler(=['r'])").is_none());
        assert!(parse_cycler("").is_none());
    }

    #[test]
    fn keyword_cycler_expression() {
        let c = parse_cycler("cycler(color=['0000ff', 'ff0000'], marker=['o', 's'])").unwrap();
        assert_eq!(
            c,
            vec![
                ("color".to_string(), vec!["0000ff".to_string(), "ff0000".to_string()]),
                ("marker".to_string(), vec!["o".to_string(), "s".to_string()]),
            ]
        );

        let sheet = StyleSheet::parse("axes.prop_cycle: cycler(color=['r', 'g', 'b']) + cycler('marker', ['^'])\n").unwrap();
        let s = PlotStyle::from_sheet(&sheet).unwrap();
        assert_eq!(s.colors, vec![Rgb(255, 0, 0), Rgb(0, 128, 0), Rgb(0, 0, 255)]);
        assert_eq!(s.markers, vec![MarkerShape::TriangleUp]);
    }
}
