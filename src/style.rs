use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Colour-blind safe palette (Wong, Nature Methods 2011).
pub const WONG: [&str; 8] = [
    "#000000", // black
    "#0072B2", // blue
    "#D55E00", // vermillion
    "#CC79A7", // reddish purple
    "#E69F00", // orange
    "#56B4E9", // sky blue
    "#009E73", // bluish green
    "#F0E442", // yellow
];

/// Shared look of every figure.
///
/// Built once (defaults or a JSON file) and handed to the viewer; nothing
/// mutates it afterwards. Every field is optional in the JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    /// Series colours, CSS names or `#rrggbb`.
    pub palette: Vec<String>,
    pub line_width: f32,
    /// Width of the zero-line drawn in place of a bottom spine.
    pub axes_line_width: f32,
    pub font_size: f32,
    pub legend_font_size: f32,
    pub title_size: f32,
    /// Window size in logical pixels (8.3 × 6.225 in at 100 px/in).
    pub window_size: [f32; 2],
    /// Padding added around auto-ranged axes, as a fraction of the data span.
    pub axis_margin: f64,
    pub legend: bool,
    pub show_grid: bool,
}

impl Default for PlotStyle {
    fn default() -> Self {
        PlotStyle {
            palette: WONG.iter().map(|c| c.to_string()).collect(),
            line_width: 1.0,
            axes_line_width: 2.0,
            font_size: 24.0,
            legend_font_size: 20.0,
            // 1.2 × font_size, the "large" title of the classic look.
            title_size: 28.8,
            window_size: [830.0, 622.5],
            axis_margin: 0.01,
            legend: true,
            show_grid: false,
        }
    }
}

impl PlotStyle {
    pub fn from_json_file(path: &Path) -> PlotResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| PlotError::io(path, e))?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> PlotResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::parse_color;

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let style = PlotStyle::from_json_str(r#"{ "line_width": 3.5, "legend": false }"#).unwrap();
        assert_eq!(style.line_width, 3.5);
        assert!(!style.legend);
        assert_eq!(style.palette.len(), WONG.len());
        assert_eq!(style.axis_margin, 0.01);
    }

    #[test]
    fn default_fonts_follow_the_classic_look() {
        let style = PlotStyle::default();
        assert_eq!(style.font_size, 24.0);
        assert_eq!(style.legend_font_size, 20.0);
        assert!(style.title_size > style.font_size);
    }

    #[test]
    fn malformed_json_is_a_style_error() {
        let err = PlotStyle::from_json_str("{ line_width: }").unwrap_err();
        assert!(matches!(err, PlotError::Style(_)));
    }

    #[test]
    fn default_palette_parses_completely() {
        let style = PlotStyle::default();
        assert!(style.palette.iter().all(|c| parse_color(c).is_some()));
    }
}
