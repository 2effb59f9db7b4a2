//! Per-instrument figure composition.
//!
//! A [`Figure`] is a complete, renderer-independent description of one chart:
//! the series to draw, both axes with their resolved ranges and tick sets, and
//! a few decorations. Builders here are pure; file loading happens before and
//! drawing after.

use palette::Srgb;

use crate::axis::{self, TickSet};
use crate::color::ColorCycle;
use crate::data::model::{NumericRange, Trace};
use crate::style::PlotStyle;

/// Series colours used by the BLI figures.
pub const BLI_PALETTE: [&str; 4] = ["#D81B60", "#1E88E5", "#FFC107", "#004D40"];

const EMPHASIS_WIDTH: f32 = 2.0;

// ---------------------------------------------------------------------------
// Figure model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickLabels {
    Plain,
    /// `c×10ⁿ`
    Scientific,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: TickSet,
    pub labels: TickLabels,
}

impl Axis {
    fn new(label: &str, (min, max): (f64, f64), ticks: TickSet, labels: TickLabels) -> Self {
        Axis {
            label: label.to_string(),
            min,
            max,
            ticks,
            labels,
        }
    }

    /// Text shown next to the tick at `value`.
    pub fn tick_label(&self, value: f64) -> String {
        match self.labels {
            TickLabels::Plain => self.ticks.plain_label(value),
            TickLabels::Scientific => axis::scientific_label(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub color: Srgb<u8>,
    pub width: f32,
    pub stroke: Stroke,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: bool,
    /// Draw a horizontal line at y = 0 in place of the bottom spine.
    pub zero_line: bool,
}

// ---------------------------------------------------------------------------
// Shared inputs
// ---------------------------------------------------------------------------

/// Title and requested axis extents common to every figure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotFrame {
    pub title: String,
    pub x: NumericRange,
    pub y: NumericRange,
}

fn x_values<'a>(series: &'a [Series]) -> impl Iterator<Item = &'a f64> + 'a {
    series.iter().flat_map(|s| s.points.iter().map(|p| &p[0]))
}

fn y_values<'a>(series: &'a [Series]) -> impl Iterator<Item = &'a f64> + 'a {
    series.iter().flat_map(|s| s.points.iter().map(|p| &p[1]))
}

fn series_name(label: &str) -> String {
    label.replace(' ', "\n")
}

// ---------------------------------------------------------------------------
// Biolayer interferometry
// ---------------------------------------------------------------------------

/// One sensor trace in a BLI overlay.
#[derive(Debug, Clone)]
pub struct BliInput {
    pub trace: Trace,
    pub label: String,
    /// Index into [`BLI_PALETTE`] followed by the style palette; indices past
    /// both get generated hues.
    pub color: usize,
    pub show_fit: bool,
}

/// Overlay of BLI sensorgrams with optional dashed fits.
///
/// The y axis gets power-of-ten ticks over the resolved range; the x axis
/// gets the same treatment with the tick at t = 0 removed, since the zero line
/// marks the origin.
pub fn bli_figure(inputs: &[BliInput], frame: &PlotFrame, style: &PlotStyle) -> Figure {
    // The BLI colours come first, then the shared style palette.
    let names: Vec<&str> = BLI_PALETTE
        .iter()
        .copied()
        .chain(style.palette.iter().map(String::as_str))
        .collect();
    let needed = inputs.iter().map(|i| i.color + 1).max().unwrap_or(0);
    let colors = ColorCycle::new(&names[..]).take(needed);

    let mut series = Vec::new();
    for input in inputs {
        let color = colors[input.color];
        let name = series_name(&input.label);
        series.push(Series {
            name: name.clone(),
            points: input.trace.points(),
            color,
            width: EMPHASIS_WIDTH,
            stroke: Stroke::Solid,
        });
        if input.show_fit {
            match input.trace.fit_points() {
                Some(points) => series.push(Series {
                    name: format!("{name} Fit"),
                    points,
                    color,
                    width: EMPHASIS_WIDTH,
                    stroke: Stroke::Dashed,
                }),
                None => log::warn!("Trace {:?} has no fit column", input.label),
            }
        }
    }

    let x_range = frame.x.resolve(x_values(&series), style.axis_margin);
    let y_range = frame.y.resolve(y_values(&series), style.axis_margin);
    let x_ticks = axis::magnitude_ticks(x_range.0, x_range.1).without_zero();
    let y_ticks = axis::magnitude_ticks(y_range.0, y_range.1);

    Figure {
        title: frame.title.clone(),
        series,
        x_axis: Axis::new("Time (sec)", x_range, x_ticks, TickLabels::Plain),
        y_axis: Axis::new("nm", y_range, y_ticks, TickLabels::Plain),
        legend: true,
        zero_line: true,
    }
}

// ---------------------------------------------------------------------------
// Mass spectrum (raw intensities)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct MassSpectrumOptions {
    pub name: String,
    pub color: Srgb<u8>,
    pub x_label: String,
    pub y_label: String,
}

/// Raw mass spectrum with scientific y labels.
pub fn mass_spectrum_figure(
    trace: &Trace,
    options: &MassSpectrumOptions,
    frame: &PlotFrame,
    style: &PlotStyle,
) -> Figure {
    let series = vec![Series {
        name: options.name.clone(),
        points: trace.points(),
        color: options.color,
        width: EMPHASIS_WIDTH,
        stroke: Stroke::Solid,
    }];
    let x_range = frame.x.resolve(trace.x(), style.axis_margin);
    let y_range = frame.y.resolve(trace.y(), style.axis_margin);

    Figure {
        title: frame.title.clone(),
        series,
        x_axis: Axis::new(
            &options.x_label,
            x_range,
            axis::magnitude_ticks(x_range.0, x_range.1),
            TickLabels::Plain,
        ),
        y_axis: Axis::new(
            &options.y_label,
            y_range,
            axis::magnitude_ticks(y_range.0, y_range.1),
            TickLabels::Scientific,
        ),
        legend: false,
        zero_line: false,
    }
}

// ---------------------------------------------------------------------------
// Ion series (relative intensities)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct IonSeriesOptions {
    pub name: String,
    pub color: Srgb<u8>,
    /// Maximum number of tick intervals on each axis.
    pub x_bins: usize,
    pub y_bins: usize,
}

/// Normalised mass spectrum on a 0–100 % scale with sparse ticks.
///
/// `trace` is expected to hold relative intensities already.
pub fn ion_series_figure(
    trace: &Trace,
    options: &IonSeriesOptions,
    frame: &PlotFrame,
    style: &PlotStyle,
) -> Figure {
    let series = vec![Series {
        name: options.name.clone(),
        points: trace.points(),
        color: options.color,
        width: style.line_width,
        stroke: Stroke::Solid,
    }];
    let x_range = frame.x.resolve(trace.x(), style.axis_margin);
    let y_range = frame.y.resolve(trace.y(), style.axis_margin);

    Figure {
        title: frame.title.clone(),
        series,
        x_axis: Axis::new(
            "Mass (Da)",
            x_range,
            axis::bounded_ticks(x_range.0, x_range.1, options.x_bins),
            TickLabels::Plain,
        ),
        y_axis: Axis::new(
            "Relative Intensity (%)",
            y_range,
            axis::bounded_ticks(y_range.0, y_range.1, options.y_bins),
            TickLabels::Plain,
        ),
        legend: false,
        zero_line: false,
    }
}

// ---------------------------------------------------------------------------
// Size-exclusion chromatography
// ---------------------------------------------------------------------------

/// UV trace against elution volume.
pub fn sec_figure(
    trace: &Trace,
    name: &str,
    color: Srgb<u8>,
    frame: &PlotFrame,
    style: &PlotStyle,
) -> Figure {
    let series = vec![Series {
        name: name.to_string(),
        points: trace.points(),
        color,
        width: EMPHASIS_WIDTH,
        stroke: Stroke::Solid,
    }];
    let x_range = frame.x.resolve(trace.x(), style.axis_margin);
    let y_range = frame.y.resolve(trace.y(), style.axis_margin);

    Figure {
        title: frame.title.clone(),
        series,
        x_axis: Axis::new(
            "Volume (mL)",
            x_range,
            axis::magnitude_ticks(x_range.0, x_range.1),
            TickLabels::Plain,
        ),
        y_axis: Axis::new(
            "Absorbance (mAU)",
            y_range,
            axis::magnitude_ticks(y_range.0, y_range.1),
            TickLabels::Plain,
        ),
        legend: false,
        zero_line: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bli_input(label: &str, color: usize, show_fit: bool) -> BliInput {
        BliInput {
            trace: Trace::with_fit(
                vec![0.0, 100.0, 200.0, 300.0],
                vec![0.0, 1.5, 2.2, 2.3],
                vec![0.0, 1.4, 2.1, 2.3],
            ),
            label: label.to_string(),
            color,
            show_fit,
        }
    }

    #[test]
    fn bli_overlay_with_fits() {
        let frame = PlotFrame {
            title: "IL-2R".into(),
            x: NumericRange::new(Some(0.0), Some(400.0)),
            y: NumericRange::default(),
        };
        let inputs = [bli_input("Unmodified", 0, true), bli_input("Conjugate A", 1, false)];
        let fig = bli_figure(&inputs, &frame, &PlotStyle::default());

        assert_eq!(fig.series.len(), 3);
        assert_eq!(fig.series[1].name, "Unmodified Fit");
        assert_eq!(fig.series[1].stroke, Stroke::Dashed);
        assert_eq!(fig.series[2].name, "Conjugate\nA");
        assert_eq!(fig.series[0].color, Srgb::new(0xD8, 0x1B, 0x60));
        assert_eq!(fig.series[2].color, Srgb::new(0x1E, 0x88, 0xE5));

        assert_eq!(fig.x_axis.label, "Time (sec)");
        assert_eq!(fig.x_axis.ticks.ticks(), &[100.0, 200.0, 300.0, 400.0]);
        assert!(fig.zero_line);
        assert!(fig.legend);
    }

    #[test]
    fn bli_y_ticks_cover_the_resolved_range() {
        let frame = PlotFrame {
            y: NumericRange::new(Some(-0.5), Some(2.5)),
            ..PlotFrame::default()
        };
        let fig = bli_figure(&[bli_input("A", 0, false)], &frame, &PlotStyle::default());
        assert_eq!(fig.y_axis.ticks.ticks(), &[-1.0, 0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn bli_colours_continue_into_style_palette() {
        let style = PlotStyle::default();
        let fig = bli_figure(&[bli_input("A", 5, false)], &PlotFrame::default(), &style);
        // Index 5 is the second Wong colour.
        assert_eq!(fig.series[0].color, Srgb::new(0x00, 0x72, 0xB2));

        let fig = bli_figure(&[bli_input("A", 40, false)], &PlotFrame::default(), &style);
        assert_eq!(fig.series.len(), 1);
    }

    #[test]
    fn mass_spectrum_uses_scientific_y_labels() {
        let trace = Trace::new(vec![500.0, 1000.0, 1500.0], vec![0.0, 20000.0, 30000.0]);
        let options = MassSpectrumOptions {
            name: "sample".into(),
            color: Srgb::new(255, 0, 0),
            x_label: "Mass (Da)".into(),
            y_label: "ion intensity".into(),
        };
        let frame = PlotFrame {
            x: NumericRange::new(Some(500.0), None),
            y: NumericRange::new(Some(0.0), None),
            ..PlotFrame::default()
        };
        let fig = mass_spectrum_figure(&trace, &options, &frame, &PlotStyle::default());
        assert_eq!(fig.x_axis.min, 500.0);
        assert_eq!(fig.y_axis.min, 0.0);
        assert_eq!(fig.y_axis.tick_label(30000.0), "3×10⁴");
        assert_eq!(fig.y_axis.tick_label(0.0), "0");
        assert!(!fig.legend);
    }

    #[test]
    fn ion_series_has_sparse_ticks_on_fixed_percent_axis() {
        let trace = Trace::new(vec![500.0, 1250.0, 2000.0], vec![0.0, 100.0, 40.0]);
        let options = IonSeriesOptions {
            name: "ions".into(),
            color: Srgb::new(255, 0, 0),
            x_bins: 3,
            y_bins: 2,
        };
        let frame = PlotFrame {
            x: NumericRange::new(Some(500.0), Some(2000.0)),
            y: NumericRange::new(Some(0.0), Some(100.0)),
            ..PlotFrame::default()
        };
        let fig = ion_series_figure(&trace, &options, &frame, &PlotStyle::default());
        assert_eq!(fig.y_axis.ticks.ticks(), &[0.0, 50.0, 100.0]);
        assert_eq!(fig.x_axis.ticks.ticks(), &[500.0, 1000.0, 1500.0, 2000.0]);
        assert_eq!(fig.y_axis.label, "Relative Intensity (%)");
    }

    #[test]
    fn sec_axes() {
        let trace = Trace::new(vec![0.0, 12.0, 24.0], vec![1.0, 80.0, 2.0]);
        let frame = PlotFrame {
            y: NumericRange::new(Some(0.0), None),
            ..PlotFrame::default()
        };
        let fig = sec_figure(&trace, "run", Srgb::new(0, 0, 0), &frame, &PlotStyle::default());
        assert_eq!(fig.x_axis.label, "Volume (mL)");
        assert_eq!(fig.y_axis.min, 0.0);
        assert_eq!(fig.series[0].width, 2.0);
    }
}
