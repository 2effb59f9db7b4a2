use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use palette::Srgb;

use crate::app;
use crate::cli::{BliArgs, CommonArgs, IonSeriesArgs, MassSpectrumArgs, SecArgs};
use crate::color::parse_color;
use crate::data::format::LineFormat;
use crate::data::loader::load_trace;
use crate::data::model::NumericRange;
use crate::data::normalize::{format_peak_summary, most_intense, relative_intensity};
use crate::export;
use crate::figure::{self, BliInput, Figure, IonSeriesOptions, MassSpectrumOptions, PlotFrame};
use crate::style::PlotStyle;

// ---------------------------------------------------------------------------
// Subcommands
// ---------------------------------------------------------------------------

/// Main function for the 'bli' subcommand.
pub fn main_bli(args: BliArgs) -> Result<()> {
    let style = load_style(&args.common)?;
    let files = if args.files.is_empty() {
        pick_files("Open BLI sensorgrams")?
    } else {
        args.files
    };

    let mut inputs = Vec::with_capacity(files.len());
    for (i, path) in files.iter().enumerate() {
        let trace = load_trace(path, &LineFormat::BLI)
            .with_context(|| format!("loading BLI trace {}", path.display()))?;
        let trace = if args.no_zero_time {
            trace
        } else {
            trace
                .zeroed_time()
                .with_context(|| format!("zeroing time axis of {}", path.display()))?
        };
        inputs.push(BliInput {
            trace,
            label: args.labels.get(i).cloned().unwrap_or_default(),
            color: args.colors.get(i).copied().unwrap_or(i),
            show_fit: args.fits.contains(&i),
        });
    }

    let frame = plot_frame(&args.common, (Some(0.0), None), (None, None));
    let figure = figure::bli_figure(&inputs, &frame, &style);
    finish(figure, style, &args.common)
}

/// Main function for the 'mass-spectrum' subcommand.
pub fn main_mass_spectrum(args: MassSpectrumArgs) -> Result<()> {
    let style = load_style(&args.common)?;
    let path = pick_file_if_missing(args.file, "Open mass spectrum")?;
    let trace = load_trace(&path, &LineFormat::MASS_SPECTRUM)
        .with_context(|| format!("loading mass spectrum {}", path.display()))?;

    let options = MassSpectrumOptions {
        name: series_name(&path),
        color: color_arg(&args.color)?,
        x_label: args.xlabel,
        y_label: args.ylabel,
    };
    let frame = plot_frame(&args.common, (Some(500.0), None), (Some(0.0), None));
    let figure = figure::mass_spectrum_figure(&trace, &options, &frame, &style);
    finish(figure, style, &args.common)
}

/// Main function for the 'ion-series' subcommand.
pub fn main_ion_series(args: IonSeriesArgs) -> Result<()> {
    let style = load_style(&args.common)?;
    let path = pick_file_if_missing(args.file, "Open ion series")?;
    let trace = load_trace(&path, &LineFormat::MASS_SPECTRUM)
        .with_context(|| format!("loading ion series {}", path.display()))?;
    let relative = relative_intensity(trace.y())
        .with_context(|| format!("normalising intensities of {}", path.display()))?;
    let trace = trace.with_y(relative);

    println!("{}", format_peak_summary(&most_intense(&trace, args.npeaks)));

    let options = IonSeriesOptions {
        name: series_name(&path),
        color: color_arg(&args.color)?,
        x_bins: args.xticks,
        y_bins: args.yticks,
    };
    let frame = plot_frame(&args.common, (None, None), (Some(0.0), Some(100.0)));
    let figure = figure::ion_series_figure(&trace, &options, &frame, &style);
    finish(figure, style, &args.common)
}

/// Main function for the 'sec' subcommand.
pub fn main_sec(args: SecArgs) -> Result<()> {
    let style = load_style(&args.common)?;
    let path = pick_file_if_missing(args.file, "Open SEC chromatogram")?;
    let trace = load_trace(&path, &LineFormat::SEC)
        .with_context(|| format!("loading chromatogram {}", path.display()))?;

    let color = color_arg(&args.color)?;
    let frame = plot_frame(&args.common, (None, None), (Some(0.0), None));
    let figure = figure::sec_figure(&trace, &series_name(&path), color, &frame, &style);
    finish(figure, style, &args.common)
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn load_style(common: &CommonArgs) -> Result<PlotStyle> {
    match &common.style {
        Some(path) => PlotStyle::from_json_file(path)
            .with_context(|| format!("reading plot style {}", path.display())),
        None => Ok(PlotStyle::default()),
    }
}

/// Each command-line limit overrides its per-command default independently.
fn plot_frame(
    common: &CommonArgs,
    x_default: (Option<f64>, Option<f64>),
    y_default: (Option<f64>, Option<f64>),
) -> PlotFrame {
    PlotFrame {
        title: common.title.clone(),
        x: NumericRange::new(common.xmin.or(x_default.0), common.xmax.or(x_default.1)),
        y: NumericRange::new(common.ymin.or(y_default.0), common.ymax.or(y_default.1)),
    }
}

fn color_arg(text: &str) -> Result<Srgb<u8>> {
    match parse_color(text) {
        Some(color) => Ok(color),
        None => bail!("Unrecognised colour {text:?}, expected a CSS name or #rrggbb"),
    }
}

fn series_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn pick_file_if_missing(path: Option<PathBuf>, title: &str) -> Result<PathBuf> {
    if let Some(path) = path {
        return Ok(path);
    }
    rfd::FileDialog::new()
        .set_title(title)
        .add_filter("Instrument exports", &["txt", "csv", "xy"])
        .pick_file()
        .context("no input file given")
}

fn pick_files(title: &str) -> Result<Vec<PathBuf>> {
    match rfd::FileDialog::new()
        .set_title(title)
        .add_filter("Instrument exports", &["txt", "csv"])
        .pick_files()
    {
        Some(files) if !files.is_empty() => Ok(files),
        _ => bail!("no input files given"),
    }
}

fn finish(figure: Figure, style: PlotStyle, common: &CommonArgs) -> Result<()> {
    if let Some(path) = &common.export_csv {
        export::save_series_csv(&figure, path)
            .with_context(|| format!("exporting series to {}", path.display()))?;
    }
    if common.no_show {
        return Ok(());
    }
    app::show(figure, style)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn command_line_limits_override_defaults() {
        let common = CommonArgs {
            xmax: Some(400.0),
            ymin: Some(-1.0),
            ..CommonArgs::default()
        };
        let frame = plot_frame(&common, (Some(0.0), None), (Some(0.0), Some(100.0)));
        assert_eq!(frame.x, NumericRange::new(Some(0.0), Some(400.0)));
        assert_eq!(frame.y, NumericRange::new(Some(-1.0), Some(100.0)));
    }

    #[test]
    fn series_name_is_file_stem() {
        assert_eq!(series_name(Path::new("/data/t1A1Results.txt")), "t1A1Results");
    }

    #[test]
    fn bad_colour_is_rejected() {
        assert!(color_arg("definitely-not-a-colour").is_err());
        assert_eq!(color_arg("black").unwrap(), Srgb::new(0, 0, 0));
    }

    #[test]
    fn ion_series_headless_run_exports_relative_intensities() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("peaks.txt");
        let output = dir.path().join("out.csv");
        let mut file = std::fs::File::create(&input).unwrap();
        writeln!(file, "500 10\n600 30\n700 20").unwrap();

        main_ion_series(IonSeriesArgs {
            file: Some(input),
            color: "red".into(),
            xticks: 3,
            yticks: 2,
            npeaks: 2,
            common: CommonArgs {
                export_csv: Some(output.clone()),
                no_show: true,
                ..CommonArgs::default()
            },
        })
        .unwrap();

        let csv = std::fs::read_to_string(output).unwrap();
        assert!(csv.contains("peaks,500,0"), "{csv}");
        assert!(csv.contains("peaks,600,100"), "{csv}");
        assert!(csv.contains("peaks,700,50"), "{csv}");
    }

    #[test]
    fn ion_series_with_constant_intensities_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("flat.txt");
        std::fs::write(&input, "500 5\n600 5\n").unwrap();
        let err = main_ion_series(IonSeriesArgs {
            file: Some(input),
            color: "red".into(),
            xticks: 3,
            yticks: 2,
            npeaks: 1,
            common: CommonArgs {
                no_show: true,
                ..CommonArgs::default()
            },
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("all values are equal"));
    }
}
