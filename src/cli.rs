use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Overlay biolayer interferometry sensorgrams (time, signal, fit).
    Bli(BliArgs),
    /// Plot a raw mass spectrum with scientific intensity labels.
    MassSpectrum(MassSpectrumArgs),
    /// Plot a mass spectrum on a relative intensity scale and report its
    /// most intense peaks.
    IonSeries(IonSeriesArgs),
    /// Plot a size-exclusion chromatography UV trace.
    Sec(SecArgs),
}

/// Options shared by every figure.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Figure title.
    #[arg(long, default_value = "")]
    pub title: String,

    /// Lower x limit (each command has its own default).
    #[arg(long, allow_hyphen_values = true)]
    pub xmin: Option<f64>,

    /// Upper x limit, automatic when omitted.
    #[arg(long, allow_hyphen_values = true)]
    pub xmax: Option<f64>,

    /// Lower y limit (each command has its own default).
    #[arg(long, allow_hyphen_values = true)]
    pub ymin: Option<f64>,

    /// Upper y limit (each command has its own default).
    #[arg(long, allow_hyphen_values = true)]
    pub ymax: Option<f64>,

    /// JSON file overriding the default plot style.
    #[arg(long)]
    pub style: Option<PathBuf>,

    /// Write the plotted series to this CSV file.
    #[arg(long)]
    pub export_csv: Option<PathBuf>,

    /// Build (and export) the figure without opening the viewer.
    #[arg(long)]
    pub no_show: bool,
}

#[derive(ClapArgs, Debug)]
pub struct BliArgs {
    /// Sensorgram exports; a file picker opens when none are given.
    pub files: Vec<PathBuf>,

    /// Legend label per file, in order. Spaces become line breaks.
    #[arg(short, long = "label")]
    pub labels: Vec<String>,

    /// Palette index per file, in order (defaults to the file position).
    #[arg(short, long = "color")]
    pub colors: Vec<usize>,

    /// Position of a file whose fit column should be drawn (repeatable).
    #[arg(long = "fit")]
    pub fits: Vec<usize>,

    /// Keep the recorded time values instead of starting every trace at 0.
    #[arg(long)]
    pub no_zero_time: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(ClapArgs, Debug)]
pub struct MassSpectrumArgs {
    /// Peak list export; a file picker opens when omitted.
    pub file: Option<PathBuf>,

    /// Line colour, CSS name or #rrggbb.
    #[arg(long, default_value = "red")]
    pub color: String,

    #[arg(long, default_value = "Mass (Da)")]
    pub xlabel: String,

    #[arg(long, default_value = "ion intensity")]
    pub ylabel: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(ClapArgs, Debug)]
pub struct IonSeriesArgs {
    /// Peak list export; a file picker opens when omitted.
    pub file: Option<PathBuf>,

    /// Line colour, CSS name or #rrggbb.
    #[arg(long, default_value = "red")]
    pub color: String,

    /// Maximum number of x tick intervals.
    #[arg(long, default_value_t = 3)]
    pub xticks: usize,

    /// Maximum number of y tick intervals.
    #[arg(long, default_value_t = 2)]
    pub yticks: usize,

    /// How many of the most intense peaks to report.
    #[arg(long, default_value_t = 1)]
    pub npeaks: usize,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(ClapArgs, Debug)]
pub struct SecArgs {
    /// UTF-16 chromatogram export; a file picker opens when omitted.
    pub file: Option<PathBuf>,

    /// Line colour, CSS name or #rrggbb.
    #[arg(long, default_value = "black")]
    pub color: String,

    #[command(flatten)]
    pub common: CommonArgs,
}
