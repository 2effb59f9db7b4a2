use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort building or exporting a figure.
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("{}:{line}: {reason}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("line formats carry two or three numeric fields, not {0}")]
    InvalidFormat(usize),

    #[error("cannot shift or normalise an empty trace")]
    EmptyData,

    #[error("all values are equal, cannot rescale to a 0-100 range")]
    DegenerateRange,

    #[error("{}: invalid text encoding: {reason}", .path.display())]
    Encoding { path: PathBuf, reason: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("style configuration error: {0}")]
    Style(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("image export error: {0}")]
    Image(#[from] image::ImageError),
}

impl PlotError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlotError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type PlotResult<T> = Result<T, PlotError>;
