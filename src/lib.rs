//! Annotated line charts for biolayer interferometry, mass-spectrometry and
//! size-exclusion chromatography exports.
//!
//! ```text
//!  file ──► data::loader ──► data::normalize ──► figure ──► app (viewer)
//!            (LineFormat)      (mass spec only)    │   └──► export (CSV / PNG)
//!                                                  └── axis (ticks, labels)
//! ```

pub mod app;
pub mod axis;
pub mod cli;
pub mod color;
pub mod commands;
pub mod data;
pub mod error;
pub mod export;
pub mod figure;
pub mod state;
pub mod style;
pub mod ui;

pub use error::{PlotError, PlotResult};
