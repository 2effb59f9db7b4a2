//! Data layer: trace model, line formats, parsing and normalisation.
//!
//! Architecture:
//! ```text
//!  .txt / .csv export
//!        │
//!        ▼
//!   ┌──────────┐   LineFormat (fields, skip rule,
//!   │  loader   │ ◄─ header lines, encoding)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  Trace    │  x, y, optional fit
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ normalize  │  0–100 relative intensity (mass spec only)
//!   └───────────┘
//! ```

pub mod format;
pub mod loader;
pub mod model;
pub mod normalize;
