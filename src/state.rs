use std::path::{Path, PathBuf};

use crate::export;
use crate::figure::Figure;
use crate::style::PlotStyle;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// Everything the viewer shows, independent of rendering.
pub struct ViewerState {
    /// The figure on display. Never changes during a session.
    pub figure: Figure,

    pub style: PlotStyle,

    /// Snap the plot back to the figure's axis ranges on the next frame.
    pub reset_view: bool,

    /// Destination of a requested screenshot, written once the frame arrives.
    pub pending_png: Option<PathBuf>,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl ViewerState {
    pub fn new(figure: Figure, style: PlotStyle) -> Self {
        Self {
            figure,
            style,
            reset_view: true,
            pending_png: None,
            status_message: None,
        }
    }

    pub fn request_reset(&mut self) {
        self.reset_view = true;
    }

    /// Remember where the next screenshot should go.
    pub fn request_png(&mut self, path: PathBuf) {
        self.pending_png = Some(path);
    }

    pub fn export_csv(&mut self, path: &Path) {
        match export::save_series_csv(&self.figure, path) {
            Ok(()) => self.status_message = Some(format!("Exported {}", path.display())),
            Err(e) => {
                log::error!("CSV export failed: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Write a captured frame to the pending PNG path, if any.
    pub fn complete_png(&mut self, image: &eframe::egui::ColorImage) {
        let Some(path) = self.pending_png.take() else {
            return;
        };
        match export::save_png(image, &path) {
            Ok(()) => self.status_message = Some(format!("Saved {}", path.display())),
            Err(e) => {
                log::error!("PNG export failed: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
