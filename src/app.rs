use anyhow::{Result, anyhow};
use eframe::egui::{self, TextStyle};

use crate::figure::Figure;
use crate::state::ViewerState;
use crate::style::PlotStyle;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BioplotApp {
    pub state: ViewerState,
}

impl BioplotApp {
    pub fn new(figure: Figure, style: PlotStyle) -> Self {
        Self {
            state: ViewerState::new(figure, style),
        }
    }
}

impl eframe::App for BioplotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Screenshots requested from the File menu ----
        let screenshot = ctx.input(|i| {
            i.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        if let Some(image) = screenshot {
            self.state.complete_png(&image);
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::figure_plot(ui, &mut self.state);
        });
    }
}

/// Font sizes from the style; the legend uses the small text style. Everything
/// else keeps egui's defaults.
fn apply_style(ctx: &egui::Context, style: &PlotStyle) {
    ctx.style_mut(|egui_style| {
        for (text_style, font) in egui_style.text_styles.iter_mut() {
            font.size = match text_style {
                TextStyle::Heading => style.title_size,
                TextStyle::Small => style.legend_font_size,
                _ => style.font_size,
            };
        }
    });
}

/// Open a window showing `figure` and block until it is closed.
pub fn show(figure: Figure, style: PlotStyle) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(style.window_size)
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    let window_title = if figure.title.is_empty() {
        "bioplot".to_string()
    } else {
        format!("bioplot – {}", figure.title)
    };

    eframe::run_native(
        &window_title,
        options,
        Box::new(move |cc| {
            apply_style(&cc.egui_ctx, &style);
            Ok(Box::new(BioplotApp::new(figure, style)))
        }),
    )
    .map_err(|e| anyhow!("viewer failed: {e}"))
}
