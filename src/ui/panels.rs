use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut ViewerState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Save PNG…").clicked() {
                save_png_dialog(ui.ctx(), state);
                ui.close_menu();
            }
            if ui.button("Export CSV…").clicked() {
                export_csv_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if ui.button("Reset view").clicked() {
            state.request_reset();
        }

        ui.separator();

        let points: usize = state.figure.series.iter().map(|s| s.points.len()).sum();
        ui.label(format!(
            "{} series, {} points",
            state.figure.series.len(),
            points
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                ui.visuals().text_color()
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

fn default_file_name(state: &ViewerState, extension: &str) -> String {
    let stem = if state.figure.title.is_empty() {
        "figure".to_string()
    } else {
        state
            .figure
            .title
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect()
    };
    format!("{stem}.{extension}")
}

/// Ask for a destination, then request a screenshot of the next frame. The
/// file is written when the frame arrives (see `BioplotApp::update`).
fn save_png_dialog(ctx: &egui::Context, state: &mut ViewerState) {
    let file = rfd::FileDialog::new()
        .set_title("Save figure")
        .set_file_name(default_file_name(state, "png"))
        .add_filter("PNG", &["png"])
        .save_file();

    if let Some(path) = file {
        state.request_png(path);
        ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
    }
}

fn export_csv_dialog(state: &mut ViewerState) {
    let file = rfd::FileDialog::new()
        .set_title("Export plotted data")
        .set_file_name(default_file_name(state, "csv"))
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        state.export_csv(&path);
    }
}
