use eframe::egui::{Color32, RichText, TextStyle, Ui};
use egui_plot::{GridMark, HLine, Legend, Line, LineStyle, Plot, PlotBounds, PlotPoints};
use palette::Srgb;

use crate::figure::{Axis, Stroke};
use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Figure plot (central panel)
// ---------------------------------------------------------------------------

fn to_color32(c: Srgb<u8>) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}

/// Fixed tick marks for an axis. `step_size` drives label spacing in
/// egui_plot, so a single-tick axis reports its whole span instead of 0.
fn grid_marks(axis: &Axis) -> Vec<GridMark> {
    let step_size = if axis.ticks.step() > 0.0 {
        axis.ticks.step()
    } else {
        (axis.max - axis.min).abs().max(1.0)
    };
    axis.ticks
        .ticks()
        .iter()
        .map(|&value| GridMark { value, step_size })
        .collect()
}

/// Render the figure in the central panel.
pub fn figure_plot(ui: &mut Ui, state: &mut ViewerState) {
    let reset = std::mem::take(&mut state.reset_view);
    let figure = &state.figure;
    let style = &state.style;

    if !figure.title.is_empty() {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(RichText::new(&figure.title).strong().size(style.title_size));
        });
    }

    let x_marks = grid_marks(&figure.x_axis);
    let y_marks = grid_marks(&figure.y_axis);
    let x_axis = figure.x_axis.clone();
    let y_axis = figure.y_axis.clone();

    let mut plot = Plot::new("figure_plot")
        .x_axis_label(figure.x_axis.label.clone())
        .y_axis_label(figure.y_axis.label.clone())
        .show_grid(style.show_grid)
        .x_grid_spacer(move |_input| x_marks.clone())
        .y_grid_spacer(move |_input| y_marks.clone())
        .x_axis_formatter(move |mark, _range| x_axis.tick_label(mark.value))
        .y_axis_formatter(move |mark, _range| y_axis.tick_label(mark.value))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if figure.legend && style.legend {
        plot = plot.legend(Legend::default().text_style(TextStyle::Small));
    }

    plot.show(ui, |plot_ui| {
        if reset {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [figure.x_axis.min, figure.y_axis.min],
                [figure.x_axis.max, figure.y_axis.max],
            ));
        }

        for series in &figure.series {
            let mut line = Line::new(PlotPoints::from(series.points.clone()))
                .name(&series.name)
                .color(to_color32(series.color))
                .width(series.width);
            if series.stroke == Stroke::Dashed {
                line = line.style(LineStyle::dashed_loose());
            }
            plot_ui.line(line);
        }

        if figure.zero_line {
            plot_ui.hline(
                HLine::new(0.0)
                    .color(Color32::BLACK)
                    .width(style.axes_line_width),
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::magnitude_ticks;
    use crate::figure::TickLabels;

    fn axis(min: f64, max: f64) -> Axis {
        Axis {
            label: "x".into(),
            min,
            max,
            ticks: magnitude_ticks(min, max),
            labels: TickLabels::Plain,
        }
    }

    #[test]
    fn marks_follow_tick_set() {
        let marks = grid_marks(&axis(0.0, 23.0));
        let values: Vec<f64> = marks.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![0.0, 10.0, 20.0, 30.0]);
        assert!(marks.iter().all(|m| m.step_size == 10.0));
    }

    #[test]
    fn single_tick_gets_a_usable_step() {
        let marks = grid_marks(&axis(3.0, 3.0));
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].step_size, 1.0);
    }

    #[test]
    fn srgb_maps_to_color32() {
        assert_eq!(to_color32(Srgb::new(0xD8, 0x1B, 0x60)), Color32::from_rgb(0xD8, 0x1B, 0x60));
    }
}
