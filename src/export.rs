use std::io::Write;
use std::path::Path;

use eframe::egui::ColorImage;

use crate::error::{PlotError, PlotResult};
use crate::figure::Figure;

// ---------------------------------------------------------------------------
// CSV export of plotted series
// ---------------------------------------------------------------------------

/// Write every point of every series as `series,x,y`.
pub fn write_series_csv<W: Write>(figure: &Figure, writer: W) -> PlotResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["series", "x", "y"])?;
    for series in &figure.series {
        // Legend names may carry line breaks; keep the CSV one line per row.
        let name = series.name.replace('\n', " ");
        for [x, y] in &series.points {
            let (x, y) = (x.to_string(), y.to_string());
            csv.write_record([name.as_str(), x.as_str(), y.as_str()])?;
        }
    }
    csv.flush().map_err(|e| PlotError::Csv(e.into()))?;
    Ok(())
}

pub fn save_series_csv(figure: &Figure, path: &Path) -> PlotResult<()> {
    let file = std::fs::File::create(path).map_err(|e| PlotError::io(path, e))?;
    write_series_csv(figure, file)?;
    log::info!("Wrote {} series to {}", figure.series.len(), path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// PNG export of a viewer screenshot
// ---------------------------------------------------------------------------

pub fn save_png(image: &ColorImage, path: &Path) -> PlotResult<()> {
    let [width, height] = image.size;
    let bytes: Vec<u8> = image.pixels.iter().flat_map(|c| c.to_array()).collect();
    image::save_buffer(
        path,
        &bytes,
        width as u32,
        height as u32,
        image::ExtendedColorType::Rgba8,
    )?;
    log::info!("Saved {width}x{height} figure to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use eframe::egui::Color32;
    use palette::Srgb;

    use super::*;
    use crate::axis::magnitude_ticks;
    use crate::figure::{Axis, Series, Stroke, TickLabels};

    fn figure() -> Figure {
        let axis = |label: &str| Axis {
            label: label.into(),
            min: 0.0,
            max: 1.0,
            ticks: magnitude_ticks(0.0, 1.0),
            labels: TickLabels::Plain,
        };
        let series = |name: &str, points: Vec<[f64; 2]>| Series {
            name: name.into(),
            points,
            color: Srgb::new(0, 0, 0),
            width: 1.0,
            stroke: Stroke::Solid,
        };
        Figure {
            title: String::new(),
            series: vec![
                series("Sensor\nA", vec![[0.0, 1.5], [1.0, 2.0]]),
                series("Sensor\nA Fit", vec![[0.0, 1.25]]),
            ],
            x_axis: axis("x"),
            y_axis: axis("y"),
            legend: true,
            zero_line: false,
        }
    }

    #[test]
    fn csv_has_one_row_per_point() {
        let mut out = Vec::new();
        write_series_csv(&figure(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "series,x,y",
                "Sensor A,0,1.5",
                "Sensor A,1,2",
                "Sensor A Fit,0,1.25"
            ]
        );
    }

    #[test]
    fn png_round_trips_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("figure.png");
        let image = ColorImage::new([4, 3], Color32::WHITE);
        save_png(&image, &path).unwrap();
        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 3));
    }
}
