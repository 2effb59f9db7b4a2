use super::model::Trace;
use crate::error::{PlotError, PlotResult};

/// Rescale `values` so the minimum maps to exactly 0 and the maximum to
/// exactly 100.
pub fn relative_intensity(values: &[f64]) -> PlotResult<Vec<f64>> {
    let minimum = values
        .iter()
        .copied()
        .reduce(f64::min)
        .ok_or(PlotError::EmptyData)?;
    let shifted: Vec<f64> = values.iter().map(|&v| v - minimum).collect();
    let maximum = shifted.iter().copied().fold(0.0, f64::max);
    if maximum == 0.0 {
        return Err(PlotError::DegenerateRange);
    }
    Ok(shifted.into_iter().map(|v| v / maximum * 100.0).collect())
}

/// A single point reported in the peak summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    pub mass: f64,
    pub intensity: f64,
}

/// The `n` most intense points of `trace`, most intense first. Equal
/// intensities list the later point first.
pub fn most_intense(trace: &Trace, n: usize) -> Vec<Peak> {
    let mut ranked: Vec<(usize, Peak)> = trace
        .x()
        .iter()
        .zip(trace.y())
        .map(|(&mass, &intensity)| Peak { mass, intensity })
        .enumerate()
        .collect();
    ranked.sort_by(|(ia, a), (ib, b)| {
        b.intensity.total_cmp(&a.intensity).then(ib.cmp(ia))
    });
    ranked.into_iter().take(n).map(|(_, peak)| peak).collect()
}

/// Text block printed by the ion-series command.
pub fn format_peak_summary(peaks: &[Peak]) -> String {
    let rule = "-".repeat(30);
    let mut out = format!("{rule}\nMost Intense Peaks:\n{rule}\n");
    for peak in peaks {
        out.push_str(&format!(
            "Mass: {:?}   Intensity: {:.1}\n",
            peak.mass, peak.intensity
        ));
    }
    out.push_str(&rule);
    out
}
