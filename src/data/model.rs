use crate::error::{PlotError, PlotResult};

// ---------------------------------------------------------------------------
// Trace – one instrument run read from one file
// ---------------------------------------------------------------------------

/// An ordered (x, y) dataset with an optional per-point fit value.
///
/// Traces are never mutated in place; transforms such as
/// [`Trace::zeroed_time`] return a new trace.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trace {
    x: Vec<f64>,
    y: Vec<f64>,
    fit: Option<Vec<f64>>,
}

impl Trace {
    /// Build a two-column trace. `x` and `y` must have the same length.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        debug_assert_eq!(x.len(), y.len());
        Trace { x, y, fit: None }
    }

    /// Build a three-column trace (time, signal, fit).
    pub fn with_fit(x: Vec<f64>, y: Vec<f64>, fit: Vec<f64>) -> Self {
        debug_assert_eq!(x.len(), y.len());
        debug_assert_eq!(x.len(), fit.len());
        Trace {
            x,
            y,
            fit: Some(fit),
        }
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn fit(&self) -> Option<&[f64]> {
        self.fit.as_deref()
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the trace has no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Shift x so the first value becomes exactly zero.
    pub fn zeroed_time(&self) -> PlotResult<Trace> {
        let origin = *self.x.first().ok_or(PlotError::EmptyData)?;
        Ok(Trace {
            x: self.x.iter().map(|&t| t - origin).collect(),
            y: self.y.clone(),
            fit: self.fit.clone(),
        })
    }

    /// Same x values with a replacement y sequence (e.g. after normalisation).
    pub fn with_y(&self, y: Vec<f64>) -> Trace {
        debug_assert_eq!(self.x.len(), y.len());
        Trace {
            x: self.x.clone(),
            y,
            fit: self.fit.clone(),
        }
    }

    /// `[x, y]` pairs ready for plotting.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.x.iter().zip(&self.y).map(|(&x, &y)| [x, y]).collect()
    }

    /// `[x, fit]` pairs, if the trace carries a fit column.
    pub fn fit_points(&self) -> Option<Vec<[f64; 2]>> {
        let fit = self.fit.as_ref()?;
        Some(self.x.iter().zip(fit).map(|(&x, &f)| [x, f]).collect())
    }
}

// ---------------------------------------------------------------------------
// NumericRange – an axis extent with optional bounds
// ---------------------------------------------------------------------------

/// Axis extent where `None` means "fit to the data".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumericRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        NumericRange { min, max }
    }

    /// Fill unset bounds from `data`, padding the data extent by
    /// `margin` × span on each side. With no finite data, unset bounds fall
    /// back to `(0, 1)`.
    pub fn resolve<'a>(&self, data: impl IntoIterator<Item = &'a f64>, margin: f64) -> (f64, f64) {
        if let (Some(min), Some(max)) = (self.min, self.max) {
            return (min, max);
        }
        let (lo, hi) = data
            .into_iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        let (lo, hi) = if lo > hi { (0.0, 1.0) } else { (lo, hi) };
        let pad = (hi - lo) * margin;
        (
            self.min.unwrap_or(lo - pad),
            self.max.unwrap_or(hi + pad),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_time_shifts_every_point_by_the_first_value() {
        let trace = Trace::with_fit(vec![12.5, 13.0, 20.0], vec![1.0, 2.0, 3.0], vec![0.0; 3]);
        let zeroed = trace.zeroed_time().unwrap();
        assert_eq!(zeroed.x()[0], 0.0);
        assert_eq!(zeroed.x(), &[0.0, 0.5, 7.5]);
        assert_eq!(zeroed.y(), trace.y());
        assert_eq!(zeroed.fit(), trace.fit());
    }

    #[test]
    fn zero_time_on_empty_trace_fails() {
        let err = Trace::default().zeroed_time().unwrap_err();
        assert!(matches!(err, PlotError::EmptyData));
    }

    #[test]
    fn explicit_bounds_win_over_data() {
        let range = NumericRange::new(Some(-1.0), Some(4.0));
        assert_eq!(range.resolve(&[10.0, 20.0], 0.01), (-1.0, 4.0));
    }

    #[test]
    fn auto_bounds_pad_the_data_extent() {
        let range = NumericRange::new(Some(0.0), None);
        assert_eq!(range.resolve(&[0.0, 50.0, 100.0], 0.01), (0.0, 101.0));
    }

    #[test]
    fn auto_bounds_without_data_fall_back_to_unit_range() {
        let data: [f64; 0] = [];
        assert_eq!(NumericRange::default().resolve(&data, 0.01), (0.0, 1.0));
    }
}
