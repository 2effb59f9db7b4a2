//! Tick placement and tick labels.
//!
//! Two locators are provided:
//! - [`magnitude_ticks`] places a tick on every multiple of the power of ten
//!   that brings the axis span into `[1, 10)`.
//! - [`bounded_ticks`] picks a round step from `{1, 2, 2.5, 5, 10} × 10^k`
//!   so that at most `nbins` intervals cover the axis.
//!
//! Ticks are generated as integer multiples of the step, so both ends of the
//! rounded range are always included.

const SNAP_TOLERANCE: f64 = 1e-9;
const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];
/// 2^53; every integer up to here is an exact f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

// ---------------------------------------------------------------------------
// TickSet
// ---------------------------------------------------------------------------

/// Ordered tick positions plus the spacing they were generated with.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSet {
    ticks: Vec<f64>,
    step: f64,
    /// Power of ten of the step.
    order: i32,
    /// Decimal places needed to print any tick exactly.
    decimals: usize,
}

impl TickSet {
    fn single(value: f64) -> Self {
        TickSet {
            ticks: vec![value],
            step: 0.0,
            order: 0,
            decimals: 0,
        }
    }

    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Drop any tick exactly at zero. Used on time axes, where the origin is
    /// drawn by the axis line instead.
    pub fn without_zero(mut self) -> Self {
        self.ticks.retain(|&t| t != 0.0);
        self
    }

    /// Plain decimal label at this tick set's precision.
    pub fn plain_label(&self, value: f64) -> String {
        if self.step == 0.0 {
            return value.to_string();
        }
        let label = format!("{:.*}", self.decimals, value);
        match label.strip_prefix('-') {
            Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
            _ => label,
        }
    }
}

// ---------------------------------------------------------------------------
// Locators
// ---------------------------------------------------------------------------

/// Order of magnitude of `span`: the `k` for which `span / 10^k` lies in
/// `[1, 10)`, except that a span of exactly 1 (or any power of ten below it)
/// maps one order lower so the quotient stays above 1.
///
/// `span` must be finite and positive.
pub fn order_of_magnitude(span: f64) -> i32 {
    debug_assert!(span.is_finite() && span > 0.0);
    let mut order = 0;
    if span >= 10.0 {
        while scale(span, order) >= 10.0 {
            order += 1;
        }
    }
    if span <= 1.0 {
        while scale(span, order) <= 1.0 {
            order -= 1;
        }
    }
    order
}

/// Ticks on every multiple of `10^order` from `min` rounded down to `max`
/// rounded up.
///
/// A zero-width or non-finite range yields a single tick at `min`.
pub fn magnitude_ticks(min: f64, max: f64) -> TickSet {
    let (lo, hi) = (min.min(max), min.max(max));
    let span = hi - lo;
    if !(span.is_finite() && span > 0.0) {
        log::debug!("degenerate axis range ({min}, {max}), using a single tick");
        return TickSet::single(min);
    }

    let order = order_of_magnitude(span);
    let Some((first, last)) = multiples(scale(lo, order), scale(hi, order)) else {
        log::debug!("axis ({min}, {max}) out of representable range, using a single tick");
        return TickSet::single(min);
    };
    let ticks = (first..=last).map(|k| unscale(k as f64, order)).collect();
    log::debug!("axis ({lo}, {hi}): order {order}, tick multiples {first}..={last}");

    TickSet {
        ticks,
        step: unscale(1.0, order),
        order,
        decimals: order.min(0).unsigned_abs() as usize,
    }
}

/// At most `nbins` intervals of a round step covering `[min, max]`.
///
/// A zero-width or non-finite range, or `nbins == 0`, yields a single tick at
/// `min`.
pub fn bounded_ticks(min: f64, max: f64, nbins: usize) -> TickSet {
    let (lo, hi) = (min.min(max), min.max(max));
    let span = hi - lo;
    if !(span.is_finite() && span > 0.0) || nbins == 0 {
        return TickSet::single(min);
    }

    let raw_step = span / nbins as f64;
    let mut order = raw_step.log10().floor() as i32;
    loop {
        for &nice in &NICE_STEPS {
            let step = unscale(nice, order);
            if step < raw_step * (1.0 - SNAP_TOLERANCE) {
                continue;
            }
            let Some((first, last)) = multiples(lo / step, hi / step) else {
                return TickSet::single(min);
            };
            if (last - first) as usize <= nbins {
                let tick_order = if nice == 10.0 { order + 1 } else { order };
                // 2.5 × 10^k needs one more decimal than its order suggests.
                let decimals =
                    tick_order.min(0).unsigned_abs() as usize + usize::from(nice == 2.5);
                return TickSet {
                    ticks: (first..=last)
                        .map(|k| unscale(k as f64 * nice, order))
                        .collect(),
                    step,
                    order: tick_order,
                    decimals,
                };
            }
        }
        order += 1;
    }
}

/// `value / 10^order`, multiplying for negative orders so decimal steps such
/// as 0.1 divide exactly.
fn scale(value: f64, order: i32) -> f64 {
    if order >= 0 {
        value / 10f64.powi(order)
    } else {
        value * 10f64.powi(-order)
    }
}

/// `value × 10^order`, dividing for negative orders so `k / 10` is the
/// closest double to the decimal literal.
fn unscale(value: f64, order: i32) -> f64 {
    if order >= 0 {
        value * 10f64.powi(order)
    } else {
        value / 10f64.powi(-order)
    }
}

/// First and last integer multiple covering `[lo, hi]`, both given in step
/// units. `None` when either bound is not finite or beyond exact integers.
fn multiples(lo: f64, hi: f64) -> Option<(i64, i64)> {
    let (first, last) = (snap(lo).floor(), snap(hi).ceil());
    if first.abs() <= MAX_EXACT_INTEGER && last.abs() <= MAX_EXACT_INTEGER {
        Some((first as i64, last as i64))
    } else {
        None
    }
}

/// Snap values within floating-point noise of an integer onto it.
fn snap(value: f64) -> f64 {
    let rounded = value.round();
    if (value - rounded).abs() <= SNAP_TOLERANCE * rounded.abs().max(1.0) {
        rounded
    } else {
        value
    }
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// `c×10ⁿ` with an integer coefficient; zero prints as `0`.
pub fn scientific_label(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let mut exponent = value.abs().log10().floor() as i32;
    let mut coeff = value / 10f64.powi(exponent);
    // log10 can land one off either side of an exact power of ten.
    if coeff.abs() >= 10.0 {
        exponent += 1;
        coeff /= 10.0;
    } else if coeff.abs() < 1.0 {
        exponent -= 1;
        coeff *= 10.0;
    }
    format!("{coeff:.0}×10{}", superscript(exponent))
}

fn superscript(n: i32) -> String {
    n.to_string()
        .chars()
        .map(|c| match c {
            '-' => '⁻',
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            other => other,
        })
        .collect()
}
