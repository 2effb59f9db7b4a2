use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color parsing
// ---------------------------------------------------------------------------

/// Parse a CSS colour name (`"red"`) or a hex triplet (`"#D81B60"`).
pub fn parse_color(text: &str) -> Option<Srgb<u8>> {
    let text = text.trim();
    palette::named::from_str(&text.to_ascii_lowercase()).or_else(|| text.parse().ok())
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Srgb<u8>> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            rgb.into_format()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// ColorCycle: configured palette with generated overflow
// ---------------------------------------------------------------------------

/// Hands out series colours in palette order.
#[derive(Debug, Clone)]
pub struct ColorCycle {
    colors: Vec<Srgb<u8>>,
}

impl ColorCycle {
    /// Build a cycle from colour strings; unparseable entries are skipped.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        let colors = names
            .iter()
            .filter_map(|s| {
                let parsed = parse_color(s.as_ref());
                if parsed.is_none() {
                    log::warn!("Ignoring unrecognised colour {:?}", s.as_ref());
                }
                parsed
            })
            .collect();
        ColorCycle { colors }
    }

    /// The first `n` colours, extended with generated hues once the
    /// configured palette runs out.
    pub fn take(&self, n: usize) -> Vec<Srgb<u8>> {
        let mut out: Vec<Srgb<u8>> = self.colors.iter().copied().take(n).collect();
        if out.len() < n {
            out.extend(generate_palette(n - out.len()));
        }
        out
    }
}
