//! Writes synthetic instrument exports for every supported format into a
//! directory (default `samples/`).
//!
//! ```text
//! cargo run --bin generate_sample -- [OUTPUT_DIR]
//! bioplot bli samples/bli_unmodified.txt samples/bli_conjugate.txt -l Unmodified -l "NBM Conjugate" --fit 0
//! bioplot ion-series samples/mass_spectrum.txt --npeaks 3
//! bioplot sec samples/sec_run.csv
//! ```

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

// ---------------------------------------------------------------------------
// Formats
// ---------------------------------------------------------------------------

/// 1:1 binding sensorgram: association for `switch` seconds, then
/// dissociation. Recording starts at `t0`, not zero.
fn bli_export(rmax: f64, k_on: f64, k_off: f64, t0: f64, rng: &mut SimpleRng) -> String {
    let switch = 150.0;
    let at_switch = rmax * (1.0 - (-k_on * switch).exp());

    let mut out = String::from("Sensor Location: A1\nTime (s)\tResponse (nm)\tFit (nm)\n");
    for i in 0..=1500 {
        let t = i as f64 * 0.2;
        let fit = if t < switch {
            rmax * (1.0 - (-k_on * t).exp())
        } else {
            at_switch * (-k_off * (t - switch)).exp()
        };
        let signal = fit + rng.gauss(0.0, 0.004);
        let _ = writeln!(out, "{:.1}\t{signal:.5}\t{fit:.5}", t0 + t);
    }
    out.push_str("End of step data\n");
    out
}

fn mass_spectrum_export(rng: &mut SimpleRng) -> String {
    // (mass, width, height) of the charge-state envelope
    let peaks = [
        (14305.0, 1.2, 4.1e5),
        (14327.0, 1.2, 9.0e4),
        (14343.0, 1.3, 2.2e4),
        (28610.0, 2.0, 3.5e4),
    ];
    let mut out = String::from("Deconvoluted spectrum\n");
    for i in 0..20000 {
        let mass = 10000.0 + i as f64;
        let intensity: f64 = peaks
            .iter()
            .map(|&(mu, sigma, amp)| gaussian(mass, mu, sigma, amp))
            .sum::<f64>()
            + rng.gauss(800.0, 150.0).abs();
        let _ = writeln!(out, "{mass:.2} {intensity:.1}");
    }
    out
}

/// UTF-16LE with BOM, three header lines, extra trailing columns.
fn sec_export(rng: &mut SimpleRng) -> Vec<u8> {
    let mut text = String::from("Run: N40C-PDL1\nChannel: UV 280 nm\nml\tmAU\tConductivity\n");
    for i in 0..2400 {
        let volume = i as f64 * 0.01;
        let absorbance = gaussian(volume, 8.2, 0.35, 45.0)
            + gaussian(volume, 14.6, 0.5, 180.0)
            + gaussian(volume, 19.8, 0.4, 12.0)
            + rng.gauss(0.0, 0.3);
        let _ = writeln!(text, "{volume:.3}\t{absorbance:.3}\t{:.2}", 15.2 + rng.gauss(0.0, 0.01));
    }

    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

fn write(dir: &Path, name: &str, contents: impl AsRef<[u8]>) -> Result<()> {
    let path = dir.join(name);
    std::fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let dir: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("samples"));
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut rng = SimpleRng::new(42);
    write(&dir, "bli_unmodified.txt", bli_export(0.9, 0.025, 0.004, 12.4, &mut rng))?;
    write(&dir, "bli_conjugate.txt", bli_export(0.55, 0.018, 0.009, 12.6, &mut rng))?;
    write(&dir, "mass_spectrum.txt", mass_spectrum_export(&mut rng))?;
    write(&dir, "sec_run.csv", sec_export(&mut rng))?;
    Ok(())
}
