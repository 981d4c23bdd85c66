//! Discrete Fourier transform engine.
//!
//! The forward and inverse transforms are computed by direct summation:
//! O(N²) for a length-N sequence. No power-of-two fast path exists and none
//! is assumed by callers; the contract is purely numeric:
//!
//! - `forward`: `X[k] = Σ_n x[n]·exp(-2πi·k·n/N)`
//! - `inverse`: `x[n] = (1/N)·Σ_k X[k]·exp(+2πi·k·n/N)`
//! - `inverse(forward(x))` reproduces `x` to within floating-point rounding
//!   for every finite sequence with `N ≥ 1`.
//!
//! The 2D transform in [`transform2d`] composes the 1D transform along both
//! axes; [`spectrum`] carries the frequency-domain container and its
//! centering semantics, and [`polar`] the magnitude/phase re-expression.

pub mod polar;
pub mod spectrum;
pub mod transform2d;

pub use polar::{to_cartesian, to_polar, PolarSample};
pub use spectrum::Spectrum;
pub use transform2d::{forward2d, inverse2d};

use num_complex::Complex64;
use std::f64::consts::TAU;

/// Contract violations surfaced by the transform engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformError {
    /// A zero-length sequence was passed to a 1D transform.
    EmptySequence,
    /// An image or spectrum with a zero dimension was passed to a 2D transform.
    EmptyImage { w: usize, h: usize },
}

impl std::fmt::Display for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformError::EmptySequence => {
                write!(f, "transform input must contain at least one sample")
            }
            TransformError::EmptyImage { w, h } => {
                write!(f, "transform input must be non-empty, got {w}x{h}")
            }
        }
    }
}

impl std::error::Error for TransformError {}

/// Shared direct-summation kernel for both transform directions.
///
/// The twiddle angle is evaluated from `(k·n) mod N` so the argument stays
/// in `[0, 2π)` regardless of sequence length.
pub(crate) fn direct_sum(x: &[Complex64], sign: f64, normalize: bool) -> Vec<Complex64> {
    let n = x.len();
    let step = sign * TAU / n as f64;
    let mut out = Vec::with_capacity(n);
    for k in 0..n {
        let mut acc = Complex64::new(0.0, 0.0);
        for (idx, &sample) in x.iter().enumerate() {
            acc += sample * Complex64::cis(step * ((k * idx) % n) as f64);
        }
        out.push(if normalize { acc / n as f64 } else { acc });
    }
    out
}

/// Forward DFT of a complex sequence.
pub fn forward(x: &[Complex64]) -> Result<Vec<Complex64>, TransformError> {
    if x.is_empty() {
        return Err(TransformError::EmptySequence);
    }
    Ok(direct_sum(x, -1.0, false))
}

/// Forward DFT of a real sequence.
pub fn forward_real(x: &[f64]) -> Result<Vec<Complex64>, TransformError> {
    if x.is_empty() {
        return Err(TransformError::EmptySequence);
    }
    let complex: Vec<Complex64> = x.iter().map(|&v| Complex64::new(v, 0.0)).collect();
    Ok(direct_sum(&complex, -1.0, false))
}

/// Inverse DFT, including the 1/N normalization.
pub fn inverse(x: &[Complex64]) -> Result<Vec<Complex64>, TransformError> {
    if x.is_empty() {
        return Err(TransformError::EmptySequence);
    }
    Ok(direct_sum(x, 1.0, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Complex64, b: Complex64, scale: f64) -> bool {
        (a - b).norm() < 1e-9 * scale.max(1.0)
    }

    fn max_norm(x: &[Complex64]) -> f64 {
        x.iter().map(|c| c.norm()).fold(0.0, f64::max)
    }

    #[test]
    fn impulse_transforms_to_all_ones() {
        let x = [
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
        ];
        let spectrum = forward(&x).unwrap();
        for &bin in &spectrum {
            assert!(approx_eq(bin, Complex64::new(1.0, 0.0), 1.0));
        }
    }

    #[test]
    fn constant_transforms_to_dc_only() {
        let x = vec![Complex64::new(1.0, 0.0); 4];
        let spectrum = forward(&x).unwrap();
        assert!(approx_eq(spectrum[0], Complex64::new(4.0, 0.0), 4.0));
        for &bin in &spectrum[1..] {
            assert!(approx_eq(bin, Complex64::new(0.0, 0.0), 4.0));
        }
    }

    #[test]
    fn round_trip_recovers_input() {
        let x: Vec<Complex64> = (0..7)
            .map(|i| Complex64::new(i as f64 * 0.37 - 1.0, (i as f64 * 0.11).sin()))
            .collect();
        let back = inverse(&forward(&x).unwrap()).unwrap();
        let scale = max_norm(&x);
        for (&orig, &rec) in x.iter().zip(&back) {
            assert!(approx_eq(orig, rec, scale));
        }
    }

    #[test]
    fn single_sample_is_identity() {
        let x = [Complex64::new(2.5, -0.5)];
        assert_eq!(forward(&x).unwrap(), vec![x[0]]);
        assert_eq!(inverse(&x).unwrap(), vec![x[0]]);
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert_eq!(forward(&[]), Err(TransformError::EmptySequence));
        assert_eq!(inverse(&[]), Err(TransformError::EmptySequence));
        assert_eq!(forward_real(&[]), Err(TransformError::EmptySequence));
    }

    #[test]
    fn transform_is_linear() {
        let x: Vec<Complex64> = (0..5).map(|i| Complex64::new(i as f64, 1.0)).collect();
        let y: Vec<Complex64> = (0..5)
            .map(|i| Complex64::new((i as f64).cos(), -0.3 * i as f64))
            .collect();
        let (a, b) = (Complex64::new(2.0, 1.0), Complex64::new(-0.5, 0.25));

        let combined: Vec<Complex64> = x.iter().zip(&y).map(|(&xi, &yi)| a * xi + b * yi).collect();
        let lhs = forward(&combined).unwrap();

        let fx = forward(&x).unwrap();
        let fy = forward(&y).unwrap();
        let scale = max_norm(&lhs);
        for (k, &bin) in lhs.iter().enumerate() {
            assert!(approx_eq(bin, a * fx[k] + b * fy[k], scale));
        }
    }

    #[test]
    fn forward_real_matches_complex_embedding() {
        let samples = [0.5, -1.25, 3.0, 0.0, 2.75];
        let complex: Vec<Complex64> = samples.iter().map(|&v| Complex64::new(v, 0.0)).collect();
        assert_eq!(forward_real(&samples).unwrap(), forward(&complex).unwrap());
    }
}
