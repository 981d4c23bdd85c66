//! Polar (magnitude/phase) re-expression of complex sequences.

use super::{forward_real, inverse, TransformError};
use num_complex::Complex64;
use serde::Serialize;

/// Magnitude/phase form of one complex sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PolarSample {
    pub magnitude: f64,
    /// Phase in radians in (−π, π]. Zero when the sample is exactly zero
    /// (the `atan2(0, 0) = 0` convention).
    pub phase: f64,
}

/// Re-express a cartesian complex sequence as (magnitude, phase) pairs.
/// Lossless up to floating-point rounding.
pub fn to_polar(c: &[Complex64]) -> Vec<PolarSample> {
    c.iter()
        .map(|s| PolarSample {
            magnitude: s.norm(),
            phase: s.im.atan2(s.re),
        })
        .collect()
}

/// Reconstruct the cartesian sequence from its polar form.
pub fn to_cartesian(p: &[PolarSample]) -> Vec<Complex64> {
    p.iter()
        .map(|s| Complex64::from_polar(s.magnitude, s.phase))
        .collect()
}

/// Forward DFT of a real sequence, returned directly in polar form.
pub fn forward_polar(x: &[f64]) -> Result<Vec<PolarSample>, TransformError> {
    Ok(to_polar(&forward_real(x)?))
}

/// Inverse DFT of a spectrum given in polar form.
pub fn inverse_polar(p: &[PolarSample]) -> Result<Vec<Complex64>, TransformError> {
    inverse(&to_cartesian(p))
}
