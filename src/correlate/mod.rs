//! Translation estimation by phase correlation.
//!
//! The normalized cross-power spectrum of two images keeps only the phase
//! difference between their transforms; its inverse transform is, for a
//! pure translation, an impulse at the displacement. The peak of that
//! correlation surface is the estimate.

use crate::dft::{forward2d, inverse2d, Spectrum, TransformError};
use crate::image::ImageF64;
use crate::types::Translation;
use log::debug;
use num_complex::Complex64;
use serde::Serialize;
use std::time::Instant;

/// Contract violations surfaced by [`phase_correlate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CorrelationError {
    /// The two images do not have identical dimensions.
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// The underlying transform rejected the input images.
    Transform(TransformError),
}

impl std::fmt::Display for CorrelationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorrelationError::DimensionMismatch { left, right } => write!(
                f,
                "image dimensions differ: {}x{} vs {}x{}",
                left.1, left.0, right.1, right.0
            ),
            CorrelationError::Transform(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for CorrelationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CorrelationError::Transform(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TransformError> for CorrelationError {
    fn from(err: TransformError) -> Self {
        CorrelationError::Transform(err)
    }
}

/// Output of [`phase_correlate`]: the estimated translation and the
/// correlation surface it was read from.
#[derive(Clone, Debug, Serialize)]
pub struct PhaseCorrelation {
    pub translation: Translation,
    /// Inverse transform of the cross-power spectrum; ideally an impulse at
    /// the translation. Kept for diagnostics.
    #[serde(skip)]
    pub response: Spectrum,
    pub elapsed_ms: f64,
}

/// Estimate the integer translation between two equally sized images.
///
/// Frequency bins where the cross-power denominator is exactly zero are
/// defined as zero rather than propagating a division by zero. Peak
/// detection ranks bins by magnitude and keeps the first maximum in
/// row-major order, so ties resolve deterministically.
pub fn phase_correlate(
    ga: &ImageF64,
    gb: &ImageF64,
) -> Result<PhaseCorrelation, CorrelationError> {
    let start = Instant::now();
    if ga.w != gb.w || ga.h != gb.h {
        return Err(CorrelationError::DimensionMismatch {
            left: (ga.w, ga.h),
            right: (gb.w, gb.h),
        });
    }

    let spec_a = forward2d(ga)?;
    let spec_b = forward2d(gb)?;

    let mut cross = Spectrum::new(ga.w, ga.h);
    for (out, (&a, &b)) in cross
        .data
        .iter_mut()
        .zip(spec_a.data.iter().zip(spec_b.data.iter()))
    {
        let prod = a * b.conj();
        let norm = prod.norm();
        if norm != 0.0 {
            *out = prod / norm;
        } else {
            *out = Complex64::new(0.0, 0.0);
        }
    }

    let response = inverse2d(&cross)?;

    let mut best = f64::NEG_INFINITY;
    let (mut px, mut py) = (0usize, 0usize);
    for y in 0..response.h {
        for x in 0..response.w {
            let magnitude = response.get(x, y).norm();
            if magnitude > best {
                best = magnitude;
                px = x;
                py = y;
            }
        }
    }
    debug!("correlation peak {best:.6} at ({px}, {py})");

    Ok(PhaseCorrelation {
        translation: Translation {
            dx: px as i32,
            dy: py as i32,
        },
        response,
        elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
    })
}
