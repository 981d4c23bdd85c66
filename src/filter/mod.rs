//! Band-pass spatial filtering through the frequency domain.
//!
//! A binary mask over the centered spectrum passes every frequency bin
//! whose Euclidean distance to the DC bin lies inside `[low, high]`.
//! Low-pass filtering is the `low == 0` case; high-pass filtering sets
//! `high` beyond the largest center-to-corner distance.

use crate::dft::{forward2d, inverse2d, Spectrum, TransformError};
use crate::image::ImageF64;
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Contract violations surfaced by [`band_pass`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FilterError {
    /// Thresholds must satisfy `0 <= low <= high`.
    InvalidThresholds { low: f64, high: f64 },
    /// The underlying transform rejected the input image.
    Transform(TransformError),
}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterError::InvalidThresholds { low, high } => {
                write!(f, "thresholds must satisfy 0 <= low <= high, got ({low}, {high})")
            }
            FilterError::Transform(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FilterError::Transform(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TransformError> for FilterError {
    fn from(err: TransformError) -> Self {
        FilterError::Transform(err)
    }
}

/// Output of [`band_pass`]: the filtered image plus the unmasked spectrum
/// and the mask for inspection.
#[derive(Clone, Debug, Serialize)]
pub struct FilterResult {
    /// Filtered image (magnitude of the inverse transform).
    #[serde(skip)]
    pub image: ImageF64,
    /// Centered spectrum of the input image, before masking.
    #[serde(skip)]
    pub spectrum: Spectrum,
    /// Binary mask that was applied, as a 0/1-valued image.
    #[serde(skip)]
    pub mask: ImageF64,
    pub elapsed_ms: f64,
}

/// Filter `img` by keeping only the frequency bins whose radial distance to
/// the spectrum center lies in `[low, high]` inclusive.
///
/// `low == high` is not an error; the mask may then be all-zero (when no
/// integer grid point sits at exactly that radius) and the filtered image
/// all-zero with it.
pub fn band_pass(img: &ImageF64, low: f64, high: f64) -> Result<FilterResult, FilterError> {
    let start = Instant::now();
    if !(low >= 0.0 && high >= low) {
        return Err(FilterError::InvalidThresholds { low, high });
    }

    let centered = forward2d(img)?.shift_center();
    // The mask is measured from the DC bin of the centered spectrum, so the
    // degenerate [0, 0] band can only select that single bin.
    let (cx, cy) = (img.w / 2, img.h / 2);

    let mut mask = ImageF64::new(img.w, img.h);
    let mut masked = centered.clone();
    let mut passed = 0usize;
    for y in 0..img.h {
        for x in 0..img.w {
            let du = x as f64 - cx as f64;
            let dv = y as f64 - cy as f64;
            let dist = du.hypot(dv);
            if low <= dist && dist <= high {
                mask.set(x, y, 1.0);
                passed += 1;
            } else {
                masked.set(x, y, num_complex::Complex64::new(0.0, 0.0));
            }
        }
    }
    debug!(
        "band [{low}, {high}] passes {passed} of {} bins",
        img.w * img.h
    );

    let image = inverse2d(&masked.shift_uncenter())?.magnitude();
    Ok(FilterResult {
        image,
        spectrum: centered,
        mask,
        elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
    })
}
