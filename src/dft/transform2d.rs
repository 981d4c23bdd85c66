//! Separable 2D transform built from the 1D engine.
//!
//! The 2D transform applies the 1D transform along every row, transposes,
//! applies it along every row again (the original columns), and transposes
//! back. The two passes commute; the row pass runs in parallel because rows
//! are independent, which cannot change the result.
//!
//! The inverse applies the normalized 1D inverse per pass, so the combined
//! normalization is exactly one division by the total element count.

use super::{direct_sum, Spectrum, TransformError};
use crate::image::ImageF64;

/// Forward 2D transform of a real intensity image into a natural-order
/// spectrum (DC at the corner).
pub fn forward2d(img: &ImageF64) -> Result<Spectrum, TransformError> {
    if img.w == 0 || img.h == 0 {
        return Err(TransformError::EmptyImage { w: img.w, h: img.h });
    }
    Ok(transform(Spectrum::from_image(img), -1.0, false))
}

/// Inverse 2D transform of a natural-order spectrum. The result is complex;
/// callers working with real images take its magnitude.
pub fn inverse2d(spec: &Spectrum) -> Result<Spectrum, TransformError> {
    if spec.w == 0 || spec.h == 0 {
        return Err(TransformError::EmptyImage {
            w: spec.w,
            h: spec.h,
        });
    }
    Ok(transform(spec.clone(), 1.0, true))
}

fn transform(spec: Spectrum, sign: f64, normalize: bool) -> Spectrum {
    let mut pass = spec;
    transform_rows(&mut pass, sign, normalize);
    let mut transposed = transpose(&pass);
    transform_rows(&mut transposed, sign, normalize);
    transpose(&transposed)
}

fn transform_rows(spec: &mut Spectrum, sign: f64, normalize: bool) {
    use rayon::prelude::*;
    let w = spec.w;
    spec.data.par_chunks_mut(w).for_each(|row| {
        let transformed = direct_sum(row, sign, normalize);
        row.copy_from_slice(&transformed);
    });
}

fn transpose(spec: &Spectrum) -> Spectrum {
    let mut out = Spectrum::new(spec.h, spec.w);
    for y in 0..spec.h {
        for x in 0..spec.w {
            out.set(y, x, spec.get(x, y));
        }
    }
    out
}
