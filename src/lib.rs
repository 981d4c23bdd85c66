#![doc = include_str!("../README.md")]

// Public modules
pub mod correlate;
pub mod dft;
pub mod filter;
pub mod image;
pub mod types;
pub mod upsample;

// --- High-level re-exports -------------------------------------------------

// Image-level operations and their results.
pub use crate::correlate::{phase_correlate, CorrelationError, PhaseCorrelation};
pub use crate::filter::{band_pass, FilterError, FilterResult};
pub use crate::upsample::{upsample, UpsampleError, UpsampleResult};

// Core containers and the transform error.
pub use crate::dft::{Spectrum, TransformError};
pub use crate::image::ImageF64;
pub use crate::types::Translation;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use spectral_image::prelude::*;
///
/// let img = ImageF64::from_fn(8, 6, |x, y| (x + y) as f64);
/// let filtered = band_pass(&img, 0.0, 100.0).unwrap();
/// assert_eq!((filtered.image.w, filtered.image.h), (8, 6));
/// ```
pub mod prelude {
    pub use crate::image::ImageF64;
    pub use crate::{band_pass, phase_correlate, upsample};
    pub use crate::{FilterResult, PhaseCorrelation, Translation, UpsampleResult};
}
