//! Frequency-domain container and centering semantics.

use crate::image::ImageF64;
use num_complex::Complex64;

/// 2D dense array of complex frequency coefficients, row-major.
///
/// Two representation states exist and are never converted implicitly:
/// *natural order* keeps the DC bin at index (0, 0), *centered order* moves
/// it to `(w / 2, h / 2)`. The state is determined by which operation
/// produced the spectrum; [`Spectrum::shift_center`] and
/// [`Spectrum::shift_uncenter`] convert between the two and compose to the
/// identity for even and odd extents alike.
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    /// Width in frequency bins
    pub w: usize,
    /// Height in frequency bins
    pub h: usize,
    /// Backing storage in row-major order
    pub data: Vec<Complex64>,
}

impl Spectrum {
    /// Construct a zero-filled spectrum of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![Complex64::new(0.0, 0.0); w * h],
        }
    }

    /// Embed a real image as a complex spectrum-shaped buffer.
    pub fn from_image(img: &ImageF64) -> Self {
        Self {
            w: img.w,
            h: img.h,
            data: img.data.iter().map(|&v| Complex64::new(v, 0.0)).collect(),
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    /// Get the coefficient at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Complex64 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the coefficient at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: Complex64) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    /// Borrow row `y` as a contiguous slice.
    pub fn row(&self, y: usize) -> &[Complex64] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }

    /// Per-element magnitude as a real image.
    pub fn magnitude(&self) -> ImageF64 {
        ImageF64::from_vec(self.w, self.h, self.data.iter().map(|c| c.norm()).collect())
    }

    /// Circularly roll both axes so the DC bin moves from the corner to the
    /// geometric center `(w / 2, h / 2)`.
    pub fn shift_center(&self) -> Spectrum {
        self.roll(self.w / 2, self.h / 2)
    }

    /// Exact inverse of [`Spectrum::shift_center`]: rolls by the complementary
    /// offsets `w - w / 2` and `h - h / 2`, which differ from the forward
    /// offsets only for odd extents.
    pub fn shift_uncenter(&self) -> Spectrum {
        self.roll(self.w - self.w / 2, self.h - self.h / 2)
    }

    fn roll(&self, dx: usize, dy: usize) -> Spectrum {
        if self.data.is_empty() {
            return self.clone();
        }
        let mut out = Spectrum::new(self.w, self.h);
        for y in 0..self.h {
            let ty = (y + dy) % self.h;
            for x in 0..self.w {
                let tx = (x + dx) % self.w;
                out.set(tx, ty, self.get(x, y));
            }
        }
        out
    }
}
