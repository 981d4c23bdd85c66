use spectral_image::ImageF64;

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_f64(width: usize, height: usize, cell: usize) -> ImageF64 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    ImageF64::from_fn(width, height, |x, y| {
        let sum = (x / cell) + (y / cell);
        if sum & 1 == 0 {
            32.0
        } else {
            220.0
        }
    })
}

/// Generates an off-center Gaussian blob. Its spectrum has no zero bins,
/// which makes the phase-correlation surface a clean single impulse.
pub fn gaussian_blob(width: usize, height: usize, cx: f64, cy: f64, sigma: f64) -> ImageF64 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(sigma > 0.0, "sigma must be positive");

    ImageF64::from_fn(width, height, |x, y| {
        let dx = x as f64 - cx;
        let dy = y as f64 - cy;
        (-(dx * dx + dy * dy) / (2.0 * sigma * sigma)).exp()
    })
}

/// Samples the analytic plaid `cos(kπ(3x + 2y))` on a uniform pixel grid.
pub fn cosine_plaid(width: usize, height: usize, pixel_size: f64, k: f64) -> ImageF64 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    ImageF64::from_fn(width, height, |x, y| {
        let xv = 3.0 * (x as f64 * pixel_size);
        let yv = 2.0 * (y as f64 * pixel_size);
        (k * std::f64::consts::PI * (xv + yv)).cos()
    })
}

/// Toroidal (wrap-around) shift: the output at (x, y) samples the input at
/// (x + dx, y + dy) modulo the extents, so no edge content is lost.
pub fn toroidal_shift(img: &ImageF64, dx: usize, dy: usize) -> ImageF64 {
    ImageF64::from_fn(img.w, img.h, |x, y| {
        img.get((x + dx) % img.w, (y + dy) % img.h)
    })
}
