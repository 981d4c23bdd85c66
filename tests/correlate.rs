mod common;

use common::synthetic_image::{gaussian_blob, toroidal_shift};
use spectral_image::correlate::{phase_correlate, CorrelationError};
use spectral_image::ImageF64;

#[test]
fn recovers_known_toroidal_translation() {
    let _ = env_logger::builder().is_test(true).try_init();
    let base = gaussian_blob(24, 18, 9.0, 7.0, 2.5);

    for (dx, dy) in [(0usize, 0usize), (3, 2), (1, 0), (0, 5), (17, 11)] {
        let shifted = toroidal_shift(&base, dx, dy);
        let corr = phase_correlate(&base, &shifted).expect("correlation succeeds");
        assert_eq!(
            (corr.translation.dx, corr.translation.dy),
            (dx as i32, dy as i32),
            "translation ({dx}, {dy}) not recovered"
        );
    }
}

#[test]
fn identical_images_correlate_at_origin() {
    let base = gaussian_blob(16, 16, 5.0, 6.0, 2.0);
    let corr = phase_correlate(&base, &base).expect("correlation succeeds");
    assert_eq!((corr.translation.dx, corr.translation.dy), (0, 0));

    // The correlation surface concentrates essentially all energy in the peak.
    let peak = corr.response.get(0, 0).norm();
    assert!(peak > 0.99, "peak magnitude {peak} unexpectedly small");
}

#[test]
fn response_surface_matches_reported_peak() {
    let base = gaussian_blob(20, 14, 11.0, 6.0, 3.0);
    let shifted = toroidal_shift(&base, 4, 9);
    let corr = phase_correlate(&base, &shifted).expect("correlation succeeds");

    let (px, py) = (corr.translation.dx as usize, corr.translation.dy as usize);
    let peak = corr.response.get(px, py).norm();
    for y in 0..corr.response.h {
        for x in 0..corr.response.w {
            assert!(corr.response.get(x, y).norm() <= peak);
        }
    }
}

#[test]
fn mismatched_dimensions_are_rejected() {
    let a = ImageF64::new(8, 8);
    let b = ImageF64::new(8, 9);
    let err = phase_correlate(&a, &b).expect_err("dimension mismatch must fail");
    assert!(matches!(err, CorrelationError::DimensionMismatch { .. }));
    assert!(err.to_string().contains("image dimensions differ"));
}

#[test]
fn all_zero_images_yield_zero_surface_and_origin_peak() {
    // Every cross-power denominator is zero, so every bin falls back to zero
    // and the deterministic tie-break lands on (0, 0).
    let a = ImageF64::new(6, 6);
    let corr = phase_correlate(&a, &a).expect("correlation succeeds");
    assert_eq!((corr.translation.dx, corr.translation.dy), (0, 0));
    for bin in &corr.response.data {
        assert_eq!(bin.norm(), 0.0);
    }
}
