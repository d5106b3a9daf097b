use image::{DynamicImage, Rgb, RgbImage};
use pdf_compose::constants::{QUALITY_FLOOR, QUALITY_MAX};
use pdf_compose::{ComposeError, compress_to_target, render_document, within_tolerance};

fn noise_image(width: u32, height: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |x, y| {
        let r = ((x * 31 + y * 17) % 256) as u8;
        let g = ((x * 7 + y * 13 + 101) % 256) as u8;
        let b = ((x * 3 + y * 29 + 53) % 256) as u8;
        Rgb([r, g, b])
    });
    DynamicImage::ImageRgb8(img)
}

fn flat_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([120, 130, 140])))
}

#[test]
fn test_tolerance_band_is_five_percent_inclusive() {
    assert!(within_tolerance(1000, 1000));
    assert!(within_tolerance(1050, 1000));
    assert!(within_tolerance(950, 1000));
    assert!(!within_tolerance(1051, 1000));
    assert!(!within_tolerance(949, 1000));
}

#[test]
fn test_probe_satisfied_keeps_full_quality() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("out.pdf");
    let images = vec![flat_image(64, 64); 3];

    // Target far above anything a 3-page document could reach
    let outcome = compress_to_target(&images, 50 * 1024 * 1024, &dest).unwrap();

    assert_eq!(outcome.quality, QUALITY_MAX);
    assert_eq!(outcome.regenerations, 1);
    assert_eq!(
        std::fs::metadata(&dest).unwrap().len(),
        outcome.bytes_written
    );
}

#[test]
fn test_probe_satisfied_output_matches_full_quality_render() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("out.pdf");
    let images = vec![flat_image(64, 64)];

    compress_to_target(&images, 50 * 1024 * 1024, &dest).unwrap();

    // Further quality reduction never happened: bytes on disk are exactly
    // the quality-100 document
    let reference = render_document(&images, QUALITY_MAX).unwrap();
    assert_eq!(std::fs::read(&dest).unwrap(), reference);
}

#[test]
fn test_unreachable_target_stops_at_quality_floor() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("out.pdf");
    let images = vec![noise_image(800, 1100)];

    // 1000 bytes is far below anything the compositor can produce, so the
    // scan runs the full schedule 95, 90, ... 50
    let outcome = compress_to_target(&images, 1000, &dest).unwrap();

    assert_eq!(outcome.quality, QUALITY_FLOOR);
    assert_eq!(outcome.regenerations, 10);
    assert_eq!(
        std::fs::metadata(&dest).unwrap().len(),
        outcome.bytes_written
    );
}

#[test]
fn test_search_only_evaluates_quality_multiples_of_five() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("out.pdf");
    let images = vec![noise_image(400, 300)];

    let probe_len = render_document(&images, QUALITY_MAX).unwrap().len() as u64;
    // Force the reduction branch with a target just below the probe
    let outcome = compress_to_target(&images, probe_len - 1, &dest).unwrap();

    assert!(outcome.quality >= QUALITY_FLOOR);
    assert!(outcome.quality < QUALITY_MAX);
    assert_eq!(outcome.quality % 5, 0);
    assert!(outcome.regenerations <= 10);
}

#[test]
fn test_final_file_matches_reported_size() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("out.pdf");
    let images = vec![noise_image(500, 700), noise_image(300, 300)];

    let outcome = compress_to_target(&images, 20_000, &dest).unwrap();

    let on_disk = std::fs::read(&dest).unwrap();
    assert_eq!(on_disk.len() as u64, outcome.bytes_written);
    // Whatever quality was chosen, the file is the document rendered there
    assert_eq!(on_disk, render_document(&images, outcome.quality).unwrap());
}

#[test]
fn test_zero_target_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("out.pdf");

    let result = compress_to_target(&[flat_image(10, 10)], 0, &dest);
    assert!(matches!(result, Err(ComposeError::InvalidTarget(_))));
    assert!(!dest.exists());
}

#[test]
fn test_no_images_is_rejected_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("out.pdf");

    let result = compress_to_target(&[], 1024, &dest);
    assert!(matches!(result, Err(ComposeError::NoImages)));
    assert!(!dest.exists());
}
