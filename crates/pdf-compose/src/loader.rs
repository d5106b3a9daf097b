//! Image loading, EXIF orientation correction, and color normalization

use std::io::Cursor;
use std::path::Path;

use image::DynamicImage;

use crate::types::Result;

/// Load an image from disk, ready for placement.
///
/// The file is read once; the EXIF orientation tag (if any) is taken from the
/// raw bytes before decoding, then the decoded bitmap is rotated upright and
/// color-normalized. A file that fails to decode is an error; a file whose
/// EXIF data is missing or malformed is not.
pub fn load_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let bytes = std::fs::read(path.as_ref())?;
    let orientation = read_orientation(&bytes);
    let image = image::load_from_memory(&bytes)?;
    Ok(normalize_color(apply_orientation(image, orientation)))
}

/// Read the EXIF orientation tag from raw image bytes.
///
/// Returns `None` when the file carries no EXIF segment, no orientation tag,
/// or malformed metadata. Absence is a normal "no rotation" case, not a
/// failure.
pub fn read_orientation(bytes: &[u8]) -> Option<u32> {
    let mut cursor = Cursor::new(bytes);
    let exif = exif::Reader::new().read_from_container(&mut cursor).ok()?;
    exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
}

/// Rotate a decoded image upright according to its EXIF orientation.
///
/// Only the pure-rotation tags are handled, each expanding the canvas:
/// 3 rotates 180 degrees, 6 rotates 90 degrees clockwise, 8 rotates 90
/// degrees counter-clockwise. Every other value, and `None`, leaves the
/// image untouched.
pub fn apply_orientation(image: DynamicImage, orientation: Option<u32>) -> DynamicImage {
    match orientation {
        Some(3) => image.rotate180(),
        Some(6) => image.rotate90(),
        Some(8) => image.rotate270(),
        _ => image,
    }
}

/// Convert an image with an alpha channel to plain three-channel color.
///
/// JPEG re-encoding supports neither alpha nor palettes; palette images are
/// already expanded by the decoder, so stripping alpha is the only conversion
/// needed here. Grayscale input stays grayscale.
pub fn normalize_color(image: DynamicImage) -> DynamicImage {
    if image.color().has_alpha() {
        DynamicImage::ImageRgb8(image.to_rgb8())
    } else {
        image
    }
}
