//! Aspect-fit placement of an image on a fixed-size page

use crate::constants::{PAGE_HEIGHT_PT, PAGE_WIDTH_PT};

/// Computed position of one image on one page.
///
/// Dimensions are in points (one image pixel is rendered as one point at
/// scale 1.0), truncated to whole points. Offsets center the placed image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Placed width in points
    pub width: u32,
    /// Placed height in points
    pub height: u32,
    /// Horizontal offset from the left page edge
    pub x_offset: f32,
    /// Vertical offset from the bottom page edge
    pub y_offset: f32,
}

/// Scale an image uniformly to fit the page and center it.
///
/// The scale factor is `min(page_w / w, page_h / h)`, so small images are
/// scaled up as well as large images down. Aspect ratio is preserved up to
/// the truncation of the placed dimensions to whole points.
pub fn fit_to_page(width: u32, height: u32) -> Placement {
    let scale = (PAGE_WIDTH_PT / width as f32).min(PAGE_HEIGHT_PT / height as f32);
    // Extreme aspect ratios can truncate to zero; a resample target must be
    // at least one pixel
    let placed_width = ((width as f32 * scale) as u32).max(1);
    let placed_height = ((height as f32 * scale) as u32).max(1);

    Placement {
        width: placed_width,
        height: placed_height,
        x_offset: (PAGE_WIDTH_PT - placed_width as f32) / 2.0,
        y_offset: (PAGE_HEIGHT_PT - placed_height as f32) / 2.0,
    }
}
