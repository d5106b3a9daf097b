//! Size-target search: bounded linear scan over JPEG quality

use std::path::Path;

use image::DynamicImage;

use crate::compose::render_document;
use crate::constants::{QUALITY_FLOOR, QUALITY_MAX, QUALITY_START, QUALITY_STEP, SIZE_TOLERANCE};
use crate::types::*;

/// True when `size` is within the acceptance band around `target` (inclusive)
pub fn within_tolerance(size: u64, target: u64) -> bool {
    let delta = size.abs_diff(target) as f64;
    delta <= target as f64 * SIZE_TOLERANCE
}

/// Compress the document toward a target byte budget and write it to `dest`.
///
/// First probes at quality 100 in memory. If the probe already fits the
/// budget, that maximum-fidelity document is written and the search ends.
/// Otherwise the document is regenerated at 95, 90, ... and written to
/// `dest` on each pass, stopping as soon as the produced size lands within
/// 5% of the target (inclusive) or the quality floor of 50 is reached. This
/// is a fixed-step scan with no refinement: the final file may miss the band
/// at the floor, which is accepted behavior.
///
/// Each pass re-runs the whole compositor over all images, so cost is
/// O(passes x images) full re-encodes. At most 10 regenerations happen in
/// the reduction branch.
pub fn compress_to_target(
    images: &[DynamicImage],
    target_bytes: u64,
    dest: impl AsRef<Path>,
) -> Result<CompressionOutcome> {
    if target_bytes == 0 {
        return Err(ComposeError::InvalidTarget(
            "target must be at least one byte".to_string(),
        ));
    }

    let probe = render_document(images, QUALITY_MAX)?;
    if probe.len() as u64 <= target_bytes {
        std::fs::write(dest.as_ref(), &probe)?;
        return Ok(CompressionOutcome {
            quality: QUALITY_MAX,
            bytes_written: probe.len() as u64,
            regenerations: 1,
        });
    }

    let mut quality = QUALITY_START;
    let mut regenerations = 0;
    loop {
        let bytes = render_document(images, quality)?;
        std::fs::write(dest.as_ref(), &bytes)?;
        regenerations += 1;

        let size = bytes.len() as u64;
        if within_tolerance(size, target_bytes) || quality <= QUALITY_FLOOR {
            return Ok(CompressionOutcome {
                quality,
                bytes_written: size,
                regenerations,
            });
        }
        quality -= QUALITY_STEP;
    }
}
