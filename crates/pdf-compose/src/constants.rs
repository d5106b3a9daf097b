//! Shared constants for page geometry and the size-target search
//!
//! This module centralizes magic numbers used throughout document
//! generation and compression.

// =============================================================================
// Page Geometry
// =============================================================================

/// Page width in points (A4 at 72 dpi)
pub const PAGE_WIDTH_PT: f32 = 595.0;

/// Page height in points (A4 at 72 dpi)
pub const PAGE_HEIGHT_PT: f32 = 842.0;

// =============================================================================
// JPEG Quality Schedule
// =============================================================================

/// Quality used for the initial probe and for the no-reduction branch
pub const QUALITY_MAX: u8 = 100;

/// First quality evaluated when the probe exceeds the target
pub const QUALITY_START: u8 = 95;

/// Quality decrement between regenerations
pub const QUALITY_STEP: u8 = 5;

/// The search never evaluates a quality below this
pub const QUALITY_FLOOR: u8 = 50;

// =============================================================================
// Size Targeting
// =============================================================================

/// Acceptance band around the target size, as a fraction (inclusive)
pub const SIZE_TOLERANCE: f64 = 0.05;

/// Bytes per megabyte for target-size entry
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Convert a megabyte entry to a byte budget
#[inline]
pub fn mb_to_bytes(mb: f64) -> u64 {
    (mb * BYTES_PER_MB as f64) as u64
}

/// Convert a byte count to megabytes for reporting
#[inline]
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB as f64
}
