//! Shared constants for tiling and page composition
//!
//! This module centralizes magic numbers and unit conversions used
//! throughout the export process. Layout units are page pixels at the
//! chosen DPI unless noted otherwise.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Millimeters per inch
pub const MM_PER_INCH: f32 = 25.4;

/// Points per inch (PDF user space)
pub const POINTS_PER_INCH: f32 = 72.0;

/// Convert millimeters to pixels at the given resolution
#[inline]
pub fn mm_to_px(mm: f32, dpi: u32) -> f32 {
    mm * dpi as f32 / MM_PER_INCH
}

/// Convert page pixels to PDF points at the given resolution
#[inline]
pub fn px_to_pt(px: f32, dpi: u32) -> f32 {
    px * POINTS_PER_INCH / dpi as f32
}

// =============================================================================
// Defaults
// =============================================================================

/// Default resolution for paper sizing
pub const DEFAULT_DPI: u32 = 300;

/// Default page margin for exports (layout units)
pub const DEFAULT_MARGIN: f32 = 8.0;

/// Default page margin offered by interactive front ends (layout units)
pub const DEFAULT_UI_MARGIN: f32 = 10.0;

/// Factor applied to the margin when reserving the usable area.
/// The reserved space is deliberately larger than the stated margin.
pub const MARGIN_RESERVE_FACTOR: f32 = 1.2;

/// Maximum accepted input file size in bytes (50 MiB)
pub const MAX_INPUT_BYTES: u64 = 50 * 1024 * 1024;

/// Suffix appended to the source file stem for the output document
pub const OUTPUT_SUFFIX: &str = "_divided";

// =============================================================================
// Cut Guides
// =============================================================================

/// Length of each corner guide segment (layout units)
pub const GUIDE_LENGTH: f32 = 15.0;

/// Stroke width for guide lines (points)
pub const GUIDE_LINE_WIDTH_PT: f32 = 0.75;

// =============================================================================
// Labels
// =============================================================================

/// Horizontal inset of both labels from their page edge (layout units)
pub const LABEL_INSET: f32 = 30.0;

/// Vertical offset of both labels from their page edge (layout units)
pub const LABEL_EDGE_OFFSET: f32 = 20.0;

/// Fixed label text size (layout units; ≈ 9.6pt at 300 DPI)
pub const LABEL_FONT_SIZE: f32 = 40.0;

/// Approximate character width ratio for Helvetica
pub const HELVETICA_CHAR_WIDTH_RATIO: f32 = 0.5;
