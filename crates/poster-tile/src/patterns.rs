//! Named layout patterns
//!
//! Static table of the grid configurations offered to the user. Unknown
//! ids resolve to the default pattern rather than failing the export.

use crate::types::{LayoutPattern, Orientation, PaperSize};

/// Pattern substituted for unknown ids (4-up A4 portrait)
pub const DEFAULT_PATTERN_ID: &str = "a4-4up";

static PATTERNS: &[LayoutPattern] = &[
    LayoutPattern {
        id: "a3-single",
        rows: 1,
        cols: 1,
        paper: PaperSize::A3,
        orientation: Orientation::Portrait,
    },
    LayoutPattern {
        id: "a4-2up",
        rows: 2,
        cols: 1,
        paper: PaperSize::A4,
        orientation: Orientation::Portrait,
    },
    LayoutPattern {
        id: "a4-2up-landscape",
        rows: 1,
        cols: 2,
        paper: PaperSize::A4,
        orientation: Orientation::Landscape,
    },
    LayoutPattern {
        id: "a4-4up",
        rows: 2,
        cols: 2,
        paper: PaperSize::A4,
        orientation: Orientation::Portrait,
    },
    LayoutPattern {
        id: "a4-4up-landscape",
        rows: 2,
        cols: 2,
        paper: PaperSize::A4,
        orientation: Orientation::Landscape,
    },
    LayoutPattern {
        id: "a3-2up",
        rows: 2,
        cols: 1,
        paper: PaperSize::A3,
        orientation: Orientation::Portrait,
    },
    LayoutPattern {
        id: "a3-2up-landscape",
        rows: 1,
        cols: 2,
        paper: PaperSize::A3,
        orientation: Orientation::Landscape,
    },
    LayoutPattern {
        id: "a3-4up",
        rows: 2,
        cols: 2,
        paper: PaperSize::A3,
        orientation: Orientation::Portrait,
    },
    LayoutPattern {
        id: "a3-4up-landscape",
        rows: 2,
        cols: 2,
        paper: PaperSize::A3,
        orientation: Orientation::Landscape,
    },
];

/// All known patterns, in display order
pub fn all_patterns() -> &'static [LayoutPattern] {
    PATTERNS
}

/// Look up a pattern by id
pub fn find_pattern(id: &str) -> Option<&'static LayoutPattern> {
    PATTERNS.iter().find(|p| p.id == id)
}

/// The documented fallback pattern
pub fn default_pattern() -> &'static LayoutPattern {
    find_pattern(DEFAULT_PATTERN_ID).expect("default pattern missing from table")
}

/// Look up a pattern by id, falling back to the default for unknown ids
pub fn resolve_pattern(id: &str) -> &'static LayoutPattern {
    find_pattern(id).unwrap_or_else(default_pattern)
}
