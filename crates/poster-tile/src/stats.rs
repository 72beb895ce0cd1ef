//! Export statistics, for previewing a split before committing to it

use crate::types::{LayoutPattern, Result};

/// Summary of what an export would produce
#[derive(Debug, Clone, PartialEq)]
pub struct ExportStatistics {
    pub pattern_id: &'static str,
    pub rows: u32,
    pub cols: u32,
    /// Number of tiles, and therefore output pages
    pub tile_count: usize,
    pub tile_width_px: u32,
    pub tile_height_px: u32,
    /// Source pixels discarded at the right edge by floor division
    pub dropped_right_px: u32,
    /// Source pixels discarded at the bottom edge by floor division
    pub dropped_bottom_px: u32,
    pub page_width_px: f32,
    pub page_height_px: f32,
}

pub fn calculate_statistics(
    source_width: u32,
    source_height: u32,
    pattern: &LayoutPattern,
    dpi: u32,
) -> Result<ExportStatistics> {
    let tiles = crate::grid::partition(source_width, source_height, pattern, dpi)?;
    let first = &tiles[0];
    let (page_width_px, page_height_px) = pattern.paper.dimensions_px(dpi, pattern.orientation);

    Ok(ExportStatistics {
        pattern_id: pattern.id,
        rows: pattern.rows,
        cols: pattern.cols,
        tile_count: tiles.len(),
        tile_width_px: first.width_px,
        tile_height_px: first.height_px,
        dropped_right_px: source_width - first.width_px * pattern.cols,
        dropped_bottom_px: source_height - first.height_px * pattern.rows,
        page_width_px,
        page_height_px,
    })
}
