//! Grid partitioning
//!
//! Splits a source image into a uniform grid of tiles. Tile dimensions
//! are the floor of the source dimension divided by the column/row
//! count; remainder pixels are dropped from the final row/column rather
//! than redistributed, so every tile in a batch has identical size.

use crate::types::{LayoutPattern, Result, TileDescriptor, TileError};

/// Partition a source image into an ordered batch of tile descriptors.
///
/// Returns exactly `rows * cols` descriptors in row-major order (row 0
/// left to right, then row 1, ...). Pure: identical inputs yield
/// descriptor-for-descriptor identical output. No pixel data is touched
/// here; region extraction is the source image's concern, per tile.
pub fn partition(
    source_width: u32,
    source_height: u32,
    pattern: &LayoutPattern,
    dpi: u32,
) -> Result<Vec<TileDescriptor>> {
    if source_width == 0 || source_height == 0 {
        return Err(TileError::NoSourceImage);
    }
    if pattern.rows == 0 || pattern.cols == 0 {
        return Err(TileError::Config(
            "pattern must have at least one row and one column".to_string(),
        ));
    }
    if dpi == 0 {
        return Err(TileError::Config("DPI must be positive".to_string()));
    }

    let tile_width = source_width / pattern.cols;
    let tile_height = source_height / pattern.rows;
    let total_parts = pattern.tile_count();

    let mut tiles = Vec::with_capacity(total_parts);
    for row in 0..pattern.rows {
        for col in 0..pattern.cols {
            tiles.push(TileDescriptor {
                row,
                col,
                width_px: tile_width,
                height_px: tile_height,
                part_number: (row * pattern.cols + col) as usize + 1,
                total_parts,
                paper: pattern.paper,
                dpi,
            });
        }
    }

    Ok(tiles)
}
