//! Page composition
//!
//! Turns one tile descriptor plus a paper/orientation/margin
//! configuration into page-placement geometry, then issues draw calls
//! against a drawing surface. All geometry is in page pixels at the
//! tile's DPI, origin top-left.

use crate::constants::{
    GUIDE_LENGTH, LABEL_EDGE_OFFSET, LABEL_FONT_SIZE, LABEL_INSET, MARGIN_RESERVE_FACTOR,
};
use crate::surface::DrawSurface;
use crate::types::{
    Label, Orientation, PageLayout, Point, Rect, Result, Segment, TextAlign, TileDescriptor,
};

/// Compute the deterministic layout for one page.
///
/// The tile is scaled uniformly to fit the usable area (page minus the
/// inflated margin) and centered on the full page; the margin gates only
/// the maximum size, it is not an offset. `page_index` is 0-based.
pub fn layout_page(
    tile: &TileDescriptor,
    orientation: Orientation,
    margin: f32,
    page_index: usize,
    page_count: usize,
) -> PageLayout {
    let (page_width, page_height) = tile.paper.dimensions_px(tile.dpi, orientation);

    // The reserved space is margin * 1.2 on both axes, intentionally
    // larger than the stated margin.
    let usable_width = page_width - margin * MARGIN_RESERVE_FACTOR;
    let usable_height = page_height - margin * MARGIN_RESERVE_FACTOR;

    let scale = (usable_width / tile.width_px as f32).min(usable_height / tile.height_px as f32);
    let final_width = tile.width_px as f32 * scale;
    let final_height = tile.height_px as f32 * scale;

    let image_placement = Rect::new(
        (page_width - final_width) / 2.0,
        (page_height - final_height) / 2.0,
        final_width,
        final_height,
    );

    PageLayout {
        page_width,
        page_height,
        image_placement,
        guides: corner_guides(page_width, page_height, margin),
        labels: page_labels(tile, page_width, page_height, page_index, page_count),
    }
}

/// Corner cut guides: an "L" of two fixed-length segments per corner,
/// anchored `margin` units in from each edge, pointing into the page.
fn corner_guides(page_width: f32, page_height: f32, margin: f32) -> Vec<Segment> {
    let left = margin;
    let right = page_width - margin;
    let top = margin;
    let bottom = page_height - margin;

    vec![
        // Top-left
        Segment::new(Point::new(left, top), Point::new(left + GUIDE_LENGTH, top)),
        Segment::new(Point::new(left, top), Point::new(left, top + GUIDE_LENGTH)),
        // Top-right
        Segment::new(Point::new(right - GUIDE_LENGTH, top), Point::new(right, top)),
        Segment::new(Point::new(right, top), Point::new(right, top + GUIDE_LENGTH)),
        // Bottom-left
        Segment::new(
            Point::new(left, bottom),
            Point::new(left + GUIDE_LENGTH, bottom),
        ),
        Segment::new(
            Point::new(left, bottom - GUIDE_LENGTH),
            Point::new(left, bottom),
        ),
        // Bottom-right
        Segment::new(
            Point::new(right - GUIDE_LENGTH, bottom),
            Point::new(right, bottom),
        ),
        Segment::new(
            Point::new(right, bottom - GUIDE_LENGTH),
            Point::new(right, bottom),
        ),
    ]
}

/// Page-number and position labels. Row/column numbers are 1-based for
/// readability even though the internal indices are 0-based.
fn page_labels(
    tile: &TileDescriptor,
    page_width: f32,
    page_height: f32,
    page_index: usize,
    page_count: usize,
) -> Vec<Label> {
    vec![
        Label {
            text: format!("Page {} of {}", page_index + 1, page_count),
            x: page_width - LABEL_INSET,
            y: page_height - LABEL_EDGE_OFFSET,
            size: LABEL_FONT_SIZE,
            align: TextAlign::Right,
        },
        Label {
            text: format!(
                "Position: Row {}, Column {} | {} | {} DPI",
                tile.row + 1,
                tile.col + 1,
                tile.paper.name(),
                tile.dpi
            ),
            x: LABEL_INSET,
            y: LABEL_EDGE_OFFSET,
            size: LABEL_FONT_SIZE,
            align: TextAlign::Left,
        },
    ]
}

/// Draw one composed page onto the surface.
///
/// An embed failure aborts the export; a partially generated document
/// has no meaning, so nothing is retried here.
pub fn render<S: DrawSurface>(surface: &mut S, layout: &PageLayout, payload: &[u8]) -> Result<()> {
    surface.begin_page(layout.page_width, layout.page_height);
    let image = surface.embed_image(payload)?;
    surface.draw_image(&image, &layout.image_placement);
    for guide in &layout.guides {
        surface.draw_line(guide);
    }
    for label in &layout.labels {
        surface.draw_text(label);
    }
    surface.end_page();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PaperSize, TileError};

    const TOLERANCE: f32 = 1e-3;

    fn tile(width_px: u32, height_px: u32) -> TileDescriptor {
        TileDescriptor {
            row: 0,
            col: 1,
            width_px,
            height_px,
            part_number: 2,
            total_parts: 4,
            paper: PaperSize::A4,
            dpi: 300,
        }
    }

    #[test]
    fn scaling_preserves_aspect_and_margin_bound() {
        let tile = tile(500, 350);
        let layout = layout_page(&tile, Orientation::Portrait, 8.0, 1, 4);

        let placed = &layout.image_placement;
        let tile_aspect = 500.0 / 350.0;
        let placed_aspect = placed.width / placed.height;
        assert!((tile_aspect - placed_aspect).abs() < TOLERANCE);

        assert!(placed.width <= layout.page_width - 8.0 * 1.2 + TOLERANCE);
        assert!(placed.height <= layout.page_height - 8.0 * 1.2 + TOLERANCE);
    }

    #[test]
    fn placement_is_centered() {
        let tile = tile(500, 350);
        let layout = layout_page(&tile, Orientation::Portrait, 8.0, 1, 4);

        let placed = &layout.image_placement;
        assert!((placed.center_x() - layout.page_width / 2.0).abs() < TOLERANCE);
        assert!((placed.center_y() - layout.page_height / 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn wide_tile_is_width_limited() {
        let tile = tile(4000, 100);
        let layout = layout_page(&tile, Orientation::Portrait, 8.0, 0, 1);

        let usable_w = layout.page_width - 8.0 * 1.2;
        assert!((layout.image_placement.width - usable_w).abs() < TOLERANCE);
    }

    #[test]
    fn landscape_swaps_page_dimensions() {
        let tile = tile(500, 350);
        let portrait = layout_page(&tile, Orientation::Portrait, 8.0, 0, 4);
        let landscape = layout_page(&tile, Orientation::Landscape, 8.0, 0, 4);

        assert!((portrait.page_width - landscape.page_height).abs() < TOLERANCE);
        assert!((portrait.page_height - landscape.page_width).abs() < TOLERANCE);
    }

    #[test]
    fn four_corner_guides() {
        let tile = tile(500, 350);
        let margin = 10.0;
        let layout = layout_page(&tile, Orientation::Portrait, margin, 0, 4);

        // Two segments per corner
        assert_eq!(layout.guides.len(), 8);

        // All endpoints stay on the page and within guide reach of an anchor
        for seg in &layout.guides {
            for p in [seg.start, seg.end] {
                assert!(p.x >= 0.0 && p.x <= layout.page_width);
                assert!(p.y >= 0.0 && p.y <= layout.page_height);
            }
            let dx = (seg.end.x - seg.start.x).abs();
            let dy = (seg.end.y - seg.start.y).abs();
            // Axis-aligned, fixed length
            assert!((dx - 15.0).abs() < TOLERANCE || (dy - 15.0).abs() < TOLERANCE);
            assert!(dx < TOLERANCE || dy < TOLERANCE);
        }

        // Top-left anchor sits margin units in from both edges
        let anchor = layout.guides[0].start;
        assert!((anchor.x - margin).abs() < TOLERANCE);
        assert!((anchor.y - margin).abs() < TOLERANCE);
    }

    #[test]
    fn labels_use_one_based_numbering() {
        let tile = tile(500, 350);
        let layout = layout_page(&tile, Orientation::Portrait, 8.0, 1, 4);

        assert_eq!(layout.labels[0].text, "Page 2 of 4");
        assert_eq!(layout.labels[0].align, TextAlign::Right);
        assert!((layout.labels[0].x - (layout.page_width - 30.0)).abs() < TOLERANCE);
        assert!((layout.labels[0].y - (layout.page_height - 20.0)).abs() < TOLERANCE);

        assert_eq!(
            layout.labels[1].text,
            "Position: Row 1, Column 2 | A4 | 300 DPI"
        );
        assert_eq!(layout.labels[1].align, TextAlign::Left);
        assert!((layout.labels[1].x - 30.0).abs() < TOLERANCE);
        assert!((layout.labels[1].y - 20.0).abs() < TOLERANCE);
    }

    // Minimal recording surface for exercising the draw sequence
    #[derive(Default)]
    struct RecordingSurface {
        pages: usize,
        images: usize,
        lines: usize,
        texts: Vec<String>,
        fail_embed: bool,
    }

    impl DrawSurface for RecordingSurface {
        type Image = ();

        fn begin_page(&mut self, _width: f32, _height: f32) {
            self.pages += 1;
        }

        fn embed_image(&mut self, _payload: &[u8]) -> Result<()> {
            if self.fail_embed {
                return Err(TileError::ImageEmbed("corrupt payload".to_string()));
            }
            Ok(())
        }

        fn draw_image(&mut self, _image: &(), _placement: &Rect) {
            self.images += 1;
        }

        fn draw_line(&mut self, _segment: &Segment) {
            self.lines += 1;
        }

        fn draw_text(&mut self, label: &Label) {
            self.texts.push(label.text.clone());
        }

        fn end_page(&mut self) {}

        fn finish(self) -> Result<Vec<u8>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn render_issues_expected_calls() {
        let tile = tile(500, 350);
        let layout = layout_page(&tile, Orientation::Portrait, 8.0, 1, 4);
        let mut surface = RecordingSurface::default();

        render(&mut surface, &layout, b"png-bytes").unwrap();

        assert_eq!(surface.pages, 1);
        assert_eq!(surface.images, 1);
        assert_eq!(surface.lines, 8);
        assert_eq!(surface.texts.len(), 2);
        assert!(surface.texts.contains(&"Page 2 of 4".to_string()));
    }

    #[test]
    fn render_propagates_embed_failure() {
        let tile = tile(500, 350);
        let layout = layout_page(&tile, Orientation::Portrait, 8.0, 0, 4);
        let mut surface = RecordingSurface {
            fail_embed: true,
            ..Default::default()
        };

        let err = render(&mut surface, &layout, b"garbage").unwrap_err();
        assert!(matches!(err, TileError::ImageEmbed(_)));
        // Nothing drawn after the failed embed
        assert_eq!(surface.images, 0);
        assert_eq!(surface.lines, 0);
    }
}
