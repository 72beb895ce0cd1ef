//! Export orchestration
//!
//! Drives the full pipeline: resolve pattern, partition, then compose
//! and draw pages strictly in part-number order. A single mutable PDF
//! surface is threaded through the loop; page ordering in the output is
//! monotonic by construction. Any failure aborts the remaining tiles —
//! a partially generated document is never returned.

use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_DPI, DEFAULT_MARGIN, OUTPUT_SUFFIX};
use crate::patterns::{DEFAULT_PATTERN_ID, resolve_pattern};
use crate::source::SourceImage;
use crate::surface::{DrawSurface, PdfSurface};
use crate::types::Result;
use crate::{compose, grid};

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExportOptions {
    /// Layout pattern id; unknown ids fall back to the default pattern
    pub pattern: String,
    /// Resolution for paper sizing
    pub dpi: u32,
    /// Page margin in layout units
    pub margin: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN_ID.to_string(),
            dpi: DEFAULT_DPI,
            margin: DEFAULT_MARGIN,
        }
    }
}

/// Split the source image and serialize the multi-page document.
pub async fn export_pdf(source: SourceImage, options: &ExportOptions) -> Result<Vec<u8>> {
    let options = options.clone();
    // Page composition and PDF encoding are CPU-bound, spawn blocking
    tokio::task::spawn_blocking(move || export_sync(&source, &options)).await?
}

/// Synchronous core of [`export_pdf`].
pub fn export_sync(source: &SourceImage, options: &ExportOptions) -> Result<Vec<u8>> {
    let mut surface = PdfSurface::new("Divided image", options.dpi);
    render_tiles(source, options, &mut surface)?;
    surface.finish()
}

/// Partition the source and draw every tile onto the surface, strictly
/// in part-number order. The page index handed to composition is the
/// tile's part number, so output page labels follow partition order.
fn render_tiles<S: DrawSurface>(
    source: &SourceImage,
    options: &ExportOptions,
    surface: &mut S,
) -> Result<()> {
    let pattern = resolve_pattern(&options.pattern);
    let tiles = grid::partition(source.width(), source.height(), pattern, options.dpi)?;

    for tile in &tiles {
        let payload = source.extract_region(
            tile.source_x(),
            tile.source_y(),
            tile.width_px,
            tile.height_px,
        )?;
        let layout = compose::layout_page(
            tile,
            pattern.orientation,
            options.margin,
            tile.part_number - 1,
            tile.total_parts,
        );
        compose::render(&mut *surface, &layout, &payload)?;
    }

    Ok(())
}

/// Output document path for an input image: same directory and stem,
/// with the divided suffix and a pdf extension.
pub fn output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.pdf"))
}

/// Load an image file, export it, and write the document next to it
/// (or to an explicit output path). Returns the path written.
pub async fn export_file(
    input: impl AsRef<Path>,
    output: Option<PathBuf>,
    options: &ExportOptions,
) -> Result<PathBuf> {
    let input = input.as_ref();
    let output = output.unwrap_or_else(|| output_path(input));

    let source = SourceImage::load(input).await?;
    let bytes = export_pdf(source, options).await?;
    tokio::fs::write(&output, bytes).await?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Label, Rect, Segment};

    // Surface that keeps label text only, for checking page ordering
    #[derive(Default)]
    struct LabelCapture {
        texts: Vec<String>,
    }

    impl DrawSurface for LabelCapture {
        type Image = ();

        fn begin_page(&mut self, _width: f32, _height: f32) {}

        fn embed_image(&mut self, _payload: &[u8]) -> Result<()> {
            Ok(())
        }

        fn draw_image(&mut self, _image: &(), _placement: &Rect) {}

        fn draw_line(&mut self, _segment: &Segment) {}

        fn draw_text(&mut self, label: &Label) {
            self.texts.push(label.text.clone());
        }

        fn end_page(&mut self) {}

        fn finish(self) -> Result<Vec<u8>> {
            Ok(Vec::new())
        }
    }

    fn png_source(width: u32, height: u32) -> SourceImage {
        let img = image::RgbImage::new(width, height);
        let mut bytes = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut bytes, image::ImageFormat::Png)
            .unwrap();
        SourceImage::from_bytes(&bytes.into_inner()).unwrap()
    }

    #[test]
    fn export_labels_pages_in_part_order() {
        let source = png_source(200, 140);
        let mut surface = LabelCapture::default();

        render_tiles(&source, &ExportOptions::default(), &mut surface).unwrap();

        let pages: Vec<&str> = surface
            .texts
            .iter()
            .filter(|t| t.starts_with("Page "))
            .map(String::as_str)
            .collect();
        assert_eq!(
            pages,
            vec!["Page 1 of 4", "Page 2 of 4", "Page 3 of 4", "Page 4 of 4"]
        );

        let positions: Vec<&str> = surface
            .texts
            .iter()
            .filter(|t| t.starts_with("Position:"))
            .map(String::as_str)
            .collect();
        assert_eq!(positions[0], "Position: Row 1, Column 1 | A4 | 300 DPI");
        assert_eq!(positions[3], "Position: Row 2, Column 2 | A4 | 300 DPI");
    }

    #[test]
    fn output_path_appends_suffix() {
        let out = output_path(Path::new("/tmp/photos/skyline.png"));
        assert_eq!(out, PathBuf::from("/tmp/photos/skyline_divided.pdf"));
    }

    #[test]
    fn output_path_without_stem_still_names_a_file() {
        let out = output_path(Path::new("skyline.jpeg"));
        assert_eq!(out, PathBuf::from("skyline_divided.pdf"));
    }
}
