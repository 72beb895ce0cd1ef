//! Page-drawing surface
//!
//! `DrawSurface` is the seam between page composition and document
//! serialization: composition only needs "place pixels here, draw a
//! line, draw text". `PdfSurface` is the production implementation over
//! printpdf; tests substitute recording surfaces.

use printpdf::{
    BuiltinFont, Color, Line, LinePoint, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Pt,
    RawImage, Rgb, TextItem, XObjectId, XObjectTransform,
};

use crate::constants::{GUIDE_LINE_WIDTH_PT, HELVETICA_CHAR_WIDTH_RATIO, MM_PER_INCH, px_to_pt};
use crate::types::{Label, Rect, Result, Segment, TextAlign, TileError};

/// Drawing primitives required by page composition.
///
/// Coordinates are in page pixels at the surface's DPI, origin top-left;
/// implementations own the conversion to their native space.
pub trait DrawSurface {
    type Image;

    /// Start a new page of the given dimensions.
    fn begin_page(&mut self, width: f32, height: f32);

    /// Decode an image payload into an embeddable handle.
    fn embed_image(&mut self, payload: &[u8]) -> Result<Self::Image>;

    /// Place an embedded image into the given rectangle.
    fn draw_image(&mut self, image: &Self::Image, placement: &Rect);

    /// Stroke a guide segment.
    fn draw_line(&mut self, segment: &Segment);

    /// Draw a text label.
    fn draw_text(&mut self, label: &Label);

    /// Finish the current page.
    fn end_page(&mut self);

    /// Serialize the whole multi-page document.
    fn finish(self) -> Result<Vec<u8>>;
}

/// Handle to an image embedded in a [`PdfSurface`]
#[derive(Debug)]
pub struct EmbeddedImage {
    id: XObjectId,
    width_px: usize,
    height_px: usize,
}

/// PDF implementation of [`DrawSurface`].
///
/// Pages are emitted at true physical paper size: layout units convert
/// to points by `72 / dpi`, and the y axis flips from top-left layout
/// space to PDF bottom-left space.
pub struct PdfSurface {
    doc: PdfDocument,
    dpi: u32,
    page_width: f32,
    page_height: f32,
    ops: Vec<Op>,
}

impl PdfSurface {
    pub fn new(title: &str, dpi: u32) -> Self {
        Self {
            doc: PdfDocument::new(title),
            dpi,
            page_width: 0.0,
            page_height: 0.0,
            ops: Vec::new(),
        }
    }

    #[inline]
    fn to_pt(&self, v: f32) -> f32 {
        px_to_pt(v, self.dpi)
    }

    /// Convert a layout-space y coordinate to PDF space (origin flips)
    #[inline]
    fn flip_y(&self, y: f32) -> f32 {
        self.to_pt(self.page_height - y)
    }
}

impl DrawSurface for PdfSurface {
    type Image = EmbeddedImage;

    fn begin_page(&mut self, width: f32, height: f32) {
        self.page_width = width;
        self.page_height = height;
        self.ops = Vec::new();
    }

    fn embed_image(&mut self, payload: &[u8]) -> Result<EmbeddedImage> {
        let mut warnings = Vec::new();
        let raw = RawImage::decode_from_bytes(payload, &mut warnings)
            .map_err(TileError::ImageEmbed)?;
        let (width_px, height_px) = (raw.width, raw.height);
        let id = self.doc.add_image(&raw);
        Ok(EmbeddedImage {
            id,
            width_px,
            height_px,
        })
    }

    fn draw_image(&mut self, image: &EmbeddedImage, placement: &Rect) {
        // Anchor is the image's lower-left corner in PDF space. With the
        // transform DPI pinned to 72, one source pixel maps to one point
        // before scaling, so the scale factors are target size over
        // source size directly.
        let x_pt = self.to_pt(placement.x);
        let y_pt = self.flip_y(placement.bottom());
        let scale_x = self.to_pt(placement.width) / image.width_px as f32;
        let scale_y = self.to_pt(placement.height) / image.height_px as f32;

        self.ops.push(Op::UseXobject {
            id: image.id.clone(),
            transform: XObjectTransform {
                translate_x: Some(Pt(x_pt)),
                translate_y: Some(Pt(y_pt)),
                rotate: None,
                scale_x: Some(scale_x),
                scale_y: Some(scale_y),
                dpi: Some(72.0),
            },
        });
    }

    fn draw_line(&mut self, segment: &Segment) {
        self.ops.push(Op::SetOutlineColor {
            col: Color::Rgb(Rgb {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                icc_profile: None,
            }),
        });
        self.ops.push(Op::SetOutlineThickness {
            pt: Pt(GUIDE_LINE_WIDTH_PT),
        });
        self.ops.push(Op::DrawLine {
            line: Line {
                points: vec![
                    LinePoint {
                        p: printpdf::Point {
                            x: Pt(self.to_pt(segment.start.x)),
                            y: Pt(self.flip_y(segment.start.y)),
                        },
                        bezier: false,
                    },
                    LinePoint {
                        p: printpdf::Point {
                            x: Pt(self.to_pt(segment.end.x)),
                            y: Pt(self.flip_y(segment.end.y)),
                        },
                        bezier: false,
                    },
                ],
                is_closed: false,
            },
        });
    }

    fn draw_text(&mut self, label: &Label) {
        let x = match label.align {
            TextAlign::Left => label.x,
            TextAlign::Right => {
                let text_width =
                    label.text.chars().count() as f32 * label.size * HELVETICA_CHAR_WIDTH_RATIO;
                label.x - text_width
            }
        };

        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor {
            pos: printpdf::Point {
                x: Pt(self.to_pt(x)),
                y: Pt(self.flip_y(label.y)),
            },
        });
        self.ops.push(Op::SetFontSizeBuiltinFont {
            font: BuiltinFont::Helvetica,
            size: Pt(self.to_pt(label.size)),
        });
        self.ops.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(label.text.clone())],
            font: BuiltinFont::Helvetica,
        });
        self.ops.push(Op::EndTextSection);
    }

    fn end_page(&mut self) {
        let width_mm = self.page_width / self.dpi as f32 * MM_PER_INCH;
        let height_mm = self.page_height / self.dpi as f32 * MM_PER_INCH;
        let ops = std::mem::take(&mut self.ops);
        self.doc
            .pages
            .push(PdfPage::new(Mm(width_mm), Mm(height_mm), ops));
    }

    fn finish(self) -> Result<Vec<u8>> {
        let mut warnings = Vec::new();
        Ok(self.doc.save(&PdfSaveOptions::default(), &mut warnings))
    }
}
