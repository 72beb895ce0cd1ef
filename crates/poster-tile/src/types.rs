use thiserror::Error;

#[derive(Error, Debug)]
pub enum TileError {
    #[error("No source image loaded")]
    NoSourceImage,
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),
    #[error("Image file too large: {actual} bytes (limit {limit})")]
    FileTooLarge { actual: u64, limit: u64 },
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Failed to embed tile image: {0}")]
    ImageEmbed(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, TileError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for all standard sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Tabloid => (279.4, 431.8),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    /// Pixel-equivalent dimensions at the given resolution, orientation applied
    pub fn dimensions_px(self, dpi: u32, orientation: Orientation) -> (f32, f32) {
        let (w_mm, h_mm) = self.dimensions_with_orientation(orientation);
        (
            crate::constants::mm_to_px(w_mm, dpi),
            crate::constants::mm_to_px(h_mm, dpi),
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            PaperSize::A3 => "A3",
            PaperSize::A4 => "A4",
            PaperSize::A5 => "A5",
            PaperSize::Letter => "Letter",
            PaperSize::Legal => "Legal",
            PaperSize::Tabloid => "Tabloid",
        }
    }
}

/// Named grid configuration chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LayoutPattern {
    pub id: &'static str,
    pub rows: u32,
    pub cols: u32,
    pub paper: PaperSize,
    pub orientation: Orientation,
}

impl LayoutPattern {
    pub fn tile_count(&self) -> usize {
        (self.rows * self.cols) as usize
    }
}

/// One rectangular region of the source image, corresponding to one output page.
///
/// Produced as a batch by `partition` and owned by the export operation;
/// no tile outlives the export that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileDescriptor {
    /// Row index (0-based, from the top)
    pub row: u32,
    /// Column index (0-based, from the left)
    pub col: u32,
    /// Tile width in source pixels
    pub width_px: u32,
    /// Tile height in source pixels
    pub height_px: u32,
    /// 1-based sequence number in row-major order
    pub part_number: usize,
    /// Total tiles in the batch (rows * cols)
    pub total_parts: usize,
    /// Target paper for the page this tile lands on
    pub paper: PaperSize,
    /// Resolution used to convert between physical and pixel units
    pub dpi: u32,
}

impl TileDescriptor {
    /// Left edge of this tile in source pixel space
    pub fn source_x(&self) -> u32 {
        self.col * self.width_px
    }

    /// Top edge of this tile in source pixel space
    pub fn source_y(&self) -> u32 {
        self.row * self.height_px
    }
}

/// Axis-aligned rectangle in page layout units (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// A point in page layout units (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A straight guide segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// Horizontal text anchoring relative to the label position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Right,
}

/// A text annotation placed on a page
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub align: TextAlign,
}

/// Complete placement geometry for one page.
///
/// Recomputed fresh per tile, consumed immediately by the drawing step,
/// never persisted. All values are in page pixels at the tile's DPI with
/// the origin at the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub image_placement: Rect,
    pub guides: Vec<Segment>,
    pub labels: Vec<Label>,
}
