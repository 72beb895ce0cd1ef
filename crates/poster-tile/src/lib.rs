mod compose;
mod constants;
mod export;
mod grid;
mod patterns;
mod source;
mod stats;
mod surface;
mod types;

pub use compose::{layout_page, render};
pub use constants::{DEFAULT_DPI, DEFAULT_MARGIN, DEFAULT_UI_MARGIN, MAX_INPUT_BYTES};
pub use export::{ExportOptions, export_file, export_pdf, export_sync, output_path};
pub use grid::partition;
pub use patterns::{
    DEFAULT_PATTERN_ID, all_patterns, default_pattern, find_pattern, resolve_pattern,
};
pub use source::{SUPPORTED_FORMATS, SourceImage};
pub use stats::{ExportStatistics, calculate_statistics};
pub use surface::{DrawSurface, EmbeddedImage, PdfSurface};
pub use types::*;
