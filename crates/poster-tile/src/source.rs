//! Source image loading and region extraction

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::constants::MAX_INPUT_BYTES;
use crate::types::{Result, TileError};

/// Input formats accepted for the source image
pub const SUPPORTED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::WebP,
    ImageFormat::Bmp,
];

/// A decoded, pixel-addressable source image.
#[derive(Debug)]
pub struct SourceImage {
    image: DynamicImage,
}

impl SourceImage {
    /// Decode raw bytes, enforcing the format allowlist and size ceiling.
    ///
    /// Both checks run before any pixel work: an unsupported or oversize
    /// input never reaches partitioning.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() as u64 > MAX_INPUT_BYTES {
            return Err(TileError::FileTooLarge {
                actual: bytes.len() as u64,
                limit: MAX_INPUT_BYTES,
            });
        }

        let format = image::guess_format(bytes)
            .map_err(|_| TileError::UnsupportedFormat("unrecognized data".to_string()))?;
        if !SUPPORTED_FORMATS.contains(&format) {
            return Err(TileError::UnsupportedFormat(format!("{format:?}")));
        }

        let image = image::load_from_memory_with_format(bytes, format)?;
        Ok(Self { image })
    }

    /// Read and decode an image file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path.as_ref()).await?;
        // Decoding is CPU-bound, spawn blocking
        tokio::task::spawn_blocking(move || Self::from_bytes(&bytes)).await?
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Extract a rectangular region as a self-contained PNG payload.
    ///
    /// The source is not mutated; the crop is re-encoded so the drawing
    /// surface can embed it without touching the original bytes.
    pub fn extract_region(&self, x: u32, y: u32, width: u32, height: u32) -> Result<Vec<u8>> {
        let region = self.image.crop_imm(x, y, width, height);
        let mut payload = Cursor::new(Vec::new());
        region.write_to(&mut payload, ImageFormat::Png)?;
        Ok(payload.into_inner())
    }
}
