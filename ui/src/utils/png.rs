//! PNG encoding for downloads.

use std::sync::Arc;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder as _, ImageError};
use simpleqr_business::RenderedCode;

pub const PNG_MIME: &str = "image/png";

pub fn encode_png(code: &RenderedCode) -> Result<Vec<u8>, ImageError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        code.rgba(),
        code.width() as u32,
        code.height() as u32,
        ExtendedColorType::Rgba8,
    )?;
    Ok(bytes)
}

/// Keeps the PNG of the current output so repeated downloads skip re-encoding.
#[derive(Debug, Default)]
pub struct PngCache {
    entry: Option<(u64, Arc<[u8]>)>,
}

impl PngCache {
    /// Returns the cached bytes for `code` when they are current, otherwise
    /// encodes the pixel buffer and caches the result.
    pub fn png_for(&mut self, code: &RenderedCode) -> Result<Arc<[u8]>, ImageError> {
        if let Some((generation, bytes)) = &self.entry
            && *generation == code.generation()
        {
            return Ok(Arc::clone(bytes));
        }
        let bytes: Arc<[u8]> = encode_png(code)?.into();
        self.entry = Some((code.generation(), Arc::clone(&bytes)));
        Ok(bytes)
    }
}
