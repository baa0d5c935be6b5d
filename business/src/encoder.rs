//! Seam for the QR encoder collaborator.

use std::sync::Arc;

use crate::{EncodeError, RenderSettings};

/// Turns render settings into pixels.
///
/// Implementations report [`EncodeError::Unavailable`] when their backing
/// library cannot be used; the controller also copes with no encoder at all.
pub trait Encoder {
    fn encode(&self, settings: &RenderSettings) -> Result<RenderedCode, EncodeError>;
}

/// A rendered code: a square RGBA8 buffer, row-major and tightly packed.
///
/// Cheap to clone. Never mutated after creation; a re-render replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCode {
    width: usize,
    height: usize,
    rgba: Arc<[u8]>,
    generation: u64,
}

impl RenderedCode {
    /// Fails when `rgba` is not exactly `width * height * 4` bytes.
    pub fn new(width: usize, height: usize, rgba: Vec<u8>) -> Result<Self, EncodeError> {
        let expected = width
            .checked_mul(height)
            .and_then(|px| px.checked_mul(4))
            .filter(|len| *len > 0);
        if expected != Some(rgba.len()) {
            return Err(EncodeError::Invalid(format!(
                "{width}x{height} image with {} bytes",
                rgba.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba: rgba.into(),
            generation: 0,
        })
    }

    pub(crate) fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Changes on every render; lets the shell tell stale textures apart.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_byte_length() {
        assert!(RenderedCode::new(2, 2, vec![0; 16]).is_ok());
        assert!(matches!(
            RenderedCode::new(2, 2, vec![0; 15]),
            Err(EncodeError::Invalid(_))
        ));
        assert!(RenderedCode::new(0, 0, Vec::new()).is_err());
    }
}
