//! Conversions between the raster's RGB layout and framebuffer formats.

use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelFormatError {
    #[error("rgb source length {0} is not a multiple of 3")]
    RaggedSource(usize),
    #[error("rgba destination holds {actual} bytes, expected {expected}")]
    DestinationSize { expected: usize, actual: usize },
}

/// Bytes an RGBA frame needs to hold `rgb_len` bytes of RGB data.
#[must_use]
pub fn rgba_len(rgb_len: usize) -> usize {
    rgb_len / 3 * 4
}

/// Copies RGB pixels into an RGBA frame with every pixel fully opaque.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % 3 != 0 {
        return Err(PixelFormatError::RaggedSource(src.len()));
    }

    let expected = rgba_len(src.len());
    if dst.len() != expected {
        return Err(PixelFormatError::DestinationSize {
            expected,
            actual: dst.len(),
        });
    }

    for (rgb, rgba) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        rgba[..3].copy_from_slice(rgb);
        rgba[3] = u8::MAX;
    }

    Ok(())
}
