use pixels::{Pixels, SurfaceTexture};
use thiserror::Error;
use winit::window::Window;

use crate::adapters::pixel_format::{PixelFormatError, copy_rgb_to_rgba};
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Error)]
pub enum PixelsPresenterError {
    #[error(transparent)]
    Pixels(#[from] pixels::Error),
    #[error(transparent)]
    Texture(#[from] pixels::TextureError),
    #[error(transparent)]
    Format(#[from] PixelFormatError),
}

/// Shows a [`PixelBuffer`] in a window. The framebuffer keeps the canvas
/// size; `pixels` scales it to whatever the window surface is.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    surface_width: u32,
    surface_height: u32,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Result<Self, PixelsPresenterError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(canvas_width, canvas_height, surface_texture)?;

        Ok(Self {
            pixels,
            surface_width: size.width,
            surface_height: size.height,
        })
    }

    /// Copies the raster into the framebuffer and presents it.
    pub fn present(&mut self, buffer: &PixelBuffer) -> Result<(), PixelsPresenterError> {
        // minimised
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        copy_rgb_to_rgba(buffer.buffer(), self.pixels.frame_mut())?;
        self.pixels.render()?;

        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), PixelsPresenterError> {
        self.surface_width = width;
        self.surface_height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;

        Ok(())
    }
}
