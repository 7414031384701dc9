use tracing::trace;

use crate::controllers::chaos_game::ports::render_surface::RenderSurface;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::vertex::Vertex;
use crate::presenters::raster::line::line_pixels;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RasterPalette {
    pub background: Colour,
    pub outline: Colour,
    pub point: Colour,
}

impl Default for RasterPalette {
    fn default() -> Self {
        Self {
            background: Colour::WHITE,
            outline: Colour::BLACK,
            point: Colour::RED,
        }
    }
}

/// [`RenderSurface`] backed by an in-memory RGB pixel buffer.
///
/// Marks that fall outside the buffer are dropped; the engine does not clip.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    buffer: PixelBuffer,
    palette: RasterPalette,
}

impl RasterSurface {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self::with_palette(pixel_rect, RasterPalette::default())
    }

    #[must_use]
    pub fn with_palette(pixel_rect: PixelRect, palette: RasterPalette) -> Self {
        Self {
            buffer: PixelBuffer::filled(pixel_rect, palette.background),
            palette,
        }
    }

    #[must_use]
    pub fn pixel_buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn into_pixel_buffer(self) -> PixelBuffer {
        self.buffer
    }

    #[must_use]
    pub fn palette(&self) -> RasterPalette {
        self.palette
    }

    fn plot(&mut self, pixel: Point, colour: Colour) {
        if self.buffer.set_pixel(pixel, colour).is_err() {
            trace!(x = pixel.x, y = pixel.y, "mark outside raster, skipped");
        }
    }
}

/// Pixel whose square contains `vertex`, like `fillRect(x, y, 1, 1)`.
fn to_pixel(vertex: Vertex) -> Point {
    Point {
        x: vertex.x.floor() as i32,
        y: vertex.y.floor() as i32,
    }
}

impl RenderSurface for RasterSurface {
    fn clear(&mut self) {
        self.buffer.fill(self.palette.background);
    }

    fn draw_polygon(&mut self, vertices: &[Vertex]) {
        let Some(&last) = vertices.last() else {
            return;
        };

        let mut previous = last;
        for &vertex in vertices {
            for pixel in line_pixels(to_pixel(previous), to_pixel(vertex)) {
                self.plot(pixel, self.palette.outline);
            }
            previous = vertex;
        }
    }

    fn draw_point(&mut self, vertex: Vertex) {
        self.plot(to_pixel(vertex), self.palette.point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::triangle::Triangle;

    fn surface(size: u32) -> RasterSurface {
        RasterSurface::new(PixelRect::from_size(size, size).unwrap())
    }

    fn count(surface: &RasterSurface, colour: Colour) -> usize {
        surface
            .pixel_buffer()
            .buffer()
            .chunks_exact(3)
            .filter(|pixel| *pixel == [colour.r, colour.g, colour.b])
            .count()
    }

    #[test]
    fn test_new_surface_is_background() {
        let surface = surface(4);

        assert_eq!(count(&surface, Colour::WHITE), 16);
    }

    #[test]
    fn test_draw_point_marks_containing_pixel() {
        let mut surface = surface(10);

        surface.draw_point(Vertex::new(3.7, 5.2));

        assert_eq!(surface.pixel_buffer().pixel(Point { x: 3, y: 5 }), Ok(Colour::RED));
        assert_eq!(count(&surface, Colour::RED), 1);
    }

    #[test]
    fn test_points_outside_are_ignored() {
        let mut surface = surface(10);

        surface.draw_point(Vertex::new(-0.5, 2.0));
        surface.draw_point(Vertex::new(10.0, 2.0));

        assert_eq!(count(&surface, Colour::RED), 0);
    }

    #[test]
    fn test_clear_erases_marks() {
        let mut surface = surface(10);
        surface.draw_point(Vertex::new(1.0, 1.0));

        surface.clear();

        assert_eq!(count(&surface, Colour::WHITE), 100);
    }

    #[test]
    fn test_draw_polygon_closes_outline() {
        let mut surface = surface(700);
        let triangle = Triangle::reference();

        surface.draw_polygon(&triangle.vertices());

        let buffer = surface.pixel_buffer();
        for vertex in triangle.vertices() {
            assert_eq!(buffer.pixel(to_pixel(vertex)), Ok(Colour::BLACK));
        }
        // one pixel on the base, one on the closing edge back to the apex
        assert_eq!(buffer.pixel(Point { x: 350, y: 650 }), Ok(Colour::BLACK));
        assert_eq!(buffer.pixel(Point { x: 500, y: 350 }), Ok(Colour::BLACK));
        assert_eq!(buffer.pixel(Point { x: 350, y: 450 }), Ok(Colour::WHITE));
    }

    #[test]
    fn test_draw_empty_polygon_is_noop() {
        let mut surface = surface(4);

        surface.draw_polygon(&[]);

        assert_eq!(count(&surface, Colour::WHITE), 16);
    }

    #[test]
    fn test_custom_palette() {
        let palette = RasterPalette {
            background: Colour::BLACK,
            outline: Colour::WHITE,
            point: Colour { r: 0, g: 255, b: 0 },
        };
        let mut surface = RasterSurface::with_palette(PixelRect::from_size(3, 3).unwrap(), palette);

        surface.draw_point(Vertex::new(1.0, 1.0));

        assert_eq!(
            surface.pixel_buffer().pixel(Point { x: 1, y: 1 }),
            Ok(Colour { r: 0, g: 255, b: 0 })
        );
        assert_eq!(count(&surface, Colour::BLACK), 8);
    }
}
