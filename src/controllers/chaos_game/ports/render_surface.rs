use crate::core::data::vertex::Vertex;

/// Drawing capability injected into the scheduler.
pub trait RenderSurface {
    /// Erases whatever a previous run drew.
    fn clear(&mut self);

    /// Outlines the target shape. Called once per run, right after `clear`.
    fn draw_polygon(&mut self, vertices: &[Vertex]);

    /// Plots a single pixel-sized mark.
    fn draw_point(&mut self, vertex: Vertex);
}
