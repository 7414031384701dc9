use std::path::PathBuf;
use std::time::Duration;

use crate::core::data::triangle::{GeometryError, Triangle};
use crate::core::data::vertex::Vertex;
use crate::input::cli::iteration_count::DEFAULT_ITERATION_COUNT;

pub const DEFAULT_CANVAS_SIZE: u32 = 700;
pub const DEFAULT_OUTPUT_PATH: &str = "output/sierpinski.ppm";

/// Everything a one-shot render to disk needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub triangle: Triangle,
    pub iterations: u64,
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,
    pub step_delay: Duration,
    /// Cancels the run once exceeded.
    pub time_limit: Option<Duration>,
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE,
            height: DEFAULT_CANVAS_SIZE,
            triangle: Triangle::reference(),
            iterations: DEFAULT_ITERATION_COUNT,
            seed: None,
            step_delay: Duration::ZERO,
            time_limit: None,
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl RenderConfig {
    /// Square canvas of `size` pixels with the reference triangle scaled to fit.
    pub fn with_canvas_size(mut self, size: u32) -> Result<Self, GeometryError> {
        self.width = size;
        self.height = size;
        self.triangle = scaled_reference(f64::from(size) / f64::from(DEFAULT_CANVAS_SIZE))?;

        Ok(self)
    }
}

fn scaled_reference(scale: f64) -> Result<Triangle, GeometryError> {
    let scale_vertex = |vertex: Vertex| vertex * scale;
    let reference = Triangle::reference();

    Triangle::new(
        scale_vertex(reference.top()),
        scale_vertex(reference.bottom_left()),
        scale_vertex(reference.bottom_right()),
    )
}
