use std::time::Duration;

use thiserror::Error;
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::controllers::chaos_game::config::DEFAULT_STEP_DELAY;
use crate::core::actions::chaos_game::errors::GenerationError;
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::data::triangle::Triangle;
use crate::input::cli::iteration_count::DEFAULT_ITERATION_COUNT;
use crate::input::gui::app::{GuiApp, WINDOW_TITLE};
use crate::presenters::pixels::presenter::PixelsPresenterError;

#[derive(Debug, Error)]
pub enum RunGuiError {
    #[error(transparent)]
    EventLoop(#[from] EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] OsError),
    #[error(transparent)]
    Presenter(#[from] PixelsPresenterError),
    #[error(transparent)]
    PixelRect(#[from] PixelRectError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuiConfig {
    pub canvas_size: u32,
    pub triangle: Triangle,
    pub iterations: u64,
    pub seed: Option<u64>,
    pub step_delay: Duration,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            canvas_size: 700,
            triangle: Triangle::reference(),
            iterations: DEFAULT_ITERATION_COUNT,
            seed: None,
            step_delay: DEFAULT_STEP_DELAY,
        }
    }
}

pub struct RunGuiCommand {
    config: GuiConfig,
}

impl RunGuiCommand {
    #[must_use]
    pub fn new(config: GuiConfig) -> Self {
        Self { config }
    }

    /// Opens the window and animates runs until it is closed.
    pub fn execute(&self) -> Result<(), RunGuiError> {
        let event_loop = EventLoop::new()?;
        let size = f64::from(self.config.canvas_size);

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(size, size))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        let app = GuiApp::new(window, &self.config)?;

        app.run(event_loop)
    }
}
