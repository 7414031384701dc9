//! Sierpinski triangle by the chaos game: an incremental, cancellable point
//! generator, a clock-injected scheduler that feeds a drawing surface, and
//! file and window front ends.

mod adapters;
mod controllers;
mod core;
mod errors;
mod input;
mod presenters;

pub use crate::controllers::chaos_game::config::{DEFAULT_STEP_DELAY, SchedulerConfig};
pub use crate::controllers::chaos_game::driver::{DriveError, RunOutcome, drive_to_end};
pub use crate::controllers::chaos_game::events::ChaosGameEvent;
pub use crate::controllers::chaos_game::ports::presenter::ChaosGamePresenterPort;
pub use crate::controllers::chaos_game::ports::render_surface::RenderSurface;
pub use crate::controllers::chaos_game::scheduler::{ChaosGameScheduler, TickOutcome};
pub use crate::controllers::cli::config::{DEFAULT_CANVAS_SIZE, DEFAULT_OUTPUT_PATH, RenderConfig};
pub use crate::controllers::cli::render_to_file::RenderToFileController;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::adapters::pixel_format::{PixelFormatError, copy_rgb_to_rgba, rgba_len};
pub use crate::core::actions::cancellation::{CancelToken, DeadlineCancel, NeverCancel};
pub use crate::core::actions::chaos_game::errors::{GenerationError, GeneratorOperation};
pub use crate::core::actions::chaos_game::generator::{ChaosGameGenerator, StepOutcome};
pub use crate::core::actions::chaos_game::progress::{
    COMPLETE_PERCENTAGE, percentage, progress_percentage,
};
pub use crate::core::actions::chaos_game::state::{GenerationState, GenerationStatus};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::triangle::{GeometryError, Triangle};
pub use crate::core::data::vertex::Vertex;
pub use crate::core::sampling::initial_point::{barycentric_point, sample_initial_point};
pub use crate::core::sampling::vertex_selector::select_vertex;
pub use crate::errors::ChaosGameError;
pub use crate::input::cli::iteration_count::{
    DEFAULT_ITERATION_COUNT, ValidationError, parse_iteration_count,
};
pub use crate::presenters::file::ppm::PpmFilePresenter;
pub use crate::presenters::log::progress_logger::ProgressLogger;
pub use crate::presenters::raster::line::line_pixels;
pub use crate::presenters::raster::surface::{RasterPalette, RasterSurface};
pub use crate::presenters::status::run_status::{RunStatus, RunStatusLabel};

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::{GuiConfig, RunGuiCommand, RunGuiError};
