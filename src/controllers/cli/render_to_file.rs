use std::path::Path;
use std::time::Instant;

use rand::Rng;
use rand::rngs::SmallRng;
use tracing::info;

use crate::controllers::chaos_game::config::SchedulerConfig;
use crate::controllers::chaos_game::driver::{RunOutcome, drive_to_end};
use crate::controllers::chaos_game::scheduler::ChaosGameScheduler;
use crate::controllers::cli::config::RenderConfig;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::cancellation::DeadlineCancel;
use crate::core::actions::chaos_game::generator::ChaosGameGenerator;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::errors::ChaosGameError;
use crate::presenters::log::progress_logger::ProgressLogger;
use crate::presenters::raster::surface::RasterSurface;

/// Runs one chaos game to the end on the current thread and hands the
/// resulting raster to a file presenter.
pub struct RenderToFileController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> RenderToFileController<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter, buffer: None }
    }

    pub fn generate(&mut self, config: &RenderConfig) -> Result<RunOutcome, ChaosGameError> {
        let generator = match config.seed {
            Some(seed) => ChaosGameGenerator::seeded(seed),
            None => ChaosGameGenerator::<SmallRng>::from_entropy(),
        };

        self.generate_with(generator, config)
    }

    /// Like [`generate`](Self::generate) with a caller-supplied generator.
    pub fn generate_with<R: Rng>(
        &mut self,
        generator: ChaosGameGenerator<R>,
        config: &RenderConfig,
    ) -> Result<RunOutcome, ChaosGameError> {
        let pixel_rect = PixelRect::from_size(config.width, config.height)?;
        let mut scheduler = ChaosGameScheduler::new(
            generator,
            RasterSurface::new(pixel_rect),
            ProgressLogger::default(),
            SchedulerConfig {
                step_delay: config.step_delay,
            },
        );

        let started = Instant::now();
        scheduler.start(config.triangle, config.iterations, started)?;

        let cancel = config.time_limit.map(|limit| DeadlineCancel::at(started + limit));
        let outcome = drive_to_end(&mut scheduler, &cancel)?;

        info!(
            ?outcome,
            emitted_points = scheduler.generator().state().emitted_points(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "render finished"
        );

        let (_, surface, _) = scheduler.into_parts();
        self.buffer = Some(surface.into_pixel_buffer());

        Ok(outcome)
    }

    #[must_use]
    pub fn pixel_buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), ChaosGameError> {
        let buffer = self.buffer.as_ref().ok_or(ChaosGameError::NothingGenerated)?;
        let filepath = filepath.as_ref();

        self.presenter.present(buffer, filepath)?;
        info!(path = %filepath.display(), "image written");

        Ok(())
    }
}
