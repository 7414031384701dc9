use std::time::Instant;

use rand::Rng;
use tracing::{debug, info, trace, warn};

use crate::controllers::chaos_game::config::SchedulerConfig;
use crate::controllers::chaos_game::events::ChaosGameEvent;
use crate::controllers::chaos_game::ports::presenter::ChaosGamePresenterPort;
use crate::controllers::chaos_game::ports::render_surface::RenderSurface;
use crate::core::actions::chaos_game::errors::GenerationError;
use crate::core::actions::chaos_game::generator::{ChaosGameGenerator, StepOutcome};
use crate::core::actions::chaos_game::state::GenerationStatus;
use crate::core::data::triangle::Triangle;
use crate::core::data::vertex::Vertex;

/// A queued generator step. It only runs if its generation still matches
/// the active run when it comes due.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct PendingStep {
    generation: u64,
    due: Instant,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing is queued.
    Idle,
    /// A step is queued but not due yet.
    Waiting { due: Instant },
    /// One point was emitted and the next step queued.
    Stepped,
    /// The run finished during this tick.
    Completed,
    /// A queued step belonged to a run that is no longer active and was dropped.
    Stale,
}

pub struct ChaosGameScheduler<R, S, P>
where
    R: Rng,
    S: RenderSurface,
    P: ChaosGamePresenterPort,
{
    generator: ChaosGameGenerator<R>,
    surface: S,
    presenter: P,
    config: SchedulerConfig,
    generation: u64,
    pending: Option<PendingStep>,
}

impl<R, S, P> ChaosGameScheduler<R, S, P>
where
    R: Rng,
    S: RenderSurface,
    P: ChaosGamePresenterPort,
{
    pub fn new(
        generator: ChaosGameGenerator<R>,
        surface: S,
        presenter: P,
        config: SchedulerConfig,
    ) -> Self {
        Self {
            generator,
            surface,
            presenter,
            config,
            generation: 0,
            pending: None,
        }
    }

    /// Begins a new run and returns its generation id.
    ///
    /// Fails with [`GenerationError::AlreadyRunning`] while a run is active;
    /// callers must cancel first. The initial point and the first progress
    /// report are delivered before this returns. A zero-iteration run also
    /// completes before this returns; anything longer is left to `tick`.
    pub fn start(
        &mut self,
        triangle: Triangle,
        total_iterations: u64,
        now: Instant,
    ) -> Result<u64, GenerationError> {
        let first_point = self.generator.start(triangle, total_iterations).inspect_err(|_| {
            warn!(generation = self.generation, "rejected start while a run is in progress");
        })?;

        self.generation += 1;
        self.pending = None;

        info!(
            generation = self.generation,
            total_iterations,
            step_delay_ms = self.config.step_delay.as_millis() as u64,
            "starting chaos game run"
        );

        self.surface.clear();
        self.surface.draw_polygon(&triangle.vertices());
        self.deliver(first_point);

        if self.generator.state().remaining_iterations() == 0 {
            self.run_step(now)?;
        } else {
            self.queue_next(now);
        }

        Ok(self.generation)
    }

    /// Runs the queued step if it is due at `now`. At most one point is
    /// emitted per call.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let Some(pending) = self.pending else {
            return TickOutcome::Idle;
        };

        if pending.due > now {
            return TickOutcome::Waiting { due: pending.due };
        }

        self.pending = None;

        if pending.generation != self.generation || !self.generator.is_running() {
            debug!(
                queued_generation = pending.generation,
                active_generation = self.generation,
                status = %self.generator.status(),
                "dropping stale step"
            );
            return TickOutcome::Stale;
        }

        match self.run_step(now) {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(%error, generation = self.generation, "scheduled step failed");
                TickOutcome::Stale
            }
        }
    }

    /// Stops the active run. No further points are emitted, including any
    /// step that was already queued.
    pub fn cancel(&mut self) -> Result<(), GenerationError> {
        self.generator.cancel()?;
        self.pending = None;

        info!(
            generation = self.generation,
            emitted_points = self.generator.state().emitted_points(),
            "chaos game run cancelled"
        );

        self.presenter.present(ChaosGameEvent::Cancelled);

        Ok(())
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|pending| pending.due)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.generator.is_running()
    }

    #[must_use]
    pub fn status(&self) -> GenerationStatus {
        self.generator.status()
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        self.generator.progress()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn config(&self) -> SchedulerConfig {
        self.config
    }

    #[must_use]
    pub fn generator(&self) -> &ChaosGameGenerator<R> {
        &self.generator
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_parts(self) -> (ChaosGameGenerator<R>, S, P) {
        (self.generator, self.surface, self.presenter)
    }

    #[cfg(test)]
    pub(crate) fn clear_pending(&mut self) {
        self.pending = None;
    }

    fn run_step(&mut self, now: Instant) -> Result<TickOutcome, GenerationError> {
        match self.generator.step()? {
            StepOutcome::Point(point) => {
                self.deliver(point);

                // the completion step is folded into the tick of the last point
                if self.generator.state().remaining_iterations() == 0 {
                    return self.run_step(now);
                }

                self.queue_next(now);
                Ok(TickOutcome::Stepped)
            }
            StepOutcome::Complete => {
                self.pending = None;

                info!(
                    generation = self.generation,
                    emitted_points = self.generator.state().emitted_points(),
                    "chaos game run complete"
                );

                self.presenter.present(ChaosGameEvent::Complete);
                Ok(TickOutcome::Completed)
            }
        }
    }

    fn deliver(&mut self, point: Vertex) {
        let progress = self.generator.progress();

        trace!(x = point.x, y = point.y, progress, "point emitted");

        self.presenter.present(ChaosGameEvent::PointEmitted(point));
        self.presenter.present(ChaosGameEvent::Progress(progress));
        self.surface.draw_point(point);
    }

    fn queue_next(&mut self, now: Instant) {
        self.pending = Some(PendingStep {
            generation: self.generation,
            due: now + self.config.step_delay,
        });
    }
}
