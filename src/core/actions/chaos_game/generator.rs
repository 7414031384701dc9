use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::core::actions::chaos_game::errors::{GenerationError, GeneratorOperation};
use crate::core::actions::chaos_game::progress::progress_percentage;
use crate::core::actions::chaos_game::state::{GenerationState, GenerationStatus};
use crate::core::data::triangle::Triangle;
use crate::core::data::vertex::Vertex;
use crate::core::sampling::initial_point::sample_initial_point;
use crate::core::sampling::vertex_selector::select_vertex;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum StepOutcome {
    Point(Vertex),
    Complete,
}

/// Produces the chaos-game point sequence one step at a time.
///
/// `start` emits the initial sample, each `step` afterwards emits one
/// midpoint, and the `step` after the last midpoint marks the run complete.
/// A run of `n` iterations therefore emits `n + 1` points.
#[derive(Debug)]
pub struct ChaosGameGenerator<R: Rng> {
    rng: R,
    triangle: Triangle,
    state: GenerationState,
}

impl ChaosGameGenerator<SmallRng> {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_os_rng())
    }
}

impl<R: Rng> ChaosGameGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            triangle: Triangle::reference(),
            state: GenerationState::default(),
        }
    }

    pub fn start(
        &mut self,
        triangle: Triangle,
        total_iterations: u64,
    ) -> Result<Vertex, GenerationError> {
        if self.state.status() == GenerationStatus::Running {
            return Err(GenerationError::AlreadyRunning);
        }

        let first_point = sample_initial_point(&triangle, &mut self.rng);

        self.triangle = triangle;
        self.state = GenerationState::running(total_iterations, first_point);

        Ok(first_point)
    }

    pub fn step(&mut self) -> Result<StepOutcome, GenerationError> {
        self.ensure_running(GeneratorOperation::Step)?;

        let Some(current) = self.state.current_point() else {
            return Err(self.invalid_state(GeneratorOperation::Step));
        };

        if self.state.remaining_iterations() == 0 {
            self.state.set_status(GenerationStatus::Complete);
            return Ok(StepOutcome::Complete);
        }

        let target = select_vertex(&self.triangle, &mut self.rng);
        let next = current.midpoint(target);

        self.state.advance(next);

        Ok(StepOutcome::Point(next))
    }

    pub fn cancel(&mut self) -> Result<(), GenerationError> {
        self.ensure_running(GeneratorOperation::Cancel)?;
        self.state.set_status(GenerationStatus::Cancelled);

        Ok(())
    }

    #[must_use]
    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> GenerationStatus {
        self.state.status()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.status() == GenerationStatus::Running
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        progress_percentage(&self.state)
    }

    /// Triangle of the current (or most recent) run.
    #[must_use]
    pub fn triangle(&self) -> &Triangle {
        &self.triangle
    }

    fn ensure_running(&self, operation: GeneratorOperation) -> Result<(), GenerationError> {
        if self.is_running() {
            Ok(())
        } else {
            Err(self.invalid_state(operation))
        }
    }

    fn invalid_state(&self, operation: GeneratorOperation) -> GenerationError {
        GenerationError::InvalidState {
            operation,
            status: self.state.status(),
        }
    }
}
