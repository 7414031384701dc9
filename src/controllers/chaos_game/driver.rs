use std::thread;
use std::time::Instant;

use rand::Rng;
use thiserror::Error;
use tracing::{debug, warn};

use crate::controllers::chaos_game::ports::presenter::ChaosGamePresenterPort;
use crate::controllers::chaos_game::ports::render_surface::RenderSurface;
use crate::controllers::chaos_game::scheduler::ChaosGameScheduler;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::chaos_game::errors::GenerationError;
use crate::core::actions::chaos_game::state::GenerationStatus;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Cancelled,
    /// There was no active run to drive.
    NotStarted,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriveError {
    #[error("failed to cancel run {generation}: {source}")]
    Cancel { generation: u64, source: GenerationError },
    #[error("run {generation} is running but has no queued step")]
    Stalled { generation: u64 },
}

/// Drives a started run on the current thread until it completes or `cancel`
/// fires, sleeping until each queued step is due.
///
/// The token is checked between steps, so a cancellation requested while
/// sleeping takes effect before the next point.
pub fn drive_to_end<R, S, P, C>(
    scheduler: &mut ChaosGameScheduler<R, S, P>,
    cancel: &C,
) -> Result<RunOutcome, DriveError>
where
    R: Rng,
    S: RenderSurface,
    P: ChaosGamePresenterPort,
    C: CancelToken + ?Sized,
{
    loop {
        match scheduler.status() {
            GenerationStatus::Complete => return Ok(RunOutcome::Completed),
            GenerationStatus::Cancelled => return Ok(RunOutcome::Cancelled),
            GenerationStatus::Idle => return Ok(RunOutcome::NotStarted),
            GenerationStatus::Running => {}
        }

        if cancel.is_cancelled() {
            debug!(generation = scheduler.generation(), "cancel token fired");

            scheduler.cancel().map_err(|source| DriveError::Cancel {
                generation: scheduler.generation(),
                source,
            })?;

            continue;
        }

        let Some(due) = scheduler.next_deadline() else {
            warn!(generation = scheduler.generation(), "running without a queued step");
            return Err(DriveError::Stalled {
                generation: scheduler.generation(),
            });
        };

        let now = Instant::now();
        if due > now {
            thread::sleep(due - now);
        }

        scheduler.tick(Instant::now());
    }
}
