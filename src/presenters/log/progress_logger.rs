use tracing::{info, trace};

use crate::controllers::chaos_game::events::ChaosGameEvent;
use crate::controllers::chaos_game::ports::presenter::ChaosGamePresenterPort;

const DEFAULT_LOG_STEP: u8 = 10;

/// Reports run progress through `tracing`, one line per `step` percent.
#[derive(Debug)]
pub struct ProgressLogger {
    step: u8,
    next_threshold: u8,
    points: u64,
}

impl Default for ProgressLogger {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_STEP)
    }
}

impl ProgressLogger {
    /// `step` is clamped to `1..=100`.
    #[must_use]
    pub fn new(step: u8) -> Self {
        Self {
            step: step.clamp(1, 100),
            next_threshold: 0,
            points: 0,
        }
    }

    /// Points seen since the last reset.
    #[must_use]
    pub fn points(&self) -> u64 {
        self.points
    }

    fn reset(&mut self) {
        self.next_threshold = 0;
        self.points = 0;
    }
}

impl ChaosGamePresenterPort for ProgressLogger {
    fn present(&mut self, event: ChaosGameEvent) {
        match event {
            ChaosGameEvent::PointEmitted(point) => {
                self.points += 1;
                trace!(x = point.x, y = point.y, "point");
            }
            ChaosGameEvent::Progress(percentage) => {
                if percentage >= self.next_threshold {
                    info!("Progress: {percentage}%");
                    self.next_threshold = percentage.saturating_add(self.step);
                }
            }
            ChaosGameEvent::Complete => {
                info!(points = self.points, "Generation complete");
                self.reset();
            }
            ChaosGameEvent::Cancelled => {
                info!(points = self.points, "Generation cancelled");
                self.reset();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::vertex::Vertex;

    #[test]
    fn test_counts_points_until_complete() {
        let mut logger = ProgressLogger::default();

        for _ in 0..3 {
            logger.present(ChaosGameEvent::PointEmitted(Vertex::new(1.0, 2.0)));
        }
        assert_eq!(logger.points(), 3);

        logger.present(ChaosGameEvent::Complete);
        assert_eq!(logger.points(), 0);
    }

    #[test]
    fn test_threshold_advances_by_step() {
        let mut logger = ProgressLogger::new(25);

        logger.present(ChaosGameEvent::Progress(0));
        assert_eq!(logger.next_threshold, 25);

        logger.present(ChaosGameEvent::Progress(12));
        assert_eq!(logger.next_threshold, 25);

        logger.present(ChaosGameEvent::Progress(30));
        assert_eq!(logger.next_threshold, 55);
    }

    #[test]
    fn test_cancel_resets_threshold() {
        let mut logger = ProgressLogger::new(10);
        logger.present(ChaosGameEvent::Progress(40));

        logger.present(ChaosGameEvent::Cancelled);

        assert_eq!(logger.next_threshold, 0);
    }

    #[test]
    fn test_zero_step_is_clamped() {
        assert_eq!(ProgressLogger::new(0).step, 1);
    }
}
