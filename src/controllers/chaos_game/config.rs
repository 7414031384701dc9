use std::time::Duration;

/// Pause between two scheduled generator steps.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(5);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Zero is allowed and means "on the next tick", never "in the same call".
    pub step_delay: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            step_delay: DEFAULT_STEP_DELAY,
        }
    }
}
