use std::fmt;

use crate::controllers::chaos_game::events::ChaosGameEvent;
use crate::controllers::chaos_game::ports::presenter::ChaosGamePresenterPort;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RunStatusLabel {
    #[default]
    Waiting,
    Progress(u8),
    Complete,
    Cancelled,
}

impl fmt::Display for RunStatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Waiting => write!(f, "Waiting"),
            Self::Progress(percentage) => write!(f, "Progress: {percentage}%"),
            Self::Complete => write!(f, "Generation complete"),
            Self::Cancelled => write!(f, "Generation cancelled"),
        }
    }
}

/// Latest human-readable status of a run, plus a dirty flag for hosts that
/// only redraw on change (the window title, for one).
#[derive(Debug, Default)]
pub struct RunStatus {
    label: RunStatusLabel,
    changed: bool,
    points_since_take: u64,
}

impl RunStatus {
    #[must_use]
    pub fn label(&self) -> RunStatusLabel {
        self.label
    }

    /// Returns whether anything changed since the last call, and clears it.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    /// Points emitted since the last call, cleared on read.
    pub fn take_points(&mut self) -> u64 {
        std::mem::take(&mut self.points_since_take)
    }

    fn set(&mut self, label: RunStatusLabel) {
        if self.label != label {
            self.label = label;
            self.changed = true;
        }
    }
}

impl ChaosGamePresenterPort for RunStatus {
    fn present(&mut self, event: ChaosGameEvent) {
        match event {
            ChaosGameEvent::PointEmitted(_) => self.points_since_take += 1,
            ChaosGameEvent::Progress(percentage) => self.set(RunStatusLabel::Progress(percentage)),
            ChaosGameEvent::Complete => self.set(RunStatusLabel::Complete),
            ChaosGameEvent::Cancelled => self.set(RunStatusLabel::Cancelled),
        }
    }
}
