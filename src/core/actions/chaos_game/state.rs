use std::fmt;

use crate::core::data::vertex::Vertex;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Running,
    Complete,
    Cancelled,
}

impl GenerationStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Complete | Self::Cancelled)
    }
}

impl fmt::Display for GenerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Complete => "complete",
            Self::Cancelled => "cancelled",
        };

        write!(f, "{name}")
    }
}

/// Bookkeeping for a single chaos-game run.
///
/// Only the generator mutates this; everything else gets a shared reference.
/// `remaining_iterations` never exceeds `total_iterations` and
/// `current_point` is `None` only while the state is `Idle`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenerationState {
    total_iterations: u64,
    remaining_iterations: u64,
    current_point: Option<Vertex>,
    status: GenerationStatus,
}

impl GenerationState {
    pub(super) fn running(total_iterations: u64, first_point: Vertex) -> Self {
        Self {
            total_iterations,
            remaining_iterations: total_iterations,
            current_point: Some(first_point),
            status: GenerationStatus::Running,
        }
    }

    pub(super) fn advance(&mut self, point: Vertex) {
        self.current_point = Some(point);
        self.remaining_iterations = self.remaining_iterations.saturating_sub(1);
    }

    pub(super) fn set_status(&mut self, status: GenerationStatus) {
        self.status = status;
    }

    #[must_use]
    pub fn total_iterations(&self) -> u64 {
        self.total_iterations
    }

    #[must_use]
    pub fn remaining_iterations(&self) -> u64 {
        self.remaining_iterations
    }

    #[must_use]
    pub fn completed_iterations(&self) -> u64 {
        self.total_iterations - self.remaining_iterations
    }

    /// Points emitted so far, counting the initial sample.
    #[must_use]
    pub fn emitted_points(&self) -> u64 {
        match self.current_point {
            Some(_) => self.completed_iterations() + 1,
            None => 0,
        }
    }

    #[must_use]
    pub fn current_point(&self) -> Option<Vertex> {
        self.current_point
    }

    #[must_use]
    pub fn status(&self) -> GenerationStatus {
        self.status
    }
}
