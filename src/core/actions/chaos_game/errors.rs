use std::fmt;

use thiserror::Error;

use crate::core::actions::chaos_game::state::GenerationStatus;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GeneratorOperation {
    Step,
    Cancel,
}

impl fmt::Display for GeneratorOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step => write!(f, "step"),
            Self::Cancel => write!(f, "cancel"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("a generation run is already in progress, cancel it before starting another")]
    AlreadyRunning,

    #[error("cannot {operation} a generation run that is {status}")]
    InvalidState {
        operation: GeneratorOperation,
        status: GenerationStatus,
    },
}
