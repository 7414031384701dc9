use thiserror::Error;

use crate::controllers::chaos_game::driver::DriveError;
use crate::core::actions::chaos_game::errors::GenerationError;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::data::triangle::GeometryError;
use crate::input::cli::iteration_count::ValidationError;

#[derive(Debug, Error)]
pub enum ChaosGameError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Drive(#[from] DriveError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    PixelRect(#[from] PixelRectError),
    #[error(transparent)]
    PixelBuffer(#[from] PixelBufferError),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("nothing has been generated yet")]
    NothingGenerated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_layer_errors() {
        let error: ChaosGameError = GenerationError::AlreadyRunning.into();
        assert!(matches!(error, ChaosGameError::Generation(GenerationError::AlreadyRunning)));

        let error: ChaosGameError = ValidationError::Empty.into();
        assert_eq!(error.to_string(), ValidationError::Empty.to_string());
    }
}
