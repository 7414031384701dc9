pub mod errors;
pub mod generator;
pub mod progress;
pub mod state;
