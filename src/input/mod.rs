//! Input adapters: turn command lines and window events into engine calls.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
