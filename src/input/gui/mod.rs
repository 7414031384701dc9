//! Windowed animation of a chaos-game run using winit and pixels.

pub mod app;
pub mod commands;
