//! Cooperative driver for the chaos-game generator.
//!
//! The scheduler never runs more than one generator step per `tick`; the
//! host decides when to tick (a window event loop, a sleeping CLI loop, or
//! a test with synthetic instants).

pub mod config;
pub mod driver;
pub mod events;
pub mod ports;
pub mod scheduler;
