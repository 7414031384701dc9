//! Port definitions for the chaos-game scheduler.
//!
//! The scheduler only talks to the outside world through these traits: a
//! surface to draw on and a presenter that receives run events.

pub mod presenter;
pub mod render_surface;
