pub mod line;
pub mod surface;
