pub mod initial_point;
pub mod vertex_selector;
