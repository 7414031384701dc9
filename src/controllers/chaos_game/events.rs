use crate::core::data::vertex::Vertex;

/// Everything the scheduler reports back to its caller after `start`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ChaosGameEvent {
    PointEmitted(Vertex),
    Progress(u8),
    Complete,
    Cancelled,
}
