//! Per-tick control input supplied by the host.

use crate::float::Float;
use crate::vec::Vec2;

/// Whether a point is being grabbed this tick, and where it is pulled.
///
/// `target` is in simulation coordinates; mapping from screen space is the
/// host's job.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ControlInput<F: Float> {
    pub active: bool,
    pub target: Vec2<F>,
}

impl<F: Float> ControlInput<F> {
    /// Nothing grabbed.
    pub fn idle() -> Self {
        ControlInput { active: false, target: Vec2::zero() }
    }

    /// Grab and pull toward `target`.
    pub fn grab(target: Vec2<F>) -> Self {
        ControlInput { active: true, target }
    }
}
