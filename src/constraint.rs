//! Position constraints applied inside every relaxation pass: ground and pin.

use crate::float::Float;
use crate::point::PointIndex;
use crate::vec::Vec2;

/// Horizontal floor at `elevation`; points may not go below it.
///
/// Only the current position is clamped. Leaving the previous position alone
/// means the next Verlet step sees the penetration depth as lost velocity, so
/// contact is inelastic.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GroundConstraint<F: Float> {
    pub elevation: F,
}

impl<F: Float> GroundConstraint<F> {
    pub fn new(elevation: F) -> Self {
        GroundConstraint { elevation }
    }

    pub fn solve(&self, positions: &mut [Vec2<F>]) {
        for p in positions.iter_mut() {
            p.y = p.y.max(self.elevation);
        }
    }
}

/// Hard positional override of one point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PinConstraint<F: Float> {
    pub point: PointIndex,
    pub target: Vec2<F>,
}

impl<F: Float> PinConstraint<F> {
    pub fn new(point: PointIndex, target: Vec2<F>) -> Self {
        PinConstraint { point, target }
    }

    /// Move the pinned point onto `target`.
    ///
    /// # Panics
    ///
    /// Panics if `point` is out of range for `positions`.
    pub fn solve(&self, positions: &mut [Vec2<F>]) {
        positions[self.point] = self.target;
    }
}
