//! Spring links between pairs of points.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::point::PointIndex;
use crate::vec::Vec2;

/// Lengths below this are treated as coincident endpoints.
const DEGENERATE_LENGTH: f32 = 1e-10;

/// A linear spring pulling two points toward `rest_length`.
///
/// Constructed only by [`crate::TopologyBuilder`], which guarantees `a != b`,
/// both indices in range, stiffness in (0, 1] and a finite non-negative rest
/// length.
#[derive(Clone, Debug, PartialEq)]
pub struct Link<F: Float> {
    a: PointIndex,
    b: PointIndex,
    stiffness: F,
    rest_length: F,
}

impl<F: Float> Link<F> {
    pub(crate) fn new(a: PointIndex, b: PointIndex, stiffness: F, rest_length: F) -> Self {
        Link { a, b, stiffness, rest_length }
    }

    pub fn a(&self) -> PointIndex { self.a }
    pub fn b(&self) -> PointIndex { self.b }
    pub fn stiffness(&self) -> F { self.stiffness }
    pub fn rest_length(&self) -> F { self.rest_length }

    /// Apply one relaxation correction to the link's endpoints.
    ///
    /// With `delta = a - b` and `dl = |delta|`, both endpoints move by
    /// `0.5 * diff * delta` in opposite directions, where
    /// `diff = -stiffness * (dl - rest_length) / dl`. The pair's midpoint is
    /// unchanged.
    ///
    /// Returns [`PhysicsError::DegenerateConstraint`] without touching
    /// `positions` when the endpoints coincide.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint index is out of range for `positions`.
    pub fn relax(&self, positions: &mut [Vec2<F>]) -> Result<(), PhysicsError> {
        let delta = positions[self.a] - positions[self.b];
        let dl = delta.length();
        if !dl.is_finite() || dl.is_near_zero(F::from_f32(DEGENERATE_LENGTH)) {
            return Err(PhysicsError::DegenerateConstraint { a: self.a, b: self.b });
        }

        let diff = -self.stiffness * (dl - self.rest_length) / dl;
        let offset = delta.scale(F::half() * diff);
        positions[self.b] -= offset;
        positions[self.a] += offset;
        Ok(())
    }

    /// Current length minus rest length.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint index is out of range for `positions`.
    pub fn stretch(&self, positions: &[Vec2<F>]) -> F {
        positions[self.a].distance(positions[self.b]) - self.rest_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stiff_link_reaches_rest_in_one_pass() {
        let mut pos = [Vec2::new(0.0f64, 0.0), Vec2::new(1.0, 0.0)];
        let link = Link::new(0, 1, 1.0, 2.0);
        link.relax(&mut pos).unwrap();
        assert!((pos[0].x + 0.5).abs() < 1e-12);
        assert!((pos[1].x - 1.5).abs() < 1e-12);
        assert!(link.stretch(&pos).abs() < 1e-12);
    }

    #[test]
    fn soft_link_moves_part_way() {
        let mut pos = [Vec2::new(0.0f64, 0.0), Vec2::new(4.0, 0.0)];
        let link = Link::new(0, 1, 0.5, 2.0);
        link.relax(&mut pos).unwrap();
        // Half of the 2.0 excess is removed, split evenly.
        assert!((pos[0].x - 0.5).abs() < 1e-12);
        assert!((pos[1].x - 3.5).abs() < 1e-12);
    }

    #[test]
    fn coincident_endpoints_are_reported_and_untouched() {
        let mut pos = [Vec2::new(1.0f32, 1.0), Vec2::new(1.0, 1.0)];
        let link = Link::new(0, 1, 1.0, 0.5);
        assert_eq!(
            link.relax(&mut pos),
            Err(PhysicsError::DegenerateConstraint { a: 0, b: 1 })
        );
        assert_eq!(pos[0], Vec2::new(1.0, 1.0));
        assert_eq!(pos[1], Vec2::new(1.0, 1.0));
    }

    #[test]
    fn link_at_rest_is_a_no_op() {
        let mut pos = [Vec2::new(0.0f32, 0.0), Vec2::new(3.0, 4.0)];
        let link = Link::new(0, 1, 1.0, 5.0);
        link.relax(&mut pos).unwrap();
        assert_eq!(pos[0], Vec2::new(0.0, 0.0));
        assert_eq!(pos[1], Vec2::new(3.0, 4.0));
    }
}
