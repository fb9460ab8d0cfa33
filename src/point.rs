//! Verlet point storage: parallel current/previous positions.

use crate::float::Float;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Index of a point in a [`PointSet`].
pub type PointIndex = usize;

/// What a point contributes to the drawn outline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointRole {
    /// Vertex of the outer polygon, in counter-clockwise order.
    Boundary,
    /// Interior point that only carries links.
    Support,
}

/// Unit-mass points with implicit velocity `current - previous`.
///
/// The point count is fixed once the set is built.
#[derive(Clone, Debug)]
pub struct PointSet<F: Float> {
    current: AllocVec<Vec2<F>>,
    previous: AllocVec<Vec2<F>>,
    roles: AllocVec<PointRole>,
}

impl<F: Float> PointSet<F> {
    pub(crate) fn new(
        current: AllocVec<Vec2<F>>,
        previous: AllocVec<Vec2<F>>,
        roles: AllocVec<PointRole>,
    ) -> Self {
        debug_assert_eq!(current.len(), previous.len());
        debug_assert_eq!(current.len(), roles.len());
        PointSet { current, previous, roles }
    }

    pub fn len(&self) -> usize { self.current.len() }
    pub fn is_empty(&self) -> bool { self.current.is_empty() }

    pub fn current(&self) -> &[Vec2<F>] { &self.current }
    pub fn previous(&self) -> &[Vec2<F>] { &self.previous }
    pub fn roles(&self) -> &[PointRole] { &self.roles }

    pub fn position(&self, index: PointIndex) -> Vec2<F> { self.current[index] }

    /// Per-tick displacement, i.e. the Verlet velocity.
    pub fn velocity_raw(&self, index: PointIndex) -> Vec2<F> {
        self.current[index] - self.previous[index]
    }

    pub(crate) fn current_mut(&mut self) -> &mut [Vec2<F>] { &mut self.current }

    pub(crate) fn split_mut(&mut self) -> (&mut [Vec2<F>], &mut [Vec2<F>]) {
        (self.current.as_mut_slice(), self.previous.as_mut_slice())
    }
}
