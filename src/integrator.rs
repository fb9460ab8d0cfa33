//! Explicit Verlet integration.

use crate::float::Float;
use crate::point::PointSet;
use crate::vec::Vec2;

/// Advance every point one tick:
/// `next = 2 * current - previous + acceleration * dt²`.
///
/// Unit mass, no damping. `previous` takes the old `current`.
pub fn verlet_step<F: Float>(points: &mut PointSet<F>, acceleration: Vec2<F>, dt: F) {
    let step = acceleration.scale(dt * dt);
    let (current, previous) = points.split_mut();
    for (cur, prev) in current.iter_mut().zip(previous.iter_mut()) {
        let next = cur.scale(F::two()) - *prev + step;
        *prev = *cur;
        *cur = next;
    }
}
