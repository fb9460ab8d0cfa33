//! Fixed-iteration constraint relaxation.

use crate::constraint::{GroundConstraint, PinConstraint};
use crate::float::Float;
use crate::link::Link;
use crate::observer::StepObserver;
use crate::vec::Vec2;

/// Gauss-Seidel style relaxation over links, ground and an optional pin.
///
/// Each pass relaxes every link in order, clamps every point to the ground,
/// then applies the pin. No convergence check is made: more iterations give a
/// tighter fit at proportional cost.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConstraintSolver<F: Float> {
    pub iterations: usize,
    pub ground: GroundConstraint<F>,
}

impl<F: Float> ConstraintSolver<F> {
    pub fn new(iterations: usize, ground: GroundConstraint<F>) -> Self {
        ConstraintSolver { iterations, ground }
    }

    /// Run all passes. Returns the number of link corrections skipped because
    /// the link was degenerate at that moment.
    ///
    /// # Panics
    ///
    /// Panics if a link endpoint or the pin index is out of range for
    /// `positions`. Links from [`crate::TopologyBuilder`] are checked at build
    /// time.
    pub fn solve<O: StepObserver>(
        &self,
        positions: &mut [Vec2<F>],
        links: &[Link<F>],
        pin: Option<&PinConstraint<F>>,
        observer: &mut O,
    ) -> usize {
        let mut skipped = 0;
        for pass in 0..self.iterations {
            for link in links {
                if link.relax(positions).is_err() {
                    log::trace!("pass {}: skipping degenerate link {}-{}", pass, link.a(), link.b());
                    observer.on_degenerate_link(link.a(), link.b());
                    skipped += 1;
                }
            }

            self.ground.solve(positions);

            if let Some(pin) = pin {
                pin.solve(positions);
            }

            observer.on_relaxation_pass(pass);
        }
        skipped
    }
}
