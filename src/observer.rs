//! Step observer trait for monitoring simulation progress.

use crate::point::PointIndex;

/// Hooks called while a [`crate::Simulation`] steps.
///
/// Useful for debugging, visualization or profiling. All methods default to
/// no-ops.
pub trait StepObserver {
    /// Called after all points have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after each relaxation pass over links, ground and pin.
    fn on_relaxation_pass(&mut self, _pass: usize) {}

    /// Called when a link is skipped because its endpoints coincide.
    fn on_degenerate_link(&mut self, _a: PointIndex, _b: PointIndex) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation is needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
