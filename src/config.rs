//! Configuration for the simulation constants and the solver.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec2;

/// Simulation constants and relaxation budget.
///
/// # Builder Pattern
/// ```
/// use blobsim::config::SolverConfig;
/// use blobsim::vec::Vec2;
///
/// let config: SolverConfig<f32> = SolverConfig::new()
///     .with_iterations(50)
///     .with_gravity(Vec2::new(0.0, -0.2))
///     .with_timestep(0.25)
///     .with_ground_elevation(-10.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolverConfig<F: Float> {
    /// Relaxation passes per step, at least 1. Default: 100.
    pub iterations: usize,
    /// Gravity acceleration. Default: (0, -0.1).
    pub gravity: Vec2<F>,
    /// Integration timestep. Default: 0.5.
    pub timestep: F,
    /// Lowest allowed `y` for any point. Default: -5.
    pub ground_elevation: F,
}

impl<F: Float> SolverConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig {
            iterations: 100,
            gravity: Vec2::new(F::zero(), F::from_f32(-0.1)),
            timestep: F::half(),
            ground_elevation: F::from_f32(-5.0),
        }
    }

    /// Set the number of relaxation passes (minimum 1).
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations.max(1);
        self
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the timestep.
    pub fn with_timestep(mut self, timestep: F) -> Self {
        self.timestep = timestep;
        self
    }

    /// Set the ground elevation.
    pub fn with_ground_elevation(mut self, elevation: F) -> Self {
        self.ground_elevation = elevation;
        self
    }

    /// Check the fields a caller may have set directly. The ground clamp runs
    /// inside the relaxation passes, so at least one pass is required.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.iterations == 0 {
            return Err(PhysicsError::InvalidIterations);
        }
        if !self.timestep.is_finite() || self.timestep < F::zero() {
            return Err(PhysicsError::InvalidTimestep);
        }
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidGravity);
        }
        if !self.ground_elevation.is_finite() {
            return Err(PhysicsError::InvalidGroundElevation);
        }
        Ok(())
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
