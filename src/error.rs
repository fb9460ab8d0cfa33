//! Error types for topology construction and geometry helpers.

use core::fmt;

/// Errors that can occur while building or manipulating a simulation.
///
/// Everything except [`PhysicsError::DegenerateConstraint`] is reported at
/// build time. Degenerate links surface only from [`crate::Link::relax`] and
/// are absorbed by the solver, which skips the link for that pass.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Matrix or vector shapes are incompatible.
    DimensionMismatch { expected: usize, found: usize },
    /// The two endpoints of a link coincide, so the link has no direction.
    DegenerateConstraint { a: usize, b: usize },
    /// A link references a point that does not exist.
    PointOutOfBounds { index: usize, count: usize },
    /// A link connects a point to itself.
    SelfLink { index: usize },
    /// Stiffness must be in (0, 1].
    InvalidStiffness,
    /// Rest length must be finite and non-negative.
    InvalidRestLength,
    /// An initial coordinate is NaN or infinite.
    NonFiniteCoordinate { index: usize },
    /// A topology needs at least one point.
    EmptyTopology,
    /// Timestep must be finite and non-negative.
    InvalidTimestep,
    /// At least one relaxation pass is needed per step.
    InvalidIterations,
    /// Gravity has a NaN or infinite component.
    InvalidGravity,
    /// Ground elevation is NaN or infinite.
    InvalidGroundElevation,
    /// Initial jitter or drop is NaN or infinite.
    InvalidInitialOffset,
    /// The grabbed point does not exist.
    GrabPointOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {}, found {}", expected, found)
            }
            PhysicsError::DegenerateConstraint { a, b } => {
                write!(f, "link endpoints {} and {} coincide", a, b)
            }
            PhysicsError::PointOutOfBounds { index, count } => {
                write!(f, "point index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::SelfLink { index } => write!(f, "point {} is linked to itself", index),
            PhysicsError::InvalidStiffness => write!(f, "stiffness must be in (0, 1]"),
            PhysicsError::InvalidRestLength => {
                write!(f, "rest length must be finite and non-negative")
            }
            PhysicsError::NonFiniteCoordinate { index } => {
                write!(f, "point {} has a non-finite coordinate", index)
            }
            PhysicsError::EmptyTopology => write!(f, "topology has no points"),
            PhysicsError::InvalidTimestep => write!(f, "timestep must be finite and non-negative"),
            PhysicsError::InvalidIterations => write!(f, "at least one relaxation pass is required"),
            PhysicsError::InvalidGravity => write!(f, "gravity must be finite"),
            PhysicsError::InvalidGroundElevation => write!(f, "ground elevation must be finite"),
            PhysicsError::InvalidInitialOffset => write!(f, "jitter and drop must be finite"),
            PhysicsError::GrabPointOutOfBounds { index, count } => {
                write!(f, "grab point {} out of bounds (count: {})", index, count)
            }
        }
    }
}

impl core::error::Error for PhysicsError {}
