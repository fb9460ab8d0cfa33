//! Position-based soft-body simulation core.
//!
//! `blobsim` advances a 2D body made of unit-mass points joined by spring
//! links. Each tick integrates with explicit Verlet (velocity is implicit in
//! the previous position), then runs a fixed number of relaxation passes over
//! the links, a ground plane and an optional grab pin. Rendering, input and
//! scheduling belong to the host.
//!
//! # Features
//!
//! - **Verlet integration**: unit mass, no damping, implicit velocity
//! - **Constraint relaxation**: spring links, ground clamp, hard grab pin
//! - **Topology builder**: validated point/link setup with seeded random
//!   orientation and initial velocity, plus preset shapes
//! - **Read-only snapshots** for renderers
//! - **Observable**: monitor steps via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! ```
//! use blobsim::{ControlInput, Simulation, SolverConfig, TopologyBuilder, Vec2};
//!
//! let builder = TopologyBuilder::<f32>::supported_pentagon().with_seed(42);
//! let mut sim = Simulation::from_builder(builder, &SolverConfig::new()).unwrap();
//! for _ in 0..60 {
//!     sim.step(ControlInput::idle());
//! }
//! sim.step(ControlInput::grab(Vec2::new(2.0, 3.0)));
//! assert_eq!(sim.snapshot().points()[0], Vec2::new(2.0, 3.0));
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod matrix;
pub mod point;
pub mod link;
pub mod constraint;
pub mod integrator;
pub mod solver;
pub mod topology;
pub mod input;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use matrix::{distance, rotate_2d, rotate_points, Matrix};
pub use point::{PointIndex, PointRole, PointSet};
pub use link::Link;
pub use constraint::{GroundConstraint, PinConstraint};
pub use integrator::verlet_step;
pub use solver::ConstraintSolver;
pub use topology::TopologyBuilder;
pub use input::ControlInput;
pub use simulation::{Simulation, SimulationState, Snapshot};
pub use config::SolverConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
