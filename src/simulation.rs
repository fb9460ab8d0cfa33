//! Simulation state and the per-tick driver.

use crate::config::SolverConfig;
use crate::constraint::{GroundConstraint, PinConstraint};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::input::ControlInput;
use crate::integrator::verlet_step;
use crate::link::Link;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::point::{PointIndex, PointRole, PointSet};
use crate::solver::ConstraintSolver;
use crate::topology::TopologyBuilder;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Everything that evolves during a run.
///
/// Produced by [`TopologyBuilder::build`]; the point count and link list are
/// fixed from then on.
#[derive(Clone, Debug)]
pub struct SimulationState<F: Float> {
    points: PointSet<F>,
    links: AllocVec<Link<F>>,
    gravity: Vec2<F>,
    external_force: Vec2<F>,
    acceleration: Vec2<F>,
    ground_elevation: F,
    timestep: F,
    elapsed_time: F,
    iterations: usize,
}

impl<F: Float> SimulationState<F> {
    pub(crate) fn new(points: PointSet<F>, links: AllocVec<Link<F>>, config: &SolverConfig<F>) -> Self {
        SimulationState {
            points,
            links,
            gravity: config.gravity,
            external_force: Vec2::zero(),
            acceleration: config.gravity,
            ground_elevation: config.ground_elevation,
            timestep: config.timestep,
            elapsed_time: F::zero(),
            iterations: config.iterations,
        }
    }

    pub fn points(&self) -> &PointSet<F> { &self.points }
    pub fn links(&self) -> &[Link<F>] { &self.links }
    pub fn gravity(&self) -> Vec2<F> { self.gravity }
    pub fn external_force(&self) -> Vec2<F> { self.external_force }
    /// Acceleration used by the most recent step.
    pub fn acceleration(&self) -> Vec2<F> { self.acceleration }
    pub fn ground_elevation(&self) -> F { self.ground_elevation }
    pub fn timestep(&self) -> F { self.timestep }
    pub fn elapsed_time(&self) -> F { self.elapsed_time }
    pub fn iterations(&self) -> usize { self.iterations }
}

/// Read-only view handed to renderers.
///
/// Draw a filled polygon through [`Snapshot::boundary`], stroke every
/// [`Snapshot::segments`] entry, then fill below
/// [`Snapshot::ground_elevation`].
#[derive(Copy, Clone, Debug)]
pub struct Snapshot<'a, F: Float> {
    positions: &'a [Vec2<F>],
    roles: &'a [PointRole],
    links: &'a [Link<F>],
    ground_elevation: F,
    elapsed_time: F,
}

impl<'a, F: Float> Snapshot<'a, F> {
    /// All point positions, in index order.
    pub fn points(&self) -> &'a [Vec2<F>] { self.positions }
    pub fn roles(&self) -> &'a [PointRole] { self.roles }
    pub fn links(&self) -> &'a [Link<F>] { self.links }
    pub fn ground_elevation(&self) -> F { self.ground_elevation }
    pub fn elapsed_time(&self) -> F { self.elapsed_time }

    /// Outline vertices in counter-clockwise order, support points excluded.
    pub fn boundary(&self) -> impl Iterator<Item = Vec2<F>> + 'a {
        self.positions
            .iter()
            .zip(self.roles)
            .filter(|(_, role)| **role == PointRole::Boundary)
            .map(|(p, _)| *p)
    }

    /// Endpoint positions of every link.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + 'a {
        let positions = self.positions;
        self.links.iter().map(move |l| (positions[l.a()], positions[l.b()]))
    }
}

/// Owns a [`SimulationState`] and advances it one tick per [`Simulation::step`].
///
/// There is no internal clock: the host decides when to step.
#[derive(Clone, Debug)]
pub struct Simulation<F: Float> {
    state: SimulationState<F>,
    grab_point: PointIndex,
}

impl<F: Float> Simulation<F> {
    /// Drive an already built state. Point 0 is the grab point.
    pub fn new(state: SimulationState<F>) -> Self {
        Simulation { state, grab_point: 0 }
    }

    /// Build `builder` with `config` and wrap the result.
    pub fn from_builder(builder: TopologyBuilder<F>, config: &SolverConfig<F>) -> Result<Self, PhysicsError> {
        Ok(Self::new(builder.build(config)?))
    }

    /// Choose which point a grab pins.
    pub fn with_grab_point(mut self, index: PointIndex) -> Result<Self, PhysicsError> {
        let count = self.state.points.len();
        if index >= count {
            return Err(PhysicsError::GrabPointOutOfBounds { index, count });
        }
        self.grab_point = index;
        Ok(self)
    }

    pub fn grab_point(&self) -> PointIndex { self.grab_point }

    /// Constant force added to gravity every tick (unit mass, so it is an
    /// acceleration). A non-finite force is ignored.
    pub fn set_external_force(&mut self, force: Vec2<F>) {
        if !force.is_finite() {
            log::warn!("ignoring non-finite external force {:?}", force);
            return;
        }
        self.state.external_force = force;
    }

    /// Change the relaxation budget for subsequent steps (minimum 1).
    pub fn set_iterations(&mut self, iterations: usize) {
        self.state.iterations = iterations.max(1);
    }

    pub fn state(&self) -> &SimulationState<F> { &self.state }

    /// Advance one tick: integrate, then relax links, ground and grab.
    pub fn step(&mut self, input: ControlInput<F>) {
        self.step_with_observer(input, &mut NoOpStepObserver);
    }

    pub fn step_with_observer<O: StepObserver>(&mut self, input: ControlInput<F>, observer: &mut O) {
        let pin = self.pin_for(input);
        let state = &mut self.state;

        state.acceleration = state.gravity + state.external_force;
        verlet_step(&mut state.points, state.acceleration, state.timestep);
        observer.on_integrate();

        let solver = ConstraintSolver::new(state.iterations, GroundConstraint::new(state.ground_elevation));
        solver.solve(state.points.current_mut(), &state.links, pin.as_ref(), observer);

        state.elapsed_time = state.elapsed_time + state.timestep;
        observer.on_step_complete();
    }

    /// Read-only view of the current geometry.
    pub fn snapshot(&self) -> Snapshot<'_, F> {
        Snapshot {
            positions: self.state.points.current(),
            roles: self.state.points.roles(),
            links: &self.state.links,
            ground_elevation: self.state.ground_elevation,
            elapsed_time: self.state.elapsed_time,
        }
    }

    fn pin_for(&self, input: ControlInput<F>) -> Option<PinConstraint<F>> {
        if !input.active {
            return None;
        }
        let mut target = input.target;
        if !target.is_finite() {
            log::warn!("ignoring non-finite grab target {:?}", target);
            return None;
        }
        let ground = self.state.ground_elevation;
        if target.y < ground {
            log::debug!("grab target y {} below ground {}, raising", target.y, ground);
            target.y = ground;
        }
        Some(PinConstraint::new(self.grab_point, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> Simulation<f64> {
        let builder = TopologyBuilder::new()
            .point(0.0, 0.0)
            .point(1.0, 0.0)
            .link(0, 1, 1.0)
            .at_rest();
        Simulation::from_builder(builder, &SolverConfig::new()).unwrap()
    }

    #[test]
    fn elapsed_time_advances_by_timestep() {
        let mut sim = pair();
        sim.step(ControlInput::idle());
        sim.step(ControlInput::idle());
        assert!((sim.state().elapsed_time() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn acceleration_includes_external_force() {
        let mut sim = pair();
        sim.set_external_force(Vec2::new(0.0, 0.5));
        sim.step(ControlInput::idle());
        let a = sim.state().acceleration();
        assert!((a.y - 0.4).abs() < 1e-6);
    }

    #[test]
    fn non_finite_external_force_is_ignored() {
        let mut sim = pair();
        sim.set_external_force(Vec2::new(0.3, 0.0));
        sim.set_external_force(Vec2::new(f64::NAN, 0.0));
        assert_eq!(sim.state().external_force(), Vec2::new(0.3, 0.0));
        sim.step(ControlInput::idle());
        assert!(sim.snapshot().points().iter().all(|p| p.is_finite()));
    }

    #[test]
    fn zero_iterations_still_hold_the_ground() {
        let builder = TopologyBuilder::<f64>::new().point(0.0, -4.99).at_rest();
        let mut sim = Simulation::from_builder(builder, &SolverConfig::new()).unwrap();
        sim.set_iterations(0);
        assert_eq!(sim.state().iterations(), 1);
        for _ in 0..10 {
            sim.step(ControlInput::idle());
            assert!(sim.snapshot().points()[0].y >= -5.0);
        }
    }

    #[test]
    fn grab_point_must_exist() {
        let err = pair().with_grab_point(2).unwrap_err();
        assert_eq!(err, PhysicsError::GrabPointOutOfBounds { index: 2, count: 2 });
        assert_eq!(pair().with_grab_point(1).unwrap().grab_point(), 1);
    }

    #[test]
    fn grab_below_ground_is_raised() {
        let mut sim = pair();
        sim.step(ControlInput::grab(Vec2::new(0.0, -20.0)));
        let p = sim.snapshot().points()[0];
        assert_eq!(p, Vec2::new(0.0, -5.0));
    }

    #[test]
    fn non_finite_grab_is_ignored() {
        let mut sim = pair();
        sim.step(ControlInput::grab(Vec2::new(f64::NAN, 1.0)));
        assert!(sim.snapshot().points().iter().all(|p| p.is_finite()));
    }

    #[test]
    fn snapshot_exposes_boundary_and_segments() {
        let builder = TopologyBuilder::<f32>::supported_pentagon().at_rest();
        let sim = Simulation::from_builder(builder, &SolverConfig::new()).unwrap();
        let snap = sim.snapshot();
        assert_eq!(snap.boundary().count(), 5);
        assert_eq!(snap.segments().count(), 15);
        assert_eq!(snap.roles()[5], PointRole::Support);
    }
}
