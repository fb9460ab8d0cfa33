//! Building the initial point set and link list.

use crate::config::SolverConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::link::Link;
use crate::matrix;
use crate::point::{PointIndex, PointRole, PointSet};
use crate::simulation::SimulationState;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

struct LinkSpec<F: Float> {
    a: PointIndex,
    b: PointIndex,
    stiffness: F,
    rest_length: Option<F>,
}

/// Describes a body and turns it into a validated [`SimulationState`].
///
/// Points are indexed in insertion order. Boundary points should be added
/// counter-clockwise; support points sit inside the outline and only carry
/// links.
///
/// ```
/// use blobsim::{SolverConfig, TopologyBuilder};
///
/// let state = TopologyBuilder::<f32>::new()
///     .point(0.0, 0.0)
///     .point(5.0, 0.0)
///     .point(2.5, 2.5)
///     .link(0, 1, 1.0)
///     .link(1, 2, 1.0)
///     .link(2, 0, 1.0)
///     .with_seed(7)
///     .build(&SolverConfig::new())
///     .unwrap();
/// assert_eq!(state.points().len(), 3);
/// ```
pub struct TopologyBuilder<F: Float> {
    positions: AllocVec<Vec2<F>>,
    roles: AllocVec<PointRole>,
    links: AllocVec<LinkSpec<F>>,
    seed: u64,
    rotate: bool,
    jitter: F,
    drop: F,
}

impl<F: Float> TopologyBuilder<F> {
    pub fn new() -> Self {
        TopologyBuilder {
            positions: AllocVec::new(),
            roles: AllocVec::new(),
            links: AllocVec::new(),
            seed: 0,
            rotate: true,
            jitter: F::from_f32(0.2),
            drop: F::from_f32(0.9),
        }
    }

    /// Add a boundary point.
    pub fn point(mut self, x: F, y: F) -> Self {
        self.positions.push(Vec2::new(x, y));
        self.roles.push(PointRole::Boundary);
        self
    }

    /// Add an interior support point.
    pub fn support(mut self, x: F, y: F) -> Self {
        self.positions.push(Vec2::new(x, y));
        self.roles.push(PointRole::Support);
        self
    }

    /// Link two points; the rest length is their distance after rotation.
    pub fn link(mut self, a: PointIndex, b: PointIndex, stiffness: F) -> Self {
        self.links.push(LinkSpec { a, b, stiffness, rest_length: None });
        self
    }

    /// Link two points with an explicit rest length.
    pub fn link_with_rest(mut self, a: PointIndex, b: PointIndex, stiffness: F, rest_length: F) -> Self {
        self.links.push(LinkSpec { a, b, stiffness, rest_length: Some(rest_length) });
        self
    }

    /// Seed for the orientation and jitter RNG. Default: 0.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Rotate the body by a random angle in [0, 2π) about the origin. Default: on.
    pub fn with_rotation(mut self, rotate: bool) -> Self {
        self.rotate = rotate;
        self
    }

    /// Width of the uniform horizontal offset applied to previous positions.
    /// Default: 0.2.
    pub fn with_jitter(mut self, jitter: F) -> Self {
        self.jitter = jitter;
        self
    }

    /// Distance each previous position sits below its current one. Default: 0.9.
    pub fn with_drop(mut self, drop: F) -> Self {
        self.drop = drop;
        self
    }

    /// Start at rest in the authored orientation: no rotation, jitter or drop.
    pub fn at_rest(self) -> Self {
        self.with_rotation(false)
            .with_jitter(F::zero())
            .with_drop(F::zero())
    }

    pub fn point_count(&self) -> usize { self.positions.len() }
    pub fn link_count(&self) -> usize { self.links.len() }

    /// Validate and build using a [`Pcg32`] seeded from [`Self::with_seed`].
    pub fn build(self, config: &SolverConfig<F>) -> Result<SimulationState<F>, PhysicsError> {
        let mut rng = Pcg32::seed_from_u64(self.seed);
        self.build_with_rng(config, &mut rng)
    }

    /// Validate and build, drawing orientation and jitter from `rng`.
    pub fn build_with_rng<R: Rng>(
        self,
        config: &SolverConfig<F>,
        rng: &mut R,
    ) -> Result<SimulationState<F>, PhysicsError> {
        config.validate()?;
        self.validate()?;

        let angle = if self.rotate {
            F::from_f32(rng.random::<f32>()) * F::two() * F::pi()
        } else {
            F::zero()
        };
        let current = if self.rotate {
            matrix::rotate_points(&self.positions, angle)?
        } else {
            self.positions
        };

        let previous = current
            .iter()
            .map(|p| {
                let u = F::from_f32(rng.random::<f32>());
                Vec2::new(p.x - self.jitter * (u - F::half()), p.y - self.drop)
            })
            .collect();

        let mut links = AllocVec::with_capacity(self.links.len());
        for spec in &self.links {
            let rest_length = match spec.rest_length {
                Some(r) => r,
                None => matrix::distance(&current[spec.a].to_array(), &current[spec.b].to_array())?,
            };
            links.push(Link::new(spec.a, spec.b, spec.stiffness, rest_length));
        }

        log::debug!(
            "built topology: {} points, {} links, rotation {}",
            current.len(),
            links.len(),
            angle
        );

        let points = PointSet::new(current, previous, self.roles);
        Ok(SimulationState::new(points, links, config))
    }

    fn validate(&self) -> Result<(), PhysicsError> {
        if self.positions.is_empty() {
            return Err(PhysicsError::EmptyTopology);
        }
        if let Some(index) = self.positions.iter().position(|p| !p.is_finite()) {
            return Err(PhysicsError::NonFiniteCoordinate { index });
        }
        if !self.jitter.is_finite() || !self.drop.is_finite() {
            return Err(PhysicsError::InvalidInitialOffset);
        }
        let count = self.positions.len();
        for spec in &self.links {
            for index in [spec.a, spec.b] {
                if index >= count {
                    return Err(PhysicsError::PointOutOfBounds { index, count });
                }
            }
            if spec.a == spec.b {
                return Err(PhysicsError::SelfLink { index: spec.a });
            }
            if !spec.stiffness.is_finite()
                || spec.stiffness <= F::zero()
                || spec.stiffness > F::one()
            {
                return Err(PhysicsError::InvalidStiffness);
            }
            if let Some(r) = spec.rest_length {
                if !r.is_finite() || r < F::zero() {
                    return Err(PhysicsError::InvalidRestLength);
                }
            }
        }
        Ok(())
    }

    /// Three points joined into a rigid triangle.
    pub fn triangle() -> Self {
        Self::new()
            .point(F::zero(), F::zero())
            .point(F::from_f32(5.0), F::zero())
            .point(F::from_f32(2.5), F::from_f32(2.5))
            .link(0, 1, F::one())
            .link(1, 2, F::one())
            .link(2, 0, F::one())
    }

    /// A pentagon outline with no interior support.
    pub fn pentagon() -> Self {
        let mut b = Self::new();
        for (x, y) in PENTAGON {
            b = b.point(F::from_f32(x), F::from_f32(y));
        }
        for i in 0..5 {
            b = b.link(i, (i + 1) % 5, F::one());
        }
        b
    }

    /// Springy pentagon with a central support point and cross braces.
    pub fn supported_pentagon() -> Self {
        let rim = F::from_f32(0.01);
        let brace = F::from_f32(0.1);
        let mut b = Self::new();
        for (x, y) in PENTAGON {
            b = b.point(F::from_f32(x), F::from_f32(y));
        }
        b = b.support(F::from_f32(2.5), F::from_f32(2.5));
        for i in 0..5 {
            b = b.link(i, (i + 1) % 5, rim);
        }
        for i in 0..5 {
            b = b.link(i, 5, rim);
        }
        for (a, c) in [(0, 2), (1, 3), (2, 4), (0, 3), (1, 4)] {
            b = b.link(a, c, brace);
        }
        b
    }

    /// Very soft octagon with spokes to a central support point.
    pub fn octagon() -> Self {
        let k = F::from_f32(0.02);
        let mut b = Self::new();
        for (x, y) in OCTAGON {
            b = b.point(F::from_f32(x), F::from_f32(y));
        }
        b = b.support(F::zero(), F::from_f32(1.5));
        for i in 0..8 {
            b = b.link(i, (i + 1) % 8, k);
        }
        for i in 0..8 {
            b = b.link(i, 8, k);
        }
        b
    }
}

impl<F: Float> Default for TopologyBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}

const PENTAGON: [(f32, f32); 5] = [(0.0, 0.0), (5.0, 0.0), (6.0, 3.5), (2.5, 5.0), (-1.0, 3.5)];

const OCTAGON: [(f32, f32); 8] = [
    (-1.0, 3.0),
    (-2.0, 2.0),
    (-2.0, 1.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (2.0, 1.0),
    (2.0, 2.0),
    (1.0, 3.0),
];
