use blobsim::{ControlInput, Simulation, SolverConfig, TopologyBuilder, Vec2};
use proptest::prelude::*;

fn input_strategy() -> impl Strategy<Value = ControlInput<f64>> {
    (any::<bool>(), -30.0f64..30.0, -30.0f64..30.0)
        .prop_map(|(active, x, y)| ControlInput { active, target: Vec2::new(x, y) })
}

proptest! {
    #[test]
    fn every_point_stays_above_ground(
        seed in any::<u64>(),
        shape in 0usize..4,
        inputs in prop::collection::vec(input_strategy(), 1..40),
        iterations in 0usize..25,
        ground in -20.0f64..2.0,
        gx in -0.5f64..0.5,
        gy in -2.0f64..0.0,
    ) {
        let builder = match shape {
            0 => TopologyBuilder::triangle(),
            1 => TopologyBuilder::pentagon(),
            2 => TopologyBuilder::supported_pentagon(),
            _ => TopologyBuilder::octagon(),
        };
        let config = SolverConfig::new()
            .with_iterations(iterations)
            .with_ground_elevation(ground)
            .with_gravity(Vec2::new(gx, gy));
        prop_assume!(config.validate().is_ok());
        let mut sim = Simulation::from_builder(builder.with_seed(seed), &config).unwrap();
        let count = sim.snapshot().points().len();
        for input in inputs {
            sim.step(input);
            let snap = sim.snapshot();
            prop_assert_eq!(snap.points().len(), count);
            for p in snap.points() {
                prop_assert!(p.y >= snap.ground_elevation(), "point {:?} below ground", p);
                prop_assert!(p.is_finite());
            }
        }
    }

    #[test]
    fn zero_iteration_config_still_holds_the_ground(
        start in -4.99f64..0.0,
        steps in 1usize..30,
    ) {
        let config = SolverConfig::new().with_iterations(0);
        let builder = TopologyBuilder::new().point(0.0, start).at_rest();
        let mut sim = Simulation::from_builder(builder, &config).unwrap();
        for _ in 0..steps {
            sim.step(ControlInput::idle());
            prop_assert!(sim.snapshot().points()[0].y >= -5.0);
        }
    }

    #[test]
    fn link_relaxation_keeps_pair_midpoint(
        ax in -10.0f64..10.0, ay in 0.0f64..10.0,
        bx in -10.0f64..10.0, by in 0.0f64..10.0,
        stiffness in 0.01f64..1.0,
        rest in 0.0f64..5.0,
        iterations in 1usize..20,
    ) {
        let config = SolverConfig::new()
            .with_gravity(Vec2::zero())
            .with_iterations(iterations);
        let builder = TopologyBuilder::new()
            .point(ax, ay)
            .point(bx, by)
            .link_with_rest(0, 1, stiffness, rest)
            .at_rest();
        let mut sim = Simulation::from_builder(builder, &config).unwrap();
        let before = {
            let p = sim.snapshot().points();
            (p[0] + p[1]).scale(0.5)
        };
        sim.step(ControlInput::idle());
        let p = sim.snapshot().points();
        let after = (p[0] + p[1]).scale(0.5);
        prop_assert!(before.distance(after) < 1e-9);
    }
}
