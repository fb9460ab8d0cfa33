use blobsim::{ControlInput, Simulation, SolverConfig, TopologyBuilder, Vec2};

fn run(seed: u64) -> Vec<Vec2<f32>> {
    let builder = TopologyBuilder::supported_pentagon().with_seed(seed);
    let mut sim = Simulation::from_builder(builder, &SolverConfig::new()).unwrap();
    for i in 0..120 {
        let input = if (40..80).contains(&i) {
            ControlInput::grab(Vec2::new(3.0, 4.0))
        } else {
            ControlInput::idle()
        };
        sim.step(input);
    }
    sim.snapshot().points().to_vec()
}

#[test]
fn same_seed_same_trajectory() {
    let results: Vec<_> = (0..5).map(|_| run(1234)).collect();
    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}

#[test]
fn different_seeds_differ() {
    assert_ne!(run(1), run(2));
}
