use blobsim::{ControlInput, PointRole, Simulation, SolverConfig, TopologyBuilder, Vec2};
use wasm_bindgen::prelude::*;

/// Pixels per world unit.
const SCALE: f32 = 10.0;

#[wasm_bindgen(start)]
pub fn start() {
    let _ = console_log::init_with_level(log::Level::Info);
}

/// World <-> canvas mapping: origin at the canvas centre, y up in the world.
#[derive(Copy, Clone)]
struct ScreenMapping {
    width: f32,
    height: f32,
}

impl ScreenMapping {
    fn to_world(self, sx: f32, sy: f32) -> Vec2<f32> {
        Vec2::new((sx - self.width / 2.0) / SCALE, -(sy - self.height / 2.0) / SCALE)
    }

    fn to_screen(self, p: Vec2<f32>) -> (f32, f32) {
        (self.width / 2.0 + p.x * SCALE, self.height / 2.0 - p.y * SCALE)
    }
}

// ---- Blob Demo ----

#[wasm_bindgen]
pub struct BlobDemo {
    sim: Simulation<f32>,
    mapping: ScreenMapping,
    pointer: Vec2<f32>,
    pressed: bool,
}

#[wasm_bindgen]
impl BlobDemo {
    /// `shape`: 0 triangle, 1 pentagon, 2 supported pentagon, anything else octagon.
    #[wasm_bindgen(constructor)]
    pub fn new(shape: u32, seed: u64, width: f32, height: f32) -> Result<BlobDemo, JsError> {
        let builder = match shape {
            0 => TopologyBuilder::triangle(),
            1 => TopologyBuilder::pentagon(),
            2 => TopologyBuilder::supported_pentagon(),
            _ => TopologyBuilder::octagon(),
        };
        let sim = Simulation::from_builder(builder.with_seed(seed), &SolverConfig::new())?;
        Ok(BlobDemo {
            sim,
            mapping: ScreenMapping { width, height },
            pointer: Vec2::zero(),
            pressed: false,
        })
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.mapping = ScreenMapping { width, height };
    }

    pub fn pointer_move(&mut self, sx: f32, sy: f32) {
        self.pointer = self.mapping.to_world(sx, sy);
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// One simulation tick; call once per animation frame.
    pub fn update(&mut self) {
        let input = if self.pressed {
            ControlInput::grab(self.pointer)
        } else {
            ControlInput::idle()
        };
        self.sim.step(input);
    }

    /// Returns flat [x0, y0, x1, y1, ...] canvas positions of the outline.
    pub fn outline(&self) -> Vec<f32> {
        let mut out = Vec::new();
        for p in self.sim.snapshot().boundary() {
            let (x, y) = self.mapping.to_screen(p);
            out.push(x);
            out.push(y);
        }
        out
    }

    /// Returns flat [ax, ay, bx, by, ...] canvas endpoints of every link.
    pub fn segments(&self) -> Vec<f32> {
        let snap = self.sim.snapshot();
        let mut out = Vec::with_capacity(snap.links().len() * 4);
        for (a, b) in snap.segments() {
            let (ax, ay) = self.mapping.to_screen(a);
            let (bx, by) = self.mapping.to_screen(b);
            out.extend_from_slice(&[ax, ay, bx, by]);
        }
        out
    }

    /// Indices of interior support points.
    pub fn supports(&self) -> Vec<u32> {
        self.sim
            .snapshot()
            .roles()
            .iter()
            .enumerate()
            .filter(|(_, role)| **role == PointRole::Support)
            .map(|(i, _)| i as u32)
            .collect()
    }

    /// Canvas y of the ground line; fill everything below it.
    pub fn ground_y(&self) -> f32 {
        let ground = self.sim.snapshot().ground_elevation();
        self.mapping.to_screen(Vec2::new(0.0, ground)).1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_centre_is_world_origin() {
        let m = ScreenMapping { width: 800.0, height: 600.0 };
        assert_eq!(m.to_world(400.0, 300.0), Vec2::new(0.0, 0.0));
        assert_eq!(m.to_screen(Vec2::new(1.0, 1.0)), (410.0, 290.0));
    }
}
