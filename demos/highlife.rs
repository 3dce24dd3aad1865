//! B36/S23: HighLife, driven through the dimension-erased `Simulate`
//! interface the way a windowed front end would.

use std::thread;
use std::time::Duration;

use ndcam::prelude::*;
use ndcam::rule::presets;

const CLOCK_MS: u64 = 80;

fn main() -> CaResult<()> {
    let mut cam = Cam2D::square(0, 32, 2)?;
    cam.randomize(0xBEEF);
    let sim = Simulation::from_rule_string(cam, presets::HIGHLIFE)?;
    let mut any: AnySimulation = sim.into();

    for _ in 0..150 {
        println!(
            "generation {:>4}: {} live cells in a {}-dimensional lattice",
            any.generation_count(),
            any.population(),
            any.ndim(),
        );
        thread::sleep(Duration::from_millis(CLOCK_MS));
        any.step_one()?;
    }
    Ok(())
}
