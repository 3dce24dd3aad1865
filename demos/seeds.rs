//! B2/S: Seeds. Every live cell dies each generation; growth is explosive.

use std::thread;
use std::time::Duration;

use ndcam::prelude::*;
use ndcam::rule::presets;

const CLOCK_MS: u64 = 50;

fn main() -> CaResult<()> {
    let mut cam = Cam2D::square(0, 40, 2)?;
    let (ruleset, neighborhood) = parse(presets::SEEDS, &cam)?;

    // A tiny seed in the middle is enough.
    cam.set_cell(NdVec([19, 20]), ALIVE);
    cam.set_cell(NdVec([20, 20]), ALIVE);

    for _ in 0..120 {
        render(&cam);
        thread::sleep(Duration::from_millis(CLOCK_MS));
        cam.tick(&ruleset, &neighborhood)?;
    }
    Ok(())
}

fn render(cam: &Cam2D) {
    let shape = cam.shape();
    print!("\x1B[2J\x1B[H");
    println!("generation {:>4}  population {:>4}", cam.generation(), cam.population());
    for y in 0..shape[Axis::Y] {
        let mut line = String::with_capacity(shape[Axis::X]);
        for x in 0..shape[Axis::X] {
            line.push(if cam.get_cell(NdVec([x, y])) == DEAD {
                ' '
            } else {
                '█'
            });
        }
        println!("{}", line);
    }
}
