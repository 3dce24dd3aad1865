//! B3/S23: Conway's Game of Life, with one echo plane for motion trails.
//!
//! The engine performs no I/O of its own; this demo is the "visualization
//! adapter": every `CLOCK_MS` it ticks the machine, then renders the master
//! plane (with the first echo drawn faintly behind it) to the terminal.

use std::thread;
use std::time::Duration;

use ndcam::prelude::*;

const CLOCK_MS: u64 = 100;

fn main() -> CaResult<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let mut cam = Cam2D::square(1, 32, 2)?;
    let (ruleset, neighborhood) = parse("B3/S23", &cam)?;
    cam.randomize(0xF1F7);

    for _ in 0..200 {
        render(&cam);
        thread::sleep(Duration::from_millis(CLOCK_MS));
        cam.tick(&ruleset, &neighborhood)?;
    }
    Ok(())
}

fn render(cam: &Cam2D) {
    let master = cam.master();
    let echo = cam.plane(1).expect("Echo plane missing");
    let shape = cam.shape();

    // Clear the terminal and move the cursor home.
    print!("\x1B[2J\x1B[H");
    println!("generation {:>4}  population {:>4}", cam.generation(), cam.population());
    for y in 0..shape[Axis::Y] {
        let mut line = String::with_capacity(shape[Axis::X]);
        for x in 0..shape[Axis::X] {
            let pos = NdVec([x, y]);
            line.push(match (master[pos], echo[pos]) {
                (s, _) if s != DEAD => '█',
                (_, s) if s != DEAD => '·',
                _ => ' ',
            });
        }
        println!("{}", line);
    }
}
