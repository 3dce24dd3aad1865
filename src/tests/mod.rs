//! Behavior tests exercising the whole engine: lattice, neighborhood,
//! ruleset, and parser together.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::prelude::*;


/// Creates a binary 2D CAM of the given extent under the default wrap
/// boundary.
fn life_cam(extent: usize, echo_depth: usize) -> Cam2D {
    NdCam::square(echo_depth, extent, 2).unwrap()
}

/// Sets the given master cells alive.
fn set_cells(cam: &mut Cam2D, cells: &[(usize, usize)]) {
    for &(x, y) in cells {
        cam.set_cell(NdVec([x, y]), ALIVE);
    }
}

/// Returns the set of live master cell coordinates.
fn live_cells(cam: &Cam2D) -> HashSet<(usize, usize)> {
    cam.master()
        .iter_enumerated()
        .filter(|(_, &state)| state != DEAD)
        .map(|(pos, _)| (pos[Axis::X], pos[Axis::Y]))
        .collect()
}

#[test]
fn test_echo_planes_shift() {
    let mut cam = life_cam(6, 2);
    let (ruleset, neighborhood) = parse("B3/S23", &cam).unwrap();
    set_cells(&mut cam, &[(1, 1), (2, 1), (1, 2), (2, 2), (4, 4)]);

    let gen0 = cam.master().clone();
    cam.tick(&ruleset, &neighborhood).unwrap();
    let gen1 = cam.master().clone();
    // The first echo is the master as it was just before the tick.
    assert_eq!(&gen0, cam.plane(1).unwrap());

    cam.tick(&ruleset, &neighborhood).unwrap();
    assert_eq!(&gen1, cam.plane(1).unwrap());
    // The second echo is the master from two ticks ago.
    assert_eq!(&gen0, cam.plane(2).unwrap());
    assert_eq!(2, cam.generation());
}

#[test]
fn test_failed_tick_commits_nothing() {
    let mut cam = life_cam(3, 1);
    let (ruleset, neighborhood) = parse("B3/S23", &cam).unwrap();
    let neighborhood = neighborhood.with_boundary(Boundary::Reject);
    set_cells(&mut cam, &[(1, 1)]);

    let before = cam.clone();
    let err = cam.tick(&ruleset, &neighborhood).unwrap_err();
    assert!(matches!(err, CaError::OutOfBounds { .. }));
    // No partial commit: master, echoes, and generation are untouched.
    assert_eq!(before.planes(), cam.planes());
    assert_eq!(0, cam.generation());
}

#[test]
fn test_fixed_boundary_tick() {
    // Under a dead background, a block in the corner is still a still life.
    let mut cam = life_cam(4, 0);
    let (ruleset, neighborhood) = parse("B3/S23", &cam).unwrap();
    let neighborhood = neighborhood.with_boundary(Boundary::Fixed(DEAD));
    set_cells(&mut cam, &[(0, 0), (1, 0), (0, 1), (1, 1)]);

    let before = live_cells(&cam);
    cam.step(3, &ruleset, &neighborhood).unwrap();
    assert_eq!(before, live_cells(&cam));
}

proptest! {
    /// Ticking two clones of one CAM always yields identical planes.
    #[test]
    fn test_tick_determinism(seed: u64) {
        let mut cam1 = life_cam(12, 1);
        let (ruleset, neighborhood) = parse("B3/S23", &cam1).unwrap();
        cam1.randomize(seed);
        let mut cam2 = cam1.clone();

        for _ in 0..2 {
            cam1.tick(&ruleset, &neighborhood).unwrap();
            cam2.tick(&ruleset, &neighborhood).unwrap();
            prop_assert_eq!(cam1.planes(), cam2.planes());
        }
    }

    /// A randomized binary lattice only ever holds states from the alphabet.
    #[test]
    fn test_randomize_respects_alphabet(seed: u64) {
        let mut cam = NdCam::<Dim2D>::square(0, 8, 3).unwrap();
        cam.randomize(seed);
        prop_assert!(cam
            .master()
            .as_flat_slice()
            .iter()
            .all(|&state| (state as usize) < 3));
    }
}
