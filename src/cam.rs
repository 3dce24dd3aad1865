//! The cellular automata machine: a stack of cell planes over one lattice.
//!
//! The front plane is the authoritative "master" state; the planes behind it
//! are echoes of earlier generations, retained for trailing/fading display
//! effects. Only [`NdCam::tick`] mutates the stack, and it does so by
//! wholesale rotation: the new master is pushed at the front and the oldest
//! echo falls off the back, so echo planes are never partially mutated.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

use crate::dim::{Dim, Dim1D, Dim2D, Dim3D, Dim4D, Dim5D, Dim6D};
use crate::error::{CaError, CaResult};
use crate::ndarray::NdArray;
use crate::ndvec::UVec;
use crate::neighborhood::Neighborhood;
use crate::rule::Ruleset;

/// The conventional "dead" state.
pub const DEAD: u8 = 0;
/// The conventional "alive" state of binary automata.
pub const ALIVE: u8 = 1;

/// One full snapshot of cell states over a `D`-dimensional lattice.
pub type Plane<D> = NdArray<u8, D>;

/// 1D cellular automata machine.
pub type Cam1D = NdCam<Dim1D>;
/// 2D cellular automata machine.
pub type Cam2D = NdCam<Dim2D>;
/// 3D cellular automata machine.
pub type Cam3D = NdCam<Dim3D>;
/// 4D cellular automata machine.
pub type Cam4D = NdCam<Dim4D>;
/// 5D cellular automata machine.
pub type Cam5D = NdCam<Dim5D>;
/// 6D cellular automata machine.
pub type Cam6D = NdCam<Dim6D>;

/// Cellular automata machine over a `D`-dimensional lattice.
///
/// Invariants: the plane deque always holds `echo_depth() + 1` planes of one
/// shared shape, and `planes()[0]` is the master.
#[derive(Debug, Clone)]
pub struct NdCam<D: Dim> {
    planes: VecDeque<Plane<D>>,
    shape: UVec<D>,
    state_count: usize,
    generation: u64,
}

impl<D: Dim> NdCam<D> {
    /// Creates a CAM of the given shape with all cells dead.
    ///
    /// `echo_depth` is the number of extra history planes to retain behind
    /// the master; `state_count` is the alphabet size.
    ///
    /// Returns [`CaError::InvalidStateCount`] unless `state_count` is in
    /// `2..=256`, and [`CaError::ShapeMismatch`] if any extent is zero.
    pub fn new(echo_depth: usize, shape: UVec<D>, state_count: usize) -> CaResult<Self> {
        check_state_count(state_count)?;
        if shape.product() == 0 {
            return Err(CaError::ShapeMismatch {
                expected: "nonzero extents".to_owned(),
                found: shape.to_string(),
            });
        }
        let planes = (0..=echo_depth)
            .map(|_| Plane::filled(shape, DEAD))
            .collect();
        Ok(Self {
            planes,
            shape,
            state_count,
            generation: 0,
        })
    }

    /// Creates a CAM with the same extent along every axis.
    pub fn square(echo_depth: usize, extent: usize, state_count: usize) -> CaResult<Self> {
        Self::new(echo_depth, UVec::repeat(extent), state_count)
    }

    /// Creates a CAM from caller-supplied planes; the first plane is the
    /// master and the rest are echoes.
    ///
    /// Returns [`CaError::ShapeMismatch`] if `planes` is empty or the planes
    /// do not all share one shape.
    pub fn with_planes(planes: Vec<Plane<D>>, state_count: usize) -> CaResult<Self> {
        check_state_count(state_count)?;
        let shape = match planes.first() {
            Some(master) if master.count() > 0 => *master.size(),
            _ => {
                return Err(CaError::ShapeMismatch {
                    expected: "at least one nonempty plane".to_owned(),
                    found: "none".to_owned(),
                })
            }
        };
        for plane in &planes {
            if *plane.size() != shape {
                return Err(CaError::ShapeMismatch {
                    expected: shape.to_string(),
                    found: plane.size().to_string(),
                });
            }
        }
        Ok(Self {
            planes: planes.into(),
            shape,
            state_count,
            generation: 0,
        })
    }

    /// Returns the number of dimensions of the lattice.
    #[inline]
    pub fn ndim(&self) -> usize {
        D::NDIM
    }
    /// Returns the extent of the lattice along each axis.
    #[inline]
    pub fn shape(&self) -> UVec<D> {
        self.shape
    }
    /// Returns the alphabet size.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.state_count
    }
    /// Returns the number of echo planes behind the master.
    #[inline]
    pub fn echo_depth(&self) -> usize {
        self.planes.len() - 1
    }
    /// Returns the number of generations that have elapsed.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns all planes; index 0 is the master, higher indices are
    /// progressively older echoes.
    #[inline]
    pub fn planes(&self) -> &VecDeque<Plane<D>> {
        &self.planes
    }
    /// Returns the plane at `index`, or `None` if there is no such plane.
    #[inline]
    pub fn plane(&self, index: usize) -> Option<&Plane<D>> {
        self.planes.get(index)
    }
    /// Returns the master plane.
    #[inline]
    pub fn master(&self) -> &Plane<D> {
        &self.planes[0]
    }
    /// Returns the master plane mutably, for seeding patterns.
    #[inline]
    pub fn master_mut(&mut self) -> &mut Plane<D> {
        &mut self.planes[0]
    }

    /// Returns the state of the master cell at `pos`.
    #[inline]
    pub fn get_cell(&self, pos: UVec<D>) -> u8 {
        self.master()[pos]
    }
    /// Sets the state of the master cell at `pos`.
    ///
    /// # Panics
    ///
    /// This method panics if `pos` is outside the lattice or `state` is
    /// outside the alphabet.
    pub fn set_cell(&mut self, pos: UVec<D>, state: u8) {
        assert!(
            (state as usize) < self.state_count,
            "State {} outside alphabet of {} states",
            state,
            self.state_count,
        );
        self.master_mut()[pos] = state;
    }

    /// Returns the number of non-dead cells in the master plane.
    pub fn population(&self) -> usize {
        self.master()
            .as_flat_slice()
            .iter()
            .filter(|&&state| state != DEAD)
            .count()
    }

    /// Sets every cell of every plane to dead.
    pub fn clear(&mut self) {
        for plane in &mut self.planes {
            plane.fill(DEAD);
        }
    }

    /// Assigns each master cell an independently, uniformly chosen state from
    /// the alphabet. The same seed always produces the same lattice.
    pub fn randomize(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let state_count = self.state_count;
        for cell in self.master_mut().as_flat_slice_mut() {
            *cell = rng.gen_range(0..state_count) as u8;
        }
        debug!(
            "randomized {} cells from seed {}",
            self.master().count(),
            seed,
        );
    }

    /// Advances the CAM by one generation.
    ///
    /// Every cell's next state is computed from the current master before
    /// anything is committed; on error (possible only under the `Reject`
    /// boundary policy) the CAM is left exactly as it was. On success the new
    /// master is pushed at the front of the plane stack, every echo shifts
    /// back by one, the oldest is dropped, and the generation counter
    /// increments.
    pub fn tick(&mut self, ruleset: &Ruleset, neighborhood: &Neighborhood<D>) -> CaResult<()> {
        let master = self.master();
        let mut neighbors = Vec::with_capacity(neighborhood.len());
        let mut next = Vec::with_capacity(master.count());
        for pos in master.positions() {
            neighborhood.states_into(master, pos, &mut neighbors)?;
            next.push(ruleset.apply(master[pos], &neighbors));
        }
        let next_master = Plane::from_flat_slice(self.shape, next);

        // Commit: nothing above may have touched the plane stack.
        self.planes.pop_back();
        self.planes.push_front(next_master);
        self.generation += 1;
        trace!("advanced to generation {}", self.generation);
        Ok(())
    }

    /// Advances the CAM by `generations` generations.
    pub fn step(
        &mut self,
        generations: u64,
        ruleset: &Ruleset,
        neighborhood: &Neighborhood<D>,
    ) -> CaResult<()> {
        for _ in 0..generations {
            self.tick(ruleset, neighborhood)?;
        }
        Ok(())
    }
}

fn check_state_count(state_count: usize) -> CaResult<()> {
    if (2..=256).contains(&state_count) {
        Ok(())
    } else {
        Err(CaError::InvalidStateCount(state_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ndvec::NdVec;

    #[test]
    fn test_cam_construction() {
        let cam: Cam2D = NdCam::new(2, NdVec([4, 6]), 2).unwrap();
        assert_eq!(2, cam.ndim());
        assert_eq!(NdVec([4, 6]), cam.shape());
        assert_eq!(2, cam.echo_depth());
        assert_eq!(3, cam.planes().len());
        assert_eq!(0, cam.generation());
        assert_eq!(0, cam.population());
    }

    #[test]
    fn test_cam_rejects_bad_state_count() {
        for &bad in &[0, 1, 257] {
            assert_eq!(
                CaError::InvalidStateCount(bad),
                Cam2D::square(0, 4, bad).unwrap_err(),
            );
        }
        assert!(Cam2D::square(0, 4, 256).is_ok());
    }

    #[test]
    fn test_cam_rejects_zero_extent() {
        let err = Cam2D::new(0, NdVec([4, 0]), 2).unwrap_err();
        assert!(matches!(err, CaError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_cam_with_planes_shape_check() {
        let planes = vec![
            Plane::filled(NdVec([3, 3]), DEAD),
            Plane::filled(NdVec([3, 3]), DEAD),
        ];
        let cam = Cam2D::with_planes(planes, 2).unwrap();
        assert_eq!(1, cam.echo_depth());

        let mismatched = vec![
            Plane::filled(NdVec([3, 3]), DEAD),
            Plane::filled(NdVec([3, 4]), DEAD),
        ];
        let err = Cam2D::with_planes(mismatched, 2).unwrap_err();
        assert!(matches!(err, CaError::ShapeMismatch { .. }));

        assert!(Cam2D::with_planes(vec![], 2).is_err());
    }

    #[test]
    fn test_cam_set_get_population() {
        let mut cam = Cam2D::square(0, 5, 2).unwrap();
        assert_eq!(DEAD, cam.get_cell(NdVec([2, 2])));
        cam.set_cell(NdVec([2, 2]), ALIVE);
        assert_eq!(ALIVE, cam.get_cell(NdVec([2, 2])));
        assert_eq!(1, cam.population());
        cam.clear();
        assert_eq!(0, cam.population());
    }

    #[test]
    fn test_randomize_reproducible() {
        let mut cam1 = Cam2D::square(0, 16, 4).unwrap();
        let mut cam2 = Cam2D::square(0, 16, 4).unwrap();
        cam1.randomize(99);
        cam2.randomize(99);
        assert_eq!(cam1.master(), cam2.master());
        assert!(cam1
            .master()
            .as_flat_slice()
            .iter()
            .all(|&state| (state as usize) < 4));

        cam2.randomize(100);
        assert_ne!(cam1.master(), cam2.master());
    }
}
