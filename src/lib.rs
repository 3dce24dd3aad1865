//! N-dimensional cellular automata machine.
//!
//! A CAM is a stack of dense cell planes over an N-dimensional lattice: the
//! front plane ("master") holds the current generation, and the planes behind
//! it ("echoes") hold snapshots of earlier generations for trailing display
//! effects. Each tick, a [`Ruleset`](rule::Ruleset) decides every cell's next
//! state from the states of its [`Neighborhood`](neighborhood::Neighborhood),
//! the whole lattice commits at once, and the echo planes shift back by one.
//!
//! # Example
//!
//! ```
//! use ndcam::prelude::*;
//!
//! let mut cam: Cam2D = NdCam::square(0, 16, 2).unwrap();
//! let (ruleset, neighborhood) = ndcam::rule::parse("B3/S23", &cam).unwrap();
//! cam.randomize(12345);
//! cam.tick(&ruleset, &neighborhood).unwrap();
//! assert_eq!(1, cam.generation());
//! ```

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

#[macro_use]
extern crate lazy_static;

pub mod axis;
pub mod cam;
pub mod dim;
mod error;
pub mod ndarray;
pub mod ndvec;
pub mod neighborhood;
pub mod rule;
pub mod sim;

pub use error::{CaError, CaResult};

pub mod traits {
    //! Re-exports of all traits, for glob-importing.
    pub use crate::dim::{Dim, DimFor};
    pub use crate::ndvec::NdVecNum;
    pub use crate::sim::{AsSimulate, Simulate};
}

pub mod prelude {
    //! Re-exports of commonly-used types, for glob-importing.
    pub use crate::traits::*;

    pub use crate::axis::Axis;
    pub use crate::cam::{Cam1D, Cam2D, Cam3D, Cam4D, Cam5D, Cam6D, NdCam, Plane, ALIVE, DEAD};
    pub use crate::dim::{Dim1D, Dim2D, Dim3D, Dim4D, Dim5D, Dim6D};
    pub use crate::error::{CaError, CaResult};
    pub use crate::ndarray::NdArray;
    pub use crate::ndvec::aliases::*;
    pub use crate::ndvec::NdVec;
    pub use crate::neighborhood::{Boundary, Neighborhood};
    pub use crate::rule::{parse, Configuration, Matcher, RuleFormat, Ruleset};
    pub use crate::sim::{AnySimulation, Simulation};
}

#[cfg(test)]
mod tests;
