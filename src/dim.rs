//! Compile-time dimensionality.
//!
//! Until generic associated types are stable, vectors of a generic
//! dimensionality need a `DimFor` helper trait to pick the backing array type
//! for each component type. All lattice and neighborhood code is generic over
//! `D: Dim`; nothing is specialized per dimension.

use std::fmt;
use std::hash::Hash;

use crate::axis::{ndim_axes, Axis};
use crate::ndvec::NdVecNum;

/// Type-level dimensionality (1 through 6).
pub trait Dim:
    'static
    + fmt::Debug
    + Default
    + Copy
    + Clone
    + Eq
    + Hash
    + PartialOrd
    + Ord
    + Send
    + Sync
    + DimFor<usize>
    + DimFor<isize>
{
    /// Number of dimensions.
    const NDIM: usize;

    /// Returns the list of axes of this many dimensions.
    #[inline]
    fn axes() -> &'static [Axis] {
        ndim_axes(Self::NDIM)
    }
}

/// Dimensionality that can back a vector with components of type `N`.
pub trait DimFor<N: NdVecNum>: 'static + fmt::Debug + Default + Copy + Clone + Eq + Hash + Send + Sync {
    /// Fixed-length array of `N`, with `Dim::NDIM` components.
    type Array: 'static
        + fmt::Debug
        + Default
        + Copy
        + Clone
        + Eq
        + Hash
        + Send
        + Sync
        + AsRef<[N]>
        + AsMut<[N]>;
}

macro_rules! impl_dim {
    ($dim:ident, $ndim:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $dim;

        impl Dim for $dim {
            const NDIM: usize = $ndim;
        }

        impl<N: NdVecNum> DimFor<N> for $dim {
            type Array = [N; $ndim];
        }
    };
}

impl_dim!(Dim1D, 1, "1 dimension.");
impl_dim!(Dim2D, 2, "2 dimensions.");
impl_dim!(Dim3D, 3, "3 dimensions.");
impl_dim!(Dim4D, 4, "4 dimensions.");
impl_dim!(Dim5D, 5, "5 dimensions.");
impl_dim!(Dim6D, 6, "6 dimensions.");
