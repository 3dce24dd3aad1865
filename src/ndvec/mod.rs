//! N-dimensional vectors.
//!
//! Lattice positions and extents use `UVec` (unsigned components) while
//! neighborhood offsets use `IVec` (signed components); both are thin wrappers
//! around a fixed-length array chosen by the `DimFor` trait.

use std::fmt;
use std::hash::Hash;
use std::ops::{AddAssign, Index, IndexMut, MulAssign, SubAssign};

use num::{Num, ToPrimitive};

pub mod aliases;
mod convert;
mod ops;

pub use aliases::*;

use crate::axis::Axis;
use crate::dim::{Dim, DimFor};

/// "Trait alias" for number types that can be used as vector components.
pub trait NdVecNum:
    'static
    + fmt::Debug
    + fmt::Display
    + Default
    + Copy
    + Clone
    + Eq
    + Ord
    + Hash
    + Send
    + Sync
    + Num
    + ToPrimitive
    + AddAssign
    + SubAssign
    + MulAssign
{
}
impl NdVecNum for isize {}
impl NdVecNum for usize {}

/// `D`-dimensional vector with components of type `N`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NdVec<D: DimFor<N>, N: NdVecNum>(pub D::Array);

impl<D: DimFor<N> + Dim, N: NdVecNum> fmt::Display for NdVec<D, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for &ax in D::axes() {
            if ax != Axis::X {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(&self[ax], f)?;
        }
        write!(f, "]")?;
        Ok(())
    }
}

// Implement indexing using `Axis`.
impl<D: DimFor<N>, N: NdVecNum> Index<Axis> for NdVec<D, N> {
    type Output = N;

    #[inline]
    fn index(&self, axis: Axis) -> &N {
        &self.0.as_ref()[axis as usize]
    }
}
impl<D: DimFor<N>, N: NdVecNum> IndexMut<Axis> for NdVec<D, N> {
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut N {
        &mut self.0.as_mut()[axis as usize]
    }
}

impl<D: DimFor<N> + Dim, N: NdVecNum> NdVec<D, N> {
    /// Creates a vector consisting of all zeros.
    #[inline]
    pub fn origin() -> Self {
        Self::default()
    }
    /// Returns true if the vector is all zeros, or false otherwise.
    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
    /// Creates a unit vector pointing along `axis`.
    pub fn unit(axis: Axis) -> Self {
        let mut ret = Self::default();
        ret[axis] = N::one();
        ret
    }

    /// Creates a vector by evaluating `generator` for each axis.
    pub fn from_fn(mut generator: impl FnMut(Axis) -> N) -> Self {
        let mut ret = Self::default();
        for &ax in D::axes() {
            ret[ax] = generator(ax);
        }
        ret
    }
    /// Creates a vector using `value` for all components.
    pub fn repeat(value: N) -> Self {
        Self::from_fn(|_| value)
    }

    /// Creates a vector by taking the minimum of the corresponding components
    /// in `v1` and `v2`.
    pub fn min(v1: &Self, v2: &Self) -> Self {
        Self::from_fn(|ax| std::cmp::min(v1[ax], v2[ax]))
    }
    /// Creates a vector by taking the maximum of the corresponding components
    /// in `v1` and `v2`.
    pub fn max(v1: &Self, v2: &Self) -> Self {
        Self::from_fn(|ax| std::cmp::max(v1[ax], v2[ax]))
    }

    /// Returns the sum of the components of the vector.
    pub fn sum(&self) -> N {
        let mut ret = N::zero();
        for &ax in D::axes() {
            ret += self[ax];
        }
        ret
    }
    /// Returns the product of the components of the vector.
    pub fn product(&self) -> N {
        let mut ret = N::one();
        for &ax in D::axes() {
            ret *= self[ax];
        }
        ret
    }
}

#[cfg(test)]
mod tests;
