//! Operations on `NdVec`s.
//!
//! All operations are componentwise. Since components are `Copy` primitives,
//! operands are taken by value.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{NdVec, NdVecNum};
use crate::dim::{Dim, DimFor};

impl<D: DimFor<N> + Dim, N: NdVecNum> Add for NdVec<D, N> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::from_fn(|ax| self[ax] + other[ax])
    }
}
impl<D: DimFor<N> + Dim, N: NdVecNum> Sub for NdVec<D, N> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::from_fn(|ax| self[ax] - other[ax])
    }
}
impl<D: DimFor<N> + Dim, N: NdVecNum> AddAssign for NdVec<D, N> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        for &ax in D::axes() {
            self[ax] += other[ax];
        }
    }
}
impl<D: DimFor<N> + Dim, N: NdVecNum> SubAssign for NdVec<D, N> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        for &ax in D::axes() {
            self[ax] -= other[ax];
        }
    }
}

// Scalar operations apply the scalar to every component.
impl<D: DimFor<N> + Dim, N: NdVecNum> Add<N> for NdVec<D, N> {
    type Output = Self;

    #[inline]
    fn add(self, other: N) -> Self {
        Self::from_fn(|ax| self[ax] + other)
    }
}
impl<D: DimFor<N> + Dim, N: NdVecNum> Sub<N> for NdVec<D, N> {
    type Output = Self;

    #[inline]
    fn sub(self, other: N) -> Self {
        Self::from_fn(|ax| self[ax] - other)
    }
}
impl<D: DimFor<N> + Dim, N: NdVecNum> Mul<N> for NdVec<D, N> {
    type Output = Self;

    #[inline]
    fn mul(self, other: N) -> Self {
        Self::from_fn(|ax| self[ax] * other)
    }
}
impl<D: DimFor<N> + Dim, N: NdVecNum> MulAssign<N> for NdVec<D, N> {
    #[inline]
    fn mul_assign(&mut self, other: N) {
        for &ax in D::axes() {
            self[ax] *= other;
        }
    }
}

// Negation is only available for signed components.
impl<D: DimFor<N> + Dim, N: NdVecNum + Neg<Output = N>> Neg for NdVec<D, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_fn(|ax| -self[ax])
    }
}
