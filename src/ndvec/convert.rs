//! Conversions between different types of `NdVec`s.

use num::ToPrimitive;

use super::{IVec, UVec};
use crate::dim::Dim;

impl<D: Dim> IVec<D> {
    /// Converts the `IVec` to a `UVec`.
    ///
    /// # Panics
    ///
    /// This method panics if any component is negative.
    #[inline]
    pub fn to_uvec(&self) -> UVec<D> {
        UVec::from_fn(|ax| {
            self[ax]
                .to_usize()
                .expect("Cannot convert this IVec into a UVec")
        })
    }
}

impl<D: Dim> UVec<D> {
    /// Converts the `UVec` to an `IVec`.
    ///
    /// # Panics
    ///
    /// This method panics if any component does not fit in an `isize`.
    #[inline]
    pub fn to_ivec(&self) -> IVec<D> {
        IVec::from_fn(|ax| {
            self[ax]
                .to_isize()
                .expect("Cannot convert this UVec into an IVec")
        })
    }
}
