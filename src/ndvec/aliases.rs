//! Type aliases for `NdVec`s.

use super::NdVec;
use crate::dim::{Dim1D, Dim2D, Dim3D, Dim4D, Dim5D, Dim6D};

/// `D`-dimensional vector with `isize` components (offsets and deltas).
pub type IVec<D> = NdVec<D, isize>;
/// `D`-dimensional vector with `usize` components (positions and extents).
pub type UVec<D> = NdVec<D, usize>;

/// 1D vector with `isize` components.
pub type IVec1D = IVec<Dim1D>;
/// 2D vector with `isize` components.
pub type IVec2D = IVec<Dim2D>;
/// 3D vector with `isize` components.
pub type IVec3D = IVec<Dim3D>;
/// 4D vector with `isize` components.
pub type IVec4D = IVec<Dim4D>;
/// 5D vector with `isize` components.
pub type IVec5D = IVec<Dim5D>;
/// 6D vector with `isize` components.
pub type IVec6D = IVec<Dim6D>;

/// 1D vector with `usize` components.
pub type UVec1D = UVec<Dim1D>;
/// 2D vector with `usize` components.
pub type UVec2D = UVec<Dim2D>;
/// 3D vector with `usize` components.
pub type UVec3D = UVec<Dim3D>;
/// 4D vector with `usize` components.
pub type UVec4D = UVec<Dim4D>;
/// 5D vector with `usize` components.
pub type UVec5D = UVec<Dim5D>;
/// 6D vector with `usize` components.
pub type UVec6D = UVec<Dim6D>;
