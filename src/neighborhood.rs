//! Neighborhood templates and boundary policies.
//!
//! A neighborhood is an ordered set of coordinate offsets relative to a focal
//! cell, plus a policy for resolving lookups that land outside the lattice.
//! Templates are data, not code: the same `Neighborhood` value is shared
//! read-only across every cell of every tick.

use itertools::Itertools;

use crate::cam::{NdCam, Plane};
use crate::dim::Dim;
use crate::error::{CaError, CaResult};
use crate::ndvec::{IVec, UVec};

/// Policy for resolving neighbor coordinates outside the lattice extents.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Boundary {
    /// Reduce each out-of-range component modulo the extent (toroidal
    /// topology). This is the default.
    Wrap,
    /// Substitute a fixed background state for any out-of-range neighbor.
    Fixed(u8),
    /// Fail the lookup with [`CaError::OutOfBounds`].
    Reject,
}

impl Default for Boundary {
    fn default() -> Self {
        Boundary::Wrap
    }
}

/// Ordered, deduplicated set of cell offsets with a boundary policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood<D: Dim> {
    offsets: Vec<IVec<D>>,
    boundary: Boundary,
}

impl<D: Dim> Neighborhood<D> {
    /// Creates a neighborhood from an arbitrary offset template, with the
    /// default `Wrap` boundary policy.
    ///
    /// Duplicate offsets are removed; the first occurrence keeps its place in
    /// the template order.
    pub fn from_offsets(offsets: impl IntoIterator<Item = IVec<D>>) -> Self {
        Self {
            offsets: offsets.into_iter().unique().collect_vec(),
            boundary: Boundary::default(),
        }
    }

    /// Creates a neighborhood from untyped offset slices.
    ///
    /// Returns [`CaError::InvalidOffset`] if any slice does not have exactly
    /// `D::NDIM` components.
    pub fn from_slices(slices: &[&[isize]]) -> CaResult<Self> {
        let mut offsets = Vec::with_capacity(slices.len());
        for slice in slices {
            if slice.len() != D::NDIM {
                return Err(CaError::InvalidOffset {
                    ndim: D::NDIM,
                    found: slice.len(),
                });
            }
            offsets.push(IVec::from_fn(|ax| slice[ax as usize]));
        }
        Ok(Self::from_offsets(offsets))
    }

    /// Creates the radius-1 Moore neighborhood: all 3^D - 1 cells adjacent to
    /// the focal cell, including diagonals.
    pub fn moore() -> Self {
        Self::moore_with_radius(1)
    }

    /// Creates the Moore neighborhood of the given radius: every cell within
    /// a hypercube of side `2r + 1` centered on the focal cell, except the
    /// focal cell itself.
    pub fn moore_with_radius(radius: usize) -> Self {
        let r = radius as isize;
        let offsets = (0..D::NDIM)
            .map(|_| -r..=r)
            .multi_cartesian_product()
            .map(|components| IVec::from_fn(|ax| components[ax as usize]))
            .filter(|offset| !offset.is_zero())
            .collect_vec();
        Self::from_offsets(offsets)
    }

    /// Creates the von Neumann neighborhood: the 2*D orthogonally adjacent
    /// cells.
    pub fn von_neumann() -> Self {
        let mut offsets = Vec::with_capacity(2 * D::NDIM);
        for &ax in D::axes() {
            offsets.push(-IVec::unit(ax));
            offsets.push(IVec::unit(ax));
        }
        Self::from_offsets(offsets)
    }

    /// Replaces the boundary policy.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Returns the boundary policy.
    #[inline]
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }
    /// Returns the offset template, in order.
    #[inline]
    pub fn offsets(&self) -> &[IVec<D>] {
        &self.offsets
    }
    /// Returns the number of offsets in the template.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }
    /// Returns true if the template is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Returns the states of the neighbors of `pos` in `plane`, one per
    /// offset, in template order.
    pub fn states(&self, plane: &Plane<D>, pos: UVec<D>) -> CaResult<Vec<u8>> {
        let mut ret = Vec::with_capacity(self.offsets.len());
        self.states_into(plane, pos, &mut ret)?;
        Ok(ret)
    }

    /// Like [`Neighborhood::states`], but reuses `out` instead of
    /// allocating. `out` is cleared first.
    ///
    /// `pos` itself must be inside the plane.
    pub fn states_into(&self, plane: &Plane<D>, pos: UVec<D>, out: &mut Vec<u8>) -> CaResult<()> {
        out.clear();
        for &offset in &self.offsets {
            out.push(self.resolve(plane, pos, offset)?);
        }
        Ok(())
    }

    /// Returns the states of the neighbors of `pos` in plane `plane_index` of
    /// `cam`, one per offset, in template order.
    ///
    /// # Panics
    ///
    /// This method panics if `plane_index` is not a valid plane index.
    pub fn neighbors(&self, cam: &NdCam<D>, plane_index: usize, pos: UVec<D>) -> CaResult<Vec<u8>> {
        self.states(&cam.planes()[plane_index], pos)
    }

    /// Resolves a single neighbor lookup per the boundary policy.
    fn resolve(&self, plane: &Plane<D>, pos: UVec<D>, offset: IVec<D>) -> CaResult<u8> {
        let size = *plane.size();
        let mut resolved = UVec::origin();
        for &ax in D::axes() {
            let extent = size[ax] as isize;
            let c = pos[ax] as isize + offset[ax];
            if (0..extent).contains(&c) {
                resolved[ax] = c as usize;
            } else {
                match self.boundary {
                    Boundary::Wrap => resolved[ax] = c.rem_euclid(extent) as usize,
                    Boundary::Fixed(background) => return Ok(background),
                    Boundary::Reject => {
                        return Err(CaError::OutOfBounds {
                            pos: pos.to_string(),
                            offset: offset.to_string(),
                        })
                    }
                }
            }
        }
        Ok(plane[resolved])
    }
}
