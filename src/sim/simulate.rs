//! Dimension-independent simulation interface.
//!
//! A visualization adapter drives a simulation through `dyn Simulate`: every
//! `period_ms` it calls [`Simulate::step_one`], then renders, with no need to
//! know the lattice dimensionality. Because `step_one` returns only after a
//! full commit (or no commit at all), the adapter can be cancelled between
//! calls at any time without ever observing a half-advanced lattice.

use crate::error::CaResult;

/// Simulation methods whose type signatures are the same for all lattices,
/// regardless of dimensionality.
pub trait Simulate {
    /// Returns the number of dimensions of the underlying lattice.
    fn ndim(&self) -> usize;
    /// Returns the alphabet size of the underlying lattice.
    fn state_count(&self) -> usize;
    /// Returns the number of non-dead cells in the master plane.
    fn population(&self) -> usize;
    /// Returns the number of generations that have elapsed.
    fn generation_count(&self) -> u64;
    /// Advances the simulation by one generation.
    fn step_one(&mut self) -> CaResult<()>;

    /// Advances the simulation by the given number of generations.
    fn step(&mut self, generations: u64) -> CaResult<()> {
        for _ in 0..generations {
            self.step_one()?;
        }
        Ok(())
    }
}

/// A proxy trait for `Simulate`.
///
/// To avoid re-implementing every method of `Simulate` on wrapper types, only
/// these two methods need to be implemented.
pub trait AsSimulate {
    /// Convert to an immutable Simulate trait object.
    fn as_sim(&self) -> &dyn Simulate;
    /// Convert to a mutable Simulate trait object.
    fn as_sim_mut(&mut self) -> &mut dyn Simulate;
}

impl<T> Simulate for T
where
    T: AsSimulate,
{
    fn ndim(&self) -> usize {
        self.as_sim().ndim()
    }
    fn state_count(&self) -> usize {
        self.as_sim().state_count()
    }
    fn population(&self) -> usize {
        self.as_sim().population()
    }
    fn generation_count(&self) -> u64 {
        self.as_sim().generation_count()
    }
    fn step_one(&mut self) -> CaResult<()> {
        self.as_sim_mut().step_one()
    }
    fn step(&mut self, generations: u64) -> CaResult<()> {
        self.as_sim_mut().step(generations)
    }
}
