//! Tick driving, independent of dimensionality.

mod simulate;
mod simulation;

pub use simulate::{AsSimulate, Simulate};
pub use simulation::{
    AnySimulation, Simulation, Simulation1D, Simulation2D, Simulation3D, Simulation4D,
    Simulation5D, Simulation6D,
};
