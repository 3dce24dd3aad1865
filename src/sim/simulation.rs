//! A CAM bundled with the rule it runs under.

use std::sync::Arc;

use super::Simulate;
use crate::cam::{NdCam, Plane};
use crate::dim::{Dim, Dim1D, Dim2D, Dim3D, Dim4D, Dim5D, Dim6D};
use crate::error::CaResult;
use crate::neighborhood::Neighborhood;
use crate::rule::{parse, Ruleset};

/// 1D simulation.
pub type Simulation1D = Simulation<Dim1D>;
/// 2D simulation.
pub type Simulation2D = Simulation<Dim2D>;
/// 3D simulation.
pub type Simulation3D = Simulation<Dim3D>;
/// 4D simulation.
pub type Simulation4D = Simulation<Dim4D>;
/// 5D simulation.
pub type Simulation5D = Simulation<Dim5D>;
/// 6D simulation.
pub type Simulation6D = Simulation<Dim6D>;

/// A CAM plus the shared, read-only ruleset and neighborhood that drive its
/// ticks.
///
/// The ruleset and neighborhood are behind `Arc` so the same rule can drive
/// any number of machines without being rebuilt, and so they can never be
/// mutated mid-run.
#[derive(Debug, Clone)]
pub struct Simulation<D: Dim> {
    cam: NdCam<D>,
    ruleset: Arc<Ruleset>,
    neighborhood: Arc<Neighborhood<D>>,
}

impl<D: Dim> Simulation<D> {
    /// Creates a simulation from a CAM and a prebuilt rule.
    pub fn new(
        cam: NdCam<D>,
        ruleset: impl Into<Arc<Ruleset>>,
        neighborhood: impl Into<Arc<Neighborhood<D>>>,
    ) -> Self {
        Self {
            cam,
            ruleset: ruleset.into(),
            neighborhood: neighborhood.into(),
        }
    }

    /// Creates a simulation by parsing a rule string (e.g. `"B3/S23"`)
    /// against the CAM.
    pub fn from_rule_string(cam: NdCam<D>, notation: &str) -> CaResult<Self> {
        let (ruleset, neighborhood) = parse(notation, &cam)?;
        Ok(Self::new(cam, ruleset, neighborhood))
    }

    /// Returns the underlying CAM.
    #[inline]
    pub fn cam(&self) -> &NdCam<D> {
        &self.cam
    }
    /// Returns the underlying CAM mutably, for seeding.
    #[inline]
    pub fn cam_mut(&mut self) -> &mut NdCam<D> {
        &mut self.cam
    }
    /// Returns the master plane.
    #[inline]
    pub fn master(&self) -> &Plane<D> {
        self.cam.master()
    }
    /// Returns the ruleset.
    #[inline]
    pub fn ruleset(&self) -> &Arc<Ruleset> {
        &self.ruleset
    }
    /// Returns the neighborhood.
    #[inline]
    pub fn neighborhood(&self) -> &Arc<Neighborhood<D>> {
        &self.neighborhood
    }
}

impl<D: Dim> Simulate for Simulation<D> {
    fn ndim(&self) -> usize {
        D::NDIM
    }
    fn state_count(&self) -> usize {
        self.cam.state_count()
    }
    fn population(&self) -> usize {
        self.cam.population()
    }
    fn generation_count(&self) -> u64 {
        self.cam.generation()
    }
    fn step_one(&mut self) -> CaResult<()> {
        self.cam.tick(&self.ruleset, &self.neighborhood)
    }
}

/// Simulation of any dimensionality.
#[allow(missing_docs)]
#[derive(Debug, Clone)]
pub enum AnySimulation {
    Sim1D(Simulation1D),
    Sim2D(Simulation2D),
    Sim3D(Simulation3D),
    Sim4D(Simulation4D),
    Sim5D(Simulation5D),
    Sim6D(Simulation6D),
}

macro_rules! impl_any_simulation_from {
    ($variant:ident, $dim:ty) => {
        impl From<Simulation<$dim>> for AnySimulation {
            fn from(simulation: Simulation<$dim>) -> Self {
                Self::$variant(simulation)
            }
        }
    };
}

impl_any_simulation_from!(Sim1D, Dim1D);
impl_any_simulation_from!(Sim2D, Dim2D);
impl_any_simulation_from!(Sim3D, Dim3D);
impl_any_simulation_from!(Sim4D, Dim4D);
impl_any_simulation_from!(Sim5D, Dim5D);
impl_any_simulation_from!(Sim6D, Dim6D);

impl super::AsSimulate for AnySimulation {
    fn as_sim(&self) -> &dyn Simulate {
        match self {
            Self::Sim1D(sim) => sim,
            Self::Sim2D(sim) => sim,
            Self::Sim3D(sim) => sim,
            Self::Sim4D(sim) => sim,
            Self::Sim5D(sim) => sim,
            Self::Sim6D(sim) => sim,
        }
    }
    fn as_sim_mut(&mut self) -> &mut dyn Simulate {
        match self {
            Self::Sim1D(sim) => sim,
            Self::Sim2D(sim) => sim,
            Self::Sim3D(sim) => sim,
            Self::Sim4D(sim) => sim,
            Self::Sim5D(sim) => sim,
            Self::Sim6D(sim) => sim,
        }
    }
}
