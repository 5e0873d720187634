pub use super::atom_type::{AtomType, Element};
pub use super::atomic::{AtomicPotential, LJCut, None_};
pub use super::compute::{sample, EnergyReport, SimulationState};
pub use super::config::{Backend, RunConfig};
pub use super::container::{Container, BC};
pub use super::integrators::{IntegrationLoop, Observer};
pub use super::lattice::{Fcc, Lattice};
pub use super::neighbor::{NeighborMethod, UpdateSettings};
pub use super::output::{PeriodicReporter, XyzTrajectory};
pub use super::simulation::Simulation;
pub use super::Atoms;
