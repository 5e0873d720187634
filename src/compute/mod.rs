mod energy;

pub use energy::{sample, EnergyReport, SimulationState};
