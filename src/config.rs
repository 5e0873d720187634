use std::path::PathBuf;

use crate::{neighbor::NeighborMethod, Error};

/// Implementation choice for the demo, fixed for the whole run
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Backend {
    /// Cell-grid neighbor search on a 4000-atom crystal
    Accelerated,
    /// All-pairs neighbor search on a 108-atom crystal
    Reference,
}
impl Backend {
    /// Number of FCC unit cells along each axis
    pub fn lattice_size(&self) -> usize {
        match self {
            Backend::Accelerated => 10,
            Backend::Reference => 3,
        }
    }
    pub fn neighbor_method(&self) -> NeighborMethod {
        match self {
            Backend::Accelerated => NeighborMethod::Grid,
            Backend::Reference => NeighborMethod::AllPairs,
        }
    }
}

/// Settings of one constant-energy run
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    pub backend: Backend,
    pub temperature_k: f64,
    pub timestep_fs: f64,
    pub num_steps: usize,
    pub report_interval: usize,
    pub trajectory: Option<PathBuf>,
    pub trajectory_interval: usize,
    /// Seed for the initial velocities, drawn from entropy when unset
    pub seed: Option<u64>,
    /// Rescale the initial velocities to hit `temperature_k` exactly
    pub force_temperature: bool,
    pub zero_momentum: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Accelerated,
            temperature_k: 300.0,
            timestep_fs: 5.0,
            num_steps: 200,
            report_interval: 10,
            trajectory: Some(PathBuf::from("cu.xyz")),
            trajectory_interval: 10,
            seed: None,
            force_temperature: false,
            zero_momentum: false,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.temperature_k >= 0.0) {
            return Err(Error::InvalidParameter(format!(
                "temperature should be non-negative, found {} K",
                self.temperature_k
            )));
        }
        if !(self.timestep_fs > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "timestep should be positive, found {} fs",
                self.timestep_fs
            )));
        }
        if self.report_interval == 0 {
            return Err(Error::InvalidInterval(self.report_interval));
        }
        if self.trajectory.is_some() && self.trajectory_interval == 0 {
            return Err(Error::InvalidInterval(self.trajectory_interval));
        }
        Ok(())
    }
}
