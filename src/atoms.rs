use std::fmt::Debug;

use rand::Rng;
use rand_distr::Distribution;

use crate::{atom_type::AtomType, units::K_B, Error};

/// Atom properties during simulation, not including forces
#[derive(Clone, Debug)]
pub struct Atoms<T: AtomType> {
    pub ids: Vec<usize>,
    pub types: Vec<usize>,
    pub positions: Vec<[f64; 3]>,
    pub velocities: Vec<[f64; 3]>,
    atom_types: Vec<T>,
}
impl<T: AtomType> Atoms<T> {
    pub fn new(atom_types: Vec<T>) -> Self {
        Atoms {
            ids: Vec::new(),
            types: Vec::new(),
            positions: Vec::new(),
            velocities: Vec::new(),
            atom_types,
        }
    }
    pub fn num_atoms(&self) -> usize {
        self.ids.len()
    }
    pub fn ids(&self) -> &Vec<usize> {
        &self.ids
    }
    pub fn types(&self) -> &Vec<usize> {
        &self.types
    }
    pub fn positions(&self) -> &Vec<[f64; 3]> {
        &self.positions
    }
    pub fn velocities(&self) -> &Vec<[f64; 3]> {
        &self.velocities
    }
    pub fn mass(&self, idx: usize) -> f64 {
        self.atom_types[self.types[idx]].mass()
    }
    pub fn atom_type(&self, idx: usize) -> &T {
        &self.atom_types[self.types[idx]]
    }
    pub fn atom_types(&self) -> &Vec<T> {
        &self.atom_types
    }
    pub fn num_types(&self) -> usize {
        self.atom_types.len()
    }
    pub fn increment_position(&mut self, i: usize, increment: [f64; 3]) {
        self.positions[i][0] += increment[0];
        self.positions[i][1] += increment[1];
        self.positions[i][2] += increment[2];
    }
    pub fn increment_velocity(&mut self, i: usize, increment: [f64; 3]) {
        self.velocities[i][0] += increment[0];
        self.velocities[i][1] += increment[1];
        self.velocities[i][2] += increment[2];
    }
    pub fn set_velocity(&mut self, i: usize, new_vel: [f64; 3]) {
        self.velocities[i] = new_vel;
    }

    /// Append atoms of one type at the given coordinates, at rest
    pub fn add_atoms(&mut self, atom_type: usize, coords: Vec<[f64; 3]>) -> Result<(), Error> {
        if atom_type >= self.num_types() {
            return Err(Error::InvalidAtomType(atom_type));
        }
        let num_atoms = coords.len();
        let atom_id = match self.ids().iter().max() {
            Some(j) => j + 1,
            None => 0,
        };
        self.ids.extend(atom_id..atom_id + num_atoms);
        self.types.resize(self.types.len() + num_atoms, atom_type);
        self.velocities
            .resize(self.velocities.len() + num_atoms, [0.0, 0.0, 0.0]);
        self.positions.extend(coords);
        Ok(())
    }

    /// Total kinetic energy, ½ Σ m v²
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self
            .velocities
            .iter()
            .enumerate()
            .map(|(i, v)| self.mass(i) * (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]))
            .sum::<f64>()
    }

    /// Instantaneous temperature from equipartition, 0 for an empty system
    pub fn temperature(&self) -> f64 {
        let n = self.num_atoms();
        if n == 0 {
            return 0.0;
        }
        2.0 * self.kinetic_energy() / (3.0 * n as f64 * K_B)
    }

    /// Draw velocities from the Maxwell-Boltzmann distribution at `temperature` (K)
    pub fn set_temperature<R: Rng + ?Sized>(
        &mut self,
        temperature: f64,
        rng: &mut R,
    ) -> Result<(), Error> {
        if !(temperature >= 0.0) {
            return Err(Error::InvalidParameter(format!(
                "temperature should be non-negative, found {}",
                temperature
            )));
        }
        let kt = K_B * temperature;
        for i in 0..self.num_atoms() {
            let sigma = (kt / self.mass(i)).sqrt();
            let dist = rand_distr::Normal::new(0.0, sigma)
                .map_err(|e| Error::InvalidParameter(e.to_string()))?;
            self.velocities[i] = [dist.sample(rng), dist.sample(rng), dist.sample(rng)];
        }
        Ok(())
    }

    /// Remove the centre-of-mass velocity
    pub fn zero_momentum(&mut self) {
        let mut momentum = [0.0; 3];
        let mut total_mass = 0.0;
        for (i, v) in self.velocities.iter().enumerate() {
            let m = self.mass(i);
            momentum[0] += m * v[0];
            momentum[1] += m * v[1];
            momentum[2] += m * v[2];
            total_mass += m;
        }
        if total_mass == 0.0 {
            return;
        }
        let vcm = momentum.map(|p| p / total_mass);
        for v in self.velocities.iter_mut() {
            v[0] -= vcm[0];
            v[1] -= vcm[1];
            v[2] -= vcm[2];
        }
    }

    /// Rescale velocities so the instantaneous temperature is exactly `temperature`
    pub fn scale_to_temperature(&mut self, temperature: f64) {
        let current = self.temperature();
        if current == 0.0 {
            return;
        }
        let gamma = (temperature / current).sqrt();
        for v in self.velocities.iter_mut() {
            *v = v.map(|c| c * gamma);
        }
    }
}
