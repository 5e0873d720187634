pub mod ljcut;
pub mod none;

pub use ljcut::LJCut;
pub use none::None_;

use crate::{atom_type::AtomType, Atoms, Container, Error, NeighborList};

/// Forces on every atom together with the total potential energy
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForceEvaluation {
    pub forces: Vec<[f64; 3]>,
    pub potential_energy: f64,
}
impl ForceEvaluation {
    pub fn zeros(num_atoms: usize) -> Self {
        Self {
            forces: vec![[0.0; 3]; num_atoms],
            potential_energy: 0.0,
        }
    }
}

/// Trait for pairwise atomic potentials
pub trait AtomicPotential<T: AtomType> {
    /// Get the maximum distance for effective interaction
    fn cutoff_distance(&self) -> f64;

    /// Compute forces and energy given a configuration of atoms and its neighbor list
    fn compute(
        &self,
        atoms: &Atoms<T>,
        container: &Container,
        neighbor_list: &NeighborList,
    ) -> Result<ForceEvaluation, Error>;
}
