use super::{AtomicPotential, ForceEvaluation};
use crate::{atom_type::AtomType, Atoms, Container, Error, NeighborList};

/// Non-interacting atoms
#[derive(Clone, Copy, Debug, Default)]
pub struct None_ {}
impl None_ {
    pub fn new() -> Self {
        Self {}
    }
}
impl<T: AtomType> AtomicPotential<T> for None_ {
    fn cutoff_distance(&self) -> f64 {
        0.0
    }
    fn compute(
        &self,
        atoms: &Atoms<T>,
        _container: &Container,
        _neighbor_list: &NeighborList,
    ) -> Result<ForceEvaluation, Error> {
        Ok(ForceEvaluation::zeros(atoms.num_atoms()))
    }
}
