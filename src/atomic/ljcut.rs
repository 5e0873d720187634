use super::{AtomicPotential, ForceEvaluation};
use crate::{
    atom_type::AtomType,
    utils::{difference, norm_squared},
    Atoms, Container, Error, NeighborList,
};

#[derive(Clone, Copy, Debug)]
struct LJCutCoeff {
    sigma: f64,
    epsilon: f64,
    rcut: f64,
    sigma6: f64,
    rcut2: f64,
    prefactor: f64,  // = 24 epsilon
    correction: f64, // U(rcut), subtracted so the energy is continuous
}
impl LJCutCoeff {
    pub fn new(sigma: f64, epsilon: f64, rcut: f64) -> Self {
        let sigma6 = sigma * sigma * sigma * sigma * sigma * sigma;
        let rcut2 = rcut * rcut;
        let rcut6 = rcut2 * rcut2 * rcut2;
        let correction = if rcut > 0.0 {
            4.0 * epsilon * sigma6 / rcut6 * (sigma6 / rcut6 - 1.0)
        } else {
            0.0
        };
        Self {
            sigma,
            epsilon,
            rcut,
            sigma6,
            rcut2,
            prefactor: 24.0 * epsilon,
            correction,
        }
    }
}

/// Lennard-Jones 12-6 potential, cut and shifted
#[derive(Clone, Debug)]
pub struct LJCut {
    num_types: usize,
    force_cutoff: f64,
    coeffs: Vec<LJCutCoeff>,
    coeff_set: Vec<bool>,
}
impl LJCut {
    pub fn new(num_types: usize, force_cutoff: f64) -> Self {
        assert!(
            force_cutoff > 0.0,
            "Force cutoff should be positive, found {}",
            force_cutoff
        );
        let new_len = num_types * num_types;
        Self {
            num_types,
            force_cutoff,
            coeffs: vec![LJCut::default_coeff(); new_len],
            coeff_set: vec![false; new_len],
        }
    }
    /// Single-type copper parameterisation (Halicioglu & Pound), cut at 4.75 Å
    pub fn copper() -> Self {
        let rcut = 4.75;
        let mut lj = Self::new(1, rcut);
        lj.coeffs[0] = LJCutCoeff::new(2.338, 0.409, rcut);
        lj.coeff_set[0] = true;
        lj
    }

    /// Set the coefficients of the pair `(type_i, type_j)` and its mirror
    pub fn set_coeff(
        &mut self,
        type_i: usize,
        type_j: usize,
        sigma: f64,
        epsilon: f64,
        rcut: f64,
    ) -> Result<(), Error> {
        if type_i >= self.num_types || type_j >= self.num_types {
            return Err(Error::AtomicPotential(format!(
                "type pair ({}, {}) out of range for {} types",
                type_i, type_j, self.num_types
            )));
        }
        if !(rcut > 0.0 && rcut <= self.force_cutoff) {
            return Err(Error::AtomicPotential(format!(
                "pair cutoff {} should lie in (0, {}]",
                rcut, self.force_cutoff
            )));
        }
        if !(sigma > 0.0) {
            return Err(Error::AtomicPotential(format!(
                "sigma should be positive, found {}",
                sigma
            )));
        }

        let coeff = LJCutCoeff::new(sigma, epsilon, rcut);
        for index in [self.type_idx(type_i, type_j), self.type_idx(type_j, type_i)] {
            self.coeffs[index] = coeff;
            self.coeff_set[index] = true;
        }
        Ok(())
    }
    pub fn all_set(&self) -> bool {
        self.coeff_set.iter().all(|&x| x)
    }
    pub fn num_types(&self) -> usize {
        self.num_types
    }
    pub fn sigma(&self, type_i: usize, type_j: usize) -> f64 {
        self.coeffs[self.type_idx(type_i, type_j)].sigma
    }
    pub fn epsilon(&self, type_i: usize, type_j: usize) -> f64 {
        self.coeffs[self.type_idx(type_i, type_j)].epsilon
    }
    pub fn rcut(&self, type_i: usize, type_j: usize) -> f64 {
        self.coeffs[self.type_idx(type_i, type_j)].rcut
    }

    fn type_idx(&self, type_i: usize, type_j: usize) -> usize {
        type_i * self.num_types + type_j
    }
    fn default_coeff() -> LJCutCoeff {
        LJCutCoeff::new(0.0, 0.0, 0.0)
    }
}

impl<T: AtomType> AtomicPotential<T> for LJCut {
    fn cutoff_distance(&self) -> f64 {
        self.force_cutoff
    }
    fn compute(
        &self,
        atoms: &Atoms<T>,
        container: &Container,
        neighbor_list: &NeighborList,
    ) -> Result<ForceEvaluation, Error> {
        if !self.all_set() {
            return Err(Error::AtomicPotential(String::from(
                "all pair coefficients should be set before computing forces",
            )));
        }
        if atoms.num_types() > self.num_types {
            return Err(Error::AtomicPotential(format!(
                "atoms use {} types but the potential only knows {}",
                atoms.num_types(),
                self.num_types
            )));
        }

        let mut evaluation = ForceEvaluation::zeros(atoms.num_atoms());
        let positions = atoms.positions();
        let types = atoms.types();

        for &(i, j) in neighbor_list.pairs() {
            // r_ij points from j to i, so a positive magnitude pushes i away from j
            let coeff = self.coeffs[self.type_idx(types[i], types[j])];
            let r = container.minimum_image(difference(&positions[i], &positions[j]));
            let r2 = norm_squared(&r);

            if r2 >= coeff.rcut2 {
                continue;
            }

            let r6 = r2 * r2 * r2;
            let sr6 = coeff.sigma6 / r6;

            // f(r) / r = 24 eps (2 (sig/r)^12 - (sig/r)^6) / r^2
            let f_mag = coeff.prefactor * sr6 * (2.0 * sr6 - 1.0) / r2;
            let f = [r[0] * f_mag, r[1] * f_mag, r[2] * f_mag];

            let fi = &mut evaluation.forces[i];
            fi[0] += f[0];
            fi[1] += f[1];
            fi[2] += f[2];
            let fj = &mut evaluation.forces[j];
            fj[0] -= f[0];
            fj[1] -= f[1];
            fj[2] -= f[2];

            evaluation.potential_energy +=
                4.0 * coeff.epsilon * sr6 * (sr6 - 1.0) - coeff.correction;
        }

        Ok(evaluation)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::{atom_type::Element, neighbor::NeighborMethod};

    fn dimer(separation: f64) -> (Atoms<Element>, Container, NeighborList) {
        let mut atoms = Atoms::new(vec![Element::new("Ar", 39.948)]);
        atoms
            .add_atoms(0, vec![[5.0, 5.0, 5.0], [5.0 + separation, 5.0, 5.0]])
            .unwrap();
        let container = Container::periodic([20.0, 20.0, 20.0]);
        let mut nl = NeighborList::new(NeighborMethod::AllPairs, 3.0, 0.3);
        nl.build(atoms.positions(), &container).unwrap();
        (atoms, container, nl)
    }

    fn unit_lj() -> LJCut {
        let mut lj = LJCut::new(1, 3.0);
        lj.set_coeff(0, 0, 1.0, 1.0, 3.0).unwrap();
        lj
    }

    #[test]
    fn force_vanishes_at_the_minimum() {
        let (atoms, container, nl) = dimer(2f64.powf(1.0 / 6.0));
        let eval = unit_lj().compute(&atoms, &container, &nl).unwrap();
        assert_abs_diff_eq!(eval.forces[0][0], 0.0, epsilon = 1e-12);
        let shift = 4.0 * (3f64.powi(-12) - 3f64.powi(-6));
        assert_relative_eq!(eval.potential_energy, -1.0 - shift, max_relative = 1e-12);
    }

    #[test]
    fn close_atoms_repel_with_opposite_forces() {
        let (atoms, container, nl) = dimer(1.0);
        let eval = unit_lj().compute(&atoms, &container, &nl).unwrap();
        assert_relative_eq!(eval.forces[0][0], -24.0, max_relative = 1e-12);
        assert_relative_eq!(eval.forces[1][0], 24.0, max_relative = 1e-12);
        assert_abs_diff_eq!(eval.forces[0][1], 0.0);
    }

    #[test]
    fn force_is_minus_the_energy_gradient() {
        let lj = unit_lj();
        let h = 1e-6;
        let energy = |d: f64| {
            let (atoms, container, nl) = dimer(d);
            lj.compute(&atoms, &container, &nl).unwrap().potential_energy
        };
        let (atoms, container, nl) = dimer(1.3);
        let force = lj.compute(&atoms, &container, &nl).unwrap().forces[1][0];
        let numeric = -(energy(1.3 + h) - energy(1.3 - h)) / (2.0 * h);
        assert_relative_eq!(force, numeric, max_relative = 1e-6);
    }

    #[test]
    fn pairs_beyond_the_cutoff_do_not_interact() {
        let (atoms, container, nl) = dimer(3.2);
        assert_eq!(nl.pairs().len(), 1);
        let eval = unit_lj().compute(&atoms, &container, &nl).unwrap();
        assert_eq!(eval.potential_energy, 0.0);
        assert_eq!(eval.forces[0], [0.0; 3]);
    }

    #[test]
    fn unset_coefficients_are_an_error() {
        let (atoms, container, nl) = dimer(1.0);
        let lj = LJCut::new(1, 3.0);
        assert!(!lj.all_set());
        let result = <LJCut as AtomicPotential<Element>>::compute(&lj, &atoms, &container, &nl);
        assert!(matches!(result, Err(Error::AtomicPotential(_))));
    }

    #[test]
    fn set_coeff_validates_its_input() {
        let mut lj = LJCut::new(2, 3.0);
        assert!(lj.set_coeff(0, 2, 1.0, 1.0, 2.5).is_err());
        assert!(lj.set_coeff(0, 1, 1.0, 1.0, 3.5).is_err());
        lj.set_coeff(0, 1, 1.2, 0.5, 2.5).unwrap();
        assert_eq!(lj.sigma(1, 0), 1.2);
        assert!(!lj.all_set());
        lj.set_coeff(0, 0, 1.0, 1.0, 2.5).unwrap();
        lj.set_coeff(1, 1, 1.0, 1.0, 2.5).unwrap();
        assert!(lj.all_set());
    }
}
