use std::fmt::{self, Display};

use crate::{atom_type::AtomType, units::K_B, Atoms, Error};

/// Read-only view of a simulation that energies can be sampled from
pub trait SimulationState {
    /// Total kinetic energy of all particles, in eV
    fn kinetic_energy(&self) -> f64;
    fn particle_count(&self) -> usize;
}

impl<T: AtomType> SimulationState for Atoms<T> {
    fn kinetic_energy(&self) -> f64 {
        Atoms::kinetic_energy(self)
    }
    fn particle_count(&self) -> usize {
        self.num_atoms()
    }
}

/// Per-atom energies and instantaneous temperature of one snapshot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyReport {
    pub potential_energy_per_atom: f64,
    pub kinetic_energy_per_atom: f64,
    pub temperature: f64,
    pub total_energy_per_atom: f64,
}

/// Sample per-atom energies of `state`.
///
/// The potential energy term is always reported as zero; only the kinetic part
/// of the state is read. Fails with [`Error::EmptyState`] when there are no particles.
pub fn sample<S: SimulationState + ?Sized>(state: &S) -> Result<EnergyReport, Error> {
    let n = state.particle_count();
    if n == 0 {
        return Err(Error::EmptyState);
    }
    let epot = 0.0;
    let ekin = state.kinetic_energy() / n as f64;
    Ok(EnergyReport {
        potential_energy_per_atom: epot,
        kinetic_energy_per_atom: ekin,
        temperature: ekin / (1.5 * K_B),
        total_energy_per_atom: epot + ekin,
    })
}

impl Display for EnergyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "energy per atom: Epot = {:.3}eV  Ekin = {:.3}eV (T={:3.0}K)  Etot = {:.3}eV",
            self.potential_energy_per_atom,
            self.kinetic_energy_per_atom,
            self.temperature,
            self.total_energy_per_atom
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    struct FixedState {
        kinetic_energy: f64,
        particle_count: usize,
    }
    impl SimulationState for FixedState {
        fn kinetic_energy(&self) -> f64 {
            self.kinetic_energy
        }
        fn particle_count(&self) -> usize {
            self.particle_count
        }
    }

    fn state(kinetic_energy: f64, particle_count: usize) -> FixedState {
        FixedState {
            kinetic_energy,
            particle_count,
        }
    }

    #[test]
    fn kinetic_energy_is_divided_among_particles() {
        for (k, n) in [(1.0, 1), (155.0, 4000), (3.5, 7), (1e-3, 250)] {
            let report = sample(&state(k, n)).unwrap();
            assert_abs_diff_eq!(report.kinetic_energy_per_atom, k / n as f64, epsilon = 1e-9);
        }
    }

    #[test]
    fn potential_energy_is_always_zero() {
        for (k, n) in [(0.0, 1), (155.0, 4000), (1e6, 3)] {
            assert_eq!(sample(&state(k, n)).unwrap().potential_energy_per_atom, 0.0);
        }
    }

    #[test]
    fn total_is_exactly_potential_plus_kinetic() {
        for (k, n) in [(0.1, 3), (155.0, 4000), (42.0, 17)] {
            let r = sample(&state(k, n)).unwrap();
            assert_eq!(
                r.total_energy_per_atom,
                r.potential_energy_per_atom + r.kinetic_energy_per_atom
            );
        }
    }

    #[test]
    fn temperature_follows_equipartition() {
        let r = sample(&state(12.0, 10)).unwrap();
        assert_eq!(r.temperature, r.kinetic_energy_per_atom / (1.5 * K_B));
    }

    #[test]
    fn sampling_is_idempotent() {
        let s = state(155.0, 4000);
        assert_eq!(sample(&s).unwrap(), sample(&s).unwrap());
    }

    #[test]
    fn four_thousand_atoms_with_155_ev() {
        let r = sample(&state(155.0, 4000)).unwrap();
        assert_abs_diff_eq!(r.kinetic_energy_per_atom, 0.03875, epsilon = 1e-12);
        assert_eq!(r.potential_energy_per_atom, 0.0);
        assert_abs_diff_eq!(r.total_energy_per_atom, 0.03875, epsilon = 1e-12);
        assert_abs_diff_eq!(r.temperature, 0.03875 / (1.5 * K_B), epsilon = 1e-9);
    }

    #[test]
    fn resting_atoms_give_a_zero_report() {
        let r = sample(&state(0.0, 5)).unwrap();
        assert_eq!(r.total_energy_per_atom, 0.0);
        assert_eq!(r.temperature, 0.0);
    }

    #[test]
    fn empty_state_is_an_error() {
        assert!(matches!(sample(&state(1.0, 0)), Err(Error::EmptyState)));
    }

    #[test]
    fn report_line_format() {
        let r = sample(&state(155.0, 4000)).unwrap();
        assert_eq!(
            r.to_string(),
            "energy per atom: Epot = 0.000eV  Ekin = 0.039eV (T=300K)  Etot = 0.039eV"
        );
        let cold = sample(&state(0.0, 1)).unwrap();
        assert_eq!(
            cold.to_string(),
            "energy per atom: Epot = 0.000eV  Ekin = 0.000eV (T=  0K)  Etot = 0.000eV"
        );
    }
}
