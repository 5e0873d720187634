use log::{debug, info};

use crate::{
    atom_type::AtomType,
    integrators::{IntegrationLoop, Integrator, Observer},
    neighbor::{Grid, NeighborMethod, UpdateSettings},
    AtomicPotential, Atoms, Container, Error, NeighborList, Verlet,
};

const DEFAULT_SKIN_DISTANCE: f64 = 0.5;

struct ObserverEntry<'a, S> {
    interval: usize,
    observer: Box<dyn Observer<S> + 'a>,
}

/// Constant-energy molecular dynamics of a set of atoms in a container
pub struct Simulation<'a, T, A>
where
    T: AtomType,
    A: AtomicPotential<T>,
{
    pub atoms: Atoms<T>,
    container: Container,
    atomic_potential: A,
    neighbor_list: NeighborList,
    timestep: f64,
    forces: Vec<[f64; 3]>,
    potential_energy: f64,
    step: usize,
    observers: Vec<ObserverEntry<'a, Atoms<T>>>,
}
impl<'a, T, A> Simulation<'a, T, A>
where
    T: AtomType,
    A: AtomicPotential<T>,
{
    /// Create a new simulation. The neighbor list uses a cell grid when the container
    /// fits one and checks all pairs otherwise.
    pub fn new(timestep: f64, atoms: Atoms<T>, atomic_potential: A, container: Container) -> Self {
        assert!(
            timestep > 0.0,
            "Timestep should be positive, found {}",
            timestep,
        );
        let neighbor_distance = atomic_potential.cutoff_distance() + DEFAULT_SKIN_DISTANCE;
        let method = match Grid::new(&container, neighbor_distance) {
            Some(_) => NeighborMethod::Grid,
            None => NeighborMethod::AllPairs,
        };
        let neighbor_list = NeighborList::new(
            method,
            atomic_potential.cutoff_distance(),
            DEFAULT_SKIN_DISTANCE,
        );
        Self {
            atoms,
            container,
            atomic_potential,
            neighbor_list,
            timestep,
            forces: Vec::new(),
            potential_energy: 0.0,
            step: 0,
            observers: Vec::new(),
        }
    }

    // Getters
    pub fn container(&self) -> &Container {
        &self.container
    }
    pub fn atomic_potential(&self) -> &A {
        &self.atomic_potential
    }
    pub fn neighbor_list(&self) -> &NeighborList {
        &self.neighbor_list
    }
    pub fn timestep(&self) -> f64 {
        self.timestep
    }
    /// Number of completed steps
    pub fn step(&self) -> usize {
        self.step
    }
    /// Potential energy of the last force evaluation
    pub fn potential_energy(&self) -> f64 {
        self.potential_energy
    }
    pub fn total_energy(&self) -> f64 {
        self.potential_energy + self.atoms.kinetic_energy()
    }
    pub(crate) fn forces(&self) -> &Vec<[f64; 3]> {
        &self.forces
    }

    // Setters
    pub fn set_neighbor_list(
        &mut self,
        method: NeighborMethod,
        skin_distance: f64,
        settings: UpdateSettings,
    ) {
        self.neighbor_list = NeighborList::new(
            method,
            self.atomic_potential.cutoff_distance(),
            skin_distance,
        );
        self.neighbor_list.set_update_settings(settings);
        self.forces.clear();
    }
    pub fn set_atomic_potential(&mut self, atomic_potential: A) {
        if self.atomic_potential.cutoff_distance() != atomic_potential.cutoff_distance() {
            self.neighbor_list
                .set_force_distance(atomic_potential.cutoff_distance());
        }
        self.atomic_potential = atomic_potential;
        self.forces.clear();
    }
    pub fn set_timestep(&mut self, timestep: f64) {
        assert!(
            timestep > 0.0,
            "Timestep should be positive, found {}",
            timestep,
        );
        self.timestep = timestep;
    }

    /// Evaluate forces for the current positions, rebuilding the neighbor list if needed
    pub fn compute_forces(&mut self) -> Result<(), Error> {
        self.neighbor_list
            .update(self.step, self.atoms.positions(), &self.container)?;
        let evaluation =
            self.atomic_potential
                .compute(&self.atoms, &self.container, &self.neighbor_list)?;
        self.forces = evaluation.forces;
        self.potential_energy = evaluation.potential_energy;
        Ok(())
    }

    pub(crate) fn wrap_positions(&mut self) {
        let container = &self.container;
        self.atoms
            .positions
            .iter_mut()
            .for_each(|p| container.wrap(p));
    }

    fn advance(&mut self) -> Result<(), Error> {
        Verlet::pre_force(self);
        self.step += 1;
        self.compute_forces()?;
        Verlet::post_force(self);
        debug!(
            "step {}: Epot = {:.6} eV, Ekin = {:.6} eV",
            self.step,
            self.potential_energy,
            self.atoms.kinetic_energy()
        );
        self.call_observers()
    }

    fn call_observers(&mut self) -> Result<(), Error> {
        for entry in self.observers.iter_mut() {
            if self.step % entry.interval == 0 {
                entry.observer.observe(self.step, &self.atoms)?;
            }
        }
        Ok(())
    }
}

impl<'a, T, A> IntegrationLoop<'a> for Simulation<'a, T, A>
where
    T: AtomType,
    A: AtomicPotential<T>,
{
    type State = Atoms<T>;

    fn attach(
        &mut self,
        observer: Box<dyn Observer<Atoms<T>> + 'a>,
        interval: usize,
    ) -> Result<(), Error> {
        if interval == 0 {
            return Err(Error::InvalidInterval(interval));
        }
        self.observers.push(ObserverEntry { interval, observer });
        Ok(())
    }

    fn run(&mut self, num_steps: usize) -> Result<(), Error> {
        if self.forces.len() != self.atoms.num_atoms() {
            self.compute_forces()?;
        }
        info!(
            "running {} steps of {} atoms from step {}",
            num_steps,
            self.atoms.num_atoms(),
            self.step
        );
        for _ in 0..num_steps {
            self.advance()?;
        }
        info!(
            "finished at step {} after {} neighbor list builds",
            self.step,
            self.neighbor_list.num_builds()
        );
        Ok(())
    }

    fn state(&self) -> &Atoms<T> {
        &self.atoms
    }
}
