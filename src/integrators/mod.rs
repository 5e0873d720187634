mod verlet;
pub use verlet::Verlet;

use crate::{atom_type::AtomType, compute::SimulationState, AtomicPotential, Error, Simulation};

/// Simulation integrator, hooked in around the force computation of every step
pub trait Integrator<T, A>
where
    T: AtomType,
    A: AtomicPotential<T>,
{
    fn pre_force(_simulation: &mut Simulation<T, A>) {}
    fn post_force(_simulation: &mut Simulation<T, A>) {}
}

/// Callback run by an integration loop after completed steps
pub trait Observer<S: ?Sized> {
    fn observe(&mut self, step: usize, state: &S) -> Result<(), Error>;
}

impl<S, F> Observer<S> for F
where
    S: ?Sized,
    F: FnMut(usize, &S) -> Result<(), Error>,
{
    fn observe(&mut self, step: usize, state: &S) -> Result<(), Error> {
        self(step, state)
    }
}

/// A loop that advances a simulation state and notifies observers.
///
/// An observer attached with interval `n` runs synchronously after every completed
/// step whose count is a multiple of `n`, receiving the state explicitly.
pub trait IntegrationLoop<'a> {
    type State: SimulationState;

    fn attach(
        &mut self,
        observer: Box<dyn Observer<Self::State> + 'a>,
        interval: usize,
    ) -> Result<(), Error>;
    fn run(&mut self, num_steps: usize) -> Result<(), Error>;
    fn state(&self) -> &Self::State;
}
