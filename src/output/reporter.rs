use std::io::Write;

use crate::{
    compute::{self, EnergyReport, SimulationState},
    integrators::{IntegrationLoop, Observer},
    Error,
};

/// Writes one line of per-atom energies to a sink, on demand or every few steps.
///
/// Attaching consumes the reporter, so it can be attached to at most one loop.
pub struct PeriodicReporter<W: Write> {
    sink: W,
    emitted: usize,
}
impl<W: Write> PeriodicReporter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, emitted: 0 }
    }

    /// Sample `state` and write its line immediately
    pub fn report_now<S>(&mut self, state: &S) -> Result<EnergyReport, Error>
    where
        S: SimulationState + ?Sized,
    {
        let report = compute::sample(state)?;
        writeln!(self.sink, "{}", report)?;
        self.sink.flush()?;
        self.emitted += 1;
        Ok(report)
    }

    /// Register with `integration_loop` to report every `interval` completed steps
    pub fn attach<'a, L>(self, integration_loop: &mut L, interval: usize) -> Result<(), Error>
    where
        L: IntegrationLoop<'a>,
        W: 'a,
    {
        integration_loop.attach(Box::new(self), interval)
    }

    /// Number of lines written so far
    pub fn emitted(&self) -> usize {
        self.emitted
    }
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<S, W> Observer<S> for PeriodicReporter<W>
where
    S: SimulationState + ?Sized,
    W: Write,
{
    fn observe(&mut self, _step: usize, state: &S) -> Result<(), Error> {
        self.report_now(state).map(|_| ())
    }
}
