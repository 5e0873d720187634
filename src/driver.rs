use std::io::Write;

use log::info;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    atom_type::Element,
    compute::{self, EnergyReport},
    config::RunConfig,
    integrators::IntegrationLoop,
    lattice::{Fcc, Lattice},
    neighbor::UpdateSettings,
    output::{PeriodicReporter, XyzTrajectory},
    units, Atoms, Container, Error, LJCut, Simulation,
};

const SKIN_DISTANCE: f64 = 0.5;

/// Build an FCC copper crystal at the configured temperature and run constant-energy
/// dynamics, writing energy lines to `out`. Returns the energies after the last step.
pub fn run_md<W: Write>(config: &RunConfig, out: W) -> Result<EnergyReport, Error> {
    config.validate()?;

    let fcc = Fcc::copper();
    let size = [config.backend.lattice_size(); 3];
    let container = Container::from_lattice(&fcc, size);

    let mut atoms = Atoms::new(vec![Element::copper()]);
    atoms.add_atoms(0, fcc.coords(size))?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    atoms.set_temperature(config.temperature_k, &mut rng)?;
    if config.zero_momentum {
        atoms.zero_momentum();
    }
    if config.force_temperature {
        atoms.scale_to_temperature(config.temperature_k);
    }
    info!(
        "{:?} backend: {} Cu atoms in a {}x{}x{} FCC block at {:.1} K",
        config.backend,
        atoms.num_atoms(),
        size[0],
        size[1],
        size[2],
        atoms.temperature()
    );

    let mut simulation = Simulation::new(
        config.timestep_fs * units::FS,
        atoms,
        LJCut::copper(),
        container.clone(),
    );
    simulation.set_neighbor_list(
        config.backend.neighbor_method(),
        SKIN_DISTANCE,
        UpdateSettings::default(),
    );

    if let Some(path) = &config.trajectory {
        let mut trajectory = XyzTrajectory::create(path, &container)?;
        trajectory.write_frame(&simulation.atoms)?;
        simulation.attach(Box::new(trajectory), config.trajectory_interval)?;
    }

    let mut reporter = PeriodicReporter::new(out);
    reporter.report_now(&simulation.atoms)?;
    reporter.attach(&mut simulation, config.report_interval)?;

    simulation.run(config.num_steps)?;
    compute::sample(&simulation.atoms)
}
