//! Constant-energy molecular dynamics of an FCC crystal with periodic per-atom
//! energy reports.

pub mod atom_type;
pub mod atomic;
pub mod atoms;
pub mod compute;
pub mod config;
pub mod container;
pub mod driver;
pub mod error;
pub mod integrators;
pub mod lattice;
pub mod neighbor;
pub mod output;
pub mod prelude;
pub mod simulation;
pub mod units;
pub mod utils;

pub use atomic::*;
pub use atoms::Atoms;
pub use container::{Container, BC};
pub use error::Error;
pub use integrators::*;
pub use neighbor::NeighborList;
pub use simulation::Simulation;
