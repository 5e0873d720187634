use thiserror::Error;

/// Error types
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot sample the energy of a system without atoms")]
    EmptyState,
    #[error("observer interval should be positive, found {0}")]
    InvalidInterval(usize),
    #[error("atom type index {0} has not been registered")]
    InvalidAtomType(usize),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("atomic potential error: {0}")]
    AtomicPotential(String),
    #[error("neighbor list error: {0}")]
    NeighborList(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
