mod reporter;
mod trajectory;

pub use reporter::PeriodicReporter;
pub use trajectory::XyzTrajectory;
