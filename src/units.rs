//! Unit system: energies in eV, lengths in Å, masses in amu, temperatures in K.
//!
//! Time is measured in the derived unit Å·sqrt(amu/eV), so `F / m` in eV/Å/amu is
//! directly an acceleration and `½ m v²` is directly in eV.

/// Boltzmann constant in eV/K
pub const K_B: f64 = 8.617330337217213e-05;

/// One femtosecond in internal time units
pub const FS: f64 = 0.09822694788464063;

/// Atomic mass of copper in amu
pub const COPPER_MASS: f64 = 63.546;

/// Cubic lattice constant of FCC copper in Å
pub const COPPER_LATTICE_CONSTANT: f64 = 3.61;
