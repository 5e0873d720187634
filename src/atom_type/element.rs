use super::*;
use crate::units;

/// A chemical element, identified by its symbol
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    symbol: String,
    mass: f64,
}
impl Element {
    pub fn new(symbol: &str, mass: f64) -> Self {
        assert!(mass > 0.0, "Mass should be positive, found {}", mass);
        Self {
            symbol: String::from(symbol),
            mass,
        }
    }
    pub fn copper() -> Self {
        Self::new("Cu", units::COPPER_MASS)
    }
}
impl AtomType for Element {
    fn mass(&self) -> f64 {
        self.mass
    }
    fn symbol(&self) -> &str {
        &self.symbol
    }
}
