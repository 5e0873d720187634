mod element;

pub use element::Element;

/// Per-type properties of an atom
pub trait AtomType: Clone + std::fmt::Debug {
    fn mass(&self) -> f64;
    fn symbol(&self) -> &str;
}
