use crate::units;

use super::Lattice;

const FCC_BASIS: [[f64; 3]; 4] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.5, 0.5],
    [0.5, 0.0, 0.5],
    [0.5, 0.5, 0.0],
];

/// Face-centred cubic lattice
#[derive(Debug)]
pub struct Fcc {
    a: f64,
}
impl Fcc {
    pub fn new(a: f64) -> Self {
        assert!(a > 0.0, "Lattice constant should be positive, found {}", a);
        Self { a }
    }
    pub fn copper() -> Self {
        Self::new(units::COPPER_LATTICE_CONSTANT)
    }
    pub fn lattice_constant(&self) -> f64 {
        self.a
    }
    pub fn nearest_neighbor_distance(&self) -> f64 {
        self.a / 2f64.sqrt()
    }
}
impl Lattice for Fcc {
    fn cell_lengths(&self) -> [f64; 3] {
        [self.a, self.a, self.a]
    }
    fn basis(&self) -> &[[f64; 3]] {
        &FCC_BASIS
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::utils::{difference, norm_squared};

    #[test]
    fn ten_cubed_cells_hold_four_thousand_sites() {
        let coords = Fcc::copper().coords([10, 10, 10]);
        assert_eq!(coords.len(), 4000);
    }

    #[test]
    fn sites_lie_inside_the_block() {
        let fcc = Fcc::new(2.0);
        for c in fcc.coords([2, 3, 1]) {
            assert!(c[0] >= 0.0 && c[0] < 4.0);
            assert!(c[1] >= 0.0 && c[1] < 6.0);
            assert!(c[2] >= 0.0 && c[2] < 2.0);
        }
    }

    #[test]
    fn closest_pair_is_the_nearest_neighbor_distance() {
        let fcc = Fcc::copper();
        let coords = fcc.coords([1, 1, 1]);
        let min_sq = coords
            .iter()
            .enumerate()
            .flat_map(|(i, a)| coords[i + 1..].iter().map(move |b| norm_squared(&difference(a, b))))
            .fold(f64::MAX, f64::min);
        assert_relative_eq!(min_sq.sqrt(), fcc.nearest_neighbor_distance(), max_relative = 1e-12);
    }

    #[test]
    #[should_panic(expected = "Lattice constant should be positive")]
    fn negative_lattice_constant_panics() {
        Fcc::new(-1.0);
    }
}
