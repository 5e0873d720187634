mod fcc;

pub use fcc::Fcc;

/// A Bravais lattice with a basis, described in Cartesian unit cells
pub trait Lattice {
    fn cell_lengths(&self) -> [f64; 3];

    /// Basis sites in fractional coordinates of the unit cell
    fn basis(&self) -> &[[f64; 3]];

    /// Cartesian coordinates of every site in a block of `size` unit cells
    fn coords(&self, size: [usize; 3]) -> Vec<[f64; 3]> {
        let cell = self.cell_lengths();
        let basis = self.basis();
        let mut coords: Vec<[f64; 3]> =
            Vec::with_capacity(size[0] * size[1] * size[2] * basis.len());

        for i in 0..size[0] {
            for j in 0..size[1] {
                for k in 0..size[2] {
                    for b in basis {
                        coords.push([
                            cell[0] * (i as f64 + b[0]),
                            cell[1] * (j as f64 + b[1]),
                            cell[2] * (k as f64 + b[2]),
                        ]);
                    }
                }
            }
        }
        coords
    }
}
