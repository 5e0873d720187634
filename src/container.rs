use crate::{lattice::Lattice, utils::Axis};

/// Boundary conditions for simulation box.
///
/// P: Periodic (must be set for both sides)
/// F: Fixed boundary
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BC {
    PP,
    FF,
}
impl BC {
    /// Check whether the boundary condition is periodic
    pub fn is_periodic(&self) -> bool {
        matches!(self, BC::PP)
    }
}

/// Simulation box, represented by an orthorhombic box and boundary conditions
#[derive(Clone, Debug)]
pub struct Container {
    lo: [f64; 3],
    hi: [f64; 3],
    bc: [BC; 3],
}
impl Container {
    // Creation

    /// Create a new container from lower and upper corners and boundary conditions
    pub fn new(lo: [f64; 3], hi: [f64; 3], bc: [BC; 3]) -> Self {
        for axis in Axis::ALL {
            let i = axis.index();
            assert!(
                lo[i] < hi[i],
                "Lower bound {} should be less than upper bound {} along {:?}",
                lo[i],
                hi[i],
                axis
            );
        }
        Self { lo, hi, bc }
    }
    /// Create a fully periodic container with corner at the origin
    pub fn periodic(lengths: [f64; 3]) -> Self {
        Self::new([0.0; 3], lengths, [BC::PP; 3])
    }
    /// Create a fully periodic container holding `size` unit cells of a lattice
    pub fn from_lattice(lattice: &impl Lattice, size: [usize; 3]) -> Self {
        let cell = lattice.cell_lengths();
        Self::periodic([
            cell[0] * size[0] as f64,
            cell[1] * size[1] as f64,
            cell[2] * size[2] as f64,
        ])
    }

    // Getters
    pub fn lo(&self) -> [f64; 3] {
        self.lo
    }
    pub fn hi(&self) -> [f64; 3] {
        self.hi
    }
    pub fn lengths(&self) -> [f64; 3] {
        [
            self.hi[0] - self.lo[0],
            self.hi[1] - self.lo[1],
            self.hi[2] - self.lo[2],
        ]
    }
    pub fn volume(&self) -> f64 {
        let l = self.lengths();
        l[0] * l[1] * l[2]
    }
    /// Check whether the boundary condition along a given axis (X, Y, Z) is periodic
    pub fn is_periodic(&self, axis: Axis) -> bool {
        self.bc[axis.index()].is_periodic()
    }
    pub fn is_fully_periodic(&self) -> bool {
        self.bc.iter().all(BC::is_periodic)
    }

    /// Shortest periodic image of a separation vector
    pub fn minimum_image(&self, mut dx: [f64; 3]) -> [f64; 3] {
        let lengths = self.lengths();
        for axis in Axis::ALL {
            let i = axis.index();
            if self.is_periodic(axis) {
                dx[i] -= lengths[i] * (dx[i] / lengths[i]).round();
            }
        }
        dx
    }

    /// Map a position back into the box along periodic axes
    pub fn wrap(&self, pos: &mut [f64; 3]) {
        let lengths = self.lengths();
        for axis in Axis::ALL {
            let i = axis.index();
            if self.is_periodic(axis) {
                let shifted = (pos[i] - self.lo[i]).rem_euclid(lengths[i]);
                pos[i] = self.lo[i] + shifted;
            }
        }
    }

    // Setters
    pub fn set_boundary_condition(&mut self, axis: Axis, bc: BC) {
        self.bc[axis.index()] = bc;
    }
}
