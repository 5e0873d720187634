use crate::{
    utils::{difference, norm_squared},
    Container,
};

/// Neighbor list grid of bins over a fully periodic container
#[derive(Debug)]
pub struct Grid {
    lo_corner: [f64; 3],
    bin_size: [f64; 3],
    num_bins: [usize; 3],
}
impl Grid {
    /// Bins are at least `min_bin_size` wide. Returns `None` when the container is
    /// not fully periodic or fewer than 3 bins fit along some axis.
    pub fn new(container: &Container, min_bin_size: f64) -> Option<Self> {
        assert!(
            min_bin_size > 0.0,
            "Bin size should be positive, found {}",
            min_bin_size
        );
        if !container.is_fully_periodic() {
            return None;
        }
        let lengths = container.lengths();
        let num_bins = lengths.map(|l| (l / min_bin_size).floor() as usize);
        if num_bins.iter().any(|&n| n < 3) {
            return None;
        }
        Some(Self {
            lo_corner: container.lo(),
            bin_size: [
                lengths[0] / num_bins[0] as f64,
                lengths[1] / num_bins[1] as f64,
                lengths[2] / num_bins[2] as f64,
            ],
            num_bins,
        })
    }
    pub fn num_bins(&self) -> [usize; 3] {
        self.num_bins
    }
    pub fn total_num_bins(&self) -> usize {
        self.num_bins[0] * self.num_bins[1] * self.num_bins[2]
    }
    pub fn coord_to_3d_idx(&self, coord: &[f64; 3]) -> [usize; 3] {
        let mut inds = [0usize; 3];
        for i in 0..3 {
            let n = self.num_bins[i] as i64;
            inds[i] = (((coord[i] - self.lo_corner[i]) / self.bin_size[i]).floor() as i64)
                .rem_euclid(n) as usize;
        }
        inds
    }
    pub fn bin_idx_from_3d_idx(&self, inds: &[usize; 3]) -> usize {
        inds[0] * self.num_bins[1] * self.num_bins[2] + inds[1] * self.num_bins[2] + inds[2]
    }

    /// The 27 bins surrounding (and including) a bin, with periodic wrapping
    fn surrounding_bins(&self, inds: &[usize; 3]) -> Vec<usize> {
        let mut bins = Vec::with_capacity(27);
        for dx in -1i64..=1 {
            for dy in -1i64..=1 {
                for dz in -1i64..=1 {
                    let shifted = [
                        (inds[0] as i64 + dx).rem_euclid(self.num_bins[0] as i64) as usize,
                        (inds[1] as i64 + dy).rem_euclid(self.num_bins[1] as i64) as usize,
                        (inds[2] as i64 + dz).rem_euclid(self.num_bins[2] as i64) as usize,
                    ];
                    bins.push(self.bin_idx_from_3d_idx(&shifted));
                }
            }
        }
        bins
    }

    /// Unique pairs `(i, j)`, `i < j`, closer than `distance` under minimum image
    pub fn pairs(
        &self,
        positions: &[[f64; 3]],
        container: &Container,
        distance: f64,
    ) -> Vec<(usize, usize)> {
        let distance_sq = distance * distance;
        let atom_bins: Vec<[usize; 3]> =
            positions.iter().map(|p| self.coord_to_3d_idx(p)).collect();

        let mut bins: Vec<Vec<usize>> = vec![Vec::new(); self.total_num_bins()];
        for (i, inds) in atom_bins.iter().enumerate() {
            bins[self.bin_idx_from_3d_idx(inds)].push(i);
        }

        let mut pairs = Vec::new();
        for (i, inds) in atom_bins.iter().enumerate() {
            for b in self.surrounding_bins(inds) {
                for &j in &bins[b] {
                    if j <= i {
                        continue;
                    }
                    let dx = container.minimum_image(difference(&positions[j], &positions[i]));
                    if norm_squared(&dx) < distance_sq {
                        pairs.push((i, j));
                    }
                }
            }
        }
        pairs
    }
}
