use log::{debug, warn};

use crate::{
    neighbor::{Grid, UpdateSettings},
    utils::{difference, norm_squared, Axis},
    Container, Error,
};

/// How candidate pairs are searched when the list is rebuilt
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NeighborMethod {
    /// Cell grid, linear in the number of atoms
    Grid,
    /// Every pair is checked, quadratic in the number of atoms
    AllPairs,
}

/// Half neighbor list: each pair within the neighbor distance appears once,
/// as `(i, j)` with `i < j`
#[derive(Debug)]
pub struct NeighborList {
    method: NeighborMethod,
    force_distance: f64,
    skin_distance: f64,
    settings: UpdateSettings,
    pairs: Vec<(usize, usize)>,
    pos_at_prev_build: Vec<[f64; 3]>,
    last_update_step: usize,
    built: bool,
    num_builds: usize,
}
impl NeighborList {
    pub fn new(method: NeighborMethod, force_distance: f64, skin_distance: f64) -> Self {
        assert!(
            force_distance >= 0.0,
            "Force cutoff distance should be non-negative, found {}",
            force_distance
        );
        assert!(
            skin_distance >= 0.0,
            "Skin distance should be non-negative, found {}",
            skin_distance
        );
        Self {
            method,
            force_distance,
            skin_distance,
            settings: UpdateSettings::default(),
            pairs: Vec::new(),
            pos_at_prev_build: Vec::new(),
            last_update_step: 0,
            built: false,
            num_builds: 0,
        }
    }

    // Getters
    pub fn method(&self) -> NeighborMethod {
        self.method
    }
    pub fn pairs(&self) -> &Vec<(usize, usize)> {
        &self.pairs
    }
    pub fn force_distance(&self) -> f64 {
        self.force_distance
    }
    pub fn skin_distance(&self) -> f64 {
        self.skin_distance
    }
    pub fn neighbor_distance(&self) -> f64 {
        self.force_distance + self.skin_distance
    }
    pub fn is_built(&self) -> bool {
        self.built
    }
    pub fn num_builds(&self) -> usize {
        self.num_builds
    }

    // Setters
    pub fn set_update_settings(&mut self, settings: UpdateSettings) {
        self.settings = settings;
    }
    pub fn set_force_distance(&mut self, force_distance: f64) {
        self.force_distance = force_distance;
        self.built = false;
    }

    /// Rebuild the list if it was never built or the update settings ask for it.
    /// Returns whether a rebuild happened.
    pub fn update(
        &mut self,
        step: usize,
        positions: &[[f64; 3]],
        container: &Container,
    ) -> Result<bool, Error> {
        if self.built && !self.should_update(step, positions, container) {
            return Ok(false);
        }
        self.build(positions, container)?;
        self.last_update_step = step;
        Ok(true)
    }

    /// Unconditionally rebuild the list
    pub fn build(&mut self, positions: &[[f64; 3]], container: &Container) -> Result<(), Error> {
        self.pairs = if self.force_distance == 0.0 {
            Vec::new()
        } else {
            self.search(positions, container)?
        };
        self.pos_at_prev_build = positions.to_vec();
        self.built = true;
        self.num_builds += 1;
        debug!(
            "neighbor list built with {} pairs ({} builds so far)",
            self.pairs.len(),
            self.num_builds
        );
        Ok(())
    }

    fn search(
        &self,
        positions: &[[f64; 3]],
        container: &Container,
    ) -> Result<Vec<(usize, usize)>, Error> {
        let distance = self.neighbor_distance();
        if self.method == NeighborMethod::Grid {
            match Grid::new(container, distance) {
                Some(grid) => return Ok(grid.pairs(positions, container, distance)),
                None => warn!(
                    "container too small or not periodic for a {} Å grid, checking all pairs",
                    distance
                ),
            }
        }
        all_pairs(positions, container, distance)
    }

    fn should_update(&self, step: usize, positions: &[[f64; 3]], container: &Container) -> bool {
        positions.len() != self.pos_at_prev_build.len()
            || (self.settings.step_allows_update(step, self.last_update_step)
                && (!self.settings.check || self.atoms_moved_too_far(positions, container)))
    }

    fn atoms_moved_too_far(&self, positions: &[[f64; 3]], container: &Container) -> bool {
        let half_skin_dist = self.skin_distance * 0.5;
        let opt = self
            .pos_at_prev_build
            .iter()
            .zip(positions.iter())
            .map(|(old, new)| norm_squared(&container.minimum_image(difference(new, old))))
            .reduce(f64::max);

        match opt {
            Some(max_dist_sq) => max_dist_sq > half_skin_dist * half_skin_dist,
            None => false,
        }
    }
}

fn all_pairs(
    positions: &[[f64; 3]],
    container: &Container,
    distance: f64,
) -> Result<Vec<(usize, usize)>, Error> {
    let lengths = container.lengths();
    for axis in Axis::ALL {
        let l = lengths[axis.index()];
        if container.is_periodic(axis) && distance > 0.5 * l {
            return Err(Error::NeighborList(format!(
                "neighbor distance {} exceeds half the periodic box length {} along {:?}",
                distance, l, axis
            )));
        }
    }

    let distance_sq = distance * distance;
    let mut pairs = Vec::new();
    for i in 0..positions.len() {
        for j in i + 1..positions.len() {
            let dx = container.minimum_image(difference(&positions[j], &positions[i]));
            if norm_squared(&dx) < distance_sq {
                pairs.push((i, j));
            }
        }
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{Fcc, Lattice};

    fn sorted(mut pairs: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
        pairs.sort();
        pairs
    }

    #[test]
    fn grid_and_all_pairs_agree() {
        let fcc = Fcc::copper();
        let size = [5, 5, 5];
        let container = Container::from_lattice(&fcc, size);
        let positions = fcc.coords(size);

        let mut grid = NeighborList::new(NeighborMethod::Grid, 4.5, 0.5);
        let mut brute = NeighborList::new(NeighborMethod::AllPairs, 4.5, 0.5);
        grid.build(&positions, &container).unwrap();
        brute.build(&positions, &container).unwrap();

        // 12 + 6 + 24 neighbors within 5 Å in FCC copper, each pair counted once
        assert_eq!(brute.pairs().len(), positions.len() * 42 / 2);
        assert_eq!(sorted(grid.pairs().clone()), sorted(brute.pairs().clone()));
    }

    #[test]
    fn all_pairs_rejects_a_box_smaller_than_twice_the_cutoff() {
        let container = Container::periodic([8.0, 8.0, 8.0]);
        let mut list = NeighborList::new(NeighborMethod::AllPairs, 4.5, 0.5);
        let result = list.build(&[[0.0; 3], [1.0; 3]], &container);
        assert!(matches!(result, Err(Error::NeighborList(_))));
    }

    #[test]
    fn grid_falls_back_to_all_pairs_for_small_boxes() {
        let fcc = Fcc::copper();
        let container = Container::from_lattice(&fcc, [3, 3, 3]);
        let mut list = NeighborList::new(NeighborMethod::Grid, 4.5, 0.5);
        list.build(&fcc.coords([3, 3, 3]), &container).unwrap();
        assert_eq!(list.pairs().len(), 108 * 42 / 2);
    }

    #[test]
    fn rebuilds_only_after_moving_half_the_skin() {
        let container = Container::periodic([20.0, 20.0, 20.0]);
        let mut list = NeighborList::new(NeighborMethod::AllPairs, 3.0, 1.0);
        let mut positions = vec![[1.0, 1.0, 1.0], [5.5, 1.0, 1.0]];

        assert!(list.update(0, &positions, &container).unwrap());
        assert!(list.pairs().is_empty());

        positions[1][0] = 5.1;
        assert!(!list.update(1, &positions, &container).unwrap());

        positions[1][0] = 4.9;
        assert!(list.update(2, &positions, &container).unwrap());
        assert_eq!(list.pairs(), &vec![(0, 1)]);
        assert_eq!(list.num_builds(), 2);
    }

    fn rebuild_pattern(settings: UpdateSettings, steps: usize) -> Vec<bool> {
        let container = Container::periodic([20.0, 20.0, 20.0]);
        let positions = vec![[1.0, 1.0, 1.0], [3.0, 1.0, 1.0]];
        let mut list = NeighborList::new(NeighborMethod::AllPairs, 3.0, 1.0);
        list.set_update_settings(settings);
        (0..steps)
            .map(|step| list.update(step, &positions, &container).unwrap())
            .collect()
    }

    #[test]
    fn unchecked_rebuilds_follow_every() {
        assert_eq!(
            rebuild_pattern(UpdateSettings::new(5, 0, false), 12),
            vec![true, false, false, false, false, true, false, false, false, false, true, false]
        );
    }

    #[test]
    fn unchecked_rebuilds_wait_for_delay() {
        assert_eq!(
            rebuild_pattern(UpdateSettings::new(1, 3, false), 8),
            vec![true, false, false, true, false, false, true, false]
        );
    }

    #[test]
    fn checked_rebuilds_skip_atoms_at_rest() {
        let pattern = rebuild_pattern(UpdateSettings::new(5, 0, true), 12);
        assert_eq!(pattern.iter().filter(|&&b| b).count(), 1);
        assert!(pattern[0]);
    }

    #[test]
    fn changing_the_force_distance_forces_a_rebuild() {
        let container = Container::periodic([20.0, 20.0, 20.0]);
        let positions = vec![[1.0, 1.0, 1.0], [5.5, 1.0, 1.0]];
        let mut list = NeighborList::new(NeighborMethod::AllPairs, 3.0, 1.0);
        assert!(!list.is_built());
        assert_eq!(list.method(), NeighborMethod::AllPairs);
        assert_eq!(list.skin_distance(), 1.0);

        list.update(0, &positions, &container).unwrap();
        assert!(list.is_built());
        assert!(list.pairs().is_empty());

        list.set_force_distance(4.0);
        assert!(!list.is_built());
        assert!(list.update(1, &positions, &container).unwrap());
        assert_eq!(list.neighbor_distance(), 5.0);
        assert_eq!(list.pairs(), &vec![(0, 1)]);
    }

    #[test]
    fn zero_cutoff_needs_no_pairs() {
        let container = Container::periodic([1.0, 1.0, 1.0]);
        let mut list = NeighborList::new(NeighborMethod::AllPairs, 0.0, 0.0);
        list.build(&[[0.0; 3], [0.1; 3]], &container).unwrap();
        assert!(list.pairs().is_empty());
    }
}
