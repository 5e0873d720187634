/// Settings for computing and updating a neighbor list
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UpdateSettings {
    pub every: usize,
    pub delay: usize,
    pub check: bool,
}

impl UpdateSettings {
    pub fn new(every: usize, delay: usize, check: bool) -> Self {
        assert!(every > 0, "Neighbor update interval should be positive");
        Self {
            every,
            delay,
            check,
        }
    }
    /// Whether `step` is eligible for a rebuild, before any displacement check
    pub fn step_allows_update(&self, step: usize, last_update_step: usize) -> bool {
        (step % self.every == 0) && (step.saturating_sub(last_update_step) >= self.delay)
    }
}

impl Default for UpdateSettings {
    fn default() -> Self {
        Self::new(1, 0, true)
    }
}
