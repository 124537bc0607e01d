use crate::types::Dice;

pub const DEFAULT_ROLL: Dice = Dice::new(1, 6);
pub const DEFAULT_SUM: Dice = Dice::new(2, 6);

/// Runtime options for building a tracker.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RollerConfig {
    /// Fixed seed for reproducible rolls. `None` seeds from system entropy.
    pub seed: Option<u64>,
}

impl RollerConfig {
    pub fn seeded(seed: u64) -> Self {
        RollerConfig { seed: Some(seed) }
    }
}
