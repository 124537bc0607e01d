use derive_more::Display;

/// A single die outcome, always in `1..=sides` for the die that produced it.
pub type Face = u32;

/// A number of dice that all share the same number of sides, written as `NdS`.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Hash)]
#[display(fmt = "{}d{}", count, sides)]
pub struct Dice {
    pub count: u32,
    pub sides: Face,
}

impl Dice {
    pub const fn new(count: u32, sides: Face) -> Self {
        Dice { count, sides }
    }
}
