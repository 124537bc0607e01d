use rand::SeedableRng;
use rand::rngs::{StdRng, ThreadRng};
use tracing::{debug, trace, warn};

use crate::die::DieSource;
use crate::error::RollError;
use crate::rules::{DEFAULT_ROLL, DEFAULT_SUM, RollerConfig};
use crate::statistics::RollStats;
use crate::types::{Dice, Face};

/// Rolls dice and keeps every face produced since the last clear, in roll order.
pub struct RollHistoryTracker<S = ThreadRng> {
    source: S,
    history: Vec<Face>,
}

impl RollHistoryTracker<ThreadRng> {
    /// A tracker backed by the thread-local generator.
    pub fn new() -> Self {
        Self::with_source(rand::thread_rng())
    }
}

impl RollHistoryTracker<StdRng> {
    pub fn from_config(config: &RollerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_source(rng)
    }
}

impl<S: DieSource> RollHistoryTracker<S> {
    pub fn with_source(source: S) -> Self {
        RollHistoryTracker { source, history: Vec::new() }
    }

    /// Roll `num_dice` dice with `sides` sides each.
    /// Returns only the faces from this roll; they are also appended to the history.
    /// Arguments are validated before anything is drawn, so a failed roll leaves the history as it was.
    pub fn roll(&mut self, num_dice: u32, sides: Face) -> Result<Vec<Face>, RollError> {
        if num_dice < 1 {
            warn!(num_dice, sides, "rejected roll with no dice");
            return Err(RollError::InvalidArgument("must roll at least one die"));
        }
        if sides < 1 {
            warn!(num_dice, sides, "rejected roll of a die with no sides");
            return Err(RollError::InvalidArgument("die must have at least one side"));
        }

        let faces: Vec<Face> = (0..num_dice).map(|_| self.source.roll_die(sides)).collect();
        self.history.extend_from_slice(&faces);
        debug!(dice = %Dice::new(num_dice, sides), ?faces, history_len = self.history.len(), "rolled");
        Ok(faces)
    }

    pub fn roll_dice(&mut self, dice: Dice) -> Result<Vec<Face>, RollError> {
        self.roll(dice.count, dice.sides)
    }

    /// Roll a single six-sided die.
    pub fn roll_default(&mut self) -> Result<Vec<Face>, RollError> {
        self.roll_dice(DEFAULT_ROLL)
    }

    /// Roll like [Self::roll] and return the total of the faces.
    pub fn roll_sum(&mut self, num_dice: u32, sides: Face) -> Result<u64, RollError> {
        let faces = self.roll(num_dice, sides)?;
        Ok(faces.into_iter().map(u64::from).sum())
    }

    /// Sum of two six-sided dice.
    pub fn roll_default_sum(&mut self) -> Result<u64, RollError> {
        self.roll_sum(DEFAULT_SUM.count, DEFAULT_SUM.sides)
    }

    /// A copy of every face rolled since the last clear, oldest first.
    pub fn history(&self) -> Vec<Face> {
        self.history.clone()
    }

    pub fn clear_history(&mut self) {
        trace!(discarded = self.history.len(), "clearing history");
        self.history.clear();
    }

    pub fn stats(&self) -> RollStats {
        RollStats::from_faces(&self.history)
    }
}

impl Default for RollHistoryTracker<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}
