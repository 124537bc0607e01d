mod die;
mod error;
mod rules;
mod statistics;
mod tracker;
mod types;

use std::error::Error;

use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;

use crate::rules::RollerConfig;
use crate::statistics::Stat;
use crate::tracker::RollHistoryTracker;
use crate::types::Dice;

const D20: Dice = Dice::new(1, 20);

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    println!("=== Dice Roller Demo ===\n");

    let mut roller = RollHistoryTracker::from_config(&RollerConfig::default());

    println!("Roll {}: {:?}", rules::DEFAULT_ROLL, roller.roll_default()?);
    println!("Roll {}: {:?}", rules::DEFAULT_SUM, roller.roll_dice(rules::DEFAULT_SUM)?);
    println!("Roll 3d6 sum: {}", roller.roll_sum(3, 6)?);
    println!("Roll {}: {:?}", D20, roller.roll_dice(D20)?);

    println!("\nHistory: {:?}", roller.history());

    let stats = roller.stats();
    println!("Stats: {}", stats);
    let map = stats.as_map();
    for stat in Stat::iter() {
        println!("  {:>7} = {}", stat, map[stat]);
    }

    Ok(())
}
