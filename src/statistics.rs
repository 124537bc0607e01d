use derive_more::Display;
use enum_map::{enum_map, Enum, EnumMap};
use strum::EnumIter;

use crate::types::Face;

/// Descriptive statistics over a roll history. An empty history yields all zeroes.
#[derive(Clone, Copy, Debug, Default, Display, PartialEq)]
#[display(fmt = "average {:.2}, min {}, max {}, count {}", average, min, max, count)]
pub struct RollStats {
    pub average: f64,
    pub min: Face,
    pub max: Face,
    pub count: usize,
}

/// Keys of the [RollStats] mapping.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Enum, EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Stat {
    Average,
    Min,
    Max,
    Count,
}

impl RollStats {
    pub fn from_faces(faces: &[Face]) -> Self {
        let (Some(&min), Some(&max)) = (faces.iter().min(), faces.iter().max()) else {
            return RollStats::default();
        };
        let total: u64 = faces.iter().map(|&f| u64::from(f)).sum();
        RollStats {
            average: total as f64 / faces.len() as f64,
            min,
            max,
            count: faces.len(),
        }
    }

    /// View these statistics as a mapping keyed by [Stat].
    pub fn as_map(&self) -> EnumMap<Stat, f64> {
        enum_map! {
            Stat::Average => self.average,
            Stat::Min => self.min as f64,
            Stat::Max => self.max as f64,
            Stat::Count => self.count as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use crate::statistics::{RollStats, Stat};

    #[test]
    fn test_empty_history_is_zeroed() {
        let stats = RollStats::from_faces(&[]);
        assert_eq!(stats, RollStats { average: 0.0, min: 0, max: 0, count: 0 });
        assert!(stats.as_map().values().all(|v| *v == 0.0));
    }

    #[test]
    fn test_stats_of_known_faces() {
        let stats = RollStats::from_faces(&[4, 2, 6]);
        assert_eq!(stats, RollStats { average: 4.0, min: 2, max: 6, count: 3 });

        let uneven = RollStats::from_faces(&[1, 2]);
        assert_eq!(uneven.average, 1.5);
    }

    #[test]
    fn test_map_keys() {
        let names: Vec<String> = Stat::iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["average", "min", "max", "count"]);

        let map = RollStats::from_faces(&[4, 2, 6]).as_map();
        assert_eq!(map[Stat::Average], 4.0);
        assert_eq!(map[Stat::Min], 2.0);
        assert_eq!(map[Stat::Max], 6.0);
        assert_eq!(map[Stat::Count], 3.0);
    }

    #[test]
    fn test_display() {
        let stats = RollStats::from_faces(&[4, 2, 6]);
        assert_eq!(stats.to_string(), "average 4.00, min 2, max 6, count 3");
    }
}
