use core::fmt;
use serde::{Deserialize, Serialize};

/// Proximity reading reported after a probe, ordered by increasing
/// nominal distance to the ghost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ProximityCategory {
    Near = 0,
    Close = 1,
    Far = 2,
    Distant = 3,
}

impl ProximityCategory {
    pub const ALL: [ProximityCategory; 4] = [
        ProximityCategory::Near,
        ProximityCategory::Close,
        ProximityCategory::Far,
        ProximityCategory::Distant,
    ];

    /// Deterministic reading for a true Chebyshev distance: 0 is Near,
    /// 1-2 Close, 3-4 Far, everything else Distant.
    pub const fn classify(distance: u8) -> Self {
        match distance {
            0 => ProximityCategory::Near,
            1 | 2 => ProximityCategory::Close,
            3 | 4 => ProximityCategory::Far,
            _ => ProximityCategory::Distant,
        }
    }

    /// P(reading = self | true distance), straight from the sensor
    /// calibration table. Pairs the table does not list are exactly 0.
    ///
    /// The table deliberately disagrees with `classify` in places and its
    /// per-distance columns do not sum to 1; both quirks are part of the
    /// scenario and must not be renormalized away.
    pub const fn likelihood(self, distance: u8) -> f64 {
        use DistanceBucket::{AtLeastFive, Exact};
        match (self, DistanceBucket::from_distance(distance)) {
            (ProximityCategory::Near, Exact(0)) => 0.9,
            (ProximityCategory::Near, Exact(1)) => 0.1,
            (ProximityCategory::Close, Exact(0)) => 0.1,
            (ProximityCategory::Close, Exact(1)) => 0.8,
            (ProximityCategory::Close, Exact(2)) => 0.1,
            (ProximityCategory::Far, Exact(1)) => 0.1,
            (ProximityCategory::Far, Exact(2)) => 0.7,
            (ProximityCategory::Far, Exact(3)) => 0.1,
            (ProximityCategory::Far, Exact(4)) => 0.1,
            (ProximityCategory::Distant, Exact(2)) => 0.1,
            (ProximityCategory::Distant, Exact(3)) => 0.1,
            (ProximityCategory::Distant, Exact(4)) => 0.8,
            (ProximityCategory::Distant, AtLeastFive) => 1.0,
            _ => 0.0,
        }
    }

    /// One-letter tag used by text views of the observation record.
    pub const fn letter(self) -> char {
        match self {
            ProximityCategory::Near => 'N',
            ProximityCategory::Close => 'C',
            ProximityCategory::Far => 'F',
            ProximityCategory::Distant => 'D',
        }
    }
}

impl fmt::Display for ProximityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProximityCategory::Near => "Near",
            ProximityCategory::Close => "Close",
            ProximityCategory::Far => "Far",
            ProximityCategory::Distant => "Distant",
        };
        f.write_str(label)
    }
}

/// Distance bucket the calibration table is keyed by. Distances of five
/// or more are a single bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceBucket {
    Exact(u8),
    AtLeastFive,
}

impl DistanceBucket {
    pub const fn from_distance(distance: u8) -> Self {
        if distance >= 5 {
            DistanceBucket::AtLeastFive
        } else {
            DistanceBucket::Exact(distance)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DistanceBucket, ProximityCategory};

    #[test]
    fn classify_matches_the_step_function() {
        assert_eq!(ProximityCategory::classify(0), ProximityCategory::Near);
        assert_eq!(ProximityCategory::classify(1), ProximityCategory::Close);
        assert_eq!(ProximityCategory::classify(2), ProximityCategory::Close);
        assert_eq!(ProximityCategory::classify(3), ProximityCategory::Far);
        assert_eq!(ProximityCategory::classify(4), ProximityCategory::Far);
        assert_eq!(ProximityCategory::classify(5), ProximityCategory::Distant);
        assert_eq!(ProximityCategory::classify(100), ProximityCategory::Distant);
    }

    #[test]
    fn likelihood_reproduces_the_calibration_table() {
        assert_eq!(ProximityCategory::Near.likelihood(0), 0.9);
        assert_eq!(ProximityCategory::Near.likelihood(1), 0.1);
        assert_eq!(ProximityCategory::Close.likelihood(1), 0.8);
        assert_eq!(ProximityCategory::Far.likelihood(2), 0.7);
        assert_eq!(ProximityCategory::Distant.likelihood(4), 0.8);
        assert_eq!(ProximityCategory::Distant.likelihood(5), 1.0);
        assert_eq!(ProximityCategory::Distant.likelihood(11), 1.0);
    }

    #[test]
    fn unlisted_pairs_have_zero_likelihood() {
        assert_eq!(ProximityCategory::Near.likelihood(2), 0.0);
        assert_eq!(ProximityCategory::Near.likelihood(9), 0.0);
        assert_eq!(ProximityCategory::Close.likelihood(3), 0.0);
        assert_eq!(ProximityCategory::Close.likelihood(7), 0.0);
        assert_eq!(ProximityCategory::Far.likelihood(0), 0.0);
        assert_eq!(ProximityCategory::Far.likelihood(5), 0.0);
        assert_eq!(ProximityCategory::Distant.likelihood(0), 0.0);
        assert_eq!(ProximityCategory::Distant.likelihood(1), 0.0);
    }

    #[test]
    fn distances_of_five_or_more_share_one_bucket() {
        assert_eq!(DistanceBucket::from_distance(4), DistanceBucket::Exact(4));
        assert_eq!(DistanceBucket::from_distance(5), DistanceBucket::AtLeastFive);
        assert_eq!(DistanceBucket::from_distance(200), DistanceBucket::AtLeastFive);
    }

    #[test]
    fn letters_are_distinct() {
        let letters: Vec<_> = ProximityCategory::ALL.iter().map(|c| c.letter()).collect();
        assert_eq!(letters, vec!['N', 'C', 'F', 'D']);
    }
}
