use serde::{Serialize, Serializer};
use std::fmt;

/// Estimated deviation between biological and chronological age, in tenths
/// of a year. Positive values mean the sleeper is "older" than their age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BioAgeDelta {
    tenths: i16,
}

impl BioAgeDelta {
    /// Buckets a clamped shield score into an age delta.
    pub fn from_score(score: u8) -> Self {
        let score = i16::from(score.min(100));
        let deficit = 100 - score;

        let tenths = if score >= 90 {
            -deficit
        } else if score >= 80 {
            // 80-81 => -0.1 up to 88-89 => -0.5
            -((score - 80) / 2 + 1)
        } else if score >= 60 {
            deficit
        } else {
            deficit * 2
        };

        Self { tenths }
    }

    pub fn tenths(&self) -> i16 {
        self.tenths
    }
}

impl fmt::Display for BioAgeDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.tenths < 0 { '-' } else { '+' };
        let magnitude = self.tenths.unsigned_abs();
        write!(f, "{sign}{}.{}", magnitude / 10, magnitude % 10)
    }
}

impl Serialize for BioAgeDelta {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
