use serde::{Deserialize, Serialize};

use crate::common::RatingError;

/// Star rating from 1 to 5 inclusive.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    pub const MAX: u8 = 5;
    pub const FILLED: char = '★';
    pub const EMPTY: char = '☆';

    pub fn new(value: i64) -> Result<Self, RatingError> {
        match u8::try_from(value) {
            Ok(v) if (1..=Self::MAX).contains(&v) => Ok(Self(v)),
            _ => Err(RatingError::OutOfRange(value)),
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Exactly `value` filled stars followed by the unfilled remainder.
    pub fn stars(&self) -> String {
        let filled = usize::from(self.0);
        let empty = usize::from(Self::MAX - self.0);

        std::iter::repeat_n(Self::FILLED, filled)
            .chain(std::iter::repeat_n(Self::EMPTY, empty))
            .collect()
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        i64::from(rating.0)
    }
}

impl std::str::FromStr for Rating {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| RatingError::NotANumber(s.to_string()))?;
        Self::new(value)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
