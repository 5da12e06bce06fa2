use std::ops::RangeInclusive;

/// Star rating, one to five.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating(u8);

impl Rating {
    pub const RANGE: RangeInclusive<i64> = 1..=5;

    pub fn parse(value: i64) -> Result<Self, String> {
        if Self::RANGE.contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(format!(
                "must be between {} and {}",
                Self::RANGE.start(),
                Self::RANGE.end()
            ))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}
