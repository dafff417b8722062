use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const MIN_HOURS: u8 = 1;
pub const MAX_HOURS: u8 = 24;

/// Hours worked on a single day, always within `MIN_HOURS..=MAX_HOURS`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "i64", into = "u8")]
pub struct Hours(u8);

impl Hours {
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < MIN_HOURS as i64 || value > MAX_HOURS as i64 {
            return Err(ValidationError::OutOfRange(value));
        }
        Ok(Hours(value as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl FromStr for Hours {
    type Err = ValidationError;

    /// Reads the leading integer and ignores whatever follows it, so `"8h"`
    /// and `"8.5"` both mean 8. Fails only when no digits lead the input.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return Err(ValidationError::NotANumber(trimmed.to_string()));
        }
        let value = match rest[..digits].parse::<i64>() {
            Ok(v) if negative => -v,
            Ok(v) => v,
            // Too many digits for i64; certainly out of range.
            Err(_) if negative => i64::MIN,
            Err(_) => i64::MAX,
        };
        Hours::new(value)
    }
}

impl TryFrom<i64> for Hours {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Hours::new(value)
    }
}

impl From<Hours> for u8 {
    fn from(hours: Hours) -> Self {
        hours.0
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
