//! Calendar types for monthly reports.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for report years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Year(pub i32);

impl Year {
    pub fn new(year: i32) -> Self {
        Self(year)
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl Default for Year {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Calendar month, always within `1..=12`.
///
/// # Examples
///
/// ```rust
/// use hockey_stats::Month;
///
/// let month = Month::new(9).unwrap();
/// assert_eq!(month.to_string(), "09");
/// assert!(Month::new(13).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Month(u32);

impl Month {
    pub fn new(month: u32) -> Result<Self> {
        if (1..=12).contains(&month) {
            Ok(Self(month))
        } else {
            Err(StatsError::InvalidMonth { month })
        }
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl Default for Month {
    fn default() -> Self {
        Self(9)
    }
}

impl TryFrom<u32> for Month {
    type Error = StatsError;

    fn try_from(month: u32) -> Result<Self> {
        Self::new(month)
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl FromStr for Month {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.trim().parse()?)
    }
}
