//! Progress values typed into a quest row.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static LEADING_INTEGER: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?)([0-9]+)").ok());

/// A quest's current progress. Never clamped; may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress(pub i64);

impl Progress {
    #[must_use]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Parse the leading integer of user input.
    ///
    /// Leading whitespace and a sign are accepted; anything after the digits
    /// is ignored. Returns `None` when no digits lead the input. Oversized
    /// values saturate instead of failing.
    #[must_use]
    pub fn try_parse(raw: &str) -> Option<Self> {
        let re = LEADING_INTEGER.as_ref()?;
        let caps = re.captures(raw)?;
        let negative = caps.get(1).is_some_and(|m| m.as_str() == "-");
        let digits = caps.get(2)?.as_str();
        let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
        Some(Self(if negative {
            magnitude.saturating_neg()
        } else {
            magnitude
        }))
    }

    /// Parse user input, treating anything unparseable as zero progress.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::try_parse(raw).unwrap_or_default()
    }
}

impl From<i64> for Progress {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<u32> for Progress {
    fn from(value: u32) -> Self {
        Self(i64::from(value))
    }
}
