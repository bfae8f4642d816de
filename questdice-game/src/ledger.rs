//! Aggregate dice totals across quests.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Add;

/// Dice already earned and dice still available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DicePair {
    pub earned: u32,
    pub left: u32,
}

impl DicePair {
    #[must_use]
    pub const fn new(earned: u32, left: u32) -> Self {
        Self { earned, left }
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0, 0)
    }
}

impl Add for DicePair {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            earned: self.earned.saturating_add(rhs.earned),
            left: self.left.saturating_add(rhs.left),
        }
    }
}

impl std::iter::Sum for DicePair {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

/// Latest contribution per quest name.
///
/// Updates return a new ledger so earlier snapshots stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiceLedger {
    entries: BTreeMap<String, DicePair>,
}

impl DiceLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contribution for `quest`, returning the updated ledger.
    #[must_use]
    pub fn with_contribution(&self, quest: &str, pair: DicePair) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(quest.to_string(), pair);
        Self { entries }
    }

    #[must_use]
    pub fn contribution(&self, quest: &str) -> Option<DicePair> {
        self.entries.get(quest).copied()
    }

    /// Pairwise sum over every recorded contribution.
    #[must_use]
    pub fn total(&self) -> DicePair {
        self.entries.values().copied().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, DicePair)> {
        self.entries.iter().map(|(name, pair)| (name.as_str(), *pair))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, DicePair)> for DiceLedger {
    fn from_iter<T: IntoIterator<Item = (String, DicePair)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
