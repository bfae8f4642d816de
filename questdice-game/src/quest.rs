//! Quest records and the quest book they are loaded from.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeSet;
use thiserror::Error;

/// Inline capacity for breakpoint tiers; quests rarely carry more.
pub const INLINE_TIERS: usize = 8;

pub type TierVec = SmallVec<[u32; INLINE_TIERS]>;

/// Progress thresholds paired with the dice reward unlocked at each one.
///
/// Serialized as a two-element array, `[[thresholds...], [rewards...]]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "(TierVec, TierVec)", into = "(TierVec, TierVec)")]
pub struct Breakpoints {
    thresholds: TierVec,
    rewards: TierVec,
}

impl From<(TierVec, TierVec)> for Breakpoints {
    fn from((thresholds, rewards): (TierVec, TierVec)) -> Self {
        Self {
            thresholds,
            rewards,
        }
    }
}

impl From<Breakpoints> for (TierVec, TierVec) {
    fn from(value: Breakpoints) -> Self {
        (value.thresholds, value.rewards)
    }
}

impl Breakpoints {
    #[must_use]
    pub fn new(thresholds: &[u32], rewards: &[u32]) -> Self {
        Self {
            thresholds: SmallVec::from_slice(thresholds),
            rewards: SmallVec::from_slice(rewards),
        }
    }

    #[must_use]
    pub fn thresholds(&self) -> &[u32] {
        &self.thresholds
    }

    #[must_use]
    pub fn rewards(&self) -> &[u32] {
        &self.rewards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Sum of every reward tier.
    #[must_use]
    pub fn total_dice(&self) -> u32 {
        saturating_sum(&self.rewards)
    }

    /// Iterate `(threshold, reward)` pairs in ascending threshold order.
    pub fn tiers(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.thresholds
            .iter()
            .copied()
            .zip(self.rewards.iter().copied())
    }

    fn validate(&self, quest: &str) -> Result<(), QuestBookError> {
        if self.thresholds.len() != self.rewards.len() {
            return Err(QuestBookError::LengthMismatch {
                quest: quest.to_string(),
                thresholds: self.thresholds.len(),
                rewards: self.rewards.len(),
            });
        }
        if let Some(pair) = self.thresholds.windows(2).find(|w| w[0] >= w[1]) {
            return Err(QuestBookError::NotAscending {
                quest: quest.to_string(),
                previous: pair[0],
                next: pair[1],
            });
        }
        if self
            .rewards
            .iter()
            .try_fold(0_u32, |acc, &reward| acc.checked_add(reward))
            .is_none()
        {
            return Err(QuestBookError::RewardOverflow {
                quest: quest.to_string(),
            });
        }
        Ok(())
    }
}

/// Sum of `values`, pinned at `u32::MAX` instead of wrapping.
pub(crate) fn saturating_sum(values: &[u32]) -> u32 {
    values.iter().fold(0, |acc, &v| acc.saturating_add(v))
}

/// A named task with configured breakpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub name: String,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub from_rolling: bool,
    #[serde(default)]
    pub placeholder_text: String,
    pub breakpoints: Breakpoints,
}

impl Quest {
    #[must_use]
    pub fn total_dice(&self) -> u32 {
        self.breakpoints.total_dice()
    }

    /// Tracked quests get a progress row; rolling quests are summary-only.
    #[must_use]
    pub const fn is_tracked(&self) -> bool {
        !self.from_rolling
    }

    /// Whether the quest counts toward the total before the user opts in.
    #[must_use]
    pub const fn included_by_default(&self) -> bool {
        !self.optional
    }
}

/// Errors raised when a quest book violates its invariants.
#[derive(Debug, Error)]
pub enum QuestBookError {
    #[error("quest book JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),
    #[error("quest at position {index} has an empty name")]
    EmptyName { index: usize },
    #[error("quest name {name:?} appears more than once")]
    DuplicateName { name: String },
    #[error("quest {quest:?} has {thresholds} thresholds but {rewards} rewards")]
    LengthMismatch {
        quest: String,
        thresholds: usize,
        rewards: usize,
    },
    #[error("quest {quest:?} thresholds must be strictly ascending ({previous} then {next})")]
    NotAscending {
        quest: String,
        previous: u32,
        next: u32,
    },
    #[error("quest {quest:?} awards more dice than can be counted")]
    RewardOverflow { quest: String },
}

/// Ordered list of quests; order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestBook(pub Vec<Quest>);

impl QuestBook {
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Parse and validate a quest book from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns `QuestBookError` when the JSON is malformed or any quest breaks
    /// the breakpoint or naming invariants.
    pub fn from_json(json: &str) -> Result<Self, QuestBookError> {
        let book: Self = serde_json::from_str(json)?;
        book.validate()?;
        Ok(book)
    }

    /// Check every quest's invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in display order.
    pub fn validate(&self) -> Result<(), QuestBookError> {
        let mut seen = BTreeSet::new();
        for (index, quest) in self.0.iter().enumerate() {
            if quest.name.trim().is_empty() {
                return Err(QuestBookError::EmptyName { index });
            }
            if !seen.insert(quest.name.as_str()) {
                return Err(QuestBookError::DuplicateName {
                    name: quest.name.clone(),
                });
            }
            quest.breakpoints.validate(&quest.name)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Quest> {
        self.0.iter().find(|quest| quest.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quest> {
        self.0.iter()
    }

    pub fn tracked(&self) -> impl Iterator<Item = &Quest> {
        self.0.iter().filter(|quest| quest.is_tracked())
    }

    pub fn rolling(&self) -> impl Iterator<Item = &Quest> {
        self.0.iter().filter(|quest| quest.from_rolling)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a QuestBook {
    type Item = &'a Quest;
    type IntoIter = std::slice::Iter<'a, Quest>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
