//! Board controller owning every quest row and the aggregate ledger.
//!
//! Input is delivered as [`BoardMsg`]. Rows turn messages into
//! [`RowEvent`]s and the board folds those into a fresh [`DiceLedger`].
use crate::ledger::{DiceLedger, DicePair};
use crate::quest::QuestBook;
use crate::rolling::{RollingSummary, rolling_summaries};
use crate::row::{QuestRow, RowEvent};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User input addressed to one quest row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardMsg {
    /// New text typed into the progress field.
    Progress { quest: String, raw: String },
    /// The "include in total" checkbox changed.
    Include { quest: String, included: bool },
}

impl BoardMsg {
    #[must_use]
    pub fn quest(&self) -> &str {
        match self {
            Self::Progress { quest, .. } | Self::Include { quest, .. } => quest,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("no tracked quest named {0:?}")]
    UnknownQuest(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuestBoard {
    rows: Vec<QuestRow>,
    rolling: Vec<RollingSummary>,
    ledger: DiceLedger,
}

impl QuestBoard {
    /// Build rows for every tracked quest and seed the ledger with the
    /// required ones at zero progress. Optional quests stay out of the
    /// ledger until first toggled.
    #[must_use]
    pub fn new(book: &QuestBook) -> Self {
        let rows: Vec<QuestRow> = book.tracked().cloned().map(QuestRow::new).collect();
        let ledger = rows
            .iter()
            .filter(|row| !row.quest().optional)
            .map(|row| (row.name().to_string(), row.contribution()))
            .collect();
        Self {
            rows,
            rolling: rolling_summaries(book),
            ledger,
        }
    }

    /// Apply one input message.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::UnknownQuest` when the message names a quest
    /// without a row; the board is left untouched.
    pub fn apply(&mut self, msg: &BoardMsg) -> Result<Option<RowEvent>, BoardError> {
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.name() == msg.quest())
            .ok_or_else(|| BoardError::UnknownQuest(msg.quest().to_string()))?;
        let event = match msg {
            BoardMsg::Progress { raw, .. } => row.set_progress(raw),
            BoardMsg::Include { included, .. } => row.set_included(*included),
        };
        if let Some(RowEvent::ContributionChanged { quest, pair }) = &event {
            self.ledger = self.ledger.with_contribution(quest, *pair);
        }
        Ok(event)
    }

    /// Return a copy of the board with `msg` applied.
    ///
    /// # Errors
    ///
    /// See [`QuestBoard::apply`].
    pub fn applied(&self, msg: &BoardMsg) -> Result<Self, BoardError> {
        let mut next = self.clone();
        next.apply(msg)?;
        Ok(next)
    }

    #[must_use]
    pub fn rows(&self) -> &[QuestRow] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, quest: &str) -> Option<&QuestRow> {
        self.rows.iter().find(|row| row.name() == quest)
    }

    #[must_use]
    pub fn rolling(&self) -> &[RollingSummary] {
        &self.rolling
    }

    #[must_use]
    pub const fn ledger(&self) -> &DiceLedger {
        &self.ledger
    }

    #[must_use]
    pub fn totals(&self) -> DicePair {
        self.ledger.total()
    }
}
