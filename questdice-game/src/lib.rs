//! Quest Dice Engine
//!
//! Platform-agnostic quest tracking for the Quest Dice companion tool.
//! This crate turns quest progress into bonus-dice tallies without any UI
//! or platform-specific dependencies.

pub mod board;
pub mod evaluator;
pub mod ledger;
pub mod numbers;
pub mod progress;
pub mod quest;
pub mod rolling;
pub mod row;

// Re-export commonly used types
pub use board::{BoardError, BoardMsg, QuestBoard};
pub use evaluator::{BreakpointTally, evaluate};
pub use ledger::{DiceLedger, DicePair};
pub use progress::Progress;
pub use quest::{Breakpoints, Quest, QuestBook, QuestBookError};
pub use rolling::{RollingSummary, rolling_summaries};
pub use row::{QuestRow, RowEvent};

/// Trait for abstracting where quest configuration comes from.
/// Platform-specific implementations should provide this
pub trait QuestSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the quest book from the platform-specific source
    ///
    /// # Errors
    ///
    /// Returns an error if the quest book cannot be read or fails validation.
    fn load_quest_book(&self) -> Result<QuestBook, Self::Error>;
}

/// Entry point for building boards from a configured source
pub struct QuestEngine<L>
where
    L: QuestSource,
{
    source: L,
}

impl<L> QuestEngine<L>
where
    L: QuestSource,
{
    pub const fn new(source: L) -> Self {
        Self { source }
    }

    /// Load the quest book backing every board
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot supply a valid quest book.
    pub fn load_book(&self) -> Result<QuestBook, L::Error> {
        self.source.load_quest_book()
    }

    /// Create a fresh board with every row at zero progress
    ///
    /// # Errors
    ///
    /// Returns an error if the quest book cannot be loaded.
    pub fn create_board(&self) -> Result<QuestBoard, L::Error> {
        self.load_book().map(|book| QuestBoard::new(&book))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixtureSource(&'static str);

    impl QuestSource for FixtureSource {
        type Error = QuestBookError;

        fn load_quest_book(&self) -> Result<QuestBook, Self::Error> {
            QuestBook::from_json(self.0)
        }
    }

    #[test]
    fn engine_builds_board_from_source() {
        let engine = QuestEngine::new(FixtureSource(
            r#"[{"name": "Story", "breakpoints": [[10, 20], [1, 2]]}]"#,
        ));
        let board = engine.create_board().unwrap();
        assert_eq!(board.rows().len(), 1);
        assert_eq!(board.totals(), DicePair::new(0, 3));
    }

    #[test]
    fn engine_surfaces_source_errors() {
        let engine = QuestEngine::new(FixtureSource("[{]"));
        assert!(matches!(engine.create_board(), Err(QuestBookError::Json(_))));
    }
}
