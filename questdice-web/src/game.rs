//! Web-specific quest loading
//!
//! Supplies the embedded quest book to the core engine and re-exports the
//! core quest types for components.

pub use questdice_game::*;

const QUESTS_JSON: &str = include_str!("../static/assets/data/quests.json");

/// Quest source backed by the quest book compiled into the bundle
pub struct EmbeddedQuestSource;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("Quest data error: {0}")]
    Quests(#[from] QuestBookError),
}

impl QuestSource for EmbeddedQuestSource {
    type Error = WebDataError;

    fn load_quest_book(&self) -> Result<QuestBook, Self::Error> {
        Ok(QuestBook::from_json(QUESTS_JSON)?)
    }
}

/// Create a web-compatible engine over the embedded quest book
#[must_use]
pub const fn create_web_engine() -> QuestEngine<EmbeddedQuestSource> {
    QuestEngine::new(EmbeddedQuestSource)
}

/// Build the initial board, logging and falling back to an empty board when
/// the embedded data is unusable.
#[must_use]
pub fn initial_board() -> QuestBoard {
    create_web_engine().create_board().unwrap_or_else(|e| {
        log::error!("Failed to load quest data: {e}");
        QuestBoard::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_quests_load() {
        let book = create_web_engine().load_book().expect("embedded quests");
        assert!(book.tracked().count() > 0);
    }

    #[test]
    fn initial_board_has_rows_and_rolling_summaries() {
        let board = initial_board();
        assert!(!board.rows().is_empty());
        assert!(!board.rolling().is_empty());
    }
}
