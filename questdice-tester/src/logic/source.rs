use questdice_game::{QuestBook, QuestBookError, QuestSource};
use std::path::PathBuf;
use thiserror::Error;

/// Quest book shipped with the web front-end.
pub const EMBEDDED_QUESTS: &str =
    include_str!("../../../questdice-web/static/assets/data/quests.json");

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Quests(#[from] QuestBookError),
}

/// Loads quests from a JSON file, or the embedded book when no path is set.
#[derive(Debug, Clone, Default)]
pub struct FileQuestSource {
    path: Option<PathBuf>,
}

impl FileQuestSource {
    #[must_use]
    pub const fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn describe(&self) -> String {
        self.path
            .as_ref()
            .map_or_else(|| String::from("embedded quest book"), |p| p.display().to_string())
    }
}

impl QuestSource for FileQuestSource {
    type Error = SourceError;

    fn load_quest_book(&self) -> Result<QuestBook, Self::Error> {
        let Some(path) = &self.path else {
            return Ok(QuestBook::from_json(EMBEDDED_QUESTS)?);
        };
        log::debug!("reading quest book from {}", path.display());
        let json = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(QuestBook::from_json(&json)?)
    }
}
