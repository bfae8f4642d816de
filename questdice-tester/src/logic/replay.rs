use anyhow::{Context, Result, bail};
use questdice_game::{BoardMsg, QuestBoard, RowEvent};

/// Inputs collected from the command line, replayed against a fresh board.
///
/// Progress entries run first in the order given, then inclusions, then
/// exclusions, so an exclusion always wins over an inclusion of the same
/// quest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayPlan {
    pub progress: Vec<(String, String)>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

/// Split `NAME=VALUE` on the last `=` so quest names may contain one.
///
/// # Errors
///
/// Returns an error when no `=` is present or the name is blank.
pub fn parse_progress_arg(arg: &str) -> Result<(String, String)> {
    let Some((name, value)) = arg.rsplit_once('=') else {
        bail!("progress entry {arg:?} must look like NAME=VALUE");
    };
    let name = name.trim();
    if name.is_empty() {
        bail!("progress entry {arg:?} is missing a quest name");
    }
    Ok((name.to_string(), value.to_string()))
}

impl ReplayPlan {
    /// Build a plan from raw `--progress`, `--include` and `--exclude` values.
    ///
    /// # Errors
    ///
    /// Returns an error when a progress entry is malformed.
    pub fn from_args(progress: &[String], include: &[String], exclude: &[String]) -> Result<Self> {
        let progress = progress
            .iter()
            .map(|arg| parse_progress_arg(arg))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            progress,
            include: include.to_vec(),
            exclude: exclude.to_vec(),
        })
    }

    #[must_use]
    pub fn messages(&self) -> Vec<BoardMsg> {
        let progress = self.progress.iter().map(|(quest, raw)| BoardMsg::Progress {
            quest: quest.clone(),
            raw: raw.clone(),
        });
        let include = self.include.iter().map(|quest| BoardMsg::Include {
            quest: quest.clone(),
            included: true,
        });
        let exclude = self.exclude.iter().map(|quest| BoardMsg::Include {
            quest: quest.clone(),
            included: false,
        });
        progress.chain(include).chain(exclude).collect()
    }

    /// Apply every message, returning the events the rows emitted.
    ///
    /// # Errors
    ///
    /// Stops at the first message naming a quest the board does not track.
    pub fn replay(&self, board: &mut QuestBoard) -> Result<Vec<RowEvent>> {
        let mut events = Vec::new();
        for msg in self.messages() {
            let event = board
                .apply(&msg)
                .with_context(|| format!("while applying {msg:?}"))?;
            match &event {
                Some(RowEvent::ContributionChanged { quest, pair }) => {
                    log::info!("{quest}: earned {} / left {}", pair.earned, pair.left);
                }
                None => log::debug!("{} produced no contribution change", msg.quest()),
            }
            events.extend(event);
        }
        Ok(events)
    }
}
