//! Per-quest progress state and the events it reports upward.
use crate::evaluator::{BreakpointTally, evaluate};
use crate::ledger::DicePair;
use crate::progress::Progress;
use crate::quest::Quest;
use serde::{Deserialize, Serialize};

/// Emitted by a row when its share of the aggregate changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowEvent {
    ContributionChanged { quest: String, pair: DicePair },
}

/// Progress state for one tracked quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestRow {
    quest: Quest,
    raw_input: String,
    progress: Progress,
    included: bool,
    tally: BreakpointTally,
}

impl QuestRow {
    #[must_use]
    pub fn new(quest: Quest) -> Self {
        let tally = BreakpointTally::untouched(&quest.breakpoints);
        let included = quest.included_by_default();
        Self {
            quest,
            raw_input: String::new(),
            progress: Progress::zero(),
            included,
            tally,
        }
    }

    #[must_use]
    pub const fn quest(&self) -> &Quest {
        &self.quest
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.quest.name
    }

    /// Text as last typed by the user.
    #[must_use]
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    #[must_use]
    pub const fn progress(&self) -> Progress {
        self.progress
    }

    #[must_use]
    pub const fn included(&self) -> bool {
        self.included
    }

    #[must_use]
    pub const fn tally(&self) -> BreakpointTally {
        self.tally
    }

    #[must_use]
    pub fn total_dice(&self) -> u32 {
        self.quest.total_dice()
    }

    /// What this row adds to the aggregate right now.
    #[must_use]
    pub const fn contribution(&self) -> DicePair {
        if self.included {
            DicePair::new(self.tally.earned, self.tally.left)
        } else {
            DicePair::zero()
        }
    }

    /// Apply newly typed progress text.
    ///
    /// The tally always follows the input; the aggregate is only notified
    /// while the row is included.
    pub fn set_progress(&mut self, raw: &str) -> Option<RowEvent> {
        self.raw_input = raw.to_string();
        self.progress = Progress::parse(raw);
        self.tally = evaluate(&self.quest.breakpoints, self.progress);
        self.included.then(|| self.event())
    }

    /// Toggle inclusion for an optional quest. Required quests ignore this.
    pub fn set_included(&mut self, included: bool) -> Option<RowEvent> {
        if !self.quest.optional {
            return None;
        }
        self.included = included;
        Some(self.event())
    }

    fn event(&self) -> RowEvent {
        RowEvent::ContributionChanged {
            quest: self.quest.name.clone(),
            pair: self.contribution(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::Breakpoints;

    fn quest(optional: bool) -> Quest {
        Quest {
            name: String::from("Arcade High Score"),
            optional,
            from_rolling: false,
            placeholder_text: String::from("Best score"),
            breakpoints: Breakpoints::new(&[10, 20, 30], &[1, 2, 3]),
        }
    }

    fn changed(pair: DicePair) -> Option<RowEvent> {
        Some(RowEvent::ContributionChanged {
            quest: String::from("Arcade High Score"),
            pair,
        })
    }

    #[test]
    fn new_rows_start_untouched() {
        let row = QuestRow::new(quest(false));
        assert!(row.included());
        assert_eq!(row.progress(), Progress::zero());
        assert_eq!(row.raw_input(), "");
        assert_eq!(row.contribution(), DicePair::new(0, 6));

        let optional = QuestRow::new(quest(true));
        assert!(!optional.included());
        assert_eq!(optional.contribution(), DicePair::zero());
    }

    #[test]
    fn progress_reports_while_included() {
        let mut row = QuestRow::new(quest(false));
        assert_eq!(row.set_progress("20"), changed(DicePair::new(3, 3)));
        assert_eq!(row.tally().met, 2);
        assert_eq!(row.raw_input(), "20");
    }

    #[test]
    fn unparseable_progress_resets_to_zero() {
        let mut row = QuestRow::new(quest(false));
        row.set_progress("30");
        assert_eq!(row.set_progress("abc"), changed(DicePair::new(0, 6)));
        assert_eq!(row.progress(), Progress::zero());
        assert_eq!(row.raw_input(), "abc");
    }

    #[test]
    fn excluded_rows_track_progress_silently() {
        let mut row = QuestRow::new(quest(true));
        assert_eq!(row.set_progress("15"), None);
        assert_eq!(row.tally().earned, 1);
        assert_eq!(row.contribution(), DicePair::zero());
    }

    #[test]
    fn toggle_round_trip_restores_contribution() {
        let mut row = QuestRow::new(quest(true));
        row.set_included(true);
        row.set_progress("25");
        let before = row.contribution();
        assert_eq!(row.set_included(false), changed(DicePair::zero()));
        assert_eq!(row.progress(), Progress(25));
        assert_eq!(row.set_included(true), changed(before));
        assert_eq!(row.contribution(), DicePair::new(3, 3));
    }

    #[test]
    fn required_rows_ignore_toggles() {
        let mut row = QuestRow::new(quest(false));
        assert_eq!(row.set_included(false), None);
        assert!(row.included());
    }
}
