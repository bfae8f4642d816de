//! Static summaries for quests that pay out from rolling.
use crate::quest::{Quest, QuestBook};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollingSummary {
    pub name: String,
    pub total_dice: u32,
    /// First and last threshold; `None` when the quest has no breakpoints.
    pub range: Option<(u32, u32)>,
}

impl RollingSummary {
    #[must_use]
    pub fn from_quest(quest: &Quest) -> Self {
        let thresholds = quest.breakpoints.thresholds();
        let range = thresholds.first().copied().zip(thresholds.last().copied());
        Self {
            name: quest.name.clone(),
            total_dice: quest.total_dice(),
            range,
        }
    }
}

#[must_use]
pub fn rolling_summaries(book: &QuestBook) -> Vec<RollingSummary> {
    book.rolling().map(RollingSummary::from_quest).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::Breakpoints;

    fn rolling(name: &str, bp: Breakpoints) -> Quest {
        Quest {
            name: name.to_string(),
            optional: false,
            from_rolling: true,
            placeholder_text: String::new(),
            breakpoints: bp,
        }
    }

    #[test]
    fn summary_spans_first_to_last_threshold() {
        let summary =
            RollingSummary::from_quest(&rolling("Laps", Breakpoints::new(&[5, 25, 80], &[1, 2, 5])));
        assert_eq!(summary.total_dice, 8);
        assert_eq!(summary.range, Some((5, 80)));
    }

    #[test]
    fn single_and_empty_breakpoints() {
        let one = RollingSummary::from_quest(&rolling("One", Breakpoints::new(&[7], &[3])));
        assert_eq!(one.range, Some((7, 7)));
        let none = RollingSummary::from_quest(&rolling("None", Breakpoints::default()));
        assert_eq!(none.range, None);
        assert_eq!(none.total_dice, 0);
    }

    #[test]
    fn only_rolling_quests_are_summarized() {
        let mut tracked = rolling("Tracked", Breakpoints::new(&[1], &[1]));
        tracked.from_rolling = false;
        let book = QuestBook(vec![
            tracked,
            rolling("Laps", Breakpoints::new(&[2], &[2])),
        ]);
        let summaries = rolling_summaries(&book);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].name, "Laps");
    }
}
