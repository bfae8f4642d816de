//! Progress-to-reward mapping for a single quest.
use crate::numbers::percent_of;
use crate::progress::Progress;
use crate::quest::{Breakpoints, saturating_sum};
use serde::{Deserialize, Serialize};

/// Breakpoints met at a given progress and the dice split they imply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BreakpointTally {
    pub met: usize,
    pub earned: u32,
    pub left: u32,
}

impl BreakpointTally {
    /// Tally for a quest with nothing met yet.
    #[must_use]
    pub fn untouched(breakpoints: &Breakpoints) -> Self {
        Self {
            met: 0,
            earned: 0,
            left: breakpoints.total_dice(),
        }
    }

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.earned.saturating_add(self.left)
    }

    /// Whether the breakpoint at `index` has been reached.
    #[must_use]
    pub const fn is_reached(&self, index: usize) -> bool {
        index < self.met
    }

    #[must_use]
    pub fn percent_done(&self) -> u8 {
        percent_of(self.earned, self.total())
    }
}

/// Count the thresholds met by `progress` and split the rewards accordingly.
///
/// A threshold equal to `progress` counts as met. `progress` is never
/// clamped: negative values meet nothing, values past the last threshold
/// meet everything.
#[must_use]
pub fn evaluate(breakpoints: &Breakpoints, progress: Progress) -> BreakpointTally {
    let p = progress.value();
    let met = breakpoints
        .thresholds()
        .iter()
        .position(|&threshold| i64::from(threshold) > p)
        .unwrap_or(breakpoints.len());
    let rewards = breakpoints.rewards();
    let met_rewards = met.min(rewards.len());
    let earned = saturating_sum(&rewards[..met_rewards]);
    let left = saturating_sum(&rewards[met_rewards..]);
    BreakpointTally { met, earned, left }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Breakpoints {
        Breakpoints::new(&[10, 20, 30], &[1, 2, 3])
    }

    fn tally(p: i64) -> BreakpointTally {
        evaluate(&sample(), Progress(p))
    }

    #[test]
    fn matches_reference_table() {
        assert_eq!(tally(10), BreakpointTally { met: 1, earned: 1, left: 5 });
        assert_eq!(tally(15), BreakpointTally { met: 1, earned: 1, left: 5 });
        assert_eq!(tally(30), BreakpointTally { met: 3, earned: 6, left: 0 });
        assert_eq!(tally(31), BreakpointTally { met: 3, earned: 6, left: 0 });
    }

    #[test]
    fn below_first_threshold_meets_nothing() {
        assert_eq!(tally(0), BreakpointTally::untouched(&sample()));
        assert_eq!(tally(9).met, 0);
        assert_eq!(tally(-40), BreakpointTally { met: 0, earned: 0, left: 6 });
    }

    #[test]
    fn met_is_monotonic_and_split_is_conserved() {
        let bp = sample();
        let mut previous = 0;
        for p in -5..=40 {
            let t = evaluate(&bp, Progress(p));
            assert!(t.met >= previous, "met decreased at p={p}");
            assert_eq!(t.earned + t.left, bp.total_dice(), "split drifted at p={p}");
            previous = t.met;
        }
    }

    #[test]
    fn empty_breakpoints_are_trivially_complete() {
        let bp = Breakpoints::default();
        let t = evaluate(&bp, Progress(5));
        assert_eq!(t, BreakpointTally::default());
        assert_eq!(t.percent_done(), 0);
    }

    #[test]
    fn reached_markers_follow_met_count() {
        let t = tally(20);
        assert!(t.is_reached(0));
        assert!(t.is_reached(1));
        assert!(!t.is_reached(2));
        assert_eq!(t.percent_done(), 50);
    }

    #[test]
    fn extreme_progress_values_do_not_overflow() {
        assert_eq!(tally(i64::MAX).met, 3);
        assert_eq!(tally(i64::MIN).met, 0);
    }

    #[test]
    fn oversized_rewards_saturate_instead_of_wrapping() {
        let bp = Breakpoints::new(&[1, 2, 3], &[u32::MAX, 1, u32::MAX]);
        let t = evaluate(&bp, Progress(0));
        assert_eq!(t.left, u32::MAX);
        assert_eq!(bp.total_dice(), u32::MAX);
        let t = evaluate(&bp, Progress(2));
        assert_eq!((t.earned, t.left), (u32::MAX, u32::MAX));
    }
}
