//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Whole-number percentage of `part` over `whole`, clamped to `0..=100`.
///
/// Returns 0 when `whole` is 0 so empty quests render an empty bar.
#[must_use]
pub fn percent_of(part: u32, whole: u32) -> u8 {
    if whole == 0 {
        return 0;
    }
    let ratio = f64::from(part.min(whole)) / f64::from(whole);
    cast::<f64, u8>((ratio * 100.0).floor()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_handles_empty_and_full() {
        assert_eq!(percent_of(0, 0), 0);
        assert_eq!(percent_of(6, 6), 100);
        assert_eq!(percent_of(9, 6), 100);
    }

    #[test]
    fn percent_rounds_down() {
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 66);
        assert_eq!(percent_of(1, 6), 16);
    }
}
