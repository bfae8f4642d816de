pub mod dice_totals;
pub mod progress_bar;
pub mod quest_card;
pub mod rolling_list;
