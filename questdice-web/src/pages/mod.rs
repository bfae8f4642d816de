pub mod not_found;
pub mod quest_board;
