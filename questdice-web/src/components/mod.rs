pub mod footer;
pub mod ui;
