pub mod replay;
pub mod reports;
pub mod source;

pub use replay::ReplayPlan;
pub use reports::BoardReport;
pub use source::FileQuestSource;
