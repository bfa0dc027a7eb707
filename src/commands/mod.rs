//! Command implementations

pub mod check;
pub mod serve;
pub mod today;

pub use check::{CheckReport, run_check};
pub use serve::run_serve;
pub use today::{TodayReport, today_report};
