pub mod audit;
pub mod balance;
pub mod event;
pub mod expense;
pub mod settlement;
pub mod summary;

pub use audit::AppLog;
pub use balance::{Balance, BalanceSheet, Standing};
pub use event::{Event, EventOverview};
pub use expense::Expense;
pub use settlement::{SettlementPlan, Transfer};
pub use summary::{CategoryStats, EventSummary};
