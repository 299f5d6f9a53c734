//! Pure balance and settlement computations. Nothing here performs I/O or
//! keeps state between calls.

pub mod balance_calculator;
pub mod settlement_planner;
pub mod summary_aggregator;

pub use balance_calculator::BalanceCalculator;
pub use settlement_planner::{DEFAULT_EPSILON, SettlementPlanner};
pub use summary_aggregator::SummaryAggregator;
