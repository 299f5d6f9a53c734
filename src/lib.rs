pub mod api;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;
pub mod visualization;

pub use crate::core::engine::{BalanceCalculator, SettlementPlanner, SummaryAggregator};
pub use crate::core::errors::AsadoError;
pub use crate::core::services::AsadoService;
pub use infrastructure::cache::in_memory::InMemoryCache;
pub use infrastructure::logging::in_memory::InMemoryLogging;
pub use infrastructure::storage::in_memory::InMemoryStorage;
pub use visualization::Visualization;

#[cfg(test)]
mod tests;
