pub mod cache_keys;
pub mod in_memory;

use crate::core::errors::AsadoError;
use crate::core::models::EventSummary;
use async_trait::async_trait;

/// Summary cache guarded by a per-event generation.
///
/// Callers read `generation` before loading the data a summary is built
/// from and pass it back to `save_event_summary`. An invalidation in between
/// bumps the generation and the save is skipped.
#[async_trait]
pub trait Cache: Send + Sync {
    async fn get_event_summary(&self, event: &str) -> Result<Option<EventSummary>, AsadoError>;
    async fn generation(&self, event: &str) -> Result<u64, AsadoError>;
    /// Returns whether the summary was stored.
    async fn save_event_summary(
        &self,
        event: &str,
        summary: &EventSummary,
        generation: u64,
        ttl: std::time::Duration,
    ) -> Result<bool, AsadoError>;
    async fn invalidate_event(&self, event: &str) -> Result<(), AsadoError>;
    async fn clear(&self) -> Result<(), AsadoError>;
}
