use crate::core::errors::AsadoError;
use crate::core::models::EventSummary;
use crate::infrastructure::cache::{Cache, cache_keys::event_summary_key};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct CacheState {
    summaries: HashMap<String, (EventSummary, DateTime<Utc>)>,
    generations: HashMap<String, u64>,
    // Bumped by `clear`, so it also covers events never invalidated before
    epoch: u64,
}

impl CacheState {
    fn generation(&self, key: &str) -> u64 {
        self.epoch + self.generations.get(key).copied().unwrap_or(0)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryCache {
    state: Arc<RwLock<CacheState>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get_event_summary(&self, event: &str) -> Result<Option<EventSummary>, AsadoError> {
        let state = self.state.read().await;
        let now = Utc::now();
        Ok(state
            .summaries
            .get(&event_summary_key(event))
            .filter(|(_, expiry)| *expiry > now)
            .map(|(summary, _)| summary.clone()))
    }

    async fn generation(&self, event: &str) -> Result<u64, AsadoError> {
        Ok(self.state.read().await.generation(&event_summary_key(event)))
    }

    async fn save_event_summary(
        &self,
        event: &str,
        summary: &EventSummary,
        generation: u64,
        ttl: std::time::Duration,
    ) -> Result<bool, AsadoError> {
        let now = Utc::now();
        // TTLs past the representable range never expire
        let expiry = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let key = event_summary_key(event);
        let mut state = self.state.write().await;
        if state.generation(&key) != generation {
            debug!("Event {} changed while its summary was computed; not caching it", event);
            return Ok(false);
        }
        state.summaries.insert(key, (summary.clone(), expiry));
        Ok(true)
    }

    async fn invalidate_event(&self, event: &str) -> Result<(), AsadoError> {
        let key = event_summary_key(event);
        let now = Utc::now();
        let mut state = self.state.write().await;
        state.summaries.remove(&key);
        state.summaries.retain(|_, (_, expiry)| *expiry > now);
        *state.generations.entry(key).or_insert(0) += 1;
        Ok(())
    }

    async fn clear(&self) -> Result<(), AsadoError> {
        let mut state = self.state.write().await;
        state.summaries.clear();
        state.epoch += 1;
        Ok(())
    }
}
