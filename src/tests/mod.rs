mod event_tests;

use crate::core::services::AsadoService;
use crate::infrastructure::cache::in_memory::InMemoryCache;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> AsadoService<InMemoryLogging, InMemoryStorage, InMemoryCache> {
    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    let cache = InMemoryCache::new();
    AsadoService::new(storage, logging, cache)
}

/// Creates `event` and adds `participants` to it, in order.
pub async fn seed_event(
    service: &AsadoService<InMemoryLogging, InMemoryStorage, InMemoryCache>,
    event: &str,
    participants: &[&str],
) {
    service.create_event(event).await.unwrap();
    for name in participants {
        service.add_participant(event, name).await.unwrap();
    }
}
