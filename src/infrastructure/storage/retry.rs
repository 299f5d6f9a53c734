use crate::core::errors::AsadoError;
use log::warn;
use std::future::Future;

/// Runs a storage read, retrying it once if it fails with a storage error.
/// Any other error, or a second failure, is returned as is.
pub async fn retry_once<T, F, Fut>(operation: &str, mut attempt: F) -> Result<T, AsadoError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AsadoError>>,
{
    match attempt().await {
        Err(AsadoError::StorageError(reason)) => {
            warn!("{} failed: {}; retrying once", operation, reason);
            attempt().await
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn transient_failure_is_retried() {
        let calls = &AtomicUsize::new(0);
        let result = retry_once("list_expenses", move || async move {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(AsadoError::StorageError("connection reset".to_string()))
            } else {
                Ok(7)
            }
        })
        .await;

        assert_eq!(result, Ok(7));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn second_failure_is_returned() {
        let calls = &AtomicUsize::new(0);
        let result: Result<(), AsadoError> = retry_once("list_expenses", move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(AsadoError::StorageError("down".to_string()))
        })
        .await;

        assert_eq!(result, Err(AsadoError::StorageError("down".to_string())));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn other_errors_are_not_retried() {
        let calls = &AtomicUsize::new(0);
        let result: Result<(), AsadoError> = retry_once("get_event", move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(AsadoError::EventNotFound("asado".to_string()))
        })
        .await;

        assert!(matches!(result, Err(AsadoError::EventNotFound(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
