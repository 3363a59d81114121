//! Draft writes with exponential-backoff retry, run on a spawned task.
//!
//! Running the write on its own task means a caller that stops waiting
//! (navigates away) does not cancel a half-finished save.

use std::future::Future;
use std::time::Duration;

use academy_store::StoreError;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub attempts: u32,
    /// Delay after the first failure; doubled after each further failure.
    pub base_delay: Duration,
}

/// Delay before retry number `retry` (1-based).
pub fn backoff_delay(policy: &RetryPolicy, retry: u32) -> Duration {
    policy
        .base_delay
        .saturating_mul(2u32.saturating_pow(retry.saturating_sub(1)))
}

/// Run `op` until it succeeds or the policy is exhausted.
pub async fn with_retry<T, F, Fut>(
    policy: RetryPolicy,
    key: &'static str,
    mut op: F,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, StoreError>>,
{
    let attempts = policy.attempts.max(1);
    let mut attempt = 0u32;
    loop {
        attempt += 1;
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < attempts => {
                let delay = backoff_delay(&policy, attempt);
                tracing::warn!(
                    key,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    error = %e,
                    "Draft write failed, retrying"
                );
                tokio::time::sleep(delay).await;
            }
            Err(e) => {
                tracing::error!(key, attempts, error = %e, "Draft write failed after all retries");
                return Err(AppError::SaveFailed {
                    key,
                    attempts,
                    source: e,
                });
            }
        }
    }
}

/// Wait `latency`, then run `op` with retry on a spawned task and await it.
pub async fn spawn_persist<T, F, Fut>(
    latency: Duration,
    policy: RetryPolicy,
    key: &'static str,
    op: F,
) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, StoreError>> + Send + 'static,
{
    let handle = tokio::spawn(async move {
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
        with_retry(policy, key, op).await
    });
    handle.await?
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn policy(attempts: u32) -> RetryPolicy {
        RetryPolicy {
            attempts,
            base_delay: Duration::ZERO,
        }
    }

    fn failure() -> StoreError {
        StoreError::InvalidKey("boom".into())
    }

    #[test]
    fn backoff_doubles() {
        let policy = RetryPolicy {
            attempts: 4,
            base_delay: Duration::from_millis(250),
        };
        assert_eq!(backoff_delay(&policy, 1), Duration::from_millis(250));
        assert_eq!(backoff_delay(&policy, 2), Duration::from_millis(500));
        assert_eq!(backoff_delay(&policy, 3), Duration::from_millis(1000));
    }

    #[tokio::test]
    async fn succeeds_after_transient_failures() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let result = with_retry(policy(3), "k", move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            async move { if n < 2 { Err(failure()) } else { Ok(n) } }
        })
        .await
        .unwrap();
        assert_eq!(result, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn exhausted_policy_is_save_failed() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let err = with_retry(policy(2), "course_modules", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Err::<(), _>(failure()) }
        })
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::SaveFailed {
                key: "course_modules",
                attempts: 2,
                ..
            }
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn spawned_write_returns_value() {
        let value = spawn_persist(Duration::ZERO, policy(1), "k", || async { Ok(42) })
            .await
            .unwrap();
        assert_eq!(value, 42);
    }
}
