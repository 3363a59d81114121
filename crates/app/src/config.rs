use std::path::PathBuf;
use std::time::Duration;

use crate::retry::RetryPolicy;

const DEFAULT_DRAFT_STORE_DIR: &str = ".academy/drafts";
const DEFAULT_SIMULATED_LATENCY_MS: u64 = 800;
const DEFAULT_SAVED_INDICATOR_MS: u64 = 3000;
const DEFAULT_SAVE_RETRY_ATTEMPTS: u32 = 3;
const DEFAULT_SAVE_RETRY_BACKOFF_MS: u64 = 250;

/// Application configuration loaded from environment variables.
///
/// Every field has a default; unparsable values fall back to it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory of the file-backed draft store.
    pub draft_store_dir: PathBuf,
    /// Simulated network round trip before each save or submit.
    pub simulated_latency: Duration,
    /// How long the Phase 2 "saved" indicator stays visible.
    pub saved_indicator: Duration,
    /// Retry policy for draft writes.
    pub save_retry: RetryPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            draft_store_dir: PathBuf::from(DEFAULT_DRAFT_STORE_DIR),
            simulated_latency: Duration::from_millis(DEFAULT_SIMULATED_LATENCY_MS),
            saved_indicator: Duration::from_millis(DEFAULT_SAVED_INDICATOR_MS),
            save_retry: RetryPolicy {
                attempts: DEFAULT_SAVE_RETRY_ATTEMPTS,
                base_delay: Duration::from_millis(DEFAULT_SAVE_RETRY_BACKOFF_MS),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default           |
    /// |-------------------------|-------------------|
    /// | `DRAFT_STORE_DIR`       | `.academy/drafts` |
    /// | `SIMULATED_LATENCY_MS`  | `800`             |
    /// | `SAVED_INDICATOR_MS`    | `3000`            |
    /// | `SAVE_RETRY_ATTEMPTS`   | `3`               |
    /// | `SAVE_RETRY_BACKOFF_MS` | `250`             |
    pub fn from_env() -> Self {
        let draft_store_dir = std::env::var("DRAFT_STORE_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DRAFT_STORE_DIR));

        let simulated_latency_ms = env_or("SIMULATED_LATENCY_MS", DEFAULT_SIMULATED_LATENCY_MS);
        let saved_indicator_ms = env_or("SAVED_INDICATOR_MS", DEFAULT_SAVED_INDICATOR_MS);
        let attempts: u32 = env_or("SAVE_RETRY_ATTEMPTS", DEFAULT_SAVE_RETRY_ATTEMPTS);
        let backoff_ms = env_or("SAVE_RETRY_BACKOFF_MS", DEFAULT_SAVE_RETRY_BACKOFF_MS);

        Self {
            draft_store_dir,
            simulated_latency: Duration::from_millis(simulated_latency_ms),
            saved_indicator: Duration::from_millis(saved_indicator_ms),
            save_retry: RetryPolicy {
                attempts: attempts.max(1),
                base_delay: Duration::from_millis(backoff_ms),
            },
        }
    }

    /// No latency and no backoff; used by tests.
    pub fn immediate() -> Self {
        Self {
            simulated_latency: Duration::ZERO,
            save_retry: RetryPolicy {
                base_delay: Duration::ZERO,
                ..Self::default().save_retry
            },
            ..Self::default()
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
