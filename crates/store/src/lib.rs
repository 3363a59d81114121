//! `academy-store` -- durable key-value storage for course drafts.
//!
//! [`DraftStore`] is the storage port. [`MemoryStore`] backs tests and
//! [`FileStore`] keeps one JSON file per key on disk. [`DraftRepo`] layers
//! typed, corruption-tolerant access to the well-known draft keys on top.

pub mod drafts;
pub mod error;
pub mod file;
pub mod keys;
pub mod memory;

use async_trait::async_trait;

pub use drafts::DraftRepo;
pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// String-keyed, string-valued durable storage.
#[async_trait]
pub trait DraftStore: Send + Sync {
    /// The raw value for `key`, or `None` if never written or removed.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite `key` with `value`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Remove every key.
    async fn clear(&self) -> Result<(), StoreError>;
}
