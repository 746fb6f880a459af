use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub mod file_storage;
pub mod memory_storage;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

/// Key/value storage for persisted board state
///
/// Modelled on the browser's local storage: string keys, string values,
/// a missing key is `Ok(None)` rather than an error.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Reads the value stored under `key`
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key`; deleting a missing key succeeds
    async fn remove_item(&self, key: &str) -> Result<()>;
}

#[async_trait]
impl<S: Storage + ?Sized> Storage for Arc<S> {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key).await
    }
}
