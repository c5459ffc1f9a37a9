//! Object storage abstraction and implementations.

mod memory;
mod s3;

pub use memory::MemoryStore;
pub use s3::S3Store;

use async_trait::async_trait;

use crate::error::Result;

/// A key-addressed object store.
///
/// The store handle is constructed explicitly and handed to the transfer, so
/// orchestration code never touches an ambient global client and tests can
/// substitute [`MemoryStore`] for a live bucket.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Identifier used in log and report lines (the bucket name).
    fn name(&self) -> &str;

    /// Enumerate every object key in the store.
    async fn list(&self) -> Result<Vec<String>>;

    /// Fetch the full content of one object.
    async fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// Write an object, overwriting any existing content under `key`.
    async fn put(&self, key: &str, content: &[u8]) -> Result<()>;
}
