use crate::DataManagerError;

mod file;
mod memory;

pub use file::FileBlobStorage;
pub use memory::MemoryBlobStorage;

/// Named text blobs, the key-value storage the workout history is kept in.
#[allow(async_fn_in_trait)]
pub trait BlobStorage {
    /// `Ok(None)` if nothing is stored under the key.
    async fn load(&self, key: &str) -> Result<Option<String>, DataManagerError>;

    async fn save(&self, key: &str, blob: &str) -> Result<(), DataManagerError>;

    /// Removing a key that holds nothing is not an error.
    async fn remove(&self, key: &str) -> Result<(), DataManagerError>;
}
