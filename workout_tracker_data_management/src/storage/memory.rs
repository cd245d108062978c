use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;

use crate::DataManagerError;

use super::BlobStorage;

/// Blobs held in memory. Clones share the same blobs.
#[derive(Clone, Default)]
pub struct MemoryBlobStorage {
    blobs: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBlobStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStorage for MemoryBlobStorage {
    async fn load(&self, key: &str) -> Result<Option<String>, DataManagerError> {
        let blobs = self.blobs.lock().await;
        Ok(blobs.get(key).cloned())
    }

    async fn save(&self, key: &str, blob: &str) -> Result<(), DataManagerError> {
        let mut blobs = self.blobs.lock().await;
        blobs.insert(key.to_owned(), blob.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), DataManagerError> {
        let mut blobs = self.blobs.lock().await;
        blobs.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clones_share_blobs() {
        let storage = MemoryBlobStorage::new();
        let other = storage.clone();

        assert_eq!(storage.load("workouts").await.unwrap(), None);

        storage.save("workouts", "[]").await.unwrap();
        assert_eq!(other.load("workouts").await.unwrap().as_deref(), Some("[]"));

        other.remove("workouts").await.unwrap();
        assert_eq!(storage.load("workouts").await.unwrap(), None);
    }
}
