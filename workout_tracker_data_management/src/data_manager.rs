use crate::{DataManagerError, WORKOUTS_KEY, storage::BlobStorage, workout_store::WorkoutStore};

/// The public interface for persisting the workout history.
#[derive(Clone)]
pub struct DataManager<S: BlobStorage> {
    storage: S,
    key: String,
}

impl<S: BlobStorage> DataManager<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, WORKOUTS_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Never fails. Anything that can't be read back is treated as no history.
    pub async fn load_store(&self) -> WorkoutStore {
        match self.storage.load(&self.key).await {
            Ok(blob) => WorkoutStore::restore(blob.as_deref()),
            Err(err) => {
                tracing::warn!("Failed to load workouts: {err:?}");
                WorkoutStore::new()
            }
        }
    }

    pub async fn save_store(&self, store: &WorkoutStore) -> Result<(), DataManagerError> {
        let blob = store.serialize()?;
        self.storage.save(&self.key, &blob).await?;
        tracing::debug!("Saved {} workouts under {}", store.len(), self.key);
        Ok(())
    }

    /// Drops the stored history.
    pub async fn clear(&self) -> Result<(), DataManagerError> {
        self.storage.remove(&self.key).await
    }
}

#[cfg(test)]
mod tests {
    use workout_tracker_lib::{coordinates::Coordinates, workout::Workout};

    use crate::storage::{FileBlobStorage, MemoryBlobStorage};

    use super::*;

    fn store() -> WorkoutStore {
        let mut store = WorkoutStore::new();
        store.add(Workout::running(Coordinates::new(56.175188, 10.196123), 5., 30., 150.)).unwrap();
        store.add(Workout::cycling(Coordinates::new(56.16, 10.2), 20., 60., 0.)).unwrap();
        store
    }

    #[tokio::test]
    async fn save_then_load() {
        crate::init_logging();
        let data_manager = DataManager::new(MemoryBlobStorage::new());

        assert!(data_manager.load_store().await.is_empty());

        let store = store();
        data_manager.save_store(&store).await.unwrap();
        assert_eq!(data_manager.load_store().await, store);
    }

    #[tokio::test]
    async fn corrupt_blob_loads_empty() {
        let storage = MemoryBlobStorage::new();
        storage.save(WORKOUTS_KEY, "[{\"id\": 12").await.unwrap();

        let data_manager = DataManager::new(storage);
        assert!(data_manager.load_store().await.is_empty());
    }

    #[tokio::test]
    async fn clear_drops_history() {
        let data_manager = DataManager::with_key(MemoryBlobStorage::new(), "history");
        data_manager.save_store(&store()).await.unwrap();
        assert!(data_manager.storage().load("history").await.unwrap().is_some());

        data_manager.clear().await.unwrap();
        assert!(data_manager.load_store().await.is_empty());
    }

    #[tokio::test]
    async fn file_backed() {
        let tmp = tempfile::tempdir().unwrap();
        let data_manager = DataManager::new(FileBlobStorage::new(tmp.path()));
        let store = store();
        data_manager.save_store(&store).await.unwrap();

        // A second session reading the same directory
        let reopened = DataManager::new(FileBlobStorage::new(tmp.path()));
        assert_eq!(reopened.load_store().await, store);
    }
}
