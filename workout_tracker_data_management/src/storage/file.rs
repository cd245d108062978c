use std::path::{Path, PathBuf};

use crate::{BLOB_DIR, BLOB_FILE_EXTENSION, DataManagerError};

use super::BlobStorage;

/// One `<key>.json` file per blob inside a directory.
#[derive(Clone, Debug)]
pub struct FileBlobStorage {
    dir: PathBuf,
}

impl FileBlobStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Blobs in `data/blobs` under the project root.
    pub fn in_project_data_dir() -> Result<Self, DataManagerError> {
        let root: PathBuf = project_root::get_project_root()
            .map_err(|err| DataManagerError::Storage(format!("Failed to find project root: {err}")))?;

        Ok(Self::new(root.join(BLOB_DIR)))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{BLOB_FILE_EXTENSION}"))
    }
}

impl BlobStorage for FileBlobStorage {
    async fn load(&self, key: &str) -> Result<Option<String>, DataManagerError> {
        let path = self.blob_path(key);

        match tokio::fs::read_to_string(&path).await {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(DataManagerError::Storage(format!("Failed to read blob file {path:?}: {err}"))),
        }
    }

    async fn save(&self, key: &str, blob: &str) -> Result<(), DataManagerError> {
        // Create data dir if it doesn't exist
        if !self.dir.exists() {
            tokio::fs::create_dir_all(&self.dir).await
                .map_err(|err| DataManagerError::Storage(format!("Failed to create data directory {:?}: {err}", self.dir)))?;
        }

        let path = self.blob_path(key);
        tokio::fs::write(&path, blob).await
            .map_err(|err| DataManagerError::Storage(format!("Failed to write blob file {path:?}: {err}")))
    }

    async fn remove(&self, key: &str) -> Result<(), DataManagerError> {
        let path = self.blob_path(key);

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(DataManagerError::Storage(format!("Failed to remove blob file {path:?}: {err}"))),
        }
    }
}
