//! Local persistence of the active `component_id`.
//!
//! The editor remembers which record it is editing between runs. The only
//! persisted key is `component_id`, kept in a small JSON state file.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("state file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("state file {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the active `component_id` lives between sessions.
#[async_trait]
pub trait ComponentStore: Send + Sync {
    async fn load(&self) -> Result<Option<String>, StoreError>;

    async fn save(&self, component_id: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StateFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    component_id: Option<String>,
}

/// A [`ComponentStore`] backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileComponentStore {
    path: PathBuf,
}

impl FileComponentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn json_error(&self, source: serde_json::Error) -> StoreError {
        StoreError::Json {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl ComponentStore for FileComponentStore {
    /// A missing file means nothing has been stored yet.
    async fn load(&self) -> Result<Option<String>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        let state: StateFile = serde_json::from_slice(&bytes).map_err(|e| self.json_error(e))?;
        Ok(state.component_id.filter(|id| !id.is_empty()))
    }

    async fn save(&self, component_id: &str) -> Result<(), StoreError> {
        let state = StateFile {
            component_id: Some(component_id.to_string()),
        };
        let json = serde_json::to_vec_pretty(&state).map_err(|e| self.json_error(e))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), component_id, "Stored component id");
        Ok(())
    }
}

/// A [`ComponentStore`] that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryComponentStore {
    component_id: RwLock<Option<String>>,
}

impl MemoryComponentStore {
    pub fn new(component_id: Option<String>) -> Self {
        Self {
            component_id: RwLock::new(component_id),
        }
    }
}

#[async_trait]
impl ComponentStore for MemoryComponentStore {
    async fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.component_id.read().await.clone())
    }

    async fn save(&self, component_id: &str) -> Result<(), StoreError> {
        *self.component_id.write().await = Some(component_id.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileComponentStore::new(dir.path().join("state.json"));
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn saved_id_survives_a_new_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        FileComponentStore::new(&path).save("abc-123").await.unwrap();

        let reopened = FileComponentStore::new(&path);
        assert_eq!(reopened.load().await.unwrap().as_deref(), Some("abc-123"));

        let raw: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!({"component_id": "abc-123"}));
    }

    #[tokio::test]
    async fn empty_id_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, r#"{"component_id": ""}"#).unwrap();

        assert_eq!(FileComponentStore::new(&path).load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn corrupt_file_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not json").unwrap();

        let err = FileComponentStore::new(&path).load().await.unwrap_err();
        assert_matches!(err, StoreError::Json { .. });
    }

    #[tokio::test]
    async fn memory_store_round_trips() {
        let store = MemoryComponentStore::default();
        assert_eq!(store.load().await.unwrap(), None);
        store.save("xyz").await.unwrap();
        assert_eq!(store.load().await.unwrap().as_deref(), Some("xyz"));
    }
}
