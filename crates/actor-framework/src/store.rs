//! # Record Stores
//!
//! A [`RecordStore`] owns the persisted representation of one collection. It only knows two
//! operations: read the whole collection, and overwrite the whole collection. There are no
//! partial reads or writes and no locking; the [`ResourceActor`](crate::ResourceActor) that
//! owns the store is what serializes access.
//!
//! Two implementations ship with the framework:
//!
//! - [`JsonFileStore`] persists the collection as a pretty-printed JSON array.
//! - [`MemoryStore`] keeps it in memory, for tests.

use crate::error::StoreError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Whole-collection persistence for records of type `T`.
#[async_trait]
pub trait RecordStore<T>: Send + Sync + 'static {
    /// Reads the full collection.
    ///
    /// A missing or unreadable collection is returned as empty. An error means the stored
    /// data exists but cannot be represented as records, and must not be written over.
    async fn load(&self) -> Result<Vec<T>, StoreError>;

    /// Overwrites the persisted collection with `records`.
    async fn save(&self, records: &[T]) -> Result<(), StoreError>;
}

/// Stores the collection as a JSON array in a single file.
///
/// The file is rewritten wholesale on every save (2-space indentation). A missing file, an
/// unreadable one or text that is not JSON loads as an empty collection. A well-formed JSON
/// document that does not map onto records loads as [`StoreError::Incompatible`] so the
/// data survives until someone looks at it.
#[derive(Debug)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl<T> RecordStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn load(&self) -> Result<Vec<T>, StoreError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Record file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Record file unreadable");
                return Ok(Vec::new());
            }
        };

        let document: serde_json::Value = match serde_json::from_str(&contents) {
            Ok(document) => document,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Record file malformed");
                return Ok(Vec::new());
            }
        };

        serde_json::from_value(document).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "Record file holds unrecognised records");
            StoreError::Incompatible(e)
        })
    }

    async fn save(&self, records: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&self.path, json).await?;
        debug!(path = %self.path.display(), size = records.len(), "Record file written");
        Ok(())
    }
}

/// Keeps the collection in memory.
///
/// Writes can be made to fail with [`MemoryStore::fail_writes`] to exercise error paths.
#[derive(Debug)]
pub struct MemoryStore<T> {
    records: Mutex<Vec<T>>,
    fail_writes: AtomicBool,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Mutex::new(records),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Makes every following `save` fail (or succeed again with `false`).
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> RecordStore<T> for MemoryStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn load(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.records.lock().await.clone())
    }

    async fn save(&self, records: &[T]) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Io(std::io::Error::other("memory store is read-only")));
        }
        *self.records.lock().await = records.to_vec();
        Ok(())
    }
}

/// Shared stores let a test keep a handle on the store it gave to an actor.
#[async_trait]
impl<T, S> RecordStore<T> for std::sync::Arc<S>
where
    S: RecordStore<T>,
    T: Send + Sync + 'static,
{
    async fn load(&self) -> Result<Vec<T>, StoreError> {
        self.as_ref().load().await
    }

    async fn save(&self, records: &[T]) -> Result<(), StoreError> {
        self.as_ref().save(records).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: u32,
        label: String,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: 2,
                label: "second".to_string(),
            },
            Row {
                id: 1,
                label: "first".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::<Row>::new(dir.path().join("absent.json"));
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::<Row>::new(&path);
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_well_formed_but_unmappable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.json");
        let original = r#"[{"id": "one", "label": "first"}]"#;
        std::fs::write(&path, original).unwrap();

        let store = JsonFileStore::<Row>::new(&path);

        assert!(matches!(store.load().await, Err(StoreError::Incompatible(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
    }

    #[tokio::test]
    async fn test_save_then_load_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("rows.json"));

        store.save(&rows()).await.unwrap();
        assert_eq!(store.load().await.unwrap(), rows());
    }

    #[tokio::test]
    async fn test_save_writes_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("rows.json"));

        store.save(&rows()[..1]).await.unwrap();

        let written = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(written, "[\n  {\n    \"id\": 2,\n    \"label\": \"second\"\n  }\n]");
    }

    #[tokio::test]
    async fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing").join("rows.json"));

        let result = store.save(&rows()).await;
        assert!(matches!(result, Err(StoreError::Io(_))));
    }

    #[tokio::test]
    async fn test_memory_store_write_failure() {
        let store = MemoryStore::with_records(rows());
        store.fail_writes(true);

        assert!(store.save(&[]).await.is_err());
        assert_eq!(store.load().await.unwrap(), rows());
    }
}
