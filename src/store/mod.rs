//! Document store — collections of movie and director records.
//!
//! A deliberately small, in-process document store exposing the same
//! per-collection contract a hosted document database would:
//! point lookup by id, filtered listing, insertion (the store assigns ids),
//! in-place update, and deletion. Snapshot persistence lives in
//! `store::persistence`.
//!
//! Referential integrity is NOT enforced across collections: a movie may
//! reference a director id that matches nothing, and callers must treat
//! that as an empty result rather than an error.

pub mod persistence;
pub mod types;

pub use types::{DirectorRecord, MovieRecord};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::error::{CinegraphError, Result};

/// A record that can live in a [`Collection`].
pub trait Document: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The store-assigned identifier.
    fn id(&self) -> &str;
}

/// Exact-match filter over a record's JSON representation.
///
/// An empty filter matches every record. Field names follow the record's
/// serialized (camelCase) form, e.g. `directorId`.
#[derive(Debug, Clone, Default)]
pub struct Filter(BTreeMap<String, Value>);

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field` to equal `value` exactly.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    fn matches(&self, doc: &Value) -> bool {
        self.0.iter().all(|(field, want)| doc.get(field) == Some(want))
    }
}

/// One collection of documents, keyed by id.
///
/// The lock is held only for the duration of a single call, never across
/// await points, so the collection is safe to share behind an `Arc`.
pub struct Collection<T: Document> {
    docs: RwLock<BTreeMap<String, T>>,
}

impl<T: Document> Default for Collection<T> {
    fn default() -> Self {
        Self {
            docs: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<T: Document> Collection<T> {
    /// Rebuild a collection from previously persisted records.
    pub fn from_records(records: Vec<T>) -> Self {
        let docs = records
            .into_iter()
            .map(|r| (r.id().to_string(), r))
            .collect();
        Self {
            docs: RwLock::new(docs),
        }
    }

    /// Point lookup by id. Absent ids are a valid empty result.
    pub fn find_by_id(&self, id: &str) -> Result<Option<T>> {
        let docs = self.read()?;
        Ok(docs.get(id).cloned())
    }

    /// Return all records matching `filter`, in store-native (key) order.
    pub fn find(&self, filter: &Filter) -> Result<Vec<T>> {
        let docs = self.read()?;
        let mut out = Vec::new();
        for doc in docs.values() {
            let json = serde_json::to_value(doc)
                .map_err(|e| CinegraphError::SerializeError(e.to_string()))?;
            if filter.matches(&json) {
                out.push(doc.clone());
            }
        }
        Ok(out)
    }

    /// Insert a new record. The store assigns the id and hands it to `make`,
    /// which builds the record around it. Returns the stored record.
    pub fn insert(&self, make: impl FnOnce(String) -> T) -> Result<T> {
        let id = Uuid::new_v4().simple().to_string();
        let doc = make(id);
        let mut docs = self.write()?;
        docs.insert(doc.id().to_string(), doc.clone());
        Ok(doc)
    }

    /// Apply `apply` to the record with the given id, returning the updated
    /// record, or `None` (and no change) when the id matches nothing.
    /// `apply` must leave the id untouched.
    pub fn find_by_id_and_update(
        &self,
        id: &str,
        apply: impl FnOnce(&mut T),
    ) -> Result<Option<T>> {
        let mut docs = self.write()?;
        match docs.get_mut(id) {
            Some(doc) => {
                apply(doc);
                Ok(Some(doc.clone()))
            }
            None => Ok(None),
        }
    }

    /// Remove the record with the given id, returning it as it existed
    /// before deletion, or `None` when the id matches nothing.
    pub fn find_by_id_and_delete(&self, id: &str) -> Result<Option<T>> {
        let mut docs = self.write()?;
        Ok(docs.remove(id))
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, BTreeMap<String, T>>> {
        self.docs
            .read()
            .map_err(|_| CinegraphError::StoreError("collection lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, BTreeMap<String, T>>> {
        self.docs
            .write()
            .map_err(|_| CinegraphError::StoreError("collection lock poisoned".to_string()))
    }
}

/// The document store: movies and directors, plus an optional snapshot path.
pub struct Store {
    pub movies: Collection<MovieRecord>,
    pub directors: Collection<DirectorRecord>,
    snapshot: Option<PathBuf>,
}

impl Store {
    /// A store with no backing file. Contents are lost on drop.
    pub fn in_memory() -> Self {
        Self {
            movies: Collection::default(),
            directors: Collection::default(),
            snapshot: None,
        }
    }

    /// Open a store backed by a snapshot file, loading it when present.
    pub fn open(path: &Path) -> Result<Self> {
        let mut store = if path.exists() {
            persistence::load(path)?
        } else {
            info!(path = %path.display(), "no snapshot found, starting empty");
            Self::in_memory()
        };
        store.snapshot = Some(path.to_path_buf());
        Ok(store)
    }

    /// Write the current contents to the snapshot file, if one is configured.
    pub fn flush(&self) -> Result<()> {
        match &self.snapshot {
            Some(path) => persistence::save(self, path),
            None => Ok(()),
        }
    }
}
