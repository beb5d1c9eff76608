//! Snapshot persistence — save and load the store to/from disk.
//!
//! Uses pretty-printed JSON so snapshots stay inspectable. Atomic writes
//! (write to .tmp, then rename) prevent corruption from crashes.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use super::{Collection, DirectorRecord, Filter, MovieRecord, Store};
use crate::error::{CinegraphError, Result};

/// Serializable representation of the whole store.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    movies: Vec<MovieRecord>,
    directors: Vec<DirectorRecord>,
}

/// Save the store to a JSON snapshot file.
///
/// Uses atomic write: writes to a `.tmp` file first, then renames.
/// This prevents corruption if the process is interrupted mid-write.
pub fn save(store: &Store, path: &Path) -> Result<()> {
    info!(path = %path.display(), "saving snapshot");

    let snapshot = Snapshot {
        movies: store.movies.find(&Filter::new())?,
        directors: store.directors.find(&Filter::new())?,
    };
    let bytes = serde_json::to_vec_pretty(&snapshot)
        .map_err(|e| CinegraphError::SerializeError(e.to_string()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    // Atomic write: write to .tmp, then rename
    let tmp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&tmp_path)?;
    file.write_all(&bytes)?;
    file.sync_all()?;
    fs::rename(&tmp_path, path)?;

    debug!(bytes = bytes.len(), "snapshot saved");
    Ok(())
}

/// Load a store from a JSON snapshot file.
pub fn load(path: &Path) -> Result<Store> {
    info!(path = %path.display(), "loading snapshot");

    let bytes = fs::read(path)?;
    let snapshot: Snapshot = serde_json::from_slice(&bytes)
        .map_err(|e| CinegraphError::SerializeError(format!("snapshot: {}", e)))?;

    debug!(
        movies = snapshot.movies.len(),
        directors = snapshot.directors.len(),
        "snapshot loaded"
    );

    Ok(Store {
        movies: Collection::from_records(snapshot.movies),
        directors: Collection::from_records(snapshot.directors),
        snapshot: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_roundtrip() {
        let store = Store::in_memory();
        let director = store
            .directors
            .insert(|id| DirectorRecord {
                id,
                name: "Kurosawa".to_string(),
                age: 88,
            })
            .unwrap();
        let movie = store
            .movies
            .insert(|id| MovieRecord {
                id,
                name: "Ran".to_string(),
                genre: "Drama".to_string(),
                year: "1985".to_string(),
                director_id: Some(director.id.clone()),
            })
            .unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        save(&store, &path).unwrap();
        assert!(path.exists());

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.movies.find_by_id(&movie.id).unwrap(), Some(movie));
        assert_eq!(
            loaded.directors.find_by_id(&director.id).unwrap(),
            Some(director)
        );
    }

    #[test]
    fn test_open_missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let store = Store::open(&path).unwrap();
        assert!(store.movies.is_empty().unwrap());
        assert!(store.directors.is_empty().unwrap());
    }

    #[test]
    fn test_open_then_flush_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = Store::open(&path).unwrap();
        store
            .movies
            .insert(|id| MovieRecord {
                id,
                name: "Ikiru".to_string(),
                genre: "Drama".to_string(),
                year: "1952".to_string(),
                director_id: None,
            })
            .unwrap();
        store.flush().unwrap();

        let reopened = Store::open(&path).unwrap();
        assert_eq!(reopened.movies.len().unwrap(), 1);
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, b"{ not json").unwrap();

        let result = load(&path);
        assert!(matches!(result, Err(CinegraphError::SerializeError(_))));
    }

    #[test]
    fn test_flush_without_snapshot_path_is_noop() {
        let store = Store::in_memory();
        store.flush().unwrap();
    }
}
