use super::error::StoreError;
use super::files::{atomic_write, read_file};
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A pending change to one key: `Some` writes the value, `None` removes the key
pub type Change = (&'static str, Option<String>);

/// Key-value persistence port
///
/// Values are stored as text. Writes are synchronous: when a write returns
/// `Ok` the change is durable.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &'static str, value: String) -> Result<(), StoreError> {
        self.apply(vec![(key, Some(value))])
    }

    fn remove(&mut self, key: &'static str) -> Result<(), StoreError> {
        self.apply(vec![(key, None)])
    }

    /// Apply several changes as one write
    fn apply(&mut self, changes: Vec<Change>) -> Result<(), StoreError>;
}

fn apply_to_map(map: &mut BTreeMap<String, String>, changes: Vec<Change>) {
    for (key, value) in changes {
        match value {
            Some(value) => {
                map.insert(key.to_string(), value);
            }
            None => {
                map.remove(key);
            }
        }
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    map: BTreeMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            map: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }
}

#[cfg(test)]
impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn apply(&mut self, changes: Vec<Change>) -> Result<(), StoreError> {
        apply_to_map(&mut self.map, changes);
        Ok(())
    }
}

/// Store backed by a flat JSON object on disk, rewritten atomically on
/// every change
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    map: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; an
    /// unreadable or corrupt one is logged and treated as empty.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = match read_file(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "store file is unreadable, starting empty");
                String::new()
            }
        };

        let map = if content.trim().is_empty() {
            BTreeMap::new()
        } else {
            match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(map) => map,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "store file is corrupt, starting empty");
                    BTreeMap::new()
                }
            }
        };

        tracing::debug!(path = %path.display(), keys = map.len(), "opened store");
        Ok(Self { path, map })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(map)?;
        atomic_write(&self.path, &json)
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    /// The in-memory map only changes once the write has succeeded
    fn apply(&mut self, changes: Vec<Change>) -> Result<(), StoreError> {
        let mut next = self.map.clone();
        apply_to_map(&mut next, changes);
        self.flush(&next)?;
        self.map = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_memory_store_set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("dw:mode"), None);

        store.set("dw:mode", "rest".to_string()).unwrap();
        assert_eq!(store.get("dw:mode"), Some("rest".to_string()));

        store.remove("dw:mode").unwrap();
        assert!(!store.contains("dw:mode"));
    }

    #[test]
    fn test_apply_batch() {
        let mut store = MemoryStore::with_entries([("dw:lastTick", "5")]);
        store
            .apply(vec![
                ("dw:running", Some("false".to_string())),
                ("dw:lastTick", None),
            ])
            .unwrap();
        assert_eq!(store.get("dw:running"), Some("false".to_string()));
        assert_eq!(store.get("dw:lastTick"), None);
    }

    #[test]
    fn test_file_store_persists_across_open() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("state.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("dw:elapsed", "42".to_string()).unwrap();
        store.set("dw:mode", "deep".to_string()).unwrap();
        store.remove("dw:mode").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("dw:elapsed"), Some("42".to_string()));
        assert_eq!(reopened.get("dw:mode"), None);
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(temp_dir.path().join("state.json")).unwrap();
        assert_eq!(store.get("dw:running"), None);
    }

    #[test]
    fn test_file_store_corrupt_file_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("state.json");
        fs::write(&path, "{not json").unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("dw:running"), None);

        store.set("dw:running", "true".to_string()).unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("dw:running"), Some("true".to_string()));
    }

    #[test]
    fn test_file_store_invalid_utf8_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("state.json");
        fs::write(&path, [0xff, 0xfe, b'{', b'}']).unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("dw:mode"), None);

        store.set("dw:mode", "rest".to_string()).unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("dw:mode"), Some("rest".to_string()));
    }

    #[test]
    fn test_failed_write_leaves_map_unchanged() {
        let temp_dir = tempfile::tempdir().unwrap();
        let depot = temp_dir.path().join("depot");
        fs::create_dir_all(&depot).unwrap();

        let mut store = FileStore::open(depot.join("state.json")).unwrap();
        store.set("dw:elapsed", "1".to_string()).unwrap();
        fs::remove_dir_all(&depot).unwrap();

        let err = store.set("dw:elapsed", "2".to_string()).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert_eq!(store.get("dw:elapsed"), Some("1".to_string()));
    }
}
