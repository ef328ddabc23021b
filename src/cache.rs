use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::Result;

const CACHE_SUBDIR: &str = "gitignore";
const CACHE_FILE: &str = "cache.json";

/// Disk-backed template cache: one JSON object mapping template names to
/// their bodies, loaded eagerly and rewritten in full on every mutation.
pub struct TemplateCache {
    entries: BTreeMap<String, String>,
    /// Backing file. `None` when no writable cache location exists, in which
    /// case the cache lives in memory for the rest of the process.
    file: Option<PathBuf>,
}

impl TemplateCache {
    /// Loads the cache from `<root>/gitignore/cache.json`, defaulting the
    /// root to the platform cache directory. A missing file initializes an
    /// empty persisted object; an unresolvable location disables persistence
    /// silently.
    pub fn load(root: Option<PathBuf>) -> Self {
        let Some(root) = root.or_else(dirs::cache_dir) else {
            return Self::memory_only();
        };
        let dir = root.join(CACHE_SUBDIR);
        let file = dir.join(CACHE_FILE);

        match fs::read_to_string(&file) {
            Ok(contents) => {
                // A corrupt cache file is treated as absent; the next
                // mutation rewrites it.
                let entries = serde_json::from_str(&contents).unwrap_or_default();
                Self {
                    entries,
                    file: Some(file),
                }
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                if fs::create_dir_all(&dir)
                    .and_then(|_| fs::write(&file, "{}"))
                    .is_err()
                {
                    return Self::memory_only();
                }
                Self {
                    entries: BTreeMap::new(),
                    file: Some(file),
                }
            }
            Err(_) => Self {
                entries: BTreeMap::new(),
                file: Some(file),
            },
        }
    }

    pub fn memory_only() -> Self {
        Self {
            entries: BTreeMap::new(),
            file: None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts the entry, then replaces the backing file with the serialized
    /// map. The in-memory entry stays even if the write fails.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        self.entries.insert(key.to_string(), value.into());
        self.persist()
    }

    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        if let Some(file) = &self.file {
            let data = serde_json::to_string(&self.entries).map_err(io::Error::other)?;
            fs::write(file, data)?;
        }
        Ok(())
    }
}
