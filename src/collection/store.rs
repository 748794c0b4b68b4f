//! Load-all / save-all persistence for the lead collection.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::CollectionResult;
use crate::types::Lead;

/// A key-value style sink for the whole lead collection.
///
/// Implementations only need to hand back what was last saved; there is no partial update.
pub trait LeadStore: Send + Sync {
    /// Load every stored lead. An empty store yields an empty list.
    fn load_all(&self) -> CollectionResult<Vec<Lead>>;

    /// Replace the stored collection with `leads`.
    fn save_all(&self, leads: &[Lead]) -> CollectionResult<()>;
}

/// Stores the collection as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LeadStore for JsonFileStore {
    fn load_all(&self) -> CollectionResult<Vec<Lead>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn save_all(&self, leads: &[Lead]) -> CollectionResult<()> {
        let json = serde_json::to_string_pretty(leads)?;
        // Write to a sibling temp file, then rename over the target.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::debug!("saved {} leads to {}", leads.len(), self.path.display());
        Ok(())
    }
}

/// Keeps the collection in memory; useful for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryStore {
    leads: Mutex<Vec<Lead>>,
}

impl MemoryStore {
    pub fn new(leads: Vec<Lead>) -> Self {
        Self {
            leads: Mutex::new(leads),
        }
    }
}

impl LeadStore for MemoryStore {
    fn load_all(&self) -> CollectionResult<Vec<Lead>> {
        let guard = self
            .leads
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(guard.clone())
    }

    fn save_all(&self, leads: &[Lead]) -> CollectionResult<()> {
        let mut guard = self
            .leads
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = leads.to_vec();
        Ok(())
    }
}
