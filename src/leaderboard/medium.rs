use crate::error::{WordsealError, WsResult};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing::debug;

/// Whole-blob key/value storage backing the leaderboard.
pub trait DurableMedium: Send + Sync {
    fn read_all(&self, key: &str) -> WsResult<Option<Vec<u8>>>;
    fn write_all(&self, key: &str, bytes: &[u8]) -> WsResult<()>;
}

fn check_key(key: &str) -> WsResult<()> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
        && !key.starts_with('.');
    if ok {
        Ok(())
    } else {
        Err(WordsealError::Persistence(format!("Invalid storage key '{}'", key)))
    }
}

/// One JSON file per key inside `root`. The directory appears on first write.
#[derive(Debug, Clone)]
pub struct FileMedium {
    root: PathBuf,
}

impl FileMedium {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl DurableMedium for FileMedium {
    fn read_all(&self, key: &str) -> WsResult<Option<Vec<u8>>> {
        check_key(key)?;
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(WordsealError::Persistence(format!(
                "Failed to read '{}': {}",
                key, e
            ))),
        }
    }

    fn write_all(&self, key: &str, bytes: &[u8]) -> WsResult<()> {
        check_key(key)?;
        let persist = |e: std::io::Error| {
            WordsealError::Persistence(format!("Failed to write '{}': {}", key, e))
        };

        fs::create_dir_all(&self.root).map_err(persist)?;

        // Write aside then rename so a crash never leaves a half-written blob.
        let target = self.path_for(key);
        let tmp = self.root.join(format!("{}.json.tmp", key));
        fs::write(&tmp, bytes).map_err(persist)?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(persist(e));
        }

        debug!(path = ?target, bytes = bytes.len(), "Blob persisted");
        Ok(())
    }
}

/// In-process medium. Can be switched off to simulate an unavailable backend.
#[derive(Debug)]
pub struct MemoryMedium {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
    available: AtomicBool,
}

impl Default for MemoryMedium {
    fn default() -> Self {
        Self {
            blobs: Mutex::new(HashMap::new()),
            available: AtomicBool::new(true),
        }
    }
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Stores raw bytes directly, bypassing the leaderboard encoding.
    pub fn put_raw(&self, key: &str, bytes: &[u8]) {
        let mut guard = self.blobs.lock().unwrap_or_else(|e| e.into_inner());
        guard.insert(key.to_string(), bytes.to_vec());
    }

    fn ensure_available(&self) -> WsResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(WordsealError::Persistence("Storage is unavailable".into()))
        }
    }
}

impl DurableMedium for MemoryMedium {
    fn read_all(&self, key: &str) -> WsResult<Option<Vec<u8>>> {
        self.ensure_available()?;
        let guard = self
            .blobs
            .lock()
            .map_err(|e| WordsealError::Persistence(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    fn write_all(&self, key: &str, bytes: &[u8]) -> WsResult<()> {
        self.ensure_available()?;
        let mut guard = self
            .blobs
            .lock()
            .map_err(|e| WordsealError::Persistence(e.to_string()))?;
        guard.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
