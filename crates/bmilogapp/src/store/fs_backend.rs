use super::backend::StorageBackend;
use crate::error::{BmiError, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, SystemTime};
use tracing::{debug, warn};
use uuid::Uuid;

const LOCK_ATTEMPTS: u32 = 50;
const LOCK_RETRY_DELAY: Duration = Duration::from_millis(20);
// A lock older than this was left behind by a process that died mid-write.
const STALE_LOCK_AGE: Duration = Duration::from_secs(30);

/// File-per-key storage: the value for `key` lives in `<root>/<key>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn value_path(&self, key: &str) -> Result<PathBuf> {
        check_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn lock_path(&self, key: &str) -> Result<PathBuf> {
        check_key(key)?;
        Ok(self.root.join(format!("{}.lock", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }

    fn acquire(&self, key: &str) -> Result<LockGuard> {
        self.ensure_dir()?;
        let path = self.lock_path(key)?;

        for attempt in 0..LOCK_ATTEMPTS {
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(_) => return Ok(LockGuard { path }),
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    if is_stale(&path) && break_stale_lock(&path) {
                        continue;
                    }
                    if attempt == 0 {
                        debug!("Waiting for lock {}", path.display());
                    }
                    thread::sleep(LOCK_RETRY_DELAY);
                }
                Err(e) => return Err(BmiError::Io(e)),
            }
        }

        Err(BmiError::Store(format!(
            "Store is busy: {} is held by another bmilog process",
            path.display()
        )))
    }
}

struct LockGuard {
    path: PathBuf,
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

fn is_stale(path: &Path) -> bool {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .and_then(|modified| SystemTime::now().duration_since(modified).ok())
        .map(|age| age > STALE_LOCK_AGE)
        .unwrap_or(false)
}

/// Removes the lock at `path` if it is still stale once moved aside.
///
/// The lock is renamed to a unique name first, so two waiters that both saw it as
/// stale cannot both delete it. If what got moved is a fresh lock that another waiter
/// created in the meantime, it is linked back into place and `false` is returned.
fn break_stale_lock(path: &Path) -> bool {
    let aside = path.with_extension(format!("lock.{}.stale", Uuid::new_v4()));
    if fs::rename(path, &aside).is_err() {
        // Someone else moved or released it first
        return false;
    }

    if is_stale(&aside) {
        warn!("Removed stale lock {}", path.display());
        let _ = fs::remove_file(&aside);
        true
    } else {
        debug!("Lock {} was replaced before it could be broken", path.display());
        let _ = fs::hard_link(&aside, path);
        let _ = fs::remove_file(&aside);
        false
    }
}

fn check_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(BmiError::Store(format!("Invalid storage key '{}'", key)))
    }
}

impl StorageBackend for FsBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.value_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path)?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(Some(bytes))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        self.ensure_dir()?;
        let target = self.value_path(key)?;

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, value)?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(BmiError::Io(e));
        }
        debug!("Wrote {} bytes to {}", value.len(), target.display());
        Ok(())
    }

    fn with_lock<T, F>(&self, key: &str, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let _guard = self.acquire(key)?;
        f()
    }
}
