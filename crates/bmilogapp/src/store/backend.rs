use crate::error::Result;

/// Abstract interface for raw key-value storage.
///
/// This trait handles the "how" of persistence (filesystem vs memory),
/// while [`super::RecordStore`] handles the "what" (the record collection).
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if nothing has been stored yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Overwrite the value stored under `key`.
    /// MUST be all-or-nothing: a failed write leaves the previous value readable.
    fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Run `f` while holding exclusive access to `key`.
    ///
    /// Read-modify-write sequences go through here so two processes sharing one
    /// store cannot lose each other's writes. Backends that are never shared
    /// can rely on the default, which just runs `f`.
    fn with_lock<T, F>(&self, _key: &str, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        f()
    }
}
