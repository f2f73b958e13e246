use super::backend::StorageBackend;
use crate::error::{BmiError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since bmilog is single-threaded.
/// This keeps the `StorageBackend` trait on `&self` without a lock.
#[derive(Default)]
pub struct MemBackend {
    values: RefCell<HashMap<String, Vec<u8>>>,
    simulate_write_error: RefCell<bool>,
    writes: RefCell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Put raw bytes in place, bypassing serialization (e.g. to plant corrupt data).
    pub fn put_raw(&self, key: &str, value: &[u8]) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_vec());
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl StorageBackend for MemBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(BmiError::Store("Simulated write error".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_vec());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}
