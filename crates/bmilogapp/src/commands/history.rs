use crate::error::Result;
use crate::model::History;
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

use super::CmdResult;

/// Loads the collection and builds both orderings.
pub fn refresh<B: StorageBackend>(store: &RecordStore<B>) -> Result<History> {
    Ok(History::from_records(store.load_all()?))
}

pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_history(refresh(store)?))
}
