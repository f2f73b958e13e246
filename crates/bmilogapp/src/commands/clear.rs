use crate::error::Result;
use crate::locale::Texts;
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

use super::{history, CmdMessage, CmdResult};

/// Asks `confirm` with the clear prompt; clears everything only on a yes.
///
/// The stored collection is not read before asking, so a corrupt store can still be
/// cleared. The refresh afterwards does read it.
pub fn run<B, F>(store: &mut RecordStore<B>, texts: &Texts, confirm: F) -> Result<CmdResult>
where
    B: StorageBackend,
    F: FnOnce(&str) -> Result<bool>,
{
    let mut result = CmdResult::default();

    if !confirm(texts.clear_prompt)? {
        result.add_message(CmdMessage::info(texts.cancelled));
        return Ok(result.with_history(history::refresh(store)?));
    }

    store.clear()?;
    result.add_message(CmdMessage::success(texts.cleared));
    Ok(result.with_history(history::refresh(store)?))
}
