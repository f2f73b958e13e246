use crate::error::Result;
use crate::locale::Texts;
use crate::store::backend::StorageBackend;
use crate::store::RecordStore;

use super::{history, CmdMessage, CmdResult};

pub fn run<B: StorageBackend, I: AsRef<str>>(
    store: &mut RecordStore<B>,
    texts: &Texts,
    ids: &[I],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let id = id.as_ref();
        if store.remove(id)? {
            result.add_message(CmdMessage::success(format!("{} {}", texts.deleted, id)));
        } else {
            result.add_message(CmdMessage::info(format!("{} {}", texts.not_found, id)));
        }
    }

    Ok(result.with_history(history::refresh(store)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::locale::{texts, Language};
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn deletes_by_id_and_refreshes() {
        let mut store = RecordStore::new(MemBackend::new());
        let a = store.append(70.0, 175.0, 22.86, "Normal").unwrap();
        let b = store.append(80.0, 175.0, 26.12, "Overweight").unwrap();

        let result = run(&mut store, texts(Language::En), &[a.id.as_str()]).unwrap();
        let history = result.history.unwrap();
        assert_eq!(history.table, vec![b]);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, format!("Record deleted: {}", a.id));
    }

    #[test]
    fn unknown_id_is_reported_but_not_an_error() {
        let mut store = RecordStore::new(MemBackend::new());
        store.append(70.0, 175.0, 22.86, "Normal").unwrap();

        let result = run(&mut store, texts(Language::En), &["nope"]).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(result.history.unwrap().len(), 1);
    }

    #[test]
    fn deletes_several_ids() {
        let mut store = RecordStore::new(MemBackend::new());
        let a = store.append(70.0, 175.0, 22.86, "Normal").unwrap();
        let b = store.append(71.0, 175.0, 23.18, "Normal").unwrap();
        let c = store.append(72.0, 175.0, 23.51, "Normal").unwrap();

        let ids = vec![a.id.clone(), c.id.clone()];
        let result = run(&mut store, texts(Language::En), &ids).unwrap();
        assert_eq!(result.history.unwrap().table, vec![b]);
        assert_eq!(result.messages.len(), 2);
    }

    #[test]
    fn messages_follow_language() {
        let mut store = RecordStore::new(MemBackend::new());
        let a = store.append(70.0, 175.0, 22.86, "ปกติ").unwrap();

        let th = texts(Language::Th);
        let result = run(&mut store, th, &[a.id.as_str(), "nope"]).unwrap();
        assert_eq!(result.messages[0].content, format!("ลบรายการแล้ว: {}", a.id));
        assert_eq!(result.messages[1].content, "ไม่พบรายการรหัส nope");
    }
}
