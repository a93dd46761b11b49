use crate::{DeckRecord, DeckStore, StoreError};
use cards_core::Deck;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Stores each deck as `<dir>/<id>.json`.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            write_lock: Mutex::new(()),
        })
    }

    fn record_path(&self, id: &str) -> Result<PathBuf, StoreError> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
        if !valid {
            return Err(StoreError::InvalidId(id.to_string()));
        }
        Ok(self.dir.join(format!("{id}.json")))
    }

    fn read(&self, id: &str) -> Result<DeckRecord, StoreError> {
        let path = self.record_path(id)?;
        let body = match fs::read_to_string(&path) {
            Ok(body) => body,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(id.to_string()))
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&body)?)
    }

    fn write(&self, path: &Path, record: &DeckRecord) -> Result<(), StoreError> {
        let body = serde_json::to_vec_pretty(record)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, body)?;
        fs::rename(&tmp, path)?;
        debug!(id = %record.id, remaining = record.remaining(), "deck written");
        Ok(())
    }
}

impl DeckStore for FileStore {
    fn insert(&self, record: &DeckRecord) -> Result<(), StoreError> {
        let path = self.record_path(&record.id)?;
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;
        if path.exists() {
            return Err(StoreError::Duplicate(record.id.clone()));
        }
        self.write(&path, record)
    }

    fn find(&self, id: &str) -> Result<DeckRecord, StoreError> {
        self.read(id)
    }

    fn update_cards(&self, id: &str, cards: &Deck) -> Result<(), StoreError> {
        let path = self.record_path(id)?;
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut record = self.read(id)?;
        record.cards = cards.clone();
        self.write(&path, &record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn insert_find_update_roundtrip() {
        let dir = unique_temp_dir();
        let store = FileStore::open(&dir).expect("open");
        let cards = Deck::from_codes(&["AS", "QS", "2H"]).expect("deck");
        let record = DeckRecord::new("deck-1", cards.clone(), false);
        store.insert(&record).expect("insert");
        assert_eq!(store.find("deck-1").expect("find"), record);

        let (_, remaining) = cards.draw(1).expect("draw");
        store.update_cards("deck-1", &remaining).expect("update");
        let loaded = store.find("deck-1").expect("find");
        assert_eq!(loaded.cards, remaining);
        assert!(!loaded.shuffled);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn duplicate_and_missing() {
        let dir = unique_temp_dir();
        let store = FileStore::open(&dir).expect("open");
        let record = DeckRecord::new("deck-2", Deck::standard52(), true);
        store.insert(&record).expect("insert");
        assert!(matches!(
            store.insert(&record),
            Err(StoreError::Duplicate(_))
        ));
        assert!(store.find("deck-3").unwrap_err().is_not_found());
        assert!(store
            .update_cards("deck-3", &Deck::default())
            .unwrap_err()
            .is_not_found());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn rejects_path_like_ids() {
        let dir = unique_temp_dir();
        let store = FileStore::open(&dir).expect("open");
        for id in ["", "../escape", "a/b", "a.json"] {
            assert!(matches!(store.find(id), Err(StoreError::InvalidId(_))));
        }
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn reopen_sees_existing_decks() {
        let dir = unique_temp_dir();
        let record = DeckRecord::new("deck-4", Deck::standard52(), false);
        FileStore::open(&dir)
            .expect("open")
            .insert(&record)
            .expect("insert");
        let reopened = FileStore::open(&dir).expect("reopen");
        assert_eq!(reopened.find("deck-4").expect("find").remaining(), 52);
        let _ = fs::remove_dir_all(dir);
    }

    fn unique_temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "cards_file_store_test_{}_{}",
            std::process::id(),
            nanos
        ))
    }
}
