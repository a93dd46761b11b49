use crate::{DeckRecord, DeckStore, StoreError};
use cards_core::Deck;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default)]
pub struct MemoryStore {
    decks: Mutex<HashMap<String, DeckRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.decks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DeckStore for MemoryStore {
    fn insert(&self, record: &DeckRecord) -> Result<(), StoreError> {
        let mut decks = self.decks.lock().map_err(|_| StoreError::Poisoned)?;
        if decks.contains_key(&record.id) {
            return Err(StoreError::Duplicate(record.id.clone()));
        }
        decks.insert(record.id.clone(), record.clone());
        Ok(())
    }

    fn find(&self, id: &str) -> Result<DeckRecord, StoreError> {
        let decks = self.decks.lock().map_err(|_| StoreError::Poisoned)?;
        decks
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn update_cards(&self, id: &str, cards: &Deck) -> Result<(), StoreError> {
        let mut decks = self.decks.lock().map_err(|_| StoreError::Poisoned)?;
        let record = decks
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        record.cards = cards.clone();
        Ok(())
    }
}
