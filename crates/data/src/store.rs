use crate::DeckRecord;
use cards_core::Deck;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("deck {0} not found")]
    NotFound(String),
    #[error("deck {0} already exists")]
    Duplicate(String),
    #[error("invalid deck id: {0:?}")]
    InvalidId(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("serialize error: {0}")]
    Serialize(String),
    #[error("store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value.to_string())
    }
}

/// Document store keyed by deck id.
pub trait DeckStore: Send + Sync {
    fn insert(&self, record: &DeckRecord) -> Result<(), StoreError>;

    fn find(&self, id: &str) -> Result<DeckRecord, StoreError>;

    /// Replaces the cards of an existing deck. The shuffled flag is kept.
    fn update_cards(&self, id: &str, cards: &Deck) -> Result<(), StoreError>;
}
