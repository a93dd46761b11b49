use cards_core::Deck;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckRecord {
    pub id: String,
    pub cards: Deck,
    #[serde(default)]
    pub shuffled: bool,
}

impl DeckRecord {
    pub fn new(id: impl Into<String>, cards: Deck, shuffled: bool) -> Self {
        Self {
            id: id.into(),
            cards,
            shuffled,
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
