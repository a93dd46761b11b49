use crate::{Card, CardView, DeckError, Rank, RngState, Suit};
use serde::{Deserialize, Serialize};

/// Ordered cards; index 0 is the top of the deck.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Card>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckOptions {
    #[serde(default)]
    pub shuffle: bool,
    #[serde(default)]
    pub custom: bool,
    /// Card codes for a custom deck; ignored unless `custom` is set.
    #[serde(default)]
    pub cards: Vec<String>,
}

impl Deck {
    pub fn standard52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Builds a deck from card codes in the given order. Duplicates are kept.
    pub fn from_codes<S: AsRef<str>>(codes: &[S]) -> Result<Self, DeckError> {
        let cards = codes
            .iter()
            .map(|code| Card::from_code(code.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cards })
    }

    pub fn new(options: &DeckOptions, rng: &mut RngState) -> Result<Self, DeckError> {
        let mut deck = if options.custom {
            Self::from_codes(&options.cards)?
        } else {
            Self::standard52()
        };
        if options.shuffle {
            deck.shuffle(rng);
        }
        Ok(deck)
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.cards);
    }

    /// Splits off the top `count` cards. Returns `(drawn, remaining)`; the
    /// deck itself is left as it was.
    pub fn draw(&self, count: usize) -> Result<(Deck, Deck), DeckError> {
        if count > self.cards.len() {
            return Err(DeckError::DrawSizeExceeded {
                requested: count,
                remaining: self.cards.len(),
            });
        }
        let (drawn, remaining) = self.cards.split_at(count);
        Ok((Deck::from(drawn.to_vec()), Deck::from(remaining.to_vec())))
    }

    pub fn to_display_form(&self) -> Vec<CardView> {
        self.cards.iter().map(Card::view).collect()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
