use crate::DeckError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Spades,
    Diamonds,
    Clubs,
    Hearts,
}

impl Suit {
    /// Canonical deck order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Diamonds, Suit::Clubs, Suit::Hearts];

    pub fn name(self) -> &'static str {
        match self {
            Self::Spades => "SPADES",
            Self::Diamonds => "DIAMONDS",
            Self::Clubs => "CLUBS",
            Self::Hearts => "HEARTS",
        }
    }

    pub fn from_code(ch: char) -> Option<Self> {
        match ch {
            'S' => Some(Self::Spades),
            'D' => Some(Self::Diamonds),
            'C' => Some(Self::Clubs),
            'H' => Some(Self::Hearts),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Ace => "ACE",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "JACK",
            Self::Queen => "QUEEN",
            Self::King => "KING",
        }
    }

    /// Single-character rank lookup. Ten has no one-character form, so it is
    /// never produced here.
    pub fn from_code(ch: char) -> Option<Self> {
        match ch {
            'A' => Some(Self::Ace),
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

/// Display form of a card as it goes out on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardView {
    pub value: String,
    pub suit: String,
    pub code: String,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn from_code(code: &str) -> Result<Self, DeckError> {
        let (rank, suit) = decode(code)?;
        Ok(Self { rank, suit })
    }

    pub fn code(&self) -> String {
        let mut code = String::with_capacity(2);
        code.extend(self.rank.name().chars().next());
        code.extend(self.suit.name().chars().next());
        code
    }

    pub fn view(&self) -> CardView {
        encode(self)
    }
}

/// Decode a two-character card code such as `AS` or `7D`.
pub fn decode(code: &str) -> Result<(Rank, Suit), DeckError> {
    let invalid = || DeckError::InvalidCardCode {
        code: code.to_string(),
    };
    let mut chars = code.chars();
    let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid());
    };
    let rank = Rank::from_code(rank_ch).ok_or_else(invalid)?;
    let suit = Suit::from_code(suit_ch).ok_or_else(invalid)?;
    Ok((rank, suit))
}

pub fn encode(card: &Card) -> CardView {
    CardView {
        value: card.rank.name().to_string(),
        suit: card.suit.name().to_string(),
        code: card.code(),
    }
}
