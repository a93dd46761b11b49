use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("Card code {code} is invalid")]
    InvalidCardCode { code: String },
    #[error("Requested number of cards is greater than the cards remaining in the deck")]
    DrawSizeExceeded { requested: usize, remaining: usize },
}
