//! Deck domain logic. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod deck;
pub mod error;
pub mod rng;

pub use cards::*;
pub use deck::*;
pub use error::*;
pub use rng::*;
