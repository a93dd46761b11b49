//! Deck persistence: records and the stores that keep them.

mod file;
mod memory;
pub mod schema;
pub mod store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use schema::*;
pub use store::*;
