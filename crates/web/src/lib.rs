//! HTTP surface for the deck service.

pub mod api;
pub mod config;
pub mod router;
pub mod server;

pub use api::AppState;
pub use config::{ServerConfig, StoreKind};
