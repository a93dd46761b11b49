use cards_core::{CardView, Deck, DeckError, DeckOptions, RngState};
use cards_data::{DeckRecord, DeckStore, StoreError};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

pub const MSG_MALFORMED: &str = "Request body is malformed";
pub const MSG_NO_WANTED_CARDS: &str = "List of wanted cards must be provided for custom deck";
pub const MSG_BAD_DRAW_COUNT: &str = "Number of cards must be specified and be greater than 0";
pub const MSG_DECK_NOT_FOUND: &str = "Deck with this id does not exist";
pub const MSG_INTERNAL: &str = "Internal Server Error";

/// Shared state behind every request.
pub struct AppState {
    store: Arc<dyn DeckStore>,
    rng: Mutex<RngState>,
    allow_empty_custom: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn DeckStore>, rng: RngState, allow_empty_custom: bool) -> Self {
        Self {
            store,
            rng: Mutex::new(rng),
            allow_empty_custom,
        }
    }

    pub fn store(&self) -> &dyn DeckStore {
        self.store.as_ref()
    }

    /// Seed the shuffle source started from, for reproducing a run.
    pub fn seed(&self) -> Option<u64> {
        self.rng.lock().ok().map(|rng| rng.seed())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeckRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub shuffle: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_deck: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub wanted_cards: Vec<String>,
}

/// Explicit `null` reads as the field's zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<CreateDeckRequest> for DeckOptions {
    fn from(value: CreateDeckRequest) -> Self {
        Self {
            shuffle: value.shuffle,
            custom: value.custom_deck,
            cards: value.wanted_cards,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateDeckResponse {
    pub deck_id: String,
    pub shuffled: bool,
    pub remaining: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetDeckResponse {
    pub deck_id: String,
    pub shuffled: bool,
    pub remaining: usize,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawCardsRequest {
    #[serde(default)]
    pub number_of_cards: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawCardsResponse {
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message)
    }

    pub fn internal() -> Self {
        Self::new(500, MSG_INTERNAL)
    }

    fn from_store(err: StoreError, action: &str) -> Self {
        if err.is_not_found() {
            return Self::not_found(MSG_DECK_NOT_FOUND);
        }
        warn!(error = %err, "store failed while {action}");
        Self::internal()
    }
}

impl From<DeckError> for ApiError {
    fn from(value: DeckError) -> Self {
        Self::bad_request(value.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

fn parse_body<T: serde::de::DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(|err| {
        warn!(error = %err, "error parsing request body");
        ApiError::bad_request(MSG_MALFORMED)
    })
}

pub fn create_deck(state: &AppState, body: &[u8]) -> ApiResult<CreateDeckResponse> {
    let request: CreateDeckRequest = parse_body(body)?;
    if request.custom_deck && request.wanted_cards.is_empty() && !state.allow_empty_custom {
        return Err(ApiError::bad_request(MSG_NO_WANTED_CARDS));
    }
    let options = DeckOptions::from(request);
    let cards = {
        let mut rng = state.rng.lock().map_err(|_| ApiError::internal())?;
        Deck::new(&options, &mut rng)?
    };
    let record = DeckRecord::new(Uuid::new_v4().to_string(), cards, options.shuffle);
    state
        .store
        .insert(&record)
        .map_err(|err| ApiError::from_store(err, "inserting deck"))?;
    Ok(CreateDeckResponse {
        remaining: record.remaining(),
        shuffled: record.shuffled,
        deck_id: record.id,
    })
}

pub fn get_deck(state: &AppState, id: &str) -> ApiResult<GetDeckResponse> {
    let record = find_deck(state, id)?;
    Ok(GetDeckResponse {
        remaining: record.remaining(),
        cards: record.cards.to_display_form(),
        shuffled: record.shuffled,
        deck_id: record.id,
    })
}

pub fn draw_cards(state: &AppState, id: &str, body: &[u8]) -> ApiResult<DrawCardsResponse> {
    let request: DrawCardsRequest = parse_body(body)?;
    let count = match request.number_of_cards {
        Some(count) if count > 0 => usize::try_from(count)
            .map_err(|_| ApiError::bad_request(MSG_BAD_DRAW_COUNT))?,
        _ => return Err(ApiError::bad_request(MSG_BAD_DRAW_COUNT)),
    };
    let record = find_deck(state, id)?;
    let (drawn, remaining) = record.cards.draw(count)?;
    state
        .store
        .update_cards(id, &remaining)
        .map_err(|err| ApiError::from_store(err, "updating deck"))?;
    Ok(DrawCardsResponse {
        cards: drawn.to_display_form(),
    })
}

fn find_deck(state: &AppState, id: &str) -> ApiResult<DeckRecord> {
    match state.store.find(id) {
        Ok(record) => Ok(record),
        // Ids the store cannot even address cannot exist.
        Err(StoreError::InvalidId(_)) => Err(ApiError::not_found(MSG_DECK_NOT_FOUND)),
        Err(err) => Err(ApiError::from_store(err, "searching for deck")),
    }
}
