use crate::api::{self, ApiError, ApiResult, AppState, ErrorResponse};
use serde::Serialize;
use tiny_http::Method;
use tracing::error;

pub const JSON: &str = "application/json";
pub const TEXT: &str = "text/plain; charset=utf-8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Reply {
    fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: TEXT,
            body: body.as_bytes().to_vec(),
        }
    }

    fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self {
                status,
                content_type: JSON,
                body,
            },
            Err(err) => {
                error!(error = %err, "failed to encode response");
                Self::text(500, api::MSG_INTERNAL)
            }
        }
    }

    fn error(err: &ApiError) -> Self {
        Self::json(
            err.status,
            &ErrorResponse {
                message: err.message.clone(),
            },
        )
    }

    fn from_result<T: Serialize>(status: u16, result: ApiResult<T>) -> Self {
        match result {
            Ok(value) => Self::json(status, &value),
            Err(err) => Self::error(&err),
        }
    }
}

/// Routes one request. `url` may carry a query string, which is ignored.
pub fn dispatch(state: &AppState, method: &Method, url: &str, body: &[u8]) -> Reply {
    let path = url.split('?').next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
    match (method, segments.as_slice()) {
        (Method::Get, ["status"]) => Reply::text(200, "UP!\n"),
        (Method::Post, ["deck"]) => Reply::from_result(201, api::create_deck(state, body)),
        (Method::Get, ["deck", id]) => Reply::from_result(200, api::get_deck(state, id)),
        (Method::Patch, ["deck", id]) => Reply::from_result(200, api::draw_cards(state, id, body)),
        (_, ["status"] | ["deck"] | ["deck", _]) => {
            Reply::error(&ApiError::new(405, "Method Not Allowed"))
        }
        _ => Reply::error(&ApiError::not_found("Not Found")),
    }
}
