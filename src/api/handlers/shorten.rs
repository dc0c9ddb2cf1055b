//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "custom_code": "my-link"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the allocated code:
///
/// ```json
/// {
///   "code": "7f9c2e1a3b44d0",
///   "target_url": "https://example.com/some/long/path"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request` - empty URL or malformed custom code
/// - `409 Conflict` - custom code already in use (the existing link is kept)
/// - `500 Internal Server Error` - link store unreadable/unwritable
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_link(payload.url, payload.custom_code)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            code: link.code,
            target_url: link.target_url,
        }),
    ))
}
