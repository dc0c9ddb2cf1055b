//! Handler for the link listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::links::{LinkItem, LinkListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all stored links.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// Read-only enumeration for display purposes, returned in code order.
///
/// # Response
///
/// ```json
/// {
///   "total": 2,
///   "links": [
///     { "code": "7f9c2e1a3b44d0", "target_url": "https://other.site" },
///     { "code": "abc123", "target_url": "https://example.com/page" }
///   ]
/// }
/// ```
pub async fn links_handler(
    State(state): State<AppState>,
) -> Result<Json<LinkListResponse>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(LinkListResponse {
        total: links.len(),
        links: links
            .into_iter()
            .map(|link| LinkItem {
                code: link.code,
                target_url: link.target_url,
            })
            .collect(),
    }))
}
