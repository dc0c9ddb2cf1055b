//! DTOs for the link listing endpoint.

use serde::Serialize;

/// Response containing every stored link.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub total: usize,
    pub links: Vec<LinkItem>,
}

/// A single link in the listing.
#[derive(Debug, Serialize)]
pub struct LinkItem {
    pub code: String,
    pub target_url: String,
}
