//! DTOs for link shortening endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for custom code validation.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The target URL. Stored verbatim; only emptiness is rejected.
    #[validate(length(min = 1, message = "Target URL must not be empty"))]
    pub url: String,

    /// Optional custom short code (validated for length and characters).
    #[validate(length(min = 1, max = 64))]
    #[validate(regex(path = "*CUSTOM_CODE_REGEX"))]
    pub custom_code: Option<String>,
}

/// Response for a successfully created link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub target_url: String,
}
