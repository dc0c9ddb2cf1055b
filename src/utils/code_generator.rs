//! Short code generation and validation utilities.
//!
//! Provides cryptographically secure random code generation and validation
//! for custom user-provided codes.

use crate::error::AppError;
use serde_json::json;

/// Length of random bytes before hex encoding.
const CODE_LENGTH_BYTES: usize = 7;

/// Maximum length of a custom short code.
const MAX_CUSTOM_CODE_LENGTH: usize = 64;

/// Reserved codes that cannot be used as short links.
///
/// These codes are reserved for system endpoints to prevent routing conflicts.
const RESERVED_CODES: &[&str] = &["api", "health", "shorten", "links", "static"];

/// Generates a cryptographically secure random short code.
///
/// Uses `getrandom` for entropy and renders the result as fixed-width
/// lowercase hexadecimal, producing a 14-character code. Codes are
/// unpredictable: they are derived neither from the target URL nor from a
/// counter, so they cannot be enumerated.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 14);
/// assert!(code.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    hex::encode(buffer)
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, hyphens, underscores
/// - Cannot be a reserved system code
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any validation rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(AppError::bad_request(
            "Custom code must be 1-64 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Custom code can only contain letters, digits, hyphens, and underscores",
            json!({ "code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
