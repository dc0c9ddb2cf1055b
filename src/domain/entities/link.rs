//! Link entity and the persisted mapping type.

use std::collections::BTreeMap;

/// The full persisted dataset: short code to target URL.
///
/// Serializes as one flat JSON object of string-to-string pairs, with no
/// schema or version field. Keys are unique by construction; the `BTreeMap`
/// gives listings a deterministic (code-sorted) order.
pub type LinkMapping = BTreeMap<String, String>;

/// A single shortened link.
///
/// The target URL is stored verbatim. The engine does not require it to be a
/// well-formed URL; rejecting garbage is the boundary's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub target_url: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(code: String, target_url: String) -> Self {
        Self { code, target_url }
    }
}
