//! Short code allocation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{Link, LinkMapping};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use serde_json::json;
use tokio::sync::Mutex;

/// Service for allocating short codes and resolving them back to target URLs.
///
/// Owns an explicit [`LinkStore`] instance; there is no ambient or static
/// store, so tests can run against isolated, disposable stores.
pub struct LinkService<S: LinkStore> {
    store: Arc<S>,
    /// Serializes the load-check-insert-save sequence across concurrent
    /// creates. Reads take no lock; save atomicity is the store's concern.
    write_lock: Mutex<()>,
}

impl<S: LinkStore> LinkService<S> {
    /// Creates a new link service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Creates a short link, allocating a code if none is supplied.
    ///
    /// # Arguments
    ///
    /// - `target_url` - The URL the code will resolve to. Stored verbatim;
    ///   only emptiness is rejected here.
    /// - `custom_code` - Optional caller-supplied code (validated if provided)
    ///
    /// # Code Generation
    ///
    /// When no custom code is given, generates a cryptographically random
    /// 14-character hex code, retrying up to 10 times against the loaded
    /// mapping before failing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or the custom
    /// code is malformed.
    ///
    /// Returns [`AppError::Conflict`] if the custom code is already in use.
    /// An existing mapping is never overwritten.
    ///
    /// Returns [`AppError::Storage`] if the store cannot be read or written.
    pub async fn create_link(
        &self,
        target_url: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        let target_url = target_url.trim().to_string();
        if target_url.is_empty() {
            return Err(AppError::bad_request(
                "Target URL must not be empty",
                json!({}),
            ));
        }

        if let Some(ref custom) = custom_code {
            validate_custom_code(custom)?;
        }

        // Everything from load to save runs under the write lock, so two
        // concurrent creates cannot both claim the same code.
        let _guard = self.write_lock.lock().await;

        let mut mapping = self.store.load().await?;

        let code = match custom_code {
            Some(custom) => {
                if mapping.contains_key(&custom) {
                    return Err(AppError::conflict(
                        "Custom code already exists",
                        json!({ "code": custom }),
                    ));
                }
                custom
            }
            None => Self::generate_unique_code(&mapping)?,
        };

        mapping.insert(code.clone(), target_url.clone());
        self.store.save(&mapping).await?;

        Ok(Link::new(code, target_url))
    }

    /// Resolves a short code to its link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code has no mapping.
    /// Returns [`AppError::Storage`] if the store cannot be read.
    pub async fn resolve_link(&self, code: &str) -> Result<Link, AppError> {
        let mapping = self.store.load().await?;

        mapping
            .get(code)
            .map(|url| Link::new(code.to_string(), url.clone()))
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Lists all links in code order.
    ///
    /// Read-only enumeration for the display layer; never a write path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the store cannot be read.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        let mapping = self.store.load().await?;

        Ok(mapping
            .into_iter()
            .map(|(code, url)| Link::new(code, url))
            .collect())
    }

    /// Generates a code absent from the given mapping, with bounded retry.
    ///
    /// Collisions on 7 random bytes are vanishingly rare; the retry loop is
    /// in-memory and costs no extra store round-trips.
    fn generate_unique_code(mapping: &LinkMapping) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();

            if !mapping.contains_key(&code) {
                return Ok(code);
            }
        }

        Err(AppError::conflict(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}
