//! Store trait for durable link mapping access.

use crate::domain::entities::LinkMapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Durable storage for the full link mapping.
///
/// This is a whole-snapshot store: `load` returns the entire mapping and
/// `save` rewrites it wholesale. Adequate while the dataset fits comfortably
/// in memory; a larger deployment would need an incremental key-value store.
///
/// The store itself is not responsible for create/check/save atomicity. The
/// allocator serializes writers; the store only guarantees that a completed
/// `save` is observed all-or-nothing by concurrent `load`s.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonFileLinkStore`] - JSON file on disk
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Returns the current full mapping.
    ///
    /// If no persisted mapping exists yet, initializes an empty one as a
    /// side effect and returns it. Repeated first-run calls are idempotent:
    /// later calls see the same empty store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the medium is unreadable or the
    /// persisted content cannot be decoded.
    async fn load(&self) -> Result<LinkMapping, AppError>;

    /// Persists the full mapping, replacing any prior state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the medium is unwritable.
    async fn save(&self, mapping: &LinkMapping) -> Result<(), AppError>;
}
