//! # linkjar
//!
//! A small URL shortening service built with Axum, backed by a single JSON file.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the link store trait
//! - **Application Layer** ([`application`]) - Allocation and resolution logic
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON-file persistence
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Storage model
//!
//! The persisted state is one flat JSON object of `code -> url` pairs, loaded
//! and rewritten wholesale on every mutation. This is deliberate: the dataset
//! is assumed small enough to live in memory, and the whole-snapshot model
//! keeps the on-disk format trivial. It is a known scalability ceiling, not an
//! oversight.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional, defaults shown
//! export DATA_FILE="data/links.json"
//! export LISTEN="0.0.0.0:8002"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, LinkMapping};
    pub use crate::domain::repositories::LinkStore;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::JsonFileLinkStore;
    pub use crate::state::AppState;
}
