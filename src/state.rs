use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::JsonFileLinkStore;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<JsonFileLinkStore>>,
}
