#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use linkjar::application::services::LinkService;
use linkjar::infrastructure::persistence::JsonFileLinkStore;
use linkjar::state::AppState;
use tempfile::TempDir;

/// Builds an `AppState` over a store in a fresh temp directory.
///
/// The `TempDir` must be kept alive for the duration of the test; dropping it
/// deletes the backing file.
pub fn create_test_state() -> (AppState, PathBuf, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("links.json");

    let state = state_for_path(&path);

    (state, path, dir)
}

/// Builds an `AppState` over a store at the given path.
pub fn state_for_path(path: &Path) -> AppState {
    let store = Arc::new(JsonFileLinkStore::new(path));
    let link_service = Arc::new(LinkService::new(store));

    AppState { link_service }
}

/// Seeds the data file directly, bypassing the service.
pub fn seed_links(path: &Path, pairs: &[(&str, &str)]) {
    let mapping: std::collections::BTreeMap<&str, &str> = pairs.iter().copied().collect();
    std::fs::write(path, serde_json::to_vec(&mapping).unwrap()).unwrap();
}
