//! The one durable piece of client state: the active username.
//!
//! Reads happen at route-page mount, writes only on explicit user action
//! (login, logout), so no concurrent-write protection is needed.

use gloo_storage::{LocalStorage, Storage};

const USERNAME_KEY: &str = "globetrotter_username";

/// Username persisted by a previous visit, if any.
#[must_use]
pub fn load_username() -> Option<String> {
    let stored: Option<String> = LocalStorage::get(USERNAME_KEY).ok();
    stored.filter(|name| !name.trim().is_empty())
}

/// Persist the active username. Storage failures are logged and dropped; the
/// session continues in memory.
pub fn store_username(username: &str) {
    if let Err(err) = LocalStorage::set(USERNAME_KEY, username) {
        log::warn!("Failed to persist username: {err}");
    }
}

/// Forget the persisted identity.
pub fn clear_username() {
    LocalStorage::delete(USERNAME_KEY);
}
