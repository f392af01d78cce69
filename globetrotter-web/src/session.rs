//! User session store: player identity plus a cached profile.
//!
//! The session value is created once at the app boundary and handed to route
//! pages explicitly; nothing below the pages touches local storage directly.

use crate::{api, storage};
use globetrotter_game::UserProfile;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Readiness of the session store.
///
/// `Degraded` still carries a usable placeholder profile, so downstream
/// screens treat it as ready-with-a-warning rather than blocking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    Ready,
    Degraded,
}

#[derive(Clone, PartialEq)]
pub struct SessionState {
    pub profile: UseStateHandle<Option<UserProfile>>,
    pub status: UseStateHandle<SessionStatus>,
    pub warning: UseStateHandle<Option<String>>,
}

#[hook]
pub fn use_session_state() -> SessionState {
    SessionState {
        profile: use_state(|| None::<UserProfile>),
        status: use_state(|| SessionStatus::Loading),
        warning: use_state(|| None::<String>),
    }
}

impl SessionState {
    /// Whether hydration has finished, in either direction.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        *self.status != SessionStatus::Loading
    }
}

/// Hydrate identity from the persisted username key on mount. Without a
/// stored username the store settles immediately and the home page shows the
/// login form.
#[hook]
pub fn use_session_bootstrap(state: &SessionState) {
    let status = state.status.clone();
    let fetch_user = build_fetch_user(state);
    use_effect_with((), move |()| {
        match storage::load_username() {
            Some(username) => fetch_user.emit(username),
            None => status.set(SessionStatus::Ready),
        }
        || {}
    });
}

/// Look up a profile by username. On failure the store falls back to a
/// zeroed placeholder and surfaces a warning, so the UI never blocks on
/// backend unavailability.
pub fn build_fetch_user(state: &SessionState) -> Callback<String> {
    let profile_handle = state.profile.clone();
    let status_handle = state.status.clone();
    let warning_handle = state.warning.clone();
    Callback::from(move |username: String| {
        if username.trim().is_empty() {
            return;
        }
        let profile_handle = profile_handle.clone();
        let status_handle = status_handle.clone();
        let warning_handle = warning_handle.clone();
        status_handle.set(SessionStatus::Loading);
        warning_handle.set(None);
        spawn_local(async move {
            match api::get_user(&username).await {
                Ok(profile) => {
                    profile_handle.set(Some(profile));
                    status_handle.set(SessionStatus::Ready);
                }
                Err(err) => {
                    log::warn!("Profile lookup for {username} failed, using placeholder: {err}");
                    profile_handle.set(Some(UserProfile::placeholder(&username)));
                    warning_handle.set(Some(
                        "Could not load your profile. Playing with a fresh scorecard.".to_string(),
                    ));
                    status_handle.set(SessionStatus::Degraded);
                }
            }
        });
    })
}

/// Two-phase score write: optimistic local add first, then a background sync
/// the UI never waits on. Sync failures are logged and dropped: no retry, no
/// reconciliation. The next full profile fetch converges.
pub fn build_update_score(state: &SessionState) -> Callback<i32> {
    let profile_handle = state.profile.clone();
    Callback::from(move |points: i32| {
        let Some(mut profile) = (*profile_handle).clone() else {
            return;
        };
        profile.score += points;
        let username = profile.username.clone();
        profile_handle.set(Some(profile));
        spawn_local(async move {
            if let Err(err) = api::update_score(&username, points).await {
                log::warn!("Background score sync for {username} failed: {err}");
            }
        });
    })
}

/// Clear the persisted identity and the in-memory profile synchronously.
pub fn build_logout(state: &SessionState) -> Callback<()> {
    let profile_handle = state.profile.clone();
    let status_handle = state.status.clone();
    let warning_handle = state.warning.clone();
    Callback::from(move |()| {
        storage::clear_username();
        profile_handle.set(None);
        warning_handle.set(None);
        status_handle.set(SessionStatus::Ready);
    })
}
