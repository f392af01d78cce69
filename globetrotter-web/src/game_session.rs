//! Game session controller: the async shell around [`Round`].
//!
//! The round state machine lives in `globetrotter-game`; this module wires it
//! to the backend while keeping the guarantees the UI relies on:
//! `fetch_destination` resolves before answers become clickable (UI gating),
//! `handle_answer` admits at most one submission per question (the round's
//! guard, latched synchronously before the request is spawned), and a result
//! landing after navigation is silently discarded.

use crate::api;
use globetrotter_game::{DegradedMode, Round, Score, fallback_destination};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone)]
pub struct GameSession {
    pub round: UseStateHandle<Round>,
    pub loading: UseStateHandle<bool>,
    /// Set only under [`DegradedMode::Surface`] when a fetch fails.
    pub fetch_error: UseStateHandle<Option<String>>,
}

#[hook]
pub fn use_game_session(initial_score: Score) -> GameSession {
    GameSession {
        round: use_state(move || Round::with_score(initial_score)),
        loading: use_state(|| false),
        fetch_error: use_state(|| None::<String>),
    }
}

/// Request the next question for the player. On failure the degraded-mode
/// policy decides: substitute the fixed offline fixture (default) or surface
/// the error for an explicit retry.
pub fn build_fetch_destination(
    session: &GameSession,
    username: &str,
    degraded_mode: DegradedMode,
) -> Callback<()> {
    let round_handle = session.round.clone();
    let loading_handle = session.loading.clone();
    let error_handle = session.fetch_error.clone();
    let username = username.to_string();
    Callback::from(move |()| {
        let round_handle = round_handle.clone();
        let loading_handle = loading_handle.clone();
        let error_handle = error_handle.clone();
        let username = username.clone();
        loading_handle.set(true);
        error_handle.set(None);
        spawn_local(async move {
            let mut round = (*round_handle).clone();
            match api::random_destination(&username).await {
                Ok(destination) => {
                    round.begin(destination);
                    round_handle.set(round);
                }
                Err(err) => match degraded_mode {
                    DegradedMode::UseFixture => {
                        log::warn!("Destination fetch failed, serving offline fixture: {err}");
                        round.begin(fallback_destination());
                        round_handle.set(round);
                    }
                    DegradedMode::Surface => {
                        error_handle.set(Some(err.to_string()));
                    }
                },
            }
            loading_handle.set(false);
        });
    })
}

/// Admit and submit one answer. The round's guard is latched synchronously,
/// so re-entrant clicks while the request is in flight are no-ops. On
/// submission failure the question stays answered-but-resultless; the error
/// is logged only.
///
/// `on_points` fires with the earned points once a scoring verdict lands,
/// letting the session store run its optimistic profile sync.
pub fn build_handle_answer(
    session: &GameSession,
    username: &str,
    on_points: Callback<i32>,
) -> Callback<String> {
    let round_handle = session.round.clone();
    let username = username.to_string();
    Callback::from(move |label: String| {
        let mut round = (*round_handle).clone();
        let Some(answer) = round.select(&label) else {
            return;
        };
        let Some(destination_id) = round
            .destination()
            .map(|destination| destination.destination_id.clone())
        else {
            return;
        };
        round_handle.set(round.clone());

        let round_handle = round_handle.clone();
        let username = username.clone();
        let on_points = on_points.clone();
        spawn_local(async move {
            match api::submit_answer(&username, &destination_id, &answer).await {
                Ok(outcome) => {
                    let points = outcome.points_earned;
                    round.resolve(outcome);
                    round_handle.set(round);
                    if points != 0 {
                        on_points.emit(points);
                    }
                }
                Err(err) => {
                    log::error!("Answer submission failed: {err}");
                }
            }
        });
    })
}

/// Clear selection and verdict for the next question. The score accumulator
/// is untouched.
pub fn build_reset_game(session: &GameSession) -> Callback<()> {
    let round_handle = session.round.clone();
    Callback::from(move |()| {
        let mut round = (*round_handle).clone();
        round.reset();
        round_handle.set(round);
    })
}
