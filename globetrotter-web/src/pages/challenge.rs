use crate::components::game_board::GameBoard;
use crate::components::login_form::LoginForm;
use crate::components::page_header::PageHeader;
use crate::router::Route;
use crate::session::{SessionState, build_fetch_user, build_update_score};
use crate::{api, storage};
use globetrotter_game::{Challenge, is_challenge_code};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub session: SessionState,
    pub code: AttrValue,
}

/// Landing screen for a shared challenge link. Fetches the challenge by its
/// code, shows the challenger banner, and hands over to the ordinary game
/// board in challenge mode. A visitor with no local identity is asked for a
/// username first, since a challenge carries no target username and nothing
/// can be seeded on their behalf.
#[function_component(ChallengePage)]
pub fn challenge_page(props: &Props) -> Html {
    let challenge = use_state(|| None::<Challenge>);
    let challenge_error = use_state(|| None::<String>);
    let loading_challenge = use_state(|| true);
    let join_busy = use_state(|| false);
    let join_error = use_state(|| None::<String>);
    let navigator = use_navigator();
    let fetch_user = build_fetch_user(&props.session);

    {
        let challenge = challenge.clone();
        let challenge_error = challenge_error.clone();
        let loading_challenge = loading_challenge.clone();
        use_effect_with(props.code.clone(), move |code| {
            let code = code.trim().to_string();
            if is_challenge_code(&code) {
                spawn_local(async move {
                    match api::get_challenge(&code).await {
                        Ok(found) => challenge.set(Some(found)),
                        Err(err) => {
                            log::warn!("Challenge lookup failed: {err}");
                            challenge_error.set(Some(
                                "Could not load challenge. It may have expired or been removed."
                                    .to_string(),
                            ));
                        }
                    }
                    loading_challenge.set(false);
                });
            } else {
                challenge_error.set(Some("That challenge link looks invalid.".to_string()));
                loading_challenge.set(false);
            }
            || {}
        });
    }

    let on_home = {
        let navigator = navigator.clone();
        Callback::from(move |()| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    // Same auth flow as the home page, minus the navigation: the visitor
    // stays here and plays the challenge.
    let on_join = {
        let join_busy = join_busy.clone();
        let join_error = join_error.clone();
        Callback::from(move |username: String| {
            let join_busy = join_busy.clone();
            let join_error = join_error.clone();
            let fetch_user = fetch_user.clone();
            join_busy.set(true);
            join_error.set(None);
            spawn_local(async move {
                match api::auth_user(&username).await {
                    Ok(()) => {
                        storage::store_username(&username);
                        fetch_user.emit(username);
                    }
                    Err(err) => join_error.set(Some(err.to_string())),
                }
                join_busy.set(false);
            });
        })
    };

    if *loading_challenge {
        return html! {
            <main class="page challenge-page">
                <div class="panel board-loading" role="status">
                    <span class="spinner" aria-hidden="true"></span>
                    <p>{ "Loading challenge..." }</p>
                </div>
            </main>
        };
    }

    if let Some(message) = challenge_error.as_ref() {
        return html! {
            <main class="page challenge-page">
                <div class="panel board-error">
                    <h1>{ "Challenge Error" }</h1>
                    <p>{ message.clone() }</p>
                    <button type="button" class="retry-btn" onclick={Callback::from({
                        let on_home = on_home.clone();
                        move |_| on_home.emit(())
                    })}>
                        { "Return Home" }
                    </button>
                </div>
            </main>
        };
    }

    let Some(found) = (*challenge).clone() else {
        return Html::default();
    };

    let player = (*props.session.profile).clone();

    html! {
        <main class="page challenge-page">
            <PageHeader
                title="Globetrotter Challenge"
                username={player.as_ref().map(|profile| AttrValue::from(profile.username.clone()))}
                on_home={on_home}
            />
            <section class="panel challenge-banner" aria-label="Challenge details">
                <h2>{ format!("Challenge from {}", found.challenger_username) }</h2>
                <p>
                    { format!(
                        "{} scored {} points and challenged you to beat their score!",
                        found.challenger_username, found.challenger_score
                    ) }
                </p>
            </section>
            {
                if let Some(profile) = player {
                    let on_points = build_update_score(&props.session);
                    html! {
                        <GameBoard
                            username={AttrValue::from(profile.username)}
                            challenge_mode={true}
                            on_points={on_points}
                        />
                    }
                } else if props.session.is_settled() {
                    html! {
                        <div class="panel join-panel">
                            <h2>{ "Ready to take the challenge?" }</h2>
                            <LoginForm
                                error={join_error.as_ref().map(|message| AttrValue::from(message.clone()))}
                                busy={*join_busy}
                                submit_label="Accept Challenge"
                                on_submit={on_join}
                            />
                        </div>
                    }
                } else {
                    html! {
                        <div class="panel board-loading" role="status">
                            <span class="spinner" aria-hidden="true"></span>
                            <p>{ "Loading your profile..." }</p>
                        </div>
                    }
                }
            }
        </main>
    }
}
