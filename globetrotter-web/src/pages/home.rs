use crate::components::leaderboard_panel::LeaderboardPanel;
use crate::components::login_form::LoginForm;
use crate::router::Route;
use crate::session::{SessionState, build_fetch_user};
use crate::{api, storage};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub session: SessionState,
}

/// Landing screen: username entry plus the how-to-play card. A returning
/// visitor's username is prefilled from the hydrated session.
#[function_component(HomePage)]
pub fn home_page(props: &Props) -> Html {
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);
    let navigator = use_navigator();
    let fetch_user = build_fetch_user(&props.session);

    let on_start = {
        let busy = busy.clone();
        let error = error.clone();
        Callback::from(move |username: String| {
            let busy = busy.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            let fetch_user = fetch_user.clone();
            busy.set(true);
            error.set(None);
            spawn_local(async move {
                match api::auth_user(&username).await {
                    Ok(()) => {
                        storage::store_username(&username);
                        fetch_user.emit(username);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Game);
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    let prefill = props
        .session
        .profile
        .as_ref()
        .map(|profile| AttrValue::from(profile.username.clone()));

    html! {
        <main class="page home-page">
            <div class="hero-card">
                <span class="hero-globe" aria-hidden="true">{ "\u{1f310}" }</span>
                <h1 class="hero-title">{ "Globetrotter" }</h1>
                <p class="hero-tagline">
                    { "Test your geography knowledge with cryptic clues about famous destinations!" }
                </p>
                <LoginForm
                    initial_username={prefill}
                    error={error.as_ref().map(|message| AttrValue::from(message.clone()))}
                    busy={*busy}
                    submit_label="Start Game"
                    on_submit={on_start}
                />
                <section class="how-to-play" aria-label="How to play">
                    <h2>{ "How to Play" }</h2>
                    <ul>
                        <li>{ "Read the cryptic clues about a destination" }</li>
                        <li>{ "Choose the correct location from the options" }</li>
                        <li>{ "Score points for correct answers" }</li>
                        <li>{ "Challenge friends to beat your score" }</li>
                    </ul>
                </section>
            </div>
            <LeaderboardPanel />
        </main>
    }
}
