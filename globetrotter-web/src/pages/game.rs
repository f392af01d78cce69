use crate::components::game_board::GameBoard;
use crate::components::page_header::PageHeader;
use crate::router::Route;
use crate::session::{SessionState, build_logout, build_update_score};
use globetrotter_game::Score;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub session: SessionState,
}

/// The active game screen. Redirects to the landing page when no identity is
/// present; otherwise seeds the board from the cached profile.
#[function_component(GamePage)]
pub fn game_page(props: &Props) -> Html {
    let navigator = use_navigator();

    {
        let settled = props.session.is_settled();
        let missing_identity = props.session.profile.is_none();
        let navigator = navigator.clone();
        use_effect_with((settled, missing_identity), move |(settled, missing)| {
            if *settled
                && *missing
                && let Some(navigator) = navigator
            {
                navigator.push(&Route::Home);
            }
            || {}
        });
    }

    if !props.session.is_settled() {
        return html! {
            <main class="page game-page">
                <div class="panel board-loading" role="status">
                    <span class="spinner" aria-hidden="true"></span>
                    <p>{ "Loading your game..." }</p>
                </div>
            </main>
        };
    }

    let Some(profile) = (*props.session.profile).clone() else {
        return Html::default(); // The effect above redirects home.
    };

    let on_home = {
        let navigator = navigator.clone();
        Callback::from(move |()| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };
    let on_logout = {
        let logout = build_logout(&props.session);
        Callback::from(move |()| {
            logout.emit(());
            // The redirect effect takes it from here.
        })
    };
    let on_points = build_update_score(&props.session);

    html! {
        <main class="page game-page">
            <PageHeader
                title="Globetrotter"
                username={AttrValue::from(profile.username.clone())}
                on_home={on_home}
                on_logout={Some(on_logout)}
            />
            if let Some(warning) = props.session.warning.as_ref() {
                <p class="session-warning" role="alert">{ warning.clone() }</p>
            }
            <GameBoard
                username={AttrValue::from(profile.username.clone())}
                initial_score={Score::from_profile(&profile)}
                on_points={on_points}
            />
        </main>
    }
}
