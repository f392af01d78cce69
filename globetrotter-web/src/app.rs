//! Application shell: session bootstrap plus route dispatch.
//!
//! The session store is created once here and handed to route pages as an
//! explicit value; pages own their screen-local state and effects.

#[cfg(target_arch = "wasm32")]
use crate::pages::challenge::ChallengePage;
#[cfg(target_arch = "wasm32")]
use crate::pages::game::GamePage;
#[cfg(target_arch = "wasm32")]
use crate::pages::home::HomePage;
#[cfg(target_arch = "wasm32")]
use crate::pages::not_found::NotFoundPage;
#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use crate::session::{use_session_bootstrap, use_session_state};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let session = use_session_state();
    use_session_bootstrap(&session);

    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    let go_home = Callback::from(move |()| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    match route {
        Route::Home => html! { <HomePage session={session} /> },
        Route::Game => html! { <GamePage session={session} /> },
        Route::Challenge { code } => html! {
            <ChallengePage session={session} code={AttrValue::from(code)} />
        },
        Route::NotFound => html! { <NotFoundPage on_go_home={go_home} /> },
    }
}
