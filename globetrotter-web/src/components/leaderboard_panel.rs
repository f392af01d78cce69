use crate::api;
use globetrotter_game::LeaderboardEntry;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Opportunistic top-scores panel for the home screen. The leaderboard sits
/// outside the core play flow, so a failed or empty fetch simply hides the
/// panel instead of surfacing an error.
#[function_component(LeaderboardPanel)]
pub fn leaderboard_panel() -> Html {
    let entries = use_state(Vec::<LeaderboardEntry>::new);

    {
        let entries = entries.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match api::leaderboard().await {
                    Ok(list) => entries.set(list),
                    Err(err) => log::debug!("Leaderboard unavailable: {err}"),
                }
            });
            || {}
        });
    }

    if entries.is_empty() {
        return Html::default();
    }

    html! {
        <section class="panel leaderboard-panel" aria-label="Top Globetrotters">
            <h2 class="leaderboard-heading">{ "Top Globetrotters" }</h2>
            <ol class="leaderboard-list">
                { for entries.iter().take(5).map(|entry| html! {
                    <li class="leaderboard-row">
                        <span class="leaderboard-rank">{ entry.rank }</span>
                        <span class="leaderboard-name">{ entry.username.clone() }</span>
                        <span class="leaderboard-score">{ entry.total_score }</span>
                    </li>
                }) }
            </ol>
        </section>
    }
}
