use crate::components::answer_options::AnswerOptions;
use crate::components::challenge_modal::ChallengeModal;
use crate::components::clue_list::ClueList;
use crate::components::result_feedback::ResultFeedback;
use crate::components::score_display::ScoreDisplay;
use crate::game_session::{
    build_fetch_destination, build_handle_answer, build_reset_game, use_game_session,
};
use globetrotter_game::{DegradedMode, Score};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub username: AttrValue,
    /// Server-provided baseline for a resumed session.
    #[prop_or_default]
    pub initial_score: Score,
    /// Display-only flag for challenge-landing play; scoring and logic are
    /// identical to normal play.
    #[prop_or_default]
    pub challenge_mode: bool,
    #[prop_or_default]
    pub degraded_mode: DegradedMode,
    /// Fired with the earned points whenever a verdict lands, so the session
    /// store can run its background profile sync.
    #[prop_or_default]
    pub on_points: Callback<i32>,
}

#[function_component(GameBoard)]
pub fn game_board(props: &Props) -> Html {
    let session = use_game_session(props.initial_score);
    let show_challenge_modal = use_state(|| false);

    let fetch_destination = build_fetch_destination(&session, &props.username, props.degraded_mode);
    let handle_answer = build_handle_answer(&session, &props.username, props.on_points.clone());
    let reset_game = build_reset_game(&session);

    {
        let fetch = fetch_destination.clone();
        use_effect_with((), move |()| {
            fetch.emit(());
            || {}
        });
    }

    let round = (*session.round).clone();

    if *session.loading && round.destination().is_none() {
        return html! {
            <div class="panel board-loading" role="status">
                <span class="spinner" aria-hidden="true"></span>
                <p>{ "Loading your next destination..." }</p>
            </div>
        };
    }

    let Some(destination) = round.destination().cloned() else {
        // Degraded-mode `Surface`, or nothing fetched yet: explicit retry.
        let on_retry = {
            let fetch = fetch_destination.clone();
            Callback::from(move |_| fetch.emit(()))
        };
        let detail = session
            .fetch_error
            .as_ref()
            .cloned()
            .unwrap_or_else(|| "We couldn't find any destinations to show.".to_string());
        return html! {
            <div class="panel board-error">
                <h2>{ "Oops! No Destination Found" }</h2>
                <p>{ detail }</p>
                <button type="button" class="retry-btn" onclick={on_retry}>{ "Try Again" }</button>
            </div>
        };
    };

    let next_question = {
        let reset = reset_game;
        let fetch = fetch_destination;
        Callback::from(move |()| {
            reset.emit(());
            fetch.emit(());
        })
    };
    let open_modal = {
        let show = show_challenge_modal.clone();
        Callback::from(move |_| show.set(true))
    };
    let close_modal = {
        let show = show_challenge_modal.clone();
        Callback::from(move |()| show.set(false))
    };

    html! {
        <div class="game-board">
            <ScoreDisplay score={round.score()} />
            <div class="panel question-panel">
                <h1 class="question-heading">{ "Where in the world is this?" }</h1>
                <ClueList clues={destination.clues.clone()} />
                if let Some(result) = round.result().cloned() {
                    <ResultFeedback {result} on_next={next_question} />
                } else {
                    <AnswerOptions
                        options={destination.options.clone()}
                        selected={round.user_answer().map(|answer| AttrValue::from(answer.to_string()))}
                        disabled={round.user_answer().is_some()}
                        on_select={handle_answer}
                    />
                }
            </div>
            if !props.challenge_mode {
                <div class="board-footer">
                    <button type="button" class="challenge-btn" onclick={open_modal}>
                        { "Challenge a Friend" }
                    </button>
                </div>
            }
            if *show_challenge_modal {
                <ChallengeModal
                    username={props.username.clone()}
                    score_total={round.score().total}
                    on_close={close_modal}
                />
            }
        </div>
    }
}
