use globetrotter_game::Score;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub score: Score,
}

#[function_component(ScoreDisplay)]
pub fn score_display(props: &Props) -> Html {
    html! {
        <section class="panel score-panel" aria-label="Session score" role="region">
            { score_chip("Score", props.score.total.to_string(), "score") }
            { score_chip("Correct", props.score.correct.to_string(), "correct") }
            { score_chip("Incorrect", props.score.incorrect.to_string(), "incorrect") }
        </section>
    }
}

fn score_chip(label: &str, value: String, kind: &'static str) -> Html {
    html! {
        <div class={classes!("score-chip", format!("score-chip-{kind}"))}>
            <span class="score-chip-label">{ label.to_string() }</span>
            <span class="score-chip-value">{ value }</span>
        </div>
    }
}
