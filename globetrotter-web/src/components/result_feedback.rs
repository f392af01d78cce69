use globetrotter_game::AnswerOutcome;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub result: AnswerOutcome,
    pub on_next: Callback<()>,
}

#[function_component(ResultFeedback)]
pub fn result_feedback(props: &Props) -> Html {
    let on_next = {
        let cb = props.on_next.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let verdict_class = if props.result.correct {
        "result-panel result-correct"
    } else {
        "result-panel result-incorrect"
    };

    html! {
        <div class={verdict_class} role="status">
            <h3 class="result-headline">{ headline(props.result.correct) }</h3>
            if !props.result.correct {
                <p class="result-reveal">
                    { "The correct answer is " }
                    <strong>{ props.result.correct_answer.clone() }</strong>
                </p>
            }
            if !props.result.fun_fact.is_empty() {
                <div class="fun-fact">
                    <h4 class="fun-fact-heading">{ "Fun fact" }</h4>
                    <p>{ props.result.fun_fact.clone() }</p>
                </div>
            }
            if props.result.points_earned > 0 {
                <p class="points-earned">{ format!("+{} points", props.result.points_earned) }</p>
            }
            <button type="button" class="next-btn" onclick={on_next}>
                { "Next Destination" }
            </button>
        </div>
    }
}

const fn headline(correct: bool) -> &'static str {
    if correct { "Correct!" } else { "Not quite!" }
}

#[cfg(test)]
mod tests {
    use super::headline;

    #[test]
    fn headline_matches_verdict() {
        assert_eq!(headline(true), "Correct!");
        assert_eq!(headline(false), "Not quite!");
    }
}
