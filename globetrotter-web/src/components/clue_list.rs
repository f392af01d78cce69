use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Ordered clues; the order is meaningful and preserved.
    pub clues: Vec<String>,
}

#[function_component(ClueList)]
pub fn clue_list(props: &Props) -> Html {
    html! {
        <section class="panel clue-panel" aria-label="Clues">
            <h2 class="clue-heading">{ "Clues:" }</h2>
            <ol class="clue-list">
                { for props.clues.iter().enumerate().map(|(index, clue)| html! {
                    <li class="clue-item">
                        <span class="clue-index" aria-hidden="true">{ index + 1 }</span>
                        <span class="clue-text">{ clue.clone() }</span>
                    </li>
                }) }
            </ol>
        </section>
    }
}
