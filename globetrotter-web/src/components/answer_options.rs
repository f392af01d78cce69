use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub options: Vec<String>,
    /// Set once an answer has been admitted; the grid locks and the chosen
    /// option stays highlighted while the verdict is in flight.
    #[prop_or_default]
    pub selected: Option<AttrValue>,
    pub disabled: bool,
    pub on_select: Callback<String>,
}

#[function_component(AnswerOptions)]
pub fn answer_options(props: &Props) -> Html {
    html! {
        <div class="answer-options">
            <h2 class="options-heading">{ "Select your answer:" }</h2>
            <div class="options-grid" role="group" aria-label="Answer options">
                { for props.options.iter().enumerate().map(|(index, option)| {
                    let is_selected = props
                        .selected
                        .as_ref()
                        .is_some_and(|selected| selected.as_str() == option.as_str());
                    let onclick = {
                        let cb = props.on_select.clone();
                        let label = option.clone();
                        Callback::from(move |_| cb.emit(label.clone()))
                    };
                    html! {
                        <button
                            type="button"
                            class={classes!("option-btn", is_selected.then_some("option-selected"))}
                            disabled={props.disabled}
                            aria-pressed={if is_selected { "true" } else { "false" }}
                            {onclick}
                        >
                            <span class="option-letter" aria-hidden="true">{ option_letter(index) }</span>
                            <span class="option-label">{ option.clone() }</span>
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

fn option_letter(index: usize) -> char {
    char::from(b'A' + (index % 26) as u8)
}
