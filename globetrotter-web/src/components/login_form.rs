use yew::prelude::*;

/// Username entry shared by the home screen and the challenge landing page.
#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub initial_username: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub busy: bool,
    pub submit_label: AttrValue,
    pub on_submit: Callback<String>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &Props) -> Html {
    let username = use_state(|| {
        props
            .initial_username
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    });
    let empty_warning = use_state(|| false);

    let oninput = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                username.set(input.value());
            }
        })
    };

    let onsubmit = {
        let username = username.clone();
        let empty_warning = empty_warning.clone();
        let cb = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name = username.trim().to_string();
            if name.is_empty() {
                empty_warning.set(true);
                return;
            }
            empty_warning.set(false);
            cb.emit(name);
        })
    };

    html! {
        <form class="login-form" {onsubmit}>
            <label for="username" class="login-label">
                { "Enter your username to begin" }
            </label>
            <input
                id="username"
                type="text"
                class="login-input"
                placeholder="YourUsername"
                maxlength="20"
                value={(*username).clone()}
                {oninput}
            />
            if *empty_warning {
                <p class="login-error" role="alert">{ "Please enter a username to continue" }</p>
            }
            if let Some(error) = props.error.as_ref() {
                <p class="login-error" role="alert">{ error.clone() }</p>
            }
            <button type="submit" class="login-submit" disabled={props.busy}>
                { if props.busy { AttrValue::from("Loading...") } else { props.submit_label.clone() } }
            </button>
        </form>
    }
}
