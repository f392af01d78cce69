use yew::prelude::*;

/// Not-found page to show when routing fails to match a known view.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFoundPage)]
pub fn not_found_page(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <main class="page not-found">
            <h1>{ "Lost in transit" }</h1>
            <p>{ "This page is not on any of our maps." }</p>
            <button type="button" onclick={go_home}>
                { "Back to the departure lounge" }
            </button>
        </main>
    }
}
