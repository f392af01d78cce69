use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    #[prop_or_default]
    pub username: Option<AttrValue>,
    pub on_home: Callback<()>,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(PageHeader)]
pub fn page_header(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <header class="page-header" role="banner">
            <div class="brand">
                <span class="brand-globe" aria-hidden="true">{ "\u{1f310}" }</span>
                <h1 class="brand-title">{ props.title.clone() }</h1>
            </div>
            <div class="header-actions">
                if let Some(username) = props.username.as_ref() {
                    <span class="username-pill">{ username.clone() }</span>
                }
                if let Some(on_logout) = props.on_logout.clone() {
                    <button
                        type="button"
                        class="header-btn"
                        onclick={Callback::from(move |_| on_logout.emit(()))}
                    >
                        { "Sign out" }
                    </button>
                }
                <button type="button" class="header-btn" aria-label="Home" onclick={go_home}>
                    { "Home" }
                </button>
            </div>
        </header>
    }
}
