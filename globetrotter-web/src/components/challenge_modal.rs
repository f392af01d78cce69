use crate::{api, dom, share_image};
use globetrotter_game::{Challenge, share_message, share_url};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub username: AttrValue,
    /// The session total being challenged, shown on the card. The backend
    /// records its own authoritative score when minting the code.
    pub score_total: i32,
    pub on_close: Callback<()>,
}

#[function_component(ChallengeModal)]
pub fn challenge_modal(props: &Props) -> Html {
    let challenge = use_state(|| None::<Challenge>);
    let busy = use_state(|| true);
    let error = use_state(|| None::<String>);
    let image_url = use_state(|| None::<String>);
    let copied = use_state(|| false);

    let create = {
        let challenge = challenge.clone();
        let busy = busy.clone();
        let error = error.clone();
        let username = props.username.to_string();
        Callback::from(move |()| {
            let challenge = challenge.clone();
            let busy = busy.clone();
            let error = error.clone();
            let username = username.clone();
            busy.set(true);
            error.set(None);
            spawn_local(async move {
                match api::create_challenge(&username).await {
                    Ok(created) => challenge.set(Some(created)),
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    {
        let create = create.clone();
        use_effect_with((), move |()| {
            create.emit(());
            || {}
        });
    }

    // Redraw the share card whenever a (new) code lands.
    {
        let image_url = image_url.clone();
        let username = props.username.to_string();
        let score = props.score_total;
        let code = challenge
            .as_ref()
            .map(|challenge| challenge.challenge_code.clone());
        use_effect_with(code, move |code| {
            if let Some(code) = code {
                match share_image::challenge_card_png(&username, score, code) {
                    Ok(url) => image_url.set(Some(url)),
                    Err(err) => {
                        log::warn!("Share image generation failed: {}", dom::js_error_message(&err));
                    }
                }
            }
            || {}
        });
    }

    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_retry = {
        let create = create.clone();
        Callback::from(move |_| create.emit(()))
    };

    let body = if *busy {
        html! {
            <div class="modal-busy" role="status">
                <span class="spinner" aria-hidden="true"></span>
                <p>{ "Creating your challenge..." }</p>
            </div>
        }
    } else if let Some(message) = error.as_ref() {
        html! {
            <div class="modal-error">
                <h3>{ "Unable to Create Challenge" }</h3>
                <p>{ message.clone() }</p>
                <button type="button" class="retry-btn" onclick={on_retry}>{ "Try Again" }</button>
            </div>
        }
    } else if let Some(challenge) = challenge.as_ref() {
        render_share_body(props, challenge, &image_url, &copied)
    } else {
        Html::default()
    };

    html! {
        <div class="modal-backdrop" role="presentation" onclick={on_close.clone()}>
            <div
                class="modal challenge-modal"
                role="dialog"
                aria-modal="true"
                aria-label="Challenge a Friend"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <div class="modal-header">
                    <h2>{ "Challenge a Friend" }</h2>
                    <button type="button" class="modal-close" aria-label="Close" onclick={on_close}>
                        { "\u{2715}" }
                    </button>
                </div>
                <div class="modal-body">{ body }</div>
            </div>
        </div>
    }
}

fn render_share_body(
    props: &Props,
    challenge: &Challenge,
    image_url: &UseStateHandle<Option<String>>,
    copied: &UseStateHandle<bool>,
) -> Html {
    let link = share_url(&dom::location_origin(), &challenge.challenge_code);
    let message = share_message(&props.username, props.score_total, &link);

    let on_copy = {
        let link = link.clone();
        let copied = copied.clone();
        Callback::from(move |_| {
            dom::clipboard_write(&link);
            copied.set(true);
        })
    };
    let on_whatsapp = {
        let message = message.clone();
        Callback::from(move |_| {
            let encoded = String::from(js_sys::encode_uri_component(&message));
            dom::open_in_new_tab(&whatsapp_share_url(&encoded, dom::is_mobile_user_agent()));
        })
    };

    html! {
        <>
            <p class="share-pitch">
                { "Share this challenge and see if your friends can beat your score of " }
                <strong>{ format!("{} points", props.score_total) }</strong>
                { "!" }
            </p>
            <div class="share-card">
                <h3>{ "Globetrotter Challenge" }</h3>
                <p>
                    <strong>{ props.username.clone() }</strong>
                    { format!(" is challenging you to beat their score of {} points!", props.score_total) }
                </p>
                <div class="share-card-code">
                    <span class="share-card-code-label">{ "Challenge Code:" }</span>
                    <span class="share-card-code-value">{ challenge.challenge_code.clone() }</span>
                </div>
            </div>
            <div class="share-link-row">
                <input type="text" class="share-link-input" readonly={true} value={link.clone()} />
                <button type="button" class="copy-btn" aria-label="Copy link" onclick={on_copy}>
                    { if **copied { "Copied!" } else { "Copy Link" } }
                </button>
            </div>
            <div class="share-actions">
                <button type="button" class="whatsapp-btn" onclick={on_whatsapp}>{ "WhatsApp" }</button>
                if let Some(url) = image_url.as_ref() {
                    <a
                        class="download-btn"
                        href={url.clone()}
                        download={share_image::download_file_name(&challenge.challenge_code)}
                    >
                        { "Download Image" }
                    </a>
                }
            </div>
        </>
    }
}

fn whatsapp_share_url(encoded_text: &str, mobile: bool) -> String {
    if mobile {
        format!("whatsapp://send?text={encoded_text}")
    } else {
        format!("https://web.whatsapp.com/send?text={encoded_text}")
    }
}

#[cfg(test)]
mod tests {
    use super::whatsapp_share_url;

    #[test]
    fn whatsapp_url_picks_app_scheme_on_mobile() {
        assert!(whatsapp_share_url("hi", true).starts_with("whatsapp://send?text="));
        assert!(whatsapp_share_url("hi", false).starts_with("https://web.whatsapp.com/send?text="));
    }
}
