//! Client-side rendering of the shareable challenge card to a raster image.
//!
//! Cosmetic: the card is drawn onto an offscreen canvas and exported as a PNG
//! data URL for the download link. No session state is involved.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const CARD_WIDTH: u32 = 600;
const CARD_HEIGHT: u32 = 340;

/// Draw the challenge card and return it as a PNG data URL.
///
/// # Errors
/// Returns an error when the canvas or its 2d context cannot be created, or
/// when the browser refuses to serialize the bitmap.
pub fn challenge_card_png(username: &str, score: i32, code: &str) -> Result<String, JsValue> {
    let document = crate::dom::document();
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(CARD_WIDTH);
    canvas.set_height(CARD_HEIGHT);

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let width = f64::from(CARD_WIDTH);
    let height = f64::from(CARD_HEIGHT);

    ctx.set_fill_style_str("#3b82f6");
    ctx.fill_rect(0.0, 0.0, width, height);
    ctx.set_fill_style_str("#7c3aed");
    ctx.fill_rect(0.0, height - 48.0, width, 48.0);

    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("bold 30px sans-serif");
    ctx.fill_text("Globetrotter Challenge", 36.0, 72.0)?;

    ctx.set_font("20px sans-serif");
    ctx.fill_text(
        &format!("{username} is challenging you to beat"),
        36.0,
        130.0,
    )?;
    ctx.set_font("bold 26px sans-serif");
    ctx.set_fill_style_str("#fde047");
    ctx.fill_text(&format!("{score} points"), 36.0, 168.0)?;

    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("16px sans-serif");
    ctx.fill_text("Challenge code:", 36.0, 228.0)?;
    ctx.set_font("bold 24px monospace");
    ctx.fill_text(code, 36.0, 262.0)?;

    canvas.to_data_url_with_type("image/png")
}

/// Suggested file name for the downloaded card.
#[must_use]
pub fn download_file_name(code: &str) -> String {
    format!("globetrotter-challenge-{code}.png")
}

#[cfg(test)]
mod tests {
    use super::download_file_name;

    #[test]
    fn download_name_embeds_the_code() {
        assert_eq!(
            download_file_name("ab12cd34"),
            "globetrotter-challenge-ab12cd34.png"
        );
    }
}
