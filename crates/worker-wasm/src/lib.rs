//! WASM-compatible wrapper for script-to-slide rendering.
//!
//! This crate exposes the deck pipeline to JavaScript for use in
//! Cloudflare Workers.

use deck_core::{
    ComposerOptions, Deck, DeckSlide, GlyphSource, Manifest, NoGlyphs, RenderTarget,
    SlideComposer, Theme,
};
use deck_font::FontGlyphs;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result of parsing a script.
#[derive(Debug, Serialize, Deserialize)]
pub struct ParseResult {
    /// Number of slides found in the script.
    pub slide_count: usize,
    /// Slides with their classified content blocks.
    pub slides: Vec<DeckSlide>,
}

/// A single rendered document.
#[derive(Debug, Serialize, Deserialize)]
pub struct RenderedDocument {
    /// File name such as `slide-001.svg`.
    pub file_name: String,
    /// The HTML or SVG document.
    pub document: String,
}

/// Result of rendering a script.
#[derive(Debug, Serialize, Deserialize)]
pub struct RenderResult {
    /// Output format of every document.
    pub target: String,
    /// Rendered slides in deck order.
    pub slides: Vec<RenderedDocument>,
    /// Ordered listing of the rendered files.
    pub manifest: Manifest,
    /// Warning message if rendering degraded (e.g. unusable font).
    pub warning: Option<String>,
}

/// Parse a script into slides and content blocks.
///
/// # Arguments
/// * `text` - The script text
///
/// # Returns
/// A JavaScript object with the parse result.
#[wasm_bindgen]
pub fn parse_script(text: &str) -> Result<JsValue, JsValue> {
    let result = parse_script_impl(text);

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn parse_script_impl(text: &str) -> ParseResult {
    let deck = Deck::from_script(text);

    ParseResult {
        slide_count: deck.len(),
        slides: deck.slides().to_vec(),
    }
}

/// Render a script into HTML or SVG slide documents.
///
/// # Arguments
/// * `text` - The script text
/// * `target` - `"html"` or `"svg"`
/// * `theme` - Theme preset name (default: `"dark"`)
/// * `font` - Optional TrueType/OpenType bytes used to outline SVG text
///
/// # Returns
/// A JavaScript object with the render result, or throws on invalid options.
#[wasm_bindgen]
pub fn render_slides(
    text: &str,
    target: &str,
    theme: Option<String>,
    font: Option<Vec<u8>>,
) -> Result<JsValue, JsValue> {
    let result = render_slides_impl(text, target, theme.as_deref(), font.as_deref())
        .map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn render_slides_impl(
    text: &str,
    target: &str,
    theme: Option<&str>,
    font: Option<&[u8]>,
) -> Result<RenderResult, String> {
    let target: RenderTarget = target.parse().map_err(|e| format!("{}", e))?;
    let theme = Theme::by_name(theme.unwrap_or("dark")).map_err(|e| format!("{}", e))?;

    let mut warning = None;
    let font = match font.map(FontGlyphs::from_bytes) {
        Some(Ok(font)) => Some(font),
        Some(Err(e)) => {
            warning = Some(format!("{}; text rendered without outlines", e));
            None
        }
        None => None,
    };
    let glyphs: &dyn GlyphSource = match &font {
        Some(font) => font,
        None => &NoGlyphs,
    };

    let deck = Deck::from_script(text);
    let composer =
        SlideComposer::new(glyphs).with_options(ComposerOptions::new().with_theme(theme));

    let slides = deck
        .render(&composer, target)
        .into_iter()
        .map(|slide| RenderedDocument {
            file_name: slide.file_name,
            document: slide.document,
        })
        .collect();

    Ok(RenderResult {
        target: target.to_string(),
        slides,
        manifest: deck.manifest(target),
        warning,
    })
}
