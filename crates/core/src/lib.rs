//! Core document model and rendering pipeline for turning plain-text
//! scripts into HTML or SVG slide decks.

pub mod classify;
pub mod compose;
pub mod deck;
pub mod error;
pub mod glyph;
pub mod manifest;
pub mod markers;
pub mod script;
pub mod theme;
pub mod types;
pub mod vector_text;

pub use classify::classify;
pub use compose::{ComposerOptions, SlideComposer};
pub use deck::{Deck, DeckSlide};
pub use error::{Error, Result};
pub use glyph::{Glyph, GlyphMap, GlyphSource, NoGlyphs, PathCommand};
pub use manifest::{Manifest, ManifestEntry};
pub use script::{parse, ScriptParser};
pub use theme::Theme;
pub use types::{slide_file_name, ImageRef, MarkupBlock, RenderTarget, RenderedSlide, Slide};
pub use vector_text::{render_text, Align, TextOptions, VectorText};
