//! TrueType/OpenType glyph outline source for deck vector text.
//!
//! Wraps a parsed `ttf-parser` face and serves outlines in the renderer's
//! normalized space (1000 units per em, y growing downward from the
//! baseline).

pub mod source;

pub use source::FontGlyphs;
