//! Glyph outline data consumed by the vector text renderer.
//!
//! Outlines are expressed in a normalized space of [`UNITS_PER_EM`] units per
//! em, with y growing downward from the baseline (SVG orientation). Sources
//! backed by real font files rescale and flip their native coordinates into
//! this space.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Units per em assumed by the renderer.
pub const UNITS_PER_EM: f64 = 1000.0;

/// One outline drawing command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    /// Quadratic Bezier: control point, end point.
    QuadTo(f64, f64, f64, f64),
    /// Cubic Bezier: two control points, end point.
    CurveTo(f64, f64, f64, f64, f64, f64),
    Close,
}

impl PathCommand {
    /// SVG path letter for this command.
    pub fn letter(&self) -> char {
        match self {
            Self::MoveTo(..) => 'M',
            Self::LineTo(..) => 'L',
            Self::QuadTo(..) => 'Q',
            Self::CurveTo(..) => 'C',
            Self::Close => 'Z',
        }
    }

    /// Coordinate pairs carried by this command, in order.
    pub fn points(&self) -> Vec<(f64, f64)> {
        match *self {
            Self::MoveTo(x, y) | Self::LineTo(x, y) => vec![(x, y)],
            Self::QuadTo(x1, y1, x, y) => vec![(x1, y1), (x, y)],
            Self::CurveTo(x1, y1, x2, y2, x, y) => vec![(x1, y1), (x2, y2), (x, y)],
            Self::Close => Vec::new(),
        }
    }
}

/// Outline and advance width for a single character.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    /// Outline commands, relative to the glyph origin on the baseline.
    /// Empty for blank glyphs such as the space.
    pub outline: Vec<PathCommand>,

    /// Horizontal distance to the next glyph's origin.
    pub advance_width: f64,
}

impl Glyph {
    pub fn new(outline: Vec<PathCommand>, advance_width: f64) -> Self {
        Self {
            outline,
            advance_width,
        }
    }

    /// A glyph with no outline that only advances the pen.
    pub fn blank(advance_width: f64) -> Self {
        Self::new(Vec::new(), advance_width)
    }
}

/// Provider of glyph outlines.
///
/// Implementations must be safe to share between threads: slides are
/// composed in parallel against one source.
pub trait GlyphSource: Send + Sync {
    /// Look up the glyph for a character, or `None` if it cannot be resolved.
    fn lookup(&self, ch: char) -> Option<Glyph>;
}

/// A source with no font data; every lookup fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGlyphs;

impl GlyphSource for NoGlyphs {
    fn lookup(&self, _ch: char) -> Option<Glyph> {
        None
    }
}

/// An in-memory glyph table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlyphMap {
    glyphs: BTreeMap<char, Glyph>,
}

impl GlyphMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the glyph for a character.
    pub fn insert(&mut self, ch: char, glyph: Glyph) {
        self.glyphs.insert(ch, glyph);
    }

    /// Builder-style variant of [`GlyphMap::insert`].
    pub fn with_glyph(mut self, ch: char, glyph: Glyph) -> Self {
        self.insert(ch, glyph);
        self
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl GlyphSource for GlyphMap {
    fn lookup(&self, ch: char) -> Option<Glyph> {
        self.glyphs.get(&ch).cloned()
    }
}

impl<G: GlyphSource + ?Sized> GlyphSource for &G {
    fn lookup(&self, ch: char) -> Option<Glyph> {
        (**self).lookup(ch)
    }
}

impl<G: GlyphSource + ?Sized> GlyphSource for Box<G> {
    fn lookup(&self, ch: char) -> Option<Glyph> {
        (**self).lookup(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_glyphs_never_resolves() {
        assert_eq!(NoGlyphs.lookup('a'), None);
        assert_eq!(NoGlyphs.lookup(' '), None);
    }

    #[test]
    fn test_glyph_map_lookup() {
        let map = GlyphMap::new()
            .with_glyph('a', Glyph::new(vec![PathCommand::MoveTo(0.0, 0.0)], 500.0))
            .with_glyph(' ', Glyph::blank(250.0));

        assert_eq!(map.len(), 2);
        assert_eq!(map.lookup(' ').map(|g| g.advance_width), Some(250.0));
        assert_eq!(map.lookup('b'), None);
    }

    #[test]
    fn test_path_command_points() {
        let curve = PathCommand::CurveTo(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);

        assert_eq!(curve.letter(), 'C');
        assert_eq!(curve.points(), vec![(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]);
        assert!(PathCommand::Close.points().is_empty());
    }
}
