//! Vector text renderer: converts strings into positioned SVG outline paths.
//!
//! No shaping, kerning or wrapping is done. Glyphs are laid out along the
//! baseline by their advance widths only.

use crate::glyph::{Glyph, GlyphSource, UNITS_PER_EM};
use crate::{Error, Result};
use quick_xml::escape::escape;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::str::FromStr;

/// Font family used when text cannot be outlined.
pub const FALLBACK_FONT_FAMILY: &str = "Arial, sans-serif";

/// Horizontal anchoring of a rendered run relative to `x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// The run starts at `x`.
    #[default]
    Left,
    /// The run's total advance is centered on `x`.
    Center,
}

impl FromStr for Align {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" | "centre" => Ok(Self::Center),
            other => Err(Error::UnknownAlign(other.to_string())),
        }
    }
}

/// Per-call rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOptions {
    pub align: Align,
    /// Any SVG paint value, e.g. `#ffffff`.
    pub fill: String,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            align: Align::Left,
            fill: "#fff".to_string(),
        }
    }
}

impl TextOptions {
    pub fn new(fill: impl Into<String>) -> Self {
        Self {
            fill: fill.into(),
            ..Self::default()
        }
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

/// Renders text as outline paths using an injected glyph source.
#[derive(Clone, Copy)]
pub struct VectorText<'a> {
    glyphs: &'a dyn GlyphSource,
}

impl<'a> VectorText<'a> {
    /// Create a renderer reading outlines from `glyphs`.
    pub fn new(glyphs: &'a dyn GlyphSource) -> Self {
        Self { glyphs }
    }

    /// Render `text` with its baseline at `y`, anchored at `x`.
    ///
    /// Returns a single `<path>` element. If any character cannot be
    /// resolved, the whole string is emitted as a plain `<text>` element
    /// instead; this never fails.
    pub fn render(
        &self,
        text: &str,
        x: f64,
        y: f64,
        font_size: f64,
        options: &TextOptions,
    ) -> String {
        let Some(run) = self.resolve(text) else {
            return fallback_text(text, x, y, font_size, &options.fill);
        };

        let scale = font_size / UNITS_PER_EM;
        let offset = match options.align {
            Align::Left => 0.0,
            Align::Center => -(run_advance(&run) * scale) / 2.0,
        };

        let mut pen_x = x + offset;
        let mut fragments = Vec::with_capacity(run.len());
        for glyph in &run {
            if !glyph.outline.is_empty() {
                fragments.push(glyph_path_data(glyph, pen_x, y, scale));
            }
            pen_x += glyph.advance_width * scale;
        }

        format!(
            r#"<path d="{}" fill="{}"/>"#,
            fragments.join(" "),
            escape(options.fill.as_str())
        )
    }

    /// Total advance of `text` in pixels at `font_size`, if every character
    /// resolves.
    pub fn measure(&self, text: &str, font_size: f64) -> Option<f64> {
        self.resolve(text)
            .map(|run| run_advance(&run) * font_size / UNITS_PER_EM)
    }

    /// Resolve every character, or nothing.
    fn resolve(&self, text: &str) -> Option<Vec<Glyph>> {
        let mut run = Vec::with_capacity(text.len());
        for ch in text.chars() {
            match self.glyphs.lookup(ch) {
                Some(glyph) => run.push(glyph),
                None => {
                    log::debug!("No glyph for {ch:?}; {text:?} falls back to plain text");
                    return None;
                }
            }
        }
        Some(run)
    }
}

/// Render `text` against `glyphs`; see [`VectorText::render`].
pub fn render_text(
    glyphs: &dyn GlyphSource,
    text: &str,
    x: f64,
    y: f64,
    font_size: f64,
    options: &TextOptions,
) -> String {
    VectorText::new(glyphs).render(text, x, y, font_size, options)
}

fn run_advance(run: &[Glyph]) -> f64 {
    run.iter().map(|g| g.advance_width).sum()
}

/// Path data for one glyph: scaled on both axes, then moved to the pen
/// position horizontally and to the baseline vertically.
fn glyph_path_data(glyph: &Glyph, origin_x: f64, baseline_y: f64, scale: f64) -> String {
    let mut data = String::new();
    for command in &glyph.outline {
        if !data.is_empty() {
            data.push(' ');
        }
        data.push(command.letter());
        let points = command.points();
        for (i, (px, py)) in points.iter().enumerate() {
            if i > 0 {
                data.push(' ');
            }
            let _ = write!(
                data,
                "{} {}",
                format_coord(origin_x + px * scale),
                format_coord(baseline_y + py * scale)
            );
        }
    }
    data
}

/// Two fractional digits, with negative zero printed as `0.00`.
pub(crate) fn format_coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.2}")
}

fn fallback_text(text: &str, x: f64, y: f64, font_size: f64, fill: &str) -> String {
    format!(
        r#"<text x="{x}" y="{y}" font-family="{FALLBACK_FONT_FAMILY}" font-size="{font_size}" fill="{}">{}</text>"#,
        escape(fill),
        escape(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{GlyphMap, NoGlyphs, PathCommand};

    /// A 'square' glyph: a box from (0, -100) to (100, 0) with the given advance.
    fn square(advance: f64) -> Glyph {
        Glyph::new(
            vec![
                PathCommand::MoveTo(0.0, -100.0),
                PathCommand::LineTo(100.0, -100.0),
                PathCommand::LineTo(100.0, 0.0),
                PathCommand::LineTo(0.0, 0.0),
                PathCommand::Close,
            ],
            advance,
        )
    }

    fn font() -> GlyphMap {
        GlyphMap::new()
            .with_glyph('a', square(500.0))
            .with_glyph('b', square(500.0))
            .with_glyph(' ', Glyph::blank(250.0))
    }

    #[test]
    fn test_left_aligned_origin_is_x() {
        let glyphs = font();
        let out = render_text(&glyphs, "a", 10.0, 50.0, 1000.0, &TextOptions::new("#fff"));

        assert_eq!(
            out,
            r##"<path d="M10.00 -50.00 L110.00 -50.00 L110.00 50.00 L10.00 50.00 Z" fill="#fff"/>"##
        );
    }

    #[test]
    fn test_center_alignment_offsets_by_half_advance() {
        let glyphs = font();
        let renderer = VectorText::new(&glyphs);
        let options = TextOptions::new("#fff").with_align(Align::Center);
        let out = renderer.render("ab", 100.0, 0.0, 1000.0, &options);

        // Total advance 1000, offset -500: first origin at -400, second at 100.
        assert!(out.starts_with(r#"<path d="M-400.00 -100.00"#));
        assert!(out.contains("M100.00 -100.00"));
        assert_eq!(renderer.measure("ab", 1000.0), Some(1000.0));
    }

    #[test]
    fn test_scale_applies_to_both_axes() {
        let glyphs = font();
        let out = render_text(&glyphs, "a", 0.0, 200.0, 36.0, &TextOptions::default());

        // scale = 0.036
        assert!(out.contains("M0.00 196.40 L3.60 196.40 L3.60 200.00"));
    }

    #[test]
    fn test_blank_glyph_advances_without_path() {
        let glyphs = font();
        let out = render_text(&glyphs, "a b", 0.0, 0.0, 1000.0, &TextOptions::default());

        assert_eq!(out.matches('M').count(), 2);
        // 500 + 250 before the second visible glyph.
        assert!(out.contains("M750.00 -100.00"));
    }

    #[test]
    fn test_missing_glyph_falls_back_for_whole_string() {
        let glyphs = font();
        let out = render_text(&glyphs, "abc", 20.0, 30.0, 42.0, &TextOptions::new("#6366f1"));

        assert_eq!(
            out,
            r##"<text x="20" y="30" font-family="Arial, sans-serif" font-size="42" fill="#6366f1">abc</text>"##
        );
    }

    #[test]
    fn test_unavailable_font_falls_back_and_escapes() {
        let out = render_text(&NoGlyphs, "a < b & c", 0.0, 0.0, 10.0, &TextOptions::default());

        assert!(out.starts_with("<text "));
        assert!(out.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn test_render_is_byte_stable() {
        let glyphs = font();
        let options = TextOptions::new("#fff").with_align(Align::Center);
        let first = render_text(&glyphs, "ab a", 960.0, 380.0, 72.0, &options);
        let second = render_text(&glyphs, "ab a", 960.0, 380.0, 72.0, &options);

        assert_eq!(first, second);
    }

    #[test]
    fn test_format_coord() {
        assert_eq!(format_coord(1.0), "1.00");
        assert_eq!(format_coord(1.005_1), "1.01");
        assert_eq!(format_coord(-0.001), "0.00");
        assert_eq!(format_coord(-12.345_6), "-12.35");
    }

    #[test]
    fn test_align_from_str() {
        assert_eq!("center".parse::<Align>().unwrap(), Align::Center);
        assert_eq!("Left".parse::<Align>().unwrap(), Align::Left);
        assert!("right".parse::<Align>().is_err());
    }
}
