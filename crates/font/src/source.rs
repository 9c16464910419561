//! Glyph source backed by a font file.

use deck_core::glyph::UNITS_PER_EM;
use deck_core::{Error, Glyph, GlyphSource, PathCommand, Result};
use ttf_parser::{Face, OutlineBuilder};

/// Glyph outlines read from a TrueType/OpenType face.
pub struct FontGlyphs<'a> {
    face: Face<'a>,
    /// Font units to normalized units.
    scale: f64,
}

impl<'a> FontGlyphs<'a> {
    /// Parse the first face in `data`.
    pub fn from_bytes(data: &'a [u8]) -> Result<Self> {
        Self::from_bytes_index(data, 0)
    }

    /// Parse face `index` of a font collection.
    pub fn from_bytes_index(data: &'a [u8], index: u32) -> Result<Self> {
        let face = Face::parse(data, index)
            .map_err(|e| Error::FontError(format!("Failed to parse font: {}", e)))?;

        let units_per_em = face.units_per_em();
        if units_per_em == 0 {
            return Err(Error::FontError("Font reports zero units per em".to_string()));
        }

        log::debug!(
            "Loaded font face {} ({} glyphs, {} units per em)",
            index,
            face.number_of_glyphs(),
            units_per_em
        );

        Ok(Self {
            face,
            scale: UNITS_PER_EM / f64::from(units_per_em),
        })
    }

    /// Number of glyphs in the face.
    pub fn glyph_count(&self) -> u16 {
        self.face.number_of_glyphs()
    }
}

impl GlyphSource for FontGlyphs<'_> {
    fn lookup(&self, ch: char) -> Option<Glyph> {
        let id = self.face.glyph_index(ch)?;
        let advance = self.face.glyph_hor_advance(id)?;

        let mut outline = OutlineCollector::new(self.scale);
        // Glyphs without contours (such as the space) still advance the pen.
        self.face.outline_glyph(id, &mut outline);

        Some(Glyph::new(
            outline.commands,
            f64::from(advance) * self.scale,
        ))
    }
}

/// Collects outline callbacks as normalized, y-down path commands.
struct OutlineCollector {
    scale: f64,
    commands: Vec<PathCommand>,
}

impl OutlineCollector {
    fn new(scale: f64) -> Self {
        Self {
            scale,
            commands: Vec::new(),
        }
    }

    fn x(&self, x: f32) -> f64 {
        f64::from(x) * self.scale
    }

    fn y(&self, y: f32) -> f64 {
        -f64::from(y) * self.scale
    }
}

impl OutlineBuilder for OutlineCollector {
    fn move_to(&mut self, x: f32, y: f32) {
        let cmd = PathCommand::MoveTo(self.x(x), self.y(y));
        self.commands.push(cmd);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let cmd = PathCommand::LineTo(self.x(x), self.y(y));
        self.commands.push(cmd);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let cmd = PathCommand::QuadTo(self.x(x1), self.y(y1), self.x(x), self.y(y));
        self.commands.push(cmd);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let cmd = PathCommand::CurveTo(
            self.x(x1),
            self.y(y1),
            self.x(x2),
            self.y(y2),
            self.x(x),
            self.y(y),
        );
        self.commands.push(cmd);
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_font_data() {
        let result = FontGlyphs::from_bytes(b"definitely not a font");

        assert!(matches!(result, Err(Error::FontError(_))));
    }

    #[test]
    fn test_empty_font_data() {
        assert!(FontGlyphs::from_bytes(&[]).is_err());
    }

    #[test]
    fn test_outline_collector_normalizes_and_flips() {
        // 2048 units per em, as in many TrueType fonts.
        let mut collector = OutlineCollector::new(1000.0 / 2048.0);
        collector.move_to(0.0, 0.0);
        collector.line_to(1024.0, 2048.0);
        collector.quad_to(2048.0, 1024.0, 512.0, -512.0);
        collector.close();

        assert_eq!(
            collector.commands,
            vec![
                PathCommand::MoveTo(0.0, 0.0),
                PathCommand::LineTo(500.0, -1000.0),
                PathCommand::QuadTo(1000.0, -500.0, 250.0, 250.0),
                PathCommand::Close,
            ]
        );
    }

    #[test]
    fn test_outline_collector_cubic() {
        let mut collector = OutlineCollector::new(1.0);
        collector.curve_to(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);

        assert_eq!(
            collector.commands,
            vec![PathCommand::CurveTo(1.0, -2.0, 3.0, -4.0, 5.0, -6.0)]
        );
    }
}
