//! Script parser: segments raw script text into [`Slide`] records.
//!
//! Every `# ` or `## ` heading starts a new slide (there is no sub-slide
//! grouping). Image references fill the slide's image slot, other non-blank
//! lines are kept verbatim as content, and blank lines are dropped.

use crate::markers;
use crate::Slide;
use std::mem;

/// Parser for line-oriented slide scripts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptParser;

impl ScriptParser {
    /// Create a new script parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a script into slides in document order.
    ///
    /// A script without any heading yields a single untitled slide holding
    /// every non-blank line. A script with no non-blank lines yields no
    /// slides at all.
    pub fn parse(&self, document: &str) -> Vec<Slide> {
        // `\r\n` yields an extra empty piece, which folds away as a blank line.
        let slides = document
            .split(['\r', '\n'])
            .fold(ParseState::default(), ParseState::step)
            .finish();

        log::debug!("Parsed {} slides from script", slides.len());
        slides
    }
}

/// Parse a script into slides with the default parser.
pub fn parse(document: &str) -> Vec<Slide> {
    ScriptParser::new().parse(document)
}

/// Left-fold state: finished slides plus the slide being accumulated.
#[derive(Debug, Default)]
struct ParseState {
    slides: Vec<Slide>,
    current: Slide,
}

impl ParseState {
    fn step(mut self, line: &str) -> Self {
        if let Some(title) = markers::secondary_heading(line) {
            self.start_slide(title);
        } else if let Some(title) = markers::primary_heading(line) {
            self.start_slide(title);
        } else if let Some(image) = markers::image_reference(line) {
            self.current.image = Some(image);
        } else if !markers::is_blank(line) {
            self.current.add_line(line);
        }
        self
    }

    /// Flush the current slide (if it has a title or content) and begin a
    /// new one with the given title.
    fn start_slide(&mut self, title: &str) {
        let finished = mem::replace(&mut self.current, Slide::new(title));
        self.flush(finished);
    }

    fn flush(&mut self, slide: Slide) {
        if !slide.is_empty() {
            self.slides.push(slide);
        }
    }

    fn finish(mut self) -> Vec<Slide> {
        let last = mem::take(&mut self.current);
        self.flush(last);
        self.slides
    }
}
