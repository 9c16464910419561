//! Whole-script pipeline: parse, classify and compose every slide.

use crate::compose::SlideComposer;
use crate::manifest::Manifest;
use crate::{classify, script, MarkupBlock, RenderTarget, RenderedSlide, Result, Slide};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A parsed slide together with its classified content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSlide {
    pub slide: Slide,
    pub blocks: Vec<MarkupBlock>,
}

/// An ordered, immutable set of slides read from one script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    slides: Vec<DeckSlide>,
}

impl Deck {
    /// Parse and classify a script.
    pub fn from_script(text: &str) -> Self {
        Self::from_slides(script::parse(text))
    }

    /// Classify already-parsed slides.
    pub fn from_slides(slides: Vec<Slide>) -> Self {
        let slides = slides
            .into_iter()
            .map(|slide| {
                let blocks = classify(&slide.content);
                DeckSlide { slide, blocks }
            })
            .collect();
        Self { slides }
    }

    pub fn slides(&self) -> &[DeckSlide] {
        &self.slides
    }

    /// Total slide count used for numbering.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Render every slide. Slides are composed in parallel; the result is in
    /// deck order.
    pub fn render(&self, composer: &SlideComposer<'_>, target: RenderTarget) -> Vec<RenderedSlide> {
        let total = self.len();
        if total == 0 {
            log::warn!("Deck has no slides; nothing to render");
            return Vec::new();
        }

        let rendered: Vec<RenderedSlide> = self
            .slides
            .par_iter()
            .enumerate()
            .map(|(i, entry)| {
                log::debug!("Composing slide {} of {}: {:?}", i + 1, total, entry.slide.title);
                composer.compose(&entry.slide, &entry.blocks, i + 1, total, target)
            })
            .collect();

        log::debug!("Rendered {} {} slides", rendered.len(), target);
        rendered
    }

    /// Manifest of the documents [`Deck::render`] produces for `target`.
    pub fn manifest(&self, target: RenderTarget) -> Manifest {
        let titles: Vec<&str> = self.slides.iter().map(|s| s.slide.title.as_str()).collect();
        Manifest::new(&titles, target)
    }

    /// Pretty-printed JSON of the parsed and classified deck.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
