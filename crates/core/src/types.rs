//! Domain types for representing a parsed script and its rendered slides.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single titled unit of the presentation, as read from the script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Heading text. Empty only for a leading slide that has content.
    pub title: String,

    /// Raw non-blank content lines in script order, markers included.
    pub content: Vec<String>,

    /// Image reference for this slide, if the script declared one.
    pub image: Option<ImageRef>,
}

impl Slide {
    /// Create a new slide with the given title and no content.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Vec::new(),
            image: None,
        }
    }

    /// Add a raw content line to this slide.
    pub fn add_line(&mut self, line: impl Into<String>) {
        self.content.push(line.into());
    }

    /// A slide with neither title nor content is never emitted.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }
}

/// An `![alt](src)` image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub alt: String,
    pub src: String,
}

impl ImageRef {
    pub fn new(alt: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            alt: alt.into(),
            src: src.into(),
        }
    }
}

/// A classified content element derived from raw content lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum MarkupBlock {
    /// A single line of body text.
    Paragraph(String),
    /// A maximal run of list-marked lines. `items` is never empty.
    List { items: Vec<String>, ordered: bool },
    /// A `## ` line appearing inside slide content.
    Subheading(String),
}

/// Output format for rendered slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderTarget {
    /// HTML document markup.
    Html,
    /// SVG vector document with outlined text.
    Svg,
}

impl RenderTarget {
    /// File extension used for documents of this target.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Svg => "svg",
        }
    }
}

impl fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for RenderTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "html" | "markup" => Ok(Self::Html),
            "svg" | "vector" => Ok(Self::Svg),
            other => Err(Error::UnknownTarget(other.to_string())),
        }
    }
}

/// The final per-slide output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedSlide {
    /// 1-based position in the deck.
    pub index: usize,

    /// Deterministic file name, e.g. `slide-001.svg`.
    pub file_name: String,

    /// Format of `document`.
    pub target: RenderTarget,

    /// The complete HTML or SVG document.
    pub document: String,
}

/// Deterministic 1-based, zero-padded file name for a slide.
pub fn slide_file_name(index: usize, target: RenderTarget) -> String {
    format!("slide-{:03}.{}", index, target.extension())
}
