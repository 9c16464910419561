//! Deck index documents: a JSON manifest and an HTML viewer page.

use crate::{slide_file_name, RenderTarget, Result};
use serde::{Deserialize, Serialize};

/// One entry per rendered slide, in deck order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// 1-based position in the deck.
    pub index: usize,
    /// File name of the rendered document.
    pub file: String,
    /// Slide title, empty for an untitled slide.
    pub title: String,
}

/// Ordered listing of a deck's rendered documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub target: RenderTarget,
    pub total: usize,
    pub slides: Vec<ManifestEntry>,
}

impl Manifest {
    /// Build a manifest from slide titles in deck order.
    pub fn new<S: AsRef<str>>(titles: &[S], target: RenderTarget) -> Self {
        let slides = titles
            .iter()
            .enumerate()
            .map(|(i, title)| ManifestEntry {
                index: i + 1,
                file: slide_file_name(i + 1, target),
                title: title.as_ref().to_string(),
            })
            .collect::<Vec<_>>();

        Self {
            target,
            total: slides.len(),
            slides,
        }
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// File names in deck order.
    pub fn files(&self) -> Vec<&str> {
        self.slides.iter().map(|e| e.file.as_str()).collect()
    }

    /// `index.html` page that shows one slide at a time in an iframe.
    ///
    /// Arrow keys and space step through the slides in manifest order.
    pub fn viewer_html(&self) -> Result<String> {
        let files = serde_json::to_string(&self.files())?;
        let first = self.files().first().copied().unwrap_or("about:blank");

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Presentation Viewer</title>
  <style>
    body {{ margin: 0; background: #000; display: flex; justify-content: center; align-items: center; height: 100vh; }}
    iframe {{ width: 960px; height: 540px; border: none; }}
  </style>
</head>
<body>
  <iframe id="slide" src="{first}" allowfullscreen></iframe>
  <script>
    const slides = {files};
    let current = 0;
    document.addEventListener('keydown', e => {{
      if (slides.length === 0) return;
      if (e.key === 'ArrowRight' || e.key === ' ') current = Math.min(current + 1, slides.length - 1);
      if (e.key === 'ArrowLeft') current = Math.max(current - 1, 0);
      document.getElementById('slide').src = slides[current];
    }});
  </script>
</body>
</html>
"#
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_entries() {
        let manifest = Manifest::new(&["Intro", "", "Outro"], RenderTarget::Svg);

        assert_eq!(manifest.total, 3);
        assert_eq!(
            manifest.files(),
            vec!["slide-001.svg", "slide-002.svg", "slide-003.svg"]
        );
        assert_eq!(manifest.slides[1].title, "");
        assert_eq!(manifest.slides[2].index, 3);
    }

    #[test]
    fn test_manifest_json() {
        let manifest = Manifest::new(&["A"], RenderTarget::Html);
        let json = manifest.to_json().unwrap();

        assert!(json.contains(r#""target": "html""#));
        assert!(json.contains(r#""file": "slide-001.html""#));
        assert!(json.ends_with('\n'));

        let back: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, manifest);
    }

    #[test]
    fn test_viewer_lists_files_in_order() {
        let manifest = Manifest::new(&["A", "B"], RenderTarget::Html);
        let html = manifest.viewer_html().unwrap();

        assert!(html.contains(r#"src="slide-001.html""#));
        assert!(html.contains(r#"const slides = ["slide-001.html","slide-002.html"];"#));
    }

    #[test]
    fn test_viewer_for_empty_deck() {
        let titles: [&str; 0] = [];
        let manifest = Manifest::new(&titles, RenderTarget::Svg);
        let html = manifest.viewer_html().unwrap();

        assert_eq!(manifest.total, 0);
        assert!(html.contains(r#"src="about:blank""#));
        assert!(html.contains("const slides = [];"));
    }
}
