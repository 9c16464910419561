//! Slide composer: turns a slide and its classified blocks into a complete
//! HTML or SVG document.
//!
//! Layout is fixed to a 1920x1080 canvas. The only slide-dependent geometry
//! is the vertical stacking of body lines in vector output.

use crate::glyph::GlyphSource;
use crate::theme::Theme;
use crate::vector_text::{Align, TextOptions, VectorText, FALLBACK_FONT_FAMILY};
use crate::{slide_file_name, MarkupBlock, RenderTarget, RenderedSlide, Slide};
use quick_xml::escape::{escape, partial_escape};

/// Canvas width in pixels.
pub const CANVAS_WIDTH: f64 = 1920.0;
/// Canvas height in pixels.
pub const CANVAS_HEIGHT: f64 = 1080.0;

mod layout {
    pub const TITLE_Y: f64 = 380.0;
    pub const TITLE_SIZE: f64 = 72.0;

    pub const BRAND_X: f64 = 50.0;
    pub const BRAND_Y: f64 = 70.0;
    pub const BRAND_SIZE: f64 = 42.0;

    pub const PAGE_MARGIN: f64 = 50.0;
    pub const PAGE_Y: f64 = 70.0;
    pub const PAGE_SIZE: f64 = 24.0;

    pub const FOOTER_MARGIN: f64 = 40.0;
    pub const FOOTER_SIZE: f64 = 20.0;

    pub const CONTENT_START_Y: f64 = 520.0;
    pub const LINE_HEIGHT: f64 = 65.0;
    pub const BODY_SIZE: f64 = 36.0;
    pub const BULLET_X: f64 = 580.0;
    pub const BULLET_RADIUS: f64 = 6.0;
    /// Bullet center sits this far above the text baseline.
    pub const BULLET_RISE: f64 = 12.0;
    pub const TEXT_X: f64 = 620.0;
}

/// Presentation options shared by every slide of a deck.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposerOptions {
    pub theme: Theme,

    /// Label drawn in the top-left corner of vector slides.
    pub brand: Option<String>,

    /// Caption drawn centered at the bottom of vector slides.
    pub footer: Option<String>,

    /// Body font size in pixels for HTML slides.
    pub body_font_size: u32,

    /// CSS font stack for HTML slides.
    pub font_family: String,
}

impl Default for ComposerOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            brand: None,
            footer: None,
            body_font_size: 48,
            font_family: "Inter, system-ui, sans-serif".to_string(),
        }
    }
}

impl ComposerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn with_body_font_size(mut self, size: u32) -> Self {
        self.body_font_size = size.max(1);
        self
    }
}

/// Composes rendered slide documents.
#[derive(Clone)]
pub struct SlideComposer<'a> {
    glyphs: &'a dyn GlyphSource,
    options: ComposerOptions,
}

impl<'a> SlideComposer<'a> {
    /// Create a composer drawing vector text from `glyphs`.
    pub fn new(glyphs: &'a dyn GlyphSource) -> Self {
        Self {
            glyphs,
            options: ComposerOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ComposerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ComposerOptions {
        &self.options
    }

    /// Compose slide `index` (1-based) of `total` into a document.
    pub fn compose(
        &self,
        slide: &Slide,
        blocks: &[MarkupBlock],
        index: usize,
        total: usize,
        target: RenderTarget,
    ) -> RenderedSlide {
        let document = match target {
            RenderTarget::Html => self.compose_html(slide, blocks, index, total),
            RenderTarget::Svg => self.compose_svg(slide, blocks, index, total),
        };

        RenderedSlide {
            index,
            file_name: slide_file_name(index, target),
            target,
            document,
        }
    }

    /// HTML document for one slide.
    pub fn compose_html(
        &self,
        slide: &Slide,
        blocks: &[MarkupBlock],
        index: usize,
        total: usize,
    ) -> String {
        let theme = &self.options.theme;
        let doc_title = if slide.title.is_empty() {
            format!("Slide {index:03}")
        } else {
            slide.title.clone()
        };

        let mut body = String::new();
        if !slide.title.is_empty() {
            body.push_str(&format!("    <h1>{}</h1>\n", escape(slide.title.as_str())));
        }
        body.push_str(&html_content(blocks));
        if let Some(image) = &slide.image {
            body.push_str(&format!(
                "    <div class=\"image-container\"><img src=\"{}\" alt=\"{}\"></div>\n",
                escape(image.src.as_str()),
                escape(image.alt.as_str())
            ));
        }
        body.push_str(&format!(
            "    <div class=\"slide-number\">{index} / {total}</div>\n"
        ));
        body.push_str("    <div class=\"progress-bar\"></div>\n");

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>
    * {{ margin: 0; padding: 0; box-sizing: border-box; }}
    .slide {{ width: {width}px; height: {height}px; background: {bg}; color: {text}; font-family: {font}; display: flex; flex-direction: column; padding: 80px; position: relative; overflow: hidden; }}
    .slide::before {{ content: ''; position: absolute; top: 0; left: 0; right: 0; height: 8px; background: {accent}; }}
    .slide-number {{ position: absolute; bottom: 40px; right: 60px; font-size: 24px; opacity: 0.5; }}
    h1 {{ font-size: 72px; margin-bottom: 40px; font-weight: 700; color: {accent}; }}
    h2 {{ font-size: 56px; margin-bottom: 30px; font-weight: 600; color: {accent}; }}
    p {{ font-size: {size}px; line-height: 1.6; margin-bottom: 24px; max-width: 1400px; }}
    ul, ol {{ font-size: {size}px; line-height: 1.8; margin-left: 60px; margin-bottom: 30px; }}
    .content {{ flex: 1; display: flex; flex-direction: column; justify-content: center; }}
    .image-container {{ margin: 30px 0; text-align: center; }}
    .image-container img {{ max-width: 80%; max-height: 500px; border-radius: 12px; box-shadow: 0 20px 60px rgba(0,0,0,0.3); }}
    .progress-bar {{ position: absolute; bottom: 0; left: 0; height: 4px; background: {accent}; width: {progress}%; }}
  </style>
</head>
<body>
  <div class="slide">
{body}  </div>
</body>
</html>
"#,
            title = escape(doc_title.as_str()),
            width = CANVAS_WIDTH,
            height = CANVAS_HEIGHT,
            bg = html_background(theme),
            text = partial_escape(theme.text.as_str()),
            accent = partial_escape(theme.accent.as_str()),
            font = partial_escape(self.options.font_family.as_str()),
            size = self.options.body_font_size,
            progress = progress_percent(index, total),
        )
    }

    /// SVG document for one slide, with outlined title, brand and body text.
    pub fn compose_svg(
        &self,
        slide: &Slide,
        blocks: &[MarkupBlock],
        index: usize,
        total: usize,
    ) -> String {
        let theme = &self.options.theme;
        let text = VectorText::new(self.glyphs);
        let mut out = String::new();

        out.push_str(&format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
            w = CANVAS_WIDTH,
            h = CANVAS_HEIGHT
        ));
        out.push_str(&svg_background(theme));

        if let Some(brand) = &self.options.brand {
            out.push_str("  ");
            out.push_str(&text.render(
                brand,
                layout::BRAND_X,
                layout::BRAND_Y,
                layout::BRAND_SIZE,
                &TextOptions::new(theme.accent.as_str()),
            ));
            out.push('\n');
        }

        out.push_str(&format!(
            "  <text x=\"{x}\" y=\"{y}\" font-family=\"{FALLBACK_FONT_FAMILY}\" font-size=\"{size}\" fill=\"{fill}\" text-anchor=\"end\">{index} / {total}</text>\n",
            x = CANVAS_WIDTH - layout::PAGE_MARGIN,
            y = layout::PAGE_Y,
            size = layout::PAGE_SIZE,
            fill = escape(theme.muted.as_str()),
        ));

        if !slide.title.is_empty() {
            out.push_str("  ");
            out.push_str(&text.render(
                &slide.title,
                CANVAS_WIDTH / 2.0,
                layout::TITLE_Y,
                layout::TITLE_SIZE,
                &TextOptions::new(theme.text.as_str()).with_align(Align::Center),
            ));
            out.push('\n');
        }

        for (i, line) in body_lines(blocks).iter().enumerate() {
            let baseline = layout::CONTENT_START_Y + i as f64 * layout::LINE_HEIGHT;
            let fill = match line.kind {
                LineKind::Heading => theme.accent.as_str(),
                LineKind::Bullet | LineKind::Numbered => theme.text.as_str(),
            };
            if line.kind == LineKind::Bullet {
                out.push_str(&format!(
                    "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>\n",
                    layout::BULLET_X,
                    baseline - layout::BULLET_RISE,
                    layout::BULLET_RADIUS,
                    escape(theme.accent.as_str())
                ));
            }
            out.push_str("  ");
            out.push_str(&text.render(
                &line.text,
                layout::TEXT_X,
                baseline,
                layout::BODY_SIZE,
                &TextOptions::new(fill),
            ));
            out.push('\n');
        }

        if let Some(footer) = &self.options.footer {
            out.push_str(&format!(
                "  <text x=\"{x}\" y=\"{y}\" font-family=\"{FALLBACK_FONT_FAMILY}\" font-size=\"{size}\" fill=\"{fill}\" text-anchor=\"middle\">{text}</text>\n",
                x = CANVAS_WIDTH / 2.0,
                y = CANVAS_HEIGHT - layout::FOOTER_MARGIN,
                size = layout::FOOTER_SIZE,
                fill = escape(theme.muted.as_str()),
                text = escape(footer.as_str()),
            ));
        }

        out.push_str("</svg>\n");
        out
    }
}

/// The `.content` region. Always present, empty for title-only slides.
fn html_content(blocks: &[MarkupBlock]) -> String {
    if blocks.is_empty() {
        return "    <div class=\"content\"></div>\n".to_string();
    }

    let mut html = String::from("    <div class=\"content\">\n");
    for block in blocks {
        match block {
            MarkupBlock::Paragraph(text) => {
                html.push_str(&format!("      <p>{}</p>\n", escape(text.as_str())));
            }
            MarkupBlock::Subheading(text) => {
                html.push_str(&format!("      <h2>{}</h2>\n", escape(text.as_str())));
            }
            MarkupBlock::List { items, ordered } => {
                let tag = if *ordered { "ol" } else { "ul" };
                let items: String = items
                    .iter()
                    .map(|item| format!("<li>{}</li>", escape(item.as_str())))
                    .collect();
                html.push_str(&format!("      <{tag}>{items}</{tag}>\n"));
            }
        }
    }
    html.push_str("    </div>\n");
    html
}

/// CSS `background` value for HTML slides. Values are escaped so a theme
/// cannot close the `<style>` element.
fn html_background(theme: &Theme) -> String {
    let bg = partial_escape(theme.bg.as_str());
    if theme.gradient {
        format!(
            "linear-gradient(135deg, {bg} 0%, {} 100%)",
            partial_escape(theme.bg_secondary.as_str())
        )
    } else {
        bg.into_owned()
    }
}

fn progress_percent(index: usize, total: usize) -> String {
    let percent = index as f64 / total.max(1) as f64 * 100.0;
    format!("{percent:.2}")
}

fn svg_background(theme: &Theme) -> String {
    format!(
        r#"  <defs>
    <linearGradient id="bg" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{bg};stop-opacity:1"/>
      <stop offset="100%" style="stop-color:{bg2};stop-opacity:1"/>
    </linearGradient>
    <linearGradient id="accent" x1="0%" y1="0%" x2="100%" y2="0%">
      <stop offset="0%" style="stop-color:{accent};stop-opacity:1"/>
      <stop offset="100%" style="stop-color:{accent_light};stop-opacity:1"/>
    </linearGradient>
  </defs>
  <rect width="100%" height="100%" fill="url(#bg)"/>
  <circle cx="{w}" cy="0" r="700" fill="{accent}" opacity="0.08"/>
  <circle cx="0" cy="{h}" r="500" fill="{accent_light}" opacity="0.06"/>
  <rect x="0" y="180" width="300" height="8" fill="url(#accent)"/>
"#,
        bg = escape(theme.bg.as_str()),
        bg2 = escape(theme.bg_secondary.as_str()),
        accent = escape(theme.accent.as_str()),
        accent_light = escape(theme.accent_light.as_str()),
        w = CANVAS_WIDTH,
        h = CANVAS_HEIGHT,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Bullet,
    Numbered,
    Heading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct BodyLine {
    text: String,
    kind: LineKind,
}

/// Flatten blocks into the stacked lines of a vector slide.
fn body_lines(blocks: &[MarkupBlock]) -> Vec<BodyLine> {
    let mut lines = Vec::new();
    for block in blocks {
        match block {
            MarkupBlock::Paragraph(text) => lines.push(BodyLine {
                text: text.clone(),
                kind: LineKind::Bullet,
            }),
            MarkupBlock::Subheading(text) => lines.push(BodyLine {
                text: text.clone(),
                kind: LineKind::Heading,
            }),
            MarkupBlock::List { items, ordered } => {
                for (n, item) in items.iter().enumerate() {
                    lines.push(if *ordered {
                        BodyLine {
                            text: format!("{}. {}", n + 1, item),
                            kind: LineKind::Numbered,
                        }
                    } else {
                        BodyLine {
                            text: item.clone(),
                            kind: LineKind::Bullet,
                        }
                    });
                }
            }
        }
    }
    lines
}
