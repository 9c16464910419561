//! CLI tool for rendering plain-text scripts into slide decks.

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::{ComposerOptions, Deck, GlyphSource, NoGlyphs, RenderTarget, SlideComposer, Theme};
use deck_font::FontGlyphs;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Render a text script into HTML or SVG slides.
#[derive(Parser, Debug)]
#[command(name = "deck-slides")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input script (# and ## headings start slides)
    input: PathBuf,

    /// Output directory; slides are written to <OUTPUT>/<TARGET>/
    #[arg(short, long, default_value = "./output")]
    output: PathBuf,

    /// Output format: html or svg
    #[arg(short, long, default_value = "html")]
    target: RenderTarget,

    /// Theme preset: dark, light, gradient, midnight, corporate, nature
    #[arg(long, default_value = "dark")]
    theme: String,

    /// JSON theme file (overrides --theme)
    #[arg(long)]
    theme_file: Option<PathBuf>,

    /// TrueType/OpenType font used to outline SVG text
    #[arg(short, long)]
    font: Option<PathBuf>,

    /// Label drawn in the top-left corner of SVG slides
    #[arg(long)]
    brand: Option<String>,

    /// Caption drawn at the bottom of SVG slides
    #[arg(long)]
    footer: Option<String>,

    /// Print the parsed deck as JSON instead of writing files
    #[arg(short, long)]
    print: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let script = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let deck = Deck::from_script(&script);

    if args.verbose {
        eprintln!("Processing: {}", args.input.display());
        eprintln!("  Found {} slides", deck.len());
    }

    if args.print {
        print!("{}", deck.to_json()?);
        return Ok(());
    }

    let options = composer_options(&args)?;

    let font_data = args.font.as_deref().and_then(read_font);
    let font = font_data
        .as_deref()
        .and_then(|data| match FontGlyphs::from_bytes(data) {
            Ok(font) => Some(font),
            Err(e) => {
                log::warn!("{}; falling back to plain text", e);
                None
            }
        });
    let glyphs: &dyn GlyphSource = match &font {
        Some(font) => font,
        None => &NoGlyphs,
    };
    if args.target == RenderTarget::Svg && font.is_none() {
        log::warn!("No usable font; SVG text is written as <text> elements");
    }

    let composer = SlideComposer::new(glyphs).with_options(options);
    let dir = output_dir(&args.output, args.target);
    write_deck(&deck, &composer, args.target, &dir)?;

    if args.verbose {
        eprintln!("Written to: {}", dir.display());
    }

    Ok(())
}

/// Resolve theme and captions from the command line.
fn composer_options(args: &Args) -> Result<ComposerOptions> {
    let theme = match &args.theme_file {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read theme {}", path.display()))?;
            Theme::from_json(&json).with_context(|| format!("Invalid theme {}", path.display()))?
        }
        None => Theme::by_name(&args.theme)?,
    };

    let mut options = ComposerOptions::new().with_theme(theme);
    if let Some(brand) = &args.brand {
        options = options.with_brand(brand);
    }
    if let Some(footer) = &args.footer {
        options = options.with_footer(footer);
    }
    Ok(options)
}

/// Read font bytes; an unreadable file degrades to plain text output.
fn read_font(path: &Path) -> Option<Vec<u8>> {
    match std::fs::read(path) {
        Ok(data) => Some(data),
        Err(e) => {
            log::warn!(
                "Failed to read font {}: {}; falling back to plain text",
                path.display(),
                e
            );
            None
        }
    }
}

/// Render all slides plus `index.html` and `manifest.json` into `dir`.
fn write_deck(
    deck: &Deck,
    composer: &SlideComposer<'_>,
    target: RenderTarget,
    dir: &Path,
) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    for slide in deck.render(composer, target) {
        write_output(&dir.join(&slide.file_name), &slide.document)?;
        log::info!("Slide {}: {}", slide.index, slide.file_name);
    }

    let manifest = deck.manifest(target);
    write_output(&dir.join("index.html"), &manifest.viewer_html()?)?;
    write_output(&dir.join("manifest.json"), &manifest.to_json()?)?;

    Ok(())
}

/// Determine the per-target output directory.
fn output_dir(output: &Path, target: RenderTarget) -> PathBuf {
    output.join(target.extension())
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dir_per_target() {
        let base = Path::new("out");

        assert_eq!(output_dir(base, RenderTarget::Html), PathBuf::from("out/html"));
        assert_eq!(output_dir(base, RenderTarget::Svg), PathBuf::from("out/svg"));
    }

    #[test]
    fn test_args_parse_target_and_theme() {
        let args = Args::parse_from(["deck-slides", "script.txt", "-t", "svg", "--theme", "nature"]);
        let options = composer_options(&args).unwrap();

        assert_eq!(args.target, RenderTarget::Svg);
        assert_eq!(options.theme, Theme::nature());
        assert_eq!(options.brand, None);
    }

    #[test]
    fn test_unknown_theme_is_an_error() {
        let args = Args::parse_from(["deck-slides", "script.txt", "--theme", "neon"]);

        assert!(composer_options(&args).is_err());
    }

    #[test]
    fn test_missing_font_is_not_fatal() {
        let path = std::env::temp_dir().join("deck-slides-no-such-font.ttf");

        assert_eq!(read_font(&path), None);
    }

    #[test]
    fn test_invalid_target_rejected() {
        assert!(Args::try_parse_from(["deck-slides", "script.txt", "-t", "pdf"]).is_err());
    }
}
