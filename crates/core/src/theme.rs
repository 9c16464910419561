//! Color themes for rendered slides.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Names accepted by [`Theme::by_name`].
pub const THEME_NAMES: &[&str] = &["dark", "light", "gradient", "midnight", "corporate", "nature"];

/// Slide color palette. Values are CSS/SVG color strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Main background.
    pub bg: String,

    /// Second background stop, used for the gradient in vector output.
    pub bg_secondary: String,

    /// Body text.
    pub text: String,

    /// Headings, bullets and the accent bar.
    pub accent: String,

    /// Lighter accent used for gradients and decorations.
    pub accent_light: String,

    /// De-emphasized text such as page numbers and captions.
    pub muted: String,

    /// Paint HTML slides with a diagonal `bg` to `bg_secondary` gradient
    /// instead of a flat `bg`. Vector output always uses the gradient.
    #[serde(default)]
    pub gradient: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self::from_colors("#1a1a2e", "#16213e", "#ffffff", "#e94560", "#ff6b81", "#888888")
    }

    pub fn light() -> Self {
        Self::from_colors("#ffffff", "#f1f3f8", "#1a1a2e", "#e94560", "#ff6b81", "#666666")
    }

    pub fn gradient() -> Self {
        Self {
            gradient: true,
            ..Self::from_colors("#667eea", "#764ba2", "#ffffff", "#ffffff", "#e0e7ff", "#d6d3f0")
        }
    }

    /// The indigo-on-near-black palette of the vector decks.
    pub fn midnight() -> Self {
        Self::from_colors("#0a0a0f", "#1a1a2e", "#ffffff", "#6366f1", "#818cf8", "#888888")
    }

    pub fn corporate() -> Self {
        Self::from_colors("#0f4c75", "#1b262c", "#ffffff", "#3282b8", "#bbe1fa", "#a0b4c8")
    }

    pub fn nature() -> Self {
        Self::from_colors("#1b4332", "#081c15", "#d8f3dc", "#95d5b2", "#b7e4c7", "#74c69d")
    }

    /// Look up a preset by name (case-insensitive).
    pub fn by_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "dark" => Ok(Self::dark()),
            "light" => Ok(Self::light()),
            "gradient" => Ok(Self::gradient()),
            "midnight" => Ok(Self::midnight()),
            "corporate" => Ok(Self::corporate()),
            "nature" => Ok(Self::nature()),
            other => Err(Error::UnknownTheme(other.to_string())),
        }
    }

    /// Parse a theme from a JSON object with all six color fields.
    pub fn from_json(json: &str) -> Result<Self> {
        let theme: Self = serde_json::from_str(json)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Reject values that could break out of a CSS declaration or markup.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("bg", &self.bg),
            ("bg_secondary", &self.bg_secondary),
            ("text", &self.text),
            ("accent", &self.accent),
            ("accent_light", &self.accent_light),
            ("muted", &self.muted),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() || value.contains(['<', '>', '{', '}', ';', '"']) {
                return Err(Error::InvalidTheme(format!("{name}: {value:?}")));
            }
        }
        Ok(())
    }

    fn from_colors(
        bg: &str,
        bg_secondary: &str,
        text: &str,
        accent: &str,
        accent_light: &str,
        muted: &str,
    ) -> Self {
        Self {
            bg: bg.to_string(),
            bg_secondary: bg_secondary.to_string(),
            text: text.to_string(),
            accent: accent.to_string(),
            accent_light: accent_light.to_string(),
            muted: muted.to_string(),
            gradient: false,
        }
    }
}
