//! Colour palette for rich-text annotations.
//!
//! Tokens are either `default`, a named colour (`"blue"`), or a named colour
//! with the `_background` suffix (`"blue_background"`). Unknown tokens never
//! fail. Note the fallback is asymmetric: an unknown foreground token passes
//! through verbatim, while an unknown background token falls back to the gray
//! background with a dark gray text colour.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Suffix marking a token as a background colour.
pub const BACKGROUND_SUFFIX: &str = "_background";

/// Text colour used with an unrecognised background token.
pub const FALLBACK_TEXT_HEX: &str = "#202020";

/// Background used with an unrecognised background token (the gray entry).
pub const FALLBACK_BACKGROUND_HEX: &str = "#F1F1EF";

/// Palette entries as `(name, foreground, background)`.
const PALETTE: [(&str, &str, &str); 9] = [
    ("gray", "#9B9A97", "#F1F1EF"),
    ("brown", "#7B4B25", "#F4E6D4"),
    ("orange", "#D9730D", "#FEEEDA"),
    ("yellow", "#DFAB01", "#FEF3C0"),
    ("green", "#0F7B6C", "#DDEDEA"),
    ("blue", "#0B6E99", "#DDEBF1"),
    ("purple", "#6940A5", "#EAE4F2"),
    ("pink", "#AD1A72", "#FBE4F0"),
    ("red", "#E03E3E", "#FDEBEC"),
];

static FOREGROUND_HEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| PALETTE.iter().map(|(name, fg, _)| (*name, *fg)).collect());

static BACKGROUND_HEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| PALETTE.iter().map(|(name, _, bg)| (*name, *bg)).collect());

/// Foreground hex for a named colour, if it is in the palette.
pub fn foreground_hex(name: &str) -> Option<&'static str> {
    FOREGROUND_HEX.get(name).copied()
}

/// Background hex for a named colour, if it is in the palette.
pub fn background_hex(name: &str) -> Option<&'static str> {
    BACKGROUND_HEX.get(name).copied()
}

/// Colour overrides resolved from a token.
///
/// Both fields are `None` for `default`, meaning the inherited colours apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorStyle {
    /// Text colour (hex, or the raw token for unknown foreground names).
    pub color: Option<String>,
    /// Background colour (hex).
    pub background_color: Option<String>,
}

impl ColorStyle {
    /// Resolves a colour token into style overrides.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockpage_core::color::ColorStyle;
    ///
    /// let style = ColorStyle::resolve("blue_background");
    /// assert_eq!(style.background_color.as_deref(), Some("#DDEBF1"));
    /// assert_eq!(style.color.as_deref(), Some("#0B6E99"));
    ///
    /// let style = ColorStyle::resolve("mauve");
    /// assert_eq!(style.color.as_deref(), Some("mauve"));
    /// ```
    pub fn resolve(token: &str) -> Self {
        if token.is_empty() || token == "default" {
            return Self::default();
        }

        if let Some(base) = token.strip_suffix(BACKGROUND_SUFFIX) {
            let color = foreground_hex(base).unwrap_or(FALLBACK_TEXT_HEX);
            let background = background_hex(base).unwrap_or(FALLBACK_BACKGROUND_HEX);
            return Self {
                color: Some(color.to_string()),
                background_color: Some(background.to_string()),
            };
        }

        Self {
            color: Some(foreground_hex(token).unwrap_or(token).to_string()),
            background_color: None,
        }
    }

    /// Returns true if neither colour is overridden.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.background_color.is_none()
    }
}
