//! Palette tokens for theming

use serde::{Deserialize, Serialize};

/// One named color group: a main color with companions.
///
/// Color strings pass through to the stylesheet untouched, so any CSS
/// color syntax works (`#111111`, `rgb(...)`, `var(...)`).
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct ColorGroup {
    /// The group's main color.
    pub main: String,
    /// Darker companion of `main`.
    pub dark: String,
    /// Lighter companion of `main`.
    pub light: String,
    /// Text color readable on top of `main`.
    pub contrast_text: String,
}

/// A theme's full color palette.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Base black, used for the header background and nav text.
    pub black: String,
    /// Base white, used for the header text and nav background.
    pub white: String,
    /// Primary color group (main surfaces and body text).
    pub primary: ColorGroup,
    /// Secondary color group (secondary surfaces).
    pub secondary: ColorGroup,
}
