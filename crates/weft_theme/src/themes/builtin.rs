//! The built-in theme catalog.
//!
//! Two themes ship with the crate:
//! - `default`: stark black-on-white, the look Weft apps start with
//! - `midnight`: its dark counterpart
//!
//! Both share one type scale; only the palettes differ.

use crate::responsive::ResponsiveValue::{PerTier, Uniform};
use crate::theme::Theme;
use crate::tokens::{ColorGroup, Palette, TextStyleTokens, TypographyTokens};

/// Base colors for the default theme.
pub mod mono {
    pub const BLACK: &str = "#111111";
    pub const WHITE: &str = "#FFFFFF";
}

/// Base colors for the midnight theme.
pub mod midnight {
    pub const INK: &str = "#050507";
    pub const PAPER: &str = "#FAFAFA";
    pub const PAPER_DIM: &str = "#C9C9D4";
    pub const SURFACE: &str = "#16161E";
    pub const SURFACE_DARK: &str = "#10101A";
    pub const SURFACE_LIGHT: &str = "#232332";
}

/// Built-in theme catalog.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum BuiltinTheme {
    /// Stark black-on-white default.
    Default,
    /// Dark counterpart of the default theme.
    Midnight,
}

impl BuiltinTheme {
    /// Full catalog, default first.
    pub fn all() -> &'static [BuiltinTheme] {
        const BUILTINS: [BuiltinTheme; 2] = [BuiltinTheme::Default, BuiltinTheme::Midnight];
        &BUILTINS
    }

    /// Stable registry name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Midnight => "midnight",
        }
    }

    /// Build this theme's data.
    pub fn theme(self) -> Theme {
        match self {
            Self::Default => default_theme(),
            Self::Midnight => midnight_theme(),
        }
    }
}

/// The stark black-on-white default theme.
pub fn default_theme() -> Theme {
    Theme {
        margin: "20px".into(),
        palette: Palette {
            black: mono::BLACK.into(),
            white: mono::WHITE.into(),
            primary: ColorGroup {
                main: mono::WHITE.into(),
                dark: mono::WHITE.into(),
                light: mono::WHITE.into(),
                contrast_text: mono::BLACK.into(),
            },
            secondary: ColorGroup {
                main: mono::BLACK.into(),
                dark: mono::BLACK.into(),
                light: mono::BLACK.into(),
                contrast_text: mono::WHITE.into(),
            },
        },
        typography: type_scale(),
    }
}

/// The dark counterpart of the default theme.
pub fn midnight_theme() -> Theme {
    Theme {
        margin: "16px".into(),
        palette: Palette {
            black: midnight::INK.into(),
            white: midnight::PAPER.into(),
            primary: ColorGroup {
                main: midnight::SURFACE.into(),
                dark: midnight::SURFACE_DARK.into(),
                light: midnight::SURFACE_LIGHT.into(),
                contrast_text: midnight::PAPER.into(),
            },
            secondary: ColorGroup {
                main: midnight::PAPER.into(),
                dark: midnight::PAPER_DIM.into(),
                light: midnight::PAPER.into(),
                contrast_text: midnight::INK.into(),
            },
        },
        typography: type_scale(),
    }
}

/// The shared type scale. Sizes are rem, line heights unitless.
fn type_scale() -> TypographyTokens {
    TypographyTokens {
        h1: TextStyleTokens {
            font_size: PerTier(vec![2.0, 2.0, 4.0, 4.0, 8.0]),
            line_height: Uniform(1.2),
            letter_spacing: PerTier(vec![0.4, 0.4, 0.8]),
        },
        h2: TextStyleTokens {
            font_size: PerTier(vec![1.5, 1.5, 1.5, 1.5, 3.0]),
            line_height: Uniform(1.8),
            letter_spacing: Uniform(0.3),
        },
        h3: TextStyleTokens {
            font_size: PerTier(vec![1.0, 1.0, 1.2, 1.2, 1.5]),
            line_height: Uniform(1.8),
            letter_spacing: Uniform(0.3),
        },
        subtitle: TextStyleTokens {
            font_size: PerTier(vec![1.5, 1.5, 1.5, 1.5, 3.0]),
            line_height: Uniform(2.0),
            letter_spacing: Uniform(0.5),
        },
        body1: TextStyleTokens {
            font_size: PerTier(vec![1.2, 1.2, 1.2, 1.2, 2.4]),
            line_height: Uniform(1.8),
            letter_spacing: Uniform(0.1),
        },
        body2: TextStyleTokens {
            font_size: PerTier(vec![0.8, 0.8, 0.8, 0.8, 1.6]),
            line_height: Uniform(1.5),
            letter_spacing: Uniform(0.2),
        },
        caption: TextStyleTokens {
            font_size: PerTier(vec![1.2, 1.2, 1.2, 1.2, 2.4]),
            line_height: Uniform(1.5),
            letter_spacing: Uniform(0.2),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{default_theme, BuiltinTheme};
    use crate::tokens::TextStyle;

    #[test]
    fn builtin_themes_validate() {
        for builtin in BuiltinTheme::all() {
            assert!(
                builtin.theme().validate().is_ok(),
                "builtin {builtin:?} must validate"
            );
        }
    }

    #[test]
    fn catalog_is_default_first() {
        let names: Vec<&str> = BuiltinTheme::all().iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["default", "midnight"]);
    }

    #[test]
    fn typography_lookup_matches_fields() {
        let theme = default_theme();
        assert_eq!(theme.typography.get(TextStyle::H1), &theme.typography.h1);
        assert_eq!(
            theme.typography.get(TextStyle::Caption),
            &theme.typography.caption
        );
    }
}
