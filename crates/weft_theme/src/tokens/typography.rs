//! Typography tokens for theming

use crate::responsive::ResponsiveValue;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Named text styles covered by the type scale.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TextStyle {
    H1,
    H2,
    H3,
    Subtitle,
    Body1,
    Body2,
    Caption,
}

impl TextStyle {
    /// All styles, in CSS emission order.
    pub const ALL: [TextStyle; 7] = [
        TextStyle::H1,
        TextStyle::H2,
        TextStyle::H3,
        TextStyle::Subtitle,
        TextStyle::Body1,
        TextStyle::Body2,
        TextStyle::Caption,
    ];

    /// Stable key used in CSS variable names and theme files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::Subtitle => "subtitle",
            Self::Body1 => "body1",
            Self::Body2 => "body2",
            Self::Caption => "caption",
        }
    }
}

impl Display for TextStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three responsive metrics carried by every text style.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TextMetric {
    FontSize,
    LineHeight,
    LetterSpacing,
}

impl TextMetric {
    /// All metrics, in CSS emission order.
    pub const ALL: [TextMetric; 3] = [
        TextMetric::FontSize,
        TextMetric::LineHeight,
        TextMetric::LetterSpacing,
    ];

    /// Metric segment used in CSS variable names.
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::FontSize => "fontsize",
            Self::LineHeight => "lineheight",
            Self::LetterSpacing => "letterspacing",
        }
    }

    /// Unit suffix appended to emitted values. Line height is unitless.
    pub const fn unit(self) -> &'static str {
        match self {
            Self::FontSize => "rem",
            Self::LineHeight => "",
            Self::LetterSpacing => "rem",
        }
    }
}

/// Responsive type metrics for one text style.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextStyleTokens {
    /// Font size per tier, in rem.
    pub font_size: ResponsiveValue<f32>,
    /// Unitless line height per tier.
    pub line_height: ResponsiveValue<f32>,
    /// Letter spacing per tier, in rem.
    pub letter_spacing: ResponsiveValue<f32>,
}

impl TextStyleTokens {
    /// Get one metric's responsive value.
    pub fn metric(&self, metric: TextMetric) -> &ResponsiveValue<f32> {
        match metric {
            TextMetric::FontSize => &self.font_size,
            TextMetric::LineHeight => &self.line_height,
            TextMetric::LetterSpacing => &self.letter_spacing,
        }
    }
}

/// Complete type scale: one entry per text style, all seven mandatory.
///
/// Deserialization fails if a theme file leaves any style out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypographyTokens {
    pub h1: TextStyleTokens,
    pub h2: TextStyleTokens,
    pub h3: TextStyleTokens,
    pub subtitle: TextStyleTokens,
    pub body1: TextStyleTokens,
    pub body2: TextStyleTokens,
    pub caption: TextStyleTokens,
}

impl TypographyTokens {
    /// Get the tokens for a text style.
    pub fn get(&self, style: TextStyle) -> &TextStyleTokens {
        match style {
            TextStyle::H1 => &self.h1,
            TextStyle::H2 => &self.h2,
            TextStyle::H3 => &self.h3,
            TextStyle::Subtitle => &self.subtitle,
            TextStyle::Body1 => &self.body1,
            TextStyle::Body2 => &self.body2,
            TextStyle::Caption => &self.caption,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TextMetric, TextStyle};

    #[test]
    fn style_keys_are_stable() {
        let keys: Vec<&str> = TextStyle::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            keys,
            vec!["h1", "h2", "h3", "subtitle", "body1", "body2", "caption"]
        );
    }

    #[test]
    fn metric_units_match_css_expectations() {
        assert_eq!(TextMetric::FontSize.unit(), "rem");
        assert_eq!(TextMetric::LineHeight.unit(), "");
        assert_eq!(TextMetric::LetterSpacing.unit(), "rem");
    }
}
