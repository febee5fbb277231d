//! The immutable theme aggregate.

use crate::error::ThemeError;
use crate::responsive::ResponsiveValue;
use crate::tokens::{Palette, TextMetric, TextStyle, TypographyTokens};
use serde::{Deserialize, Serialize};

/// One complete visual theme: spacing, palette, and type scale.
///
/// Themes are plain immutable data. Changing the look of an app means
/// selecting a different registered `Theme`, never mutating one in
/// place; the [`ThemeStore`](crate::ThemeStore) only ever hands out
/// shared references to whole themes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Page margin as a raw CSS length, emitted verbatim.
    pub margin: String,
    /// Color palette.
    pub palette: Palette,
    /// Responsive type scale.
    pub typography: TypographyTokens,
}

impl Theme {
    /// Check the malformed shapes the type system can't rule out: empty
    /// per-tier lists and a blank margin.
    ///
    /// Registries run this on every insertion, so a registered theme is
    /// always safe to serialize.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.margin.trim().is_empty() {
            return Err(ThemeError::EmptyMargin);
        }
        for style in TextStyle::ALL {
            let tokens = self.typography.get(style);
            for metric in TextMetric::ALL {
                if let ResponsiveValue::PerTier(values) = tokens.metric(metric) {
                    if values.is_empty() {
                        return Err(ThemeError::EmptyTierList {
                            style: style.as_str(),
                            metric: metric.css_name(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::default_theme;

    #[test]
    fn default_theme_is_well_formed() {
        assert!(default_theme().validate().is_ok());
    }

    #[test]
    fn empty_per_tier_lists_fail_validation() {
        let mut theme = default_theme();
        theme.typography.body2.letter_spacing = ResponsiveValue::PerTier(Vec::new());

        match theme.validate() {
            Err(ThemeError::EmptyTierList { style, metric }) => {
                assert_eq!(style, "body2");
                assert_eq!(metric, "letterspacing");
            }
            other => panic!("expected EmptyTierList, got {other:?}"),
        }
    }

    #[test]
    fn blank_margins_fail_validation() {
        let mut theme = default_theme();
        theme.margin = "  ".to_string();
        assert!(matches!(theme.validate(), Err(ThemeError::EmptyMargin)));
    }
}
