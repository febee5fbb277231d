//! Responsive breakpoint tiers for Weft stylesheets.

use std::fmt::{Display, Formatter};

/// The five responsive tiers, smallest to largest.
///
/// Tier order doubles as the index order for per-tier token lists:
/// `xs` is position 0 and `xl` is position 4.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Breakpoint {
    /// Compact phones (`xs`) - 0px
    Xs,
    /// Phones in landscape (`sm`) - 481px
    Sm,
    /// Tablets (`md`) - 769px
    Md,
    /// Laptops and desktops (`lg`) - 1025px
    Lg,
    /// Wide and high-density displays (`xl`) - 2561px
    Xl,
}

impl Breakpoint {
    /// All tiers in ascending width order.
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// Minimum viewport width for this tier, in pixels.
    pub const fn min_width(self) -> u32 {
        match self {
            Self::Xs => 0,
            Self::Sm => 481,
            Self::Md => 769,
            Self::Lg => 1025,
            Self::Xl => 2561,
        }
    }

    /// Stable tier label used in CSS variable names.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Zero-based position in the ascending tier order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Media query targeting viewports up to this tier's threshold.
    ///
    /// ```
    /// use weft_theme::Breakpoint;
    ///
    /// assert_eq!(
    ///     Breakpoint::Sm.media_query(),
    ///     "@media screen and (max-width: 481px)"
    /// );
    /// ```
    pub fn media_query(self) -> String {
        format!("@media screen and (max-width: {}px)", self.min_width())
    }
}

impl Display for Breakpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::Breakpoint;

    #[test]
    fn tiers_ascend_strictly() {
        let widths: Vec<u32> = Breakpoint::ALL.iter().map(|b| b.min_width()).collect();
        for pair in widths.windows(2) {
            assert!(
                pair[0] < pair[1],
                "thresholds must strictly increase: {widths:?}"
            );
        }
    }

    #[test]
    fn indices_match_catalog_positions() {
        for (position, breakpoint) in Breakpoint::ALL.iter().enumerate() {
            assert_eq!(breakpoint.index(), position);
        }
    }

    #[test]
    fn labels_and_thresholds_are_stable() {
        assert_eq!(Breakpoint::Xs.label(), "xs");
        assert_eq!(Breakpoint::Xs.min_width(), 0);
        assert_eq!(Breakpoint::Sm.min_width(), 481);
        assert_eq!(Breakpoint::Md.min_width(), 769);
        assert_eq!(Breakpoint::Lg.min_width(), 1025);
        assert_eq!(Breakpoint::Xl.min_width(), 2561);
    }

    #[test]
    fn media_query_targets_the_tier_threshold() {
        assert_eq!(
            Breakpoint::Md.media_query(),
            "@media screen and (max-width: 769px)"
        );
    }
}
