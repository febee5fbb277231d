//! Error types for theme configuration.

use thiserror::Error;

/// Errors raised while registering, loading, or selecting themes.
///
/// All of these are configuration mistakes: they surface at startup
/// (registration, theme-file parsing) or at the `select` call site, never
/// during CSS generation.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A name was looked up that no registry entry matches.
    #[error("unknown theme {requested:?} (registered themes: {})", .available.join(", "))]
    UnknownTheme {
        /// The name that was asked for.
        requested: String,
        /// Every registered name, in registration order.
        available: Vec<String>,
    },

    /// A per-tier list in a theme definition had no entries.
    #[error("per-tier list for {metric} of {style} can't be empty")]
    EmptyTierList {
        /// Text style the list belongs to.
        style: &'static str,
        /// Metric within the style.
        metric: &'static str,
    },

    /// A theme's margin was blank.
    #[error("theme margin must be a non-empty CSS length")]
    EmptyMargin,

    /// Two themes were registered under the same name.
    #[error("theme {name:?} is already registered")]
    DuplicateTheme {
        /// The contested name.
        name: String,
    },

    /// A theme document failed to parse.
    #[error("failed to parse theme document")]
    Parse(#[from] toml::de::Error),
}
