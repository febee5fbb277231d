//! Weft Theme System
//!
//! Design tokens for Weft web front-ends: a theme bundles a color
//! palette, a responsive type scale, and spacing, and renders into the
//! CSS custom properties Weft stylesheets consume.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Design tokens**: palette color groups and a seven-style responsive type scale
//! - **Responsive values**: per-breakpoint overrides with clamp-to-largest resolution
//! - **CSS generation**: deterministic `--name: value;` declaration blocks
//! - **Theme switching**: a registry of named themes plus an observable active-theme store
//!
//! # Quick Start
//!
//! ```rust
//! use weft_theme::{ThemeError, ThemeStore};
//!
//! # fn main() -> Result<(), ThemeError> {
//! let store = ThemeStore::builtin();
//!
//! // Inject the active theme into a stylesheet
//! let css = store.active().to_css_root_rule();
//! assert!(css.contains("--margin: 20px;"));
//!
//! // React to theme switches
//! let subscription = store.subscribe(|theme| {
//!     let _css = theme.to_css_variables();
//! });
//!
//! store.select("midnight")?;
//! subscription.unsubscribe();
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! Themes are immutable value objects: switching swaps which
//! registered [`Theme`] is active, never fields inside one. The store
//! notifies subscribers synchronously in registration order, so CSS can
//! be regenerated the moment a selection happens.
//!
//! # Tokens
//!
//! Tokens are the atomic values that make up the design system:
//!
//! - [`Palette`]: primary/secondary color groups plus base black/white
//! - [`TypographyTokens`]: font size, line height, letter spacing per text style
//! - [`ResponsiveValue`]: uniform or per-tier values resolved against [`Breakpoint`] tiers
//!
//! # Themes
//!
//! Built-in themes:
//!
//! - [`default_theme`]: stark black-on-white default
//! - [`midnight_theme`]: dark counterpart
//!
//! Further themes register at startup, either in code through
//! [`ThemeRegistry::register`] or declaratively through
//! [`ThemeRegistry::from_toml_str`].

pub mod breakpoint;
mod css;
pub mod error;
pub mod registry;
pub mod responsive;
pub mod store;
pub mod theme;
pub mod themes;
pub mod tokens;

// Re-export commonly used types
pub use breakpoint::Breakpoint;
pub use error::ThemeError;
pub use registry::{ThemeRegistry, DEFAULT_THEME};
pub use responsive::ResponsiveValue;
pub use store::{Subscription, ThemeCallback, ThemeStore};
pub use theme::Theme;
pub use themes::{default_theme, midnight_theme, BuiltinTheme};
pub use tokens::*;
