//! Design tokens for theming
//!
//! Tokens are the atomic values that make up the design system:
//! - Palette (color groups plus the base black/white pair)
//! - Typography (responsive font size, line height, letter spacing)

mod palette;
mod typography;

pub use palette::*;
pub use typography::*;
