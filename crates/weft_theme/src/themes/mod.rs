//! Built-in Weft themes.

mod builtin;

pub use builtin::{default_theme, midnight_theme, BuiltinTheme};
