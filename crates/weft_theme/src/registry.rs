//! Startup-populated catalog of named themes.

use crate::error::ThemeError;
use crate::theme::Theme;
use crate::themes::BuiltinTheme;
use indexmap::IndexMap;
use serde::Deserialize;
use std::sync::Arc;

/// The conventional name of a registry's starting theme.
pub const DEFAULT_THEME: &str = "default";

/// Named themes, in registration order.
///
/// A registry is populated once at startup (built-ins, code, or TOML
/// documents) and then handed to a [`ThemeStore`](crate::ThemeStore).
/// Lookups return shared handles, so selecting a theme never clones
/// theme data.
#[derive(Clone, Debug, Default)]
pub struct ThemeRegistry {
    themes: IndexMap<String, Arc<Theme>>,
}

/// Shape of a TOML theme document: one `[themes.<name>]` table per theme.
#[derive(Debug, Deserialize)]
struct ThemeDocument {
    themes: IndexMap<String, Theme>,
}

impl ThemeRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the built-in themes, `default` first.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for builtin in BuiltinTheme::all() {
            registry
                .register(builtin.name(), builtin.theme())
                .expect("built-in themes are valid");
        }
        registry
    }

    /// Register a theme under `name`.
    ///
    /// Fails if the name is already taken or the theme is malformed; a
    /// failed registration leaves the registry unchanged.
    pub fn register(&mut self, name: impl Into<String>, theme: Theme) -> Result<(), ThemeError> {
        let name = name.into();
        if self.themes.contains_key(&name) {
            return Err(ThemeError::DuplicateTheme { name });
        }
        theme.validate()?;

        tracing::debug!("ThemeRegistry::register - adding theme {:?}", name);
        self.themes.insert(name, Arc::new(theme));
        Ok(())
    }

    /// Look up a theme by name.
    pub fn get(&self, name: &str) -> Result<Arc<Theme>, ThemeError> {
        self.themes
            .get(name)
            .cloned()
            .ok_or_else(|| ThemeError::UnknownTheme {
                requested: name.to_string(),
                available: self.themes.keys().cloned().collect(),
            })
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// Number of registered themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// The entry a store starts on: [`DEFAULT_THEME`] when registered,
    /// otherwise the first registered theme. Fails on an empty registry.
    pub fn default_entry(&self) -> Result<Arc<Theme>, ThemeError> {
        if let Some(theme) = self.themes.get(DEFAULT_THEME) {
            return Ok(theme.clone());
        }
        self.themes
            .values()
            .next()
            .cloned()
            .ok_or_else(|| ThemeError::UnknownTheme {
                requested: DEFAULT_THEME.to_string(),
                available: Vec::new(),
            })
    }

    /// Parse a TOML theme document and register every theme in it, in
    /// document order.
    ///
    /// The whole document is checked first; a name collision or a
    /// malformed theme fails the load and leaves the registry unchanged.
    ///
    /// Document shape:
    ///
    /// ```toml
    /// [themes.paper]
    /// margin = "24px"
    ///
    /// [themes.paper.palette]
    /// black = "#221F1A"
    /// # ...
    /// ```
    pub fn extend_from_toml_str(&mut self, document: &str) -> Result<(), ThemeError> {
        let document: ThemeDocument = toml::from_str(document)?;
        for (name, theme) in &document.themes {
            if self.themes.contains_key(name) {
                return Err(ThemeError::DuplicateTheme { name: name.clone() });
            }
            theme.validate()?;
        }
        for (name, theme) in document.themes {
            self.register(name, theme)?;
        }
        Ok(())
    }

    /// Registry built from a TOML theme document alone.
    pub fn from_toml_str(document: &str) -> Result<Self, ThemeError> {
        let mut registry = Self::new();
        registry.extend_from_toml_str(document)?;
        Ok(registry)
    }
}
