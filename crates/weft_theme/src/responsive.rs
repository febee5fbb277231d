//! Values that vary by breakpoint tier.

use crate::breakpoint::Breakpoint;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A token value that is either uniform or overridden per tier.
///
/// `PerTier` lists values positionally, `xs` first. The list may stop
/// short of the five tiers: tiers past the end inherit the last entry,
/// so `[1.0, 2.0]` means 1.0 at `xs` and 2.0 from `sm` up.
///
/// In theme files a bare scalar is `Uniform` and an array is `PerTier`:
///
/// ```toml
/// line_height = 1.8
/// font_size = [1.5, 1.5, 2.0]
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ResponsiveValue<T> {
    /// One value for every tier.
    Uniform(T),
    /// Ascending per-tier overrides, `xs` first. Never empty in a
    /// validated theme.
    PerTier(Vec<T>),
}

impl<T: Clone> ResponsiveValue<T> {
    /// Resolve the effective value at a tier index (0 = `xs`).
    ///
    /// Indices past the end of a per-tier list clamp to the last entry
    /// rather than erroring, so oversized indices are always safe.
    ///
    /// # Panics
    ///
    /// Panics on an empty `PerTier` list. Lists that came through
    /// deserialization or [`Theme::validate`](crate::Theme::validate)
    /// are never empty.
    pub fn resolve(&self, tier: usize) -> T {
        match self {
            Self::Uniform(value) => value.clone(),
            Self::PerTier(values) => {
                let last = values.len() - 1;
                values[tier.min(last)].clone()
            }
        }
    }

    /// Resolve the effective value at a named breakpoint.
    pub fn at(&self, breakpoint: Breakpoint) -> T {
        self.resolve(breakpoint.index())
    }
}

impl<T: Serialize> Serialize for ResponsiveValue<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Uniform(value) => value.serialize(serializer),
            Self::PerTier(values) => values.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ResponsiveValue<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ScalarOrList<T> {
            Scalar(T),
            List(Vec<T>),
        }

        match ScalarOrList::<T>::deserialize(deserializer)? {
            ScalarOrList::Scalar(value) => Ok(Self::Uniform(value)),
            ScalarOrList::List(values) => {
                if values.is_empty() {
                    Err(de::Error::custom("per-tier list can't be empty"))
                } else {
                    Ok(Self::PerTier(values))
                }
            }
        }
    }
}
