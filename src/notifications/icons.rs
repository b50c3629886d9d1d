// SPDX-License-Identifier: MPL-2.0
//! Glyphs shown next to notifications.
//!
//! Icons are keyed by severity name plus the `group` pseudo-severity.
//! Overrides never mutate the defaults: [`resolve`] builds a fresh map
//! every time.

use crate::config::defaults::{
    DEFAULT_ERROR_ICON, DEFAULT_GROUP_ICON, DEFAULT_INFO_ICON, DEFAULT_SUCCESS_ICON,
    DEFAULT_WARNING_ICON, GROUP_ICON_KEY,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Severity;

/// Mapping from icon key to glyph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Icons(BTreeMap<String, String>);

impl Icons {
    /// Creates an empty icon map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the glyph for `key`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, glyph: impl Into<String>) -> Self {
        self.0.insert(key.into(), glyph.into());
        self
    }

    /// Returns the glyph for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Icons {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Built-in glyphs for every severity and for groups.
#[must_use]
pub fn defaults() -> Icons {
    Icons::new()
        .with(Severity::Info.as_str(), DEFAULT_INFO_ICON)
        .with(Severity::Warning.as_str(), DEFAULT_WARNING_ICON)
        .with(Severity::Error.as_str(), DEFAULT_ERROR_ICON)
        .with(Severity::Success.as_str(), DEFAULT_SUCCESS_ICON)
        .with(GROUP_ICON_KEY, DEFAULT_GROUP_ICON)
}

/// Shallow per-key merge: keys in `overrides` win.
#[must_use]
pub fn merge(base: &Icons, overrides: &Icons) -> Icons {
    let mut merged = base.clone();
    merged
        .0
        .extend(overrides.0.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Applies each layer of overrides, in order, over [`defaults`].
#[must_use]
pub fn resolve<'a>(layers: impl IntoIterator<Item = &'a Icons>) -> Icons {
    layers
        .into_iter()
        .fold(defaults(), |acc, layer| merge(&acc, layer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_severity_and_group() {
        let icons = defaults();
        for severity in Severity::ALL {
            assert!(icons.get(severity.as_str()).is_some());
        }
        assert_eq!(icons.get(GROUP_ICON_KEY), Some(DEFAULT_GROUP_ICON));
    }

    #[test]
    fn overrides_replace_single_keys_only() {
        let icons = resolve([&Icons::new().with("error", "!")]);
        assert_eq!(icons.get("error"), Some("!"));
        assert_eq!(icons.get("info"), Some(DEFAULT_INFO_ICON));
        assert_eq!(icons.len(), 5);
    }

    #[test]
    fn later_layers_take_precedence() {
        let manager = Icons::new().with("info", "i").with("warning", "w");
        let own = Icons::new().with("info", "I");
        let icons = resolve([&manager, &own]);
        assert_eq!(icons.get("info"), Some("I"));
        assert_eq!(icons.get("warning"), Some("w"));
    }

    #[test]
    fn resolving_does_not_touch_defaults() {
        let _ = resolve([&Icons::new().with("success", "ok")]);
        assert_eq!(defaults().get("success"), Some(DEFAULT_SUCCESS_ICON));
    }

    #[test]
    fn iter_lists_keys_in_order() {
        let icons = defaults();
        let keys: Vec<&str> = icons.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["error", "group", "info", "success", "warning"]);
    }

    #[test]
    fn unknown_key_is_none() {
        assert!(defaults().get("critical").is_none());
    }
}
