//! Key conventions.
//!
//! Maps a feature name to the storage key its flag lives at. Two forms are
//! accepted: a template with a single `%s` slot, or a plain prefix.
//! Templates follow printf escaping, so `%%` yields a literal `%`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default key pattern.
pub const DEFAULT_KEY_PATTERN: &str = "featureguard:%s";

/// Naming convention from feature name to storage key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum KeyPattern {
    /// Format string with one `%s` slot, e.g. `featureguard:%s`.
    ///
    /// `%%` renders as `%`. Only the first `%s` is filled; later `%s` and
    /// other `%` sequences are kept as written.
    Template(String),
    /// Prefix joined directly to the name, e.g. `featureguard:`.
    Prefix(String),
}

impl KeyPattern {
    /// Parse a configured pattern.
    ///
    /// An empty string selects [`DEFAULT_KEY_PATTERN`]. A string with an
    /// unescaped `%s` is a template; anything else is a prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use featureguard_core::KeyPattern;
    ///
    /// assert_eq!(KeyPattern::parse("flags:%s").derive("beta"), "flags:beta");
    /// assert_eq!(KeyPattern::parse("flags/").derive("beta"), "flags/beta");
    /// assert_eq!(KeyPattern::parse("").derive("beta"), "featureguard:beta");
    /// ```
    pub fn parse(pattern: &str) -> Self {
        if pattern.is_empty() {
            Self::default()
        } else if expand(pattern, "").1 {
            Self::Template(pattern.to_string())
        } else {
            Self::Prefix(pattern.to_string())
        }
    }

    /// Create a template pattern.
    pub fn template(template: impl Into<String>) -> Self {
        Self::Template(template.into())
    }

    /// Create a prefix pattern.
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self::Prefix(prefix.into())
    }

    /// Derive the storage key for a feature.
    pub fn derive(&self, feature: &str) -> String {
        match self {
            Self::Template(template) => expand(template, feature).0,
            Self::Prefix(prefix) => {
                let mut key = String::with_capacity(prefix.len() + feature.len());
                key.push_str(prefix);
                key.push_str(feature);
                key
            }
        }
    }

    /// The pattern as configured.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Template(s) | Self::Prefix(s) => s,
        }
    }
}

/// Render a template, returning the key and whether a slot was filled.
fn expand(template: &str, feature: &str) -> (String, bool) {
    let mut key = String::with_capacity(template.len() + feature.len());
    let mut filled = false;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            key.push(c);
            continue;
        }
        match chars.peek() {
            Some('%') => {
                chars.next();
                key.push('%');
            }
            Some('s') if !filled => {
                chars.next();
                key.push_str(feature);
                filled = true;
            }
            _ => key.push('%'),
        }
    }

    (key, filled)
}

impl Default for KeyPattern {
    fn default() -> Self {
        Self::Template(DEFAULT_KEY_PATTERN.to_string())
    }
}

impl fmt::Display for KeyPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for KeyPattern {
    fn from(pattern: &str) -> Self {
        Self::parse(pattern)
    }
}

impl From<String> for KeyPattern {
    fn from(pattern: String) -> Self {
        Self::parse(&pattern)
    }
}

impl From<Option<String>> for KeyPattern {
    fn from(pattern: Option<String>) -> Self {
        pattern.map(Self::from).unwrap_or_default()
    }
}

impl From<KeyPattern> for String {
    fn from(pattern: KeyPattern) -> Self {
        match pattern {
            KeyPattern::Template(s) | KeyPattern::Prefix(s) => s,
        }
    }
}
