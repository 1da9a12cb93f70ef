#![forbid(unsafe_code)]

//! String catalog with locale fallback and interpolation.
//!
//! # Invariants
//!
//! 1. **Fallback chain terminates**: every lookup walks the chain exactly
//!    once, returning `None` if no locale provides the key.
//!
//! 2. **Interpolation is idempotent**: `format()` replaces `{name}` tokens
//!    using a single pass; nested or recursive substitution does not occur.
//!
//! 3. **Thread safety**: `StringCatalog` is `Send + Sync` (all data is
//!    immutable after construction).
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing key | Key not in any locale | `get` returns `None`, `translate` echoes the key |
//! | Missing locale | Locale not loaded | Falls through chain |
//! | Bad interpolation arg | `{name}` but no `name` arg | Token left as-is |
//! | Empty catalog | No locales loaded | All lookups return `None` |

use std::collections::HashMap;

/// Locale identifier (e.g., `"en"`, `"en-US"`, `"es"`).
pub type Locale = String;

/// Errors from i18n operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// No locale in the catalog (or its fallback chain) provides the key.
    MissingKey { locale: String, key: String },
}

impl std::fmt::Display for I18nError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingKey { locale, key } => {
                write!(f, "missing key '{key}' for locale '{locale}'")
            }
        }
    }
}

impl std::error::Error for I18nError {}

/// Strings for a single locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    strings: HashMap<String, String>,
}

impl LocaleStrings {
    /// Create an empty locale string set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a string, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    /// Look up a string by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the locale has no strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

/// Central string catalog with locale fallback.
///
/// # Example
///
/// ```
/// use scrim_i18n::catalog::{LocaleStrings, StringCatalog};
///
/// let mut catalog = StringCatalog::new();
///
/// let mut en = LocaleStrings::new();
/// en.insert("greeting", "Hello");
/// en.insert("welcome", "Welcome, {name}!");
/// catalog.add_locale("en", en);
/// catalog.set_fallback_chain(vec!["en".into()]);
///
/// assert_eq!(catalog.get("en", "greeting"), Some("Hello"));
/// assert_eq!(
///     catalog.format("en", "welcome", &[("name", "Alice")]),
///     Some("Welcome, Alice!".into())
/// );
/// ```
#[derive(Debug, Clone)]
pub struct StringCatalog {
    locales: HashMap<Locale, LocaleStrings>,
    fallback_chain: Vec<Locale>,
}

impl Default for StringCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl StringCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            locales: HashMap::new(),
            fallback_chain: Vec::new(),
        }
    }

    /// A catalog seeded with the built-in widget strings.
    ///
    /// Ships `en` and `es` with `en` as the fallback. Applications extend
    /// it with [`add_locale`](Self::add_locale) or replace entries by
    /// re-inserting keys.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut catalog = Self::new();

        let mut en = LocaleStrings::new();
        en.insert("modal.backdropLabel", "Modal Backdrop");
        catalog.add_locale("en", en);

        let mut es = LocaleStrings::new();
        es.insert("modal.backdropLabel", "Fondo del modal");
        catalog.add_locale("es", es);

        catalog.set_fallback_chain(vec!["en".into()]);
        catalog
    }

    /// Add strings for a locale, merging over any already present.
    pub fn add_locale(&mut self, locale: impl Into<String>, strings: LocaleStrings) {
        let locale = locale.into();
        match self.locales.get_mut(&locale) {
            Some(existing) => existing.strings.extend(strings.strings),
            None => {
                self.locales.insert(locale, strings);
            }
        }
    }

    /// Set the fallback chain (tried in order when a key is missing).
    ///
    /// Example: `["es-MX", "es", "en"]` tries Mexican Spanish, then
    /// generic Spanish, then English.
    pub fn set_fallback_chain(&mut self, chain: Vec<Locale>) {
        self.fallback_chain = chain;
    }

    /// Look up a string by key.
    ///
    /// Tries the specified locale first, then walks the fallback chain.
    /// Returns `None` if no locale provides the key.
    #[must_use]
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        if let Some(value) = self.locales.get(locale).and_then(|ls| ls.get(key)) {
            return Some(value);
        }

        for fallback in &self.fallback_chain {
            if fallback == locale {
                continue; // Already tried
            }
            if let Some(value) = self.locales.get(fallback.as_str()).and_then(|ls| ls.get(key)) {
                return Some(value);
            }
        }

        None
    }

    /// Like [`get`](Self::get), but a missing key is an error.
    pub fn require(&self, locale: &str, key: &str) -> Result<&str, I18nError> {
        self.get(locale, key).ok_or_else(|| I18nError::MissingKey {
            locale: locale.to_string(),
            key: key.to_string(),
        })
    }

    /// Look up a string, echoing the key itself when nothing provides it.
    ///
    /// This is the lookup UI code wants: a missing translation shows up as
    /// the key on screen instead of failing the render.
    #[must_use]
    pub fn translate(&self, locale: &str, key: &str) -> String {
        self.get(locale, key).unwrap_or(key).to_string()
    }

    /// Look up a string and perform `{key}` interpolation.
    ///
    /// Each `(name, value)` pair in `args` replaces `{name}` in the
    /// template string. Tokens without matching args are left as-is.
    #[must_use]
    pub fn format(&self, locale: &str, key: &str, args: &[(&str, &str)]) -> Option<String> {
        self.get(locale, key)
            .map(|template| interpolate(template, args))
    }

    /// All registered locale tags.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        self.locales.keys().map(String::as_str).collect()
    }
}

/// Single-pass `{name}` interpolation. Unmatched tokens left as-is.
fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch == '{' {
            // Try to read a token name until '}'
            let mut token = String::new();
            let mut found_close = false;
            for c in chars.by_ref() {
                if c == '}' {
                    found_close = true;
                    break;
                }
                token.push(c);
            }

            if found_close {
                if let Some(&(_, value)) = args.iter().find(|&&(name, _)| name == token) {
                    result.push_str(value);
                } else {
                    // No match: leave token as-is
                    result.push('{');
                    result.push_str(&token);
                    result.push('}');
                }
            } else {
                // Unclosed brace: emit as-is
                result.push('{');
                result.push_str(&token);
            }
        } else {
            result.push(ch);
        }
    }

    result
}
