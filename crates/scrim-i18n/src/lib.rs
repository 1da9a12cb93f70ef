#![forbid(unsafe_code)]

//! Localization for ScrimTUI: string catalogs, locale detection, and
//! scoped locale overrides.
//!
//! - [`catalog`]: [`StringCatalog`] lookup with a fallback chain and
//!   `{name}` interpolation, plus the built-in widget strings.
//! - [`locale`]: system locale detection and the thread-local
//!   [`LocaleContext`] with RAII overrides.
//!
//! Zero dependencies; everything here is plain data.

pub mod catalog;
pub mod locale;

pub use catalog::{I18nError, Locale, LocaleStrings, StringCatalog};
pub use locale::{
    LocaleContext, LocaleOverride, current_locale, detect_system_locale, set_locale,
};
