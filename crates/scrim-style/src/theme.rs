#![forbid(unsafe_code)]

//! Themes and the process-wide current theme.
//!
//! The current theme lives behind an [`ArcSwap`] so render paths can load
//! it lock-free while a settings screen swaps it from another thread. Theme
//! switches are logged at debug level.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

use crate::color::Color;
use crate::style::Style;

/// Default opacity of the modal dimming layer.
pub const DEFAULT_OVERLAY_OPACITY: f32 = 0.72;

/// A named color scheme.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    name: String,
    backdrop: Color,
    text: Color,
    overlay_opacity: f32,
}

impl Theme {
    /// Create a theme with the default overlay opacity.
    #[must_use]
    pub fn new(name: impl Into<String>, backdrop: Color, text: Color) -> Self {
        Self {
            name: name.into(),
            backdrop,
            text,
            overlay_opacity: DEFAULT_OVERLAY_OPACITY,
        }
    }

    /// The built-in dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Self::new("dark", Color::rgb(0, 0, 0), Color::rgb(229, 229, 229))
    }

    /// The built-in light theme. Overlays stay dark so dimming reads as
    /// dimming on light surfaces too.
    #[must_use]
    pub fn light() -> Self {
        Self::new("light", Color::rgb(0, 0, 0), Color::rgb(23, 23, 23))
    }

    /// Replace the overlay opacity, clamped to `[0.0, 1.0]`.
    #[must_use]
    pub fn with_overlay_opacity(mut self, opacity: f32) -> Self {
        self.overlay_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// The theme's registry name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opacity used for modal dimming layers unless a widget overrides it.
    #[must_use]
    pub const fn overlay_opacity(&self) -> f32 {
        self.overlay_opacity
    }

    /// Color of the modal dimming layer.
    #[must_use]
    pub const fn backdrop_color(&self) -> Color {
        self.backdrop
    }

    /// Default text color.
    #[must_use]
    pub const fn text_color(&self) -> Color {
        self.text
    }

    /// Style of the dimming surface a modal paints over the screen.
    #[must_use]
    pub fn modal_backdrop(&self) -> Style {
        Style::new().bg(self.backdrop)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

static CURRENT: LazyLock<ArcSwap<Theme>> = LazyLock::new(|| ArcSwap::from_pointee(Theme::dark()));

/// The process-wide current theme.
#[must_use]
pub fn current_theme() -> Arc<Theme> {
    CURRENT.load_full()
}

/// Swap the process-wide current theme.
pub fn set_current_theme(theme: Theme) {
    tracing::debug!(theme = %theme.name, "theme switched");
    CURRENT.store(Arc::new(theme));
}

/// Named themes, seeded with the built-ins.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: HashMap<String, Arc<Theme>, ahash::RandomState>,
}

impl ThemeRegistry {
    /// A registry holding the built-in `dark` and `light` themes.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            themes: HashMap::default(),
        };
        registry.register(Theme::dark());
        registry.register(Theme::light());
        registry
    }

    /// Add or replace a theme under its own name.
    pub fn register(&mut self, theme: Theme) {
        self.themes.insert(theme.name.clone(), Arc::new(theme));
    }

    /// Look up a theme by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<Theme>> {
        self.themes.get(name)
    }

    /// Make a registered theme the process-wide current one.
    ///
    /// Returns `false` (and logs a warning) when the name is unknown; the
    /// current theme is left unchanged.
    pub fn activate(&self, name: &str) -> bool {
        let Some(theme) = self.themes.get(name) else {
            tracing::warn!(theme = name, "theme not registered");
            return false;
        };
        tracing::debug!(theme = name, "theme switched");
        CURRENT.store(Arc::clone(theme));
        true
    }

    /// Registered theme names, in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// Number of registered themes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether the registry holds no themes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
