#![forbid(unsafe_code)]

//! Motion preference detection.

use std::env;

/// User preference for animated transitions.
///
/// Widgets honoring [`MotionPreference::Reduced`] collapse their animation
/// durations to zero so state changes apply on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MotionPreference {
    /// Animations run at their configured durations.
    #[default]
    Full,
    /// Animations complete immediately.
    Reduced,
}

impl MotionPreference {
    /// Detect the preference from the `SCRIM_REDUCED_MOTION` environment
    /// variable. Unset, empty, `0`, and `false` mean full motion.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_env_value(env::var("SCRIM_REDUCED_MOTION").ok().as_deref())
    }

    /// Interpret an environment variable value.
    #[must_use]
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::Full,
            Some(v) if v.eq_ignore_ascii_case("0") || v.eq_ignore_ascii_case("false") => {
                Self::Full
            }
            Some(_) => Self::Reduced,
        }
    }

    /// Whether animations should be skipped.
    #[must_use]
    pub const fn is_reduced(self) -> bool {
        matches!(self, Self::Reduced)
    }
}
