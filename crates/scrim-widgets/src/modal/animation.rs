#![forbid(unsafe_code)]

//! Fade animation primitive for the modal backdrop.
//!
//! This module provides:
//! - A CSS-style cubic-bezier easing solver
//! - Two-keyframe opacity fades (entering / exiting)
//! - A memoized descriptor cache with an observable generation counter
//! - The fade playback phase machine
//!
//! # Invariants
//!
//! - Raw progress is always in `[0.0, 1.0]`; easing applies at sample time.
//! - Sampled opacity stays within the keyframe endpoints.
//! - Reversing a fade in flight inverts the raw fraction, which preserves
//!   the displayed opacity under the default curve (point-symmetric).
//!
//! # Failure Modes
//!
//! - Zero-duration fades complete on the first tick.
//! - Opacity targets outside `[0.0, 1.0]` are clamped at descriptor build.

use std::time::Duration;

use scrim_a11y::MotionPreference;

/// Default fade-in duration.
pub const FADE_IN_DEFAULT: Duration = Duration::from_millis(300);
/// Default fade-out duration.
pub const FADE_OUT_DEFAULT: Duration = Duration::from_millis(200);

/// The fixed backdrop fade curve: a slow start, a fast middle, and a long
/// settle. Point-symmetric about (0.5, 0.5), so fade-in and fade-out mirror
/// each other.
pub const BACKDROP_CURVE: CubicBezier = CubicBezier::new(0.76, 0.0, 0.24, 1.0);

const SOLVER_NEWTON_ITERATIONS: usize = 8;
const SOLVER_EPSILON: f32 = 1e-5;

// ============================================================================
// Cubic Bezier
// ============================================================================

/// A CSS-style cubic bezier easing curve through `(0,0)` and `(1,1)`.
///
/// Control-point x values are expected in `[0, 1]` (as in CSS
/// `cubic-bezier`); the solver clamps its output so stray inputs cannot
/// produce parameters outside the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    /// Curve with control points `(x1, y1)` and `(x2, y2)`.
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample_x(&self, t: f32) -> f32 {
        // Horner form of the polynomial with implicit P0 = (0,0), P3 = (1,1).
        let cx = 3.0 * self.x1;
        let bx = 3.0 * (self.x2 - self.x1) - cx;
        let ax = 1.0 - cx - bx;
        ((ax * t + bx) * t + cx) * t
    }

    fn sample_y(&self, t: f32) -> f32 {
        let cy = 3.0 * self.y1;
        let by = 3.0 * (self.y2 - self.y1) - cy;
        let ay = 1.0 - cy - by;
        ((ay * t + by) * t + cy) * t
    }

    fn sample_dx(&self, t: f32) -> f32 {
        let cx = 3.0 * self.x1;
        let bx = 3.0 * (self.x2 - self.x1) - cx;
        let ax = 1.0 - cx - bx;
        (3.0 * ax * t + 2.0 * bx) * t + cx
    }

    /// Find the curve parameter whose x coordinate matches `x`.
    ///
    /// Newton-Raphson from the linear guess; bisection when the derivative
    /// is too flat to make progress.
    fn solve_t_for_x(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..SOLVER_NEWTON_ITERATIONS {
            let err = self.sample_x(t) - x;
            if err.abs() < SOLVER_EPSILON {
                return t.clamp(0.0, 1.0);
            }
            let dx = self.sample_dx(t);
            if dx.abs() < 1e-6 {
                break;
            }
            t -= err / dx;
        }

        let mut lo = 0.0_f32;
        let mut hi = 1.0_f32;
        t = x.clamp(lo, hi);
        while hi - lo > SOLVER_EPSILON {
            if self.sample_x(t) < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Eased progress for a time fraction `x`, clamped to `[0, 1]`.
    #[must_use]
    pub fn eval(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        self.sample_y(self.solve_t_for_x(x))
    }
}

// ============================================================================
// Easing
// ============================================================================

/// Easing function applied to fade progress.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Smooth ease-in (accelerating).
    EaseIn,
    /// Smooth ease-out (decelerating).
    EaseOut,
    /// Smooth S-curve.
    EaseInOut,
    /// An arbitrary cubic-bezier curve.
    Bezier(CubicBezier),
}

impl Default for Easing {
    fn default() -> Self {
        Self::Bezier(BACKDROP_CURVE)
    }
}

impl Easing {
    /// Apply the easing to a progress value, clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
            Self::Bezier(curve) => curve.eval(t),
        }
    }
}

// ============================================================================
// Fade Keyframes
// ============================================================================

/// A two-keyframe opacity fade: `from` at time zero, `to` at `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeKeyframes {
    from: f32,
    to: f32,
    duration: Duration,
    easing: Easing,
}

impl FadeKeyframes {
    /// Fade in from fully transparent to `target`.
    #[must_use]
    pub fn entering(target: f32, timing: Duration) -> Self {
        Self {
            from: 0.0,
            to: target.clamp(0.0, 1.0),
            duration: timing,
            easing: Easing::default(),
        }
    }

    /// Fade out from `target` to fully transparent.
    #[must_use]
    pub fn exiting(target: f32, timing: Duration) -> Self {
        Self {
            from: target.clamp(0.0, 1.0),
            to: 0.0,
            duration: timing,
            easing: Easing::default(),
        }
    }

    /// Replace the easing curve.
    #[must_use]
    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The keyframe endpoints `(from, to)`.
    #[must_use]
    pub const fn endpoints(&self) -> (f32, f32) {
        (self.from, self.to)
    }

    /// The fade duration.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Opacity after `elapsed` time, clamped to the keyframe range outside
    /// the duration. A zero-duration fade is already at `to`.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let fraction = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        self.sample_fraction(fraction)
    }

    /// Opacity at a progress fraction in `[0, 1]`.
    #[must_use]
    pub fn sample_fraction(&self, fraction: f32) -> f32 {
        let eased = self.easing.apply(fraction);
        self.from + (self.to - self.from) * eased
    }
}

// ============================================================================
// Keyframe Cache
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
struct CacheKey {
    target: f32,
    duration: Duration,
}

/// Memoized entering/exiting fade descriptors.
///
/// A descriptor is rebuilt only when the `(target, duration)` pair it was
/// built from changes; the easing in effect is captured at rebuild time.
/// The generation counter increments on every rebuild, making reuse
/// observable.
#[derive(Debug, Clone, Default)]
pub struct KeyframeCache {
    entering: Option<(CacheKey, FadeKeyframes)>,
    exiting: Option<(CacheKey, FadeKeyframes)>,
    generation: u64,
}

impl KeyframeCache {
    /// An empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The entering descriptor for `(target, timing)`.
    pub fn entering(&mut self, target: f32, timing: Duration, easing: Easing) -> FadeKeyframes {
        let key = CacheKey {
            target,
            duration: timing,
        };
        if let Some((cached, frames)) = self.entering
            && cached == key
        {
            return frames;
        }
        let frames = FadeKeyframes::entering(target, timing).easing(easing);
        self.entering = Some((key, frames));
        self.generation += 1;
        frames
    }

    /// The exiting descriptor for `(target, timing)`.
    pub fn exiting(&mut self, target: f32, timing: Duration, easing: Easing) -> FadeKeyframes {
        let key = CacheKey {
            target,
            duration: timing,
        };
        if let Some((cached, frames)) = self.exiting
            && cached == key
        {
            return frames;
        }
        let frames = FadeKeyframes::exiting(target, timing).easing(easing);
        self.exiting = Some((key, frames));
        self.generation += 1;
        frames
    }

    /// Number of descriptor rebuilds since creation.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

// ============================================================================
// Fade Config
// ============================================================================

/// Fade timing configuration for the backdrop.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct FadeConfig {
    /// Fade-in duration.
    pub fade_in: Duration,
    /// Fade-out duration.
    pub fade_out: Duration,
    /// Easing applied in both directions.
    pub easing: Easing,
    /// Whether a reduced-motion preference collapses the fade.
    pub respect_reduced_motion: bool,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            fade_in: FADE_IN_DEFAULT,
            fade_out: FADE_OUT_DEFAULT,
            easing: Easing::default(),
            respect_reduced_motion: true,
        }
    }
}

impl FadeConfig {
    /// Create a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration with zero-duration fades (instant show/hide).
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            fade_in: Duration::ZERO,
            fade_out: Duration::ZERO,
            easing: Easing::Linear,
            respect_reduced_motion: true,
        }
    }

    /// Set the fade-in duration.
    #[must_use]
    pub const fn fade_in(mut self, duration: Duration) -> Self {
        self.fade_in = duration;
        self
    }

    /// Set the fade-out duration.
    #[must_use]
    pub const fn fade_out(mut self, duration: Duration) -> Self {
        self.fade_out = duration;
        self
    }

    /// Set the easing curve.
    #[must_use]
    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set whether reduced motion collapses the fade.
    #[must_use]
    pub const fn respect_reduced_motion(mut self, respect: bool) -> Self {
        self.respect_reduced_motion = respect;
        self
    }

    /// Whether both fades are zero-duration.
    #[must_use]
    pub const fn is_instant(&self) -> bool {
        self.fade_in.is_zero() && self.fade_out.is_zero()
    }

    /// The effective configuration under a motion preference.
    #[must_use]
    pub fn effective(&self, motion: MotionPreference) -> Self {
        if motion.is_reduced() && self.respect_reduced_motion {
            Self::instant()
        } else {
            *self
        }
    }
}

// ============================================================================
// Phase Machine
// ============================================================================

/// Playback phase of the backdrop fade.
///
/// State machine: `Hidden → FadingIn → Shown → FadingOut → Hidden`, with
/// reversal allowed mid-flight from either fading phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum BackdropPhase {
    /// Nothing is painted.
    #[default]
    Hidden,
    /// Fade-in in progress.
    FadingIn,
    /// Fully shown at the target opacity.
    Shown,
    /// Fade-out in progress.
    FadingOut,
}

impl BackdropPhase {
    /// Whether the backdrop paints anything in this phase.
    #[inline]
    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Whether a fade is in progress.
    #[inline]
    #[must_use]
    pub const fn is_animating(self) -> bool {
        matches!(self, Self::FadingIn | Self::FadingOut)
    }
}

/// Fade playback for one backdrop: the phase plus raw progress.
///
/// Progress is the raw time fraction; easing applies when sampling through
/// the keyframe descriptors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct BackdropAnimation {
    phase: BackdropPhase,
    progress: f32,
}

impl Default for BackdropAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl BackdropAnimation {
    /// Start hidden.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: BackdropPhase::Hidden,
            progress: 0.0,
        }
    }

    /// Start fully shown (no fade-in).
    #[must_use]
    pub const fn shown() -> Self {
        Self {
            phase: BackdropPhase::Shown,
            progress: 1.0,
        }
    }

    /// The current phase.
    #[must_use]
    pub const fn phase(&self) -> BackdropPhase {
        self.phase
    }

    /// Raw progress fraction in `[0, 1]`.
    #[must_use]
    pub const fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether anything should be painted.
    #[inline]
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.phase.is_visible()
    }

    /// Whether another frame is needed.
    #[inline]
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }

    /// Begin fading in.
    ///
    /// Reverses a fade-out in flight by inverting its progress, so the
    /// displayed opacity carries over. No-op when already showing or shown.
    pub fn show(&mut self) {
        match self.phase {
            BackdropPhase::Hidden => {
                self.phase = BackdropPhase::FadingIn;
                self.progress = 0.0;
            }
            BackdropPhase::FadingOut => {
                self.phase = BackdropPhase::FadingIn;
                self.progress = 1.0 - self.progress;
            }
            BackdropPhase::FadingIn | BackdropPhase::Shown => {}
        }
    }

    /// Begin fading out.
    ///
    /// Reverses a fade-in in flight by inverting its progress. No-op when
    /// already hiding or hidden.
    pub fn hide(&mut self) {
        match self.phase {
            BackdropPhase::Shown => {
                self.phase = BackdropPhase::FadingOut;
                self.progress = 0.0;
            }
            BackdropPhase::FadingIn => {
                self.phase = BackdropPhase::FadingOut;
                self.progress = 1.0 - self.progress;
            }
            BackdropPhase::FadingOut | BackdropPhase::Hidden => {}
        }
    }

    /// Jump to fully shown without animating.
    pub fn force_show(&mut self) {
        self.phase = BackdropPhase::Shown;
        self.progress = 1.0;
    }

    /// Jump to fully hidden without animating.
    pub fn force_hide(&mut self) {
        self.phase = BackdropPhase::Hidden;
        self.progress = 0.0;
    }

    /// Advance playback by `delta`. Returns `true` when the phase changed.
    pub fn tick(&mut self, delta: Duration, config: &FadeConfig) -> bool {
        let delta_secs = delta.as_secs_f32();

        match self.phase {
            BackdropPhase::FadingIn => {
                let duration = config.fade_in.as_secs_f32();
                if duration > 0.0 {
                    self.progress += delta_secs / duration;
                } else {
                    self.progress = 1.0;
                }
                self.progress = self.progress.min(1.0);
                if self.progress >= 1.0 {
                    self.phase = BackdropPhase::Shown;
                    self.progress = 1.0;
                    #[cfg(feature = "tracing")]
                    tracing::trace!(phase = ?self.phase, "backdrop fade complete");
                    return true;
                }
            }
            BackdropPhase::FadingOut => {
                let duration = config.fade_out.as_secs_f32();
                if duration > 0.0 {
                    self.progress += delta_secs / duration;
                } else {
                    self.progress = 1.0;
                }
                self.progress = self.progress.min(1.0);
                if self.progress >= 1.0 {
                    self.phase = BackdropPhase::Hidden;
                    self.progress = 0.0;
                    #[cfg(feature = "tracing")]
                    tracing::trace!(phase = ?self.phase, "backdrop fade complete");
                    return true;
                }
            }
            BackdropPhase::Shown | BackdropPhase::Hidden => {}
        }

        false
    }

    /// Current opacity toward `target`, sampling through `cache`.
    ///
    /// `Hidden` is 0, `Shown` is the clamped target; the fading phases
    /// sample the entering/exiting descriptors at the raw progress.
    pub fn opacity(&self, target: f32, config: &FadeConfig, cache: &mut KeyframeCache) -> f32 {
        match self.phase {
            BackdropPhase::Hidden => 0.0,
            BackdropPhase::Shown => target.clamp(0.0, 1.0),
            BackdropPhase::FadingIn => cache
                .entering(target, config.fade_in, config.easing)
                .sample_fraction(self.progress),
            BackdropPhase::FadingOut => cache
                .exiting(target, config.fade_out, config.easing)
                .sample_fraction(self.progress),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
