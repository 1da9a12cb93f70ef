#![forbid(unsafe_code)]

//! Modal backdrop: the dimmed scrim behind a dialog, with fade playback and
//! tap-to-dismiss.
//!
//! The [`Backdrop`] widget paints a full-area dimming layer whose opacity is
//! driven by [`BackdropState`] fade playback. By default the surface is
//! tap-sensitive (one hit region, an accessibility node, and extraction
//! markers); with [`Backdrop::custom`] it instead wraps caller content in
//! the same fade without any press handling.
//!
//! # Example
//!
//! ```ignore
//! use scrim_widgets::modal::{Backdrop, BackdropState};
//!
//! let backdrop = Backdrop::new().hit_id(HitId::new(1));
//! let mut state = BackdropState::new();
//!
//! state.show();
//! loop {
//!     state.tick_now(&FadeConfig::default());
//!     backdrop.render(screen, &mut frame, &mut state);
//!     if !state.is_animating() { break; }
//! }
//! ```

mod animation;
mod backdrop;

pub use animation::{
    BACKDROP_CURVE, BackdropAnimation, BackdropPhase, CubicBezier, Easing, FADE_IN_DEFAULT,
    FADE_OUT_DEFAULT, FadeConfig, FadeKeyframes, KeyframeCache,
};
pub use backdrop::{
    BACKDROP_HIT, Backdrop, BackdropAction, BackdropContent, BackdropState, NoContent,
};
