#![forbid(unsafe_code)]

//! Accessibility layer for ScrimTUI.
//!
//! Two concerns live here:
//!
//! - [`registry`]: the frame-parallel [`A11yRegistry`] widgets register
//!   semantic nodes into (role, label, area).
//! - [`motion`]: the user's [`MotionPreference`], detected from the
//!   environment, which animation-bearing widgets consult.

pub mod motion;
pub mod registry;

pub use motion::MotionPreference;
pub use registry::{A11yId, A11yNode, A11yRegistry, AccessibleProps, Role};
