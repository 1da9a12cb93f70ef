#![forbid(unsafe_code)]

//! Render kernel for ScrimTUI: cells, buffers, frames, and text extraction.
//!
//! The kernel knows nothing about widgets or themes. It offers:
//!
//! - [`cell`]: packed RGBA colors and cell content/attributes.
//! - [`grapheme_pool`]: interning for multi-codepoint clusters.
//! - [`buffer`]: a rectangular grid of cells.
//! - [`frame`]: a buffer plus per-frame metadata (hit regions, extraction
//!   markers, selection suppression).
//! - [`extract`]: the "copy visible text" walk that honors the markers.

pub mod buffer;
pub mod cell;
pub mod extract;
pub mod frame;
pub mod grapheme_pool;
