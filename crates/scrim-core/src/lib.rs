#![forbid(unsafe_code)]

//! Geometry and input event types for ScrimTUI.
//!
//! This crate is the dependency root of the workspace: it defines the cell
//! grid coordinate types and the host-injected input events that every other
//! crate builds on. It deliberately has no terminal backend; events are fed
//! in by the embedding application.

pub mod event;
pub mod geometry;
