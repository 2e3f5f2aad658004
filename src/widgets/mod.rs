//! Widget components for the settings UI.
//!
//! This module organizes all visual components into logical submodules:
//!
//! - [`rows`]: Settings rows (label, button, toggle) with hit testing
//! - [`toggle`]: The toggle switch itself (track + knob)
//! - [`keyboard`]: On-screen keyboard grid drawing and tap-to-token resolution
//! - [`dialog`]: Text-entry dialog chrome and the confirmation card
//!
//! # Architecture
//!
//! Widgets are stateless draw functions over `embedded-graphics` primitives;
//! all state lives in the sessions ([`crate::session`]) and the settings
//! store ([`crate::store`]). Hit-test helpers share the same const geometry
//! the draw functions use, so what you see is exactly what you can tap.
//!
//! # Optimizations Applied
//!
//! All widgets use the conventions from the [`styles`](crate::styles) module:
//! static `MonoTextStyle`/`TextStyle` constants, const `PrimitiveStyle`
//! fills/strokes, and pre-computed geometry from [`config`](crate::config).

pub mod dialog;
pub mod keyboard;
pub mod rows;
pub mod toggle;
