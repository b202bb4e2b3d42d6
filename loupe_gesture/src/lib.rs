// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Gesture: mouse, touch, and pointer input normalized into gestures.
//!
//! Platforms deliver direct-manipulation input in different families: a
//! mouse with a wheel, raw multi-touch lists, or unified pointer events.
//! This crate turns each family into one small vocabulary of [`Gesture`]s
//! that a viewport can apply without caring where they came from:
//!
//! - [`drag`]: single-contact drag deltas for 1:1 panning.
//! - [`pinch`]: two-contact pinch with a fixed midpoint and a scale
//!   proportional to contact distance.
//! - [`tap`]: timestamp-based double-tap recognition.
//! - [`adapters`]: one [`InputAdapter`] per input family.
//! - [`GestureRouter`]: picks the wiring once from the platform's
//!   [`InputCapability`] and dispatches events to the adapters, which share
//!   one [`GestureSession`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use loupe_gesture::{Gesture, GestureRouter, InputCapability, PointerInput, PointerKind, PointerPhase};
//!
//! let mut router = GestureRouter::new(InputCapability::POINTER, Default::default());
//! let down = PointerInput::new(PointerPhase::Down, PointerKind::Touch, Point::new(10.0, 10.0), 0);
//! let moved = PointerInput::new(PointerPhase::Move, PointerKind::Touch, Point::new(15.0, 10.0), 16);
//!
//! router.route(&down.into(), 1.0);
//! let gestures = router.route(&moved.into(), 1.0).unwrap();
//! assert_eq!(gestures.as_slice(), &[Gesture::PanBy { delta: Vec2::new(5.0, 0.0) }]);
//! ```
//!
//! With the `ui-events` feature, [`UiEventConverter`] turns
//! `ui_events::pointer::PointerEvent`s into [`InputEvent`]s.
//!
//! This crate is `no_std`.

#![no_std]

pub mod adapters;
pub mod drag;
mod gesture;
mod input;
pub mod pinch;
mod router;
pub mod tap;
#[cfg(feature = "ui-events")]
mod ui_pointer;

pub use adapters::InputAdapter;
pub use gesture::{Gesture, GestureMode, GestureSession, Gestures, PointReason};
pub use input::{
    Contacts, InputEvent, MouseInput, PointerInput, PointerKind, PointerPhase, TouchInput,
    TouchPhase, WheelDelta,
};
pub use router::{GestureConfig, GestureRouter, InputCapability, Wiring};
#[cfg(feature = "ui-events")]
pub use ui_pointer::UiEventConverter;
