// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe View: transform primitives for an interactive media viewport.
//!
//! This crate models how a single piece of media (an image, a vector
//! document, a video frame) is placed inside a fixed-size container. It
//! provides:
//! - [`ViewParam`]: a uniform scale, a translation, and a rotation mapping
//!   media pixels onto the container.
//! - [`FitSolver`]: the transform that inscribes the rotated media inside the
//!   container and centers it.
//! - [`BoundsClamp`]: pulls a panned or zoomed transform back so the media
//!   never drifts out of view, and refuses zooming out past the fit.
//! - [`TransformAnimator`]: a frame-driven state machine that rotates first
//!   and then eases scale and translation toward a target.
//!
//! It does **not** own a drawing surface, a clock, or input handling.
//! Callers are expected to render after every change and to drive the
//! animator from their own frame callback.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use loupe_view::{BoundsClamp, FitSolver, ScaleLimits};
//!
//! let media = Size::new(400.0, 300.0);
//! let container = Size::new(200.0, 150.0);
//!
//! let limits = ScaleLimits::still();
//! let fit = FitSolver::new(limits).solve(media, container, 0.0).unwrap();
//! assert_eq!(fit.scale, 0.5);
//!
//! // Zoom in about the container center, then pan far to the right.
//! let center = Point::new(100.0, 75.0);
//! let zoomed = fit.zoom_about(1.0, center, center, limits);
//! let panned = zoomed.translated(kurbo::Vec2::new(500.0, 0.0));
//!
//! // The clamp keeps the left media edge at the container edge.
//! let clamped = BoundsClamp::new(media).clamp(panned, fit);
//! assert_eq!(clamped.x, 0.0);
//! ```
//!
//! ## Design notes
//!
//! - Rotation is about the media origin; the composed transform is
//!   translate, then scale, then rotate.
//! - Angles are kept in `(-π, π]` by every constructor and mutator.
//! - Animation cancellation is generation based: each new animation (or an
//!   explicit cancel) makes every previously scheduled frame a no-op.
//!
//! This crate is `no_std`.

#![no_std]

mod animator;
mod clamp;
mod fit;
mod limits;
mod param;

pub use animator::{
    AnimationPhase, AnimationStart, AnimationStep, AnimatorConfig, Generation, TransformAnimator,
};
pub use clamp::BoundsClamp;
pub use fit::{FitSolver, rotated_extent};
pub use limits::ScaleLimits;
pub use param::{ViewParam, normalize_angle};
