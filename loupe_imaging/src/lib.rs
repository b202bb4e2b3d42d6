// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Imaging: the drawing-surface abstraction a viewport renders into.
//!
//! A viewport needs very little from a graphics backend: clear the target,
//! push and pop a transform, draw a region of a decoded media frame, and
//! stroke an arc for a progress indicator. This crate expresses those needs
//! as plain-data operations and a [`Surface`] trait that backends implement.
//!
//! # Core concepts
//!
//! - **Frames**: decoded media frames are owned by the host and referenced by
//!   an opaque [`FrameId`]. A still image has one frame; a video or animated
//!   image reports a new id whenever the displayed frame changes.
//! - **Operations**: [`StateOp`] mutates the current transform stack and
//!   [`DrawOp`] produces pixels. [`SurfaceOp`] combines them for recording.
//! - **Surfaces**: [`Surface`] accepts operations and reports its size in
//!   container pixels. [`SurfaceExt`] adds scoped helpers.
//! - **Progress ring**: [`draw_progress_ring`] strokes the loading indicator
//!   described by a [`ProgressRingStyle`].
//!
//! # Example
//!
//! ```ignore
//! # use loupe_imaging::*;
//! # struct Canvas2d { /* wraps a platform 2D context */ }
//! # impl Surface for Canvas2d { /* ... */ }
//! let mut surface = Canvas2d { /* ... */ };
//!
//! surface.clear();
//! surface.with_saved(|s| {
//!     s.translate(Vec2::new(10.0, 20.0));
//!     s.scale(0.5);
//!     s.draw_frame(FrameId(0), Rect::new(0.0, 0.0, 640.0, 480.0));
//! });
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use core::f64::consts::{FRAC_PI_2, TAU};

pub use kurbo::{Affine, Point, Rect, Size, Vec2};
pub use peniko::Color;

/// Handle to a decoded media frame owned by the host.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(pub u32);

/// Operations that mutate the current drawing state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StateOp {
    /// Push a copy of the current transform.
    Save,
    /// Pop the most recently saved transform.
    Restore,
    /// Pre-multiply the current transform by a translation.
    Translate(Vec2),
    /// Pre-multiply the current transform by a uniform scale.
    Scale(f64),
    /// Pre-multiply the current transform by a rotation in radians.
    Rotate(f64),
}

/// A stroked circular arc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcStroke {
    /// Arc center.
    pub center: Point,
    /// Arc radius.
    pub radius: f64,
    /// Start angle in radians, clockwise from the positive x axis.
    pub start_angle: f64,
    /// Sweep in radians; positive sweeps clockwise.
    pub sweep_angle: f64,
    /// Stroke width.
    pub width: f64,
    /// Stroke color.
    pub color: Color,
}

/// Operations that produce pixels given the current state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawOp {
    /// Clear the whole surface, ignoring the current transform.
    Clear,
    /// Draw the `src` region of a frame into `dst` under the current transform.
    DrawFrame {
        /// Frame to draw.
        frame: FrameId,
        /// Source region in frame pixels.
        src: Rect,
        /// Destination region in current user space.
        dst: Rect,
    },
    /// Stroke an arc under the current transform.
    StrokeArc(ArcStroke),
}

/// Either kind of surface operation, as recorded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceOp {
    /// A state operation.
    State(StateOp),
    /// A draw operation.
    Draw(DrawOp),
}

/// Immediate-mode drawing target.
pub trait Surface {
    /// Returns the surface size in container pixels.
    fn size(&self) -> Size;

    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);

    /// Apply either kind of operation.
    #[inline]
    fn apply(&mut self, op: SurfaceOp) {
        match op {
            SurfaceOp::State(op) => self.state(op),
            SurfaceOp::Draw(op) => self.draw(op),
        }
    }

    /// Equivalent to `self.state(StateOp::Save)`.
    #[inline]
    fn save(&mut self) {
        self.state(StateOp::Save);
    }

    /// Equivalent to `self.state(StateOp::Restore)`.
    #[inline]
    fn restore(&mut self) {
        self.state(StateOp::Restore);
    }

    /// Equivalent to `self.state(StateOp::Translate(offset))`.
    #[inline]
    fn translate(&mut self, offset: Vec2) {
        self.state(StateOp::Translate(offset));
    }

    /// Equivalent to `self.state(StateOp::Scale(factor))`.
    #[inline]
    fn scale(&mut self, factor: f64) {
        self.state(StateOp::Scale(factor));
    }

    /// Equivalent to `self.state(StateOp::Rotate(radians))`.
    #[inline]
    fn rotate(&mut self, radians: f64) {
        self.state(StateOp::Rotate(radians));
    }

    /// Equivalent to `self.draw(DrawOp::Clear)`.
    #[inline]
    fn clear(&mut self) {
        self.draw(DrawOp::Clear);
    }

    /// Draws `region` of `frame` at the same place in user space.
    #[inline]
    fn draw_frame(&mut self, frame: FrameId, region: Rect) {
        self.draw(DrawOp::DrawFrame {
            frame,
            src: region,
            dst: region,
        });
    }

    /// Equivalent to `self.draw(DrawOp::StrokeArc(arc))`.
    #[inline]
    fn stroke_arc(&mut self, arc: ArcStroke) {
        self.draw(DrawOp::StrokeArc(arc));
    }
}

/// Convenience helpers for [`Surface`] implementations and callers.
///
/// Kept separate from [`Surface`] so that `&mut dyn Surface` stays usable.
pub trait SurfaceExt: Surface {
    /// Run `f` between a save and a restore.
    ///
    /// Note: if `f` panics, the state will not be restored.
    #[inline]
    fn with_saved<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.save();
        let out = f(self);
        self.restore();
        out
    }
}

impl<S: Surface + ?Sized> SurfaceExt for S {}

/// Appearance of the loading progress ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressRingStyle {
    /// Ring radius in container pixels.
    pub radius: f64,
    /// Stroke width in container pixels.
    pub width: f64,
    /// Stroke color.
    pub color: Color,
}

impl ProgressRingStyle {
    /// Sets the ring radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the stroke width.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets the stroke color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Returns the arc for `fraction` of the ring centered in a surface of `size`.
    ///
    /// The arc starts at twelve o'clock and sweeps clockwise. `fraction` is
    /// clamped to `[0, 1]`; NaN draws an empty arc.
    #[must_use]
    pub fn arc(&self, size: Size, fraction: f64) -> ArcStroke {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        ArcStroke {
            center: Point::new(size.width / 2.0, size.height / 2.0),
            radius: self.radius,
            start_angle: -FRAC_PI_2,
            sweep_angle: TAU * fraction,
            width: self.width,
            color: self.color,
        }
    }
}

impl Default for ProgressRingStyle {
    fn default() -> Self {
        Self {
            radius: 50.0,
            width: 10.0,
            color: Color::from_rgba8(128, 128, 128, 255),
        }
    }
}

/// Strokes the progress ring for `fraction` at the center of `surface`.
pub fn draw_progress_ring<S: Surface + ?Sized>(surface: &mut S, fraction: f64, style: &ProgressRingStyle) {
    let arc = style.arc(surface.size(), fraction);
    surface.stroke_arc(arc);
}
