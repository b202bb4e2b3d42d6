// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Imaging Reference Surface.
//!
//! This crate provides a small, stateful implementation of [`Surface`] for
//! **operation recording and transform tracing**.
//!
//! It is intentionally *not* a renderer:
//! - It does **not** rasterize to pixels.
//! - It is intended for tests and debugging that want to assert on emitted
//!   operations and on the transform in effect when each draw happened.
//!
//! ```
//! use loupe_imaging::{FrameId, Rect, Surface, Vec2};
//! use loupe_imaging_ref::{Event, RecordingSurface};
//!
//! let mut surface = RecordingSurface::new(200.0, 100.0);
//! surface.save();
//! surface.translate(Vec2::new(10.0, 0.0));
//! surface.draw_frame(FrameId(1), Rect::new(0.0, 0.0, 4.0, 4.0));
//! surface.restore();
//!
//! let draws: Vec<_> = surface.draws().collect();
//! assert_eq!(draws.len(), 1);
//! assert_eq!(draws[0].1.translation(), Vec2::new(10.0, 0.0));
//! assert!(matches!(surface.events().last(), Some(Event::State { .. })));
//! ```

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use loupe_imaging::{Affine, DrawOp, Size, StateOp, Surface, SurfaceOp};

/// Event recorded by the reference surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// State operation and the transform after applying it.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Transform after the operation.
        transform: Affine,
    },
    /// Draw operation and the transform it was drawn under.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Transform at the time of drawing.
        transform: Affine,
    },
}

/// Surface that records every operation it receives.
///
/// Restoring with an empty save stack is tolerated and resets the transform
/// to identity; [`RecordingSurface::unbalanced_restores`] counts such calls.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    transform: Affine,
    saved: Vec<Affine>,
    events: Vec<Event>,
    unbalanced_restores: usize,
}

impl RecordingSurface {
    /// Creates a surface of `width` x `height` container pixels.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            transform: Affine::IDENTITY,
            saved: Vec::new(),
            events: Vec::new(),
            unbalanced_restores: 0,
        }
    }

    /// Changes the reported size, as a host would after a layout change.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
    }

    /// Returns a slice of recorded events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns the recorded operations without their transforms.
    pub fn ops(&self) -> Vec<SurfaceOp> {
        self.events
            .iter()
            .map(|event| match event {
                Event::State { op, .. } => SurfaceOp::State(*op),
                Event::Draw { op, .. } => SurfaceOp::Draw(*op),
            })
            .collect()
    }

    /// Iterates over draw operations and the transform each was drawn under.
    pub fn draws(&self) -> impl Iterator<Item = (DrawOp, Affine)> + '_ {
        self.events.iter().filter_map(|event| match event {
            Event::Draw { op, transform } => Some((*op, *transform)),
            Event::State { .. } => None,
        })
    }

    /// Returns the current transform.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Returns the depth of the save stack.
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }

    /// Returns how many restores found an empty save stack.
    pub fn unbalanced_restores(&self) -> usize {
        self.unbalanced_restores
    }

    /// Clears all recorded events but keeps the transform state.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn state(&mut self, op: StateOp) {
        match op {
            StateOp::Save => self.saved.push(self.transform),
            StateOp::Restore => match self.saved.pop() {
                Some(t) => self.transform = t,
                None => {
                    self.unbalanced_restores += 1;
                    self.transform = Affine::IDENTITY;
                }
            },
            StateOp::Translate(v) => self.transform *= Affine::translate(v),
            StateOp::Scale(s) => self.transform *= Affine::scale(s),
            StateOp::Rotate(a) => self.transform *= Affine::rotate(a),
        }
        self.events.push(Event::State {
            op,
            transform: self.transform,
        });
    }

    fn draw(&mut self, op: DrawOp) {
        self.events.push(Event::Draw {
            op,
            transform: self.transform,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loupe_imaging::{FrameId, Point, ProgressRingStyle, Rect, Vec2, draw_progress_ring};

    #[test]
    fn transforms_compose_in_call_order() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        surface.translate(Vec2::new(10.0, 20.0));
        surface.scale(2.0);
        surface.rotate(core::f64::consts::FRAC_PI_2);
        let p = surface.transform() * Point::new(1.0, 0.0);
        assert!((p.x - 10.0).abs() < 1e-12);
        assert!((p.y - 22.0).abs() < 1e-12);
    }

    #[test]
    fn restore_returns_to_saved_transform() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        surface.save();
        surface.scale(3.0);
        assert_eq!(surface.save_depth(), 1);
        surface.restore();
        assert_eq!(surface.transform(), Affine::IDENTITY);
        assert_eq!(surface.save_depth(), 0);
    }

    #[test]
    fn unbalanced_restore_is_tolerated() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        surface.scale(3.0);
        surface.restore();
        assert_eq!(surface.unbalanced_restores(), 1);
        assert_eq!(surface.transform(), Affine::IDENTITY);
    }

    #[test]
    fn draws_capture_transform() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        surface.clear();
        surface.scale(0.5);
        surface.draw_frame(FrameId(7), Rect::new(0.0, 0.0, 8.0, 8.0));
        let draws: Vec<_> = surface.draws().collect();
        assert_eq!(draws.len(), 2);
        assert_eq!(draws[0], (DrawOp::Clear, Affine::IDENTITY));
        assert_eq!(draws[1].1, Affine::scale(0.5));
        assert_eq!(surface.ops().len(), 3);
    }

    #[test]
    fn progress_ring_records_one_arc() {
        let mut surface = RecordingSurface::new(300.0, 200.0);
        draw_progress_ring(&mut surface, 0.5, &ProgressRingStyle::default());
        let Some((DrawOp::StrokeArc(arc), _)) = surface.draws().next() else {
            panic!("expected an arc");
        };
        assert_eq!(arc.center, Point::new(150.0, 100.0));
    }

    #[test]
    fn clear_events_keeps_state() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        surface.save();
        surface.scale(2.0);
        surface.clear_events();
        assert!(surface.events().is_empty());
        assert_eq!(surface.save_depth(), 1);
        assert_eq!(surface.transform(), Affine::scale(2.0));
    }
}
