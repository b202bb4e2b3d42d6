// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical gesture vocabulary and the session the adapters share.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::drag::DragState;
use crate::pinch::PinchState;
use crate::tap::TapState;

/// Why a point notification was emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointReason {
    /// Mouse click, or release of a mouse-type pointer after a press.
    Click,
    /// Release of a single-contact touch pan.
    TouchEnd,
    /// Hover move while no drag is active.
    MouseMove,
}

/// One canonical gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// A single-contact drag began.
    PanBegin {
        /// Contact position.
        at: Point,
    },
    /// The drag moved; translate 1:1.
    PanBy {
        /// Movement since the previous pan event.
        delta: Vec2,
    },
    /// A two-contact pinch began.
    PinchBegin {
        /// Fixed midpoint of the two contacts.
        midpoint: Point,
    },
    /// The pinch moved; zoom about `anchor` to the absolute `scale`.
    PinchTo {
        /// Fixed pinch midpoint.
        anchor: Point,
        /// Absolute target scale.
        scale: f64,
    },
    /// A pan or pinch ended.
    Release,
    /// The wheel turned by `steps` notches at `at`.
    Wheel {
        /// Cursor position.
        at: Point,
        /// Notches, positive meaning zoom in.
        steps: f64,
    },
    /// Double click or double tap.
    ToggleZoom {
        /// Position of the second click or tap.
        at: Point,
    },
    /// Point notification for the host.
    Point {
        /// Position in container coordinates.
        at: Point,
        /// What produced it.
        reason: PointReason,
    },
}

/// Gestures produced by one input event.
pub type Gestures = SmallVec<[Gesture; 2]>;

/// What the current interaction is doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureMode {
    /// No interaction.
    #[default]
    Idle,
    /// Single-contact pan.
    Pan,
    /// Two-contact pinch.
    Pinch,
}

/// State shared by the input adapters between an interaction's start and end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    mode: GestureMode,
    drag: DragState,
    pinch: PinchState,
    primary: Option<Point>,
    pointer_is_touch: bool,
    tap: TapState,
}

impl GestureSession {
    /// Creates an idle session with the given double-tap window.
    #[must_use]
    pub fn new(double_tap_ms: u64) -> Self {
        Self {
            mode: GestureMode::Idle,
            drag: DragState::default(),
            pinch: PinchState::default(),
            primary: None,
            pointer_is_touch: false,
            tap: TapState::new(double_tap_ms),
        }
    }

    /// Returns the current mode.
    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    /// Returns `true` while a pan or pinch is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.mode != GestureMode::Idle
    }

    /// Returns the drag state.
    #[must_use]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Returns the pinch state.
    #[must_use]
    pub fn pinch(&self) -> &PinchState {
        &self.pinch
    }

    /// Returns the last known position of the primary contact.
    #[must_use]
    pub fn primary(&self) -> Option<Point> {
        self.primary
    }

    pub(crate) fn set_primary(&mut self, pos: Point) {
        self.primary = Some(pos);
    }

    pub(crate) fn tap_mut(&mut self) -> &mut TapState {
        &mut self.tap
    }

    pub(crate) fn pointer_is_touch(&self) -> bool {
        self.pointer_is_touch
    }

    pub(crate) fn set_pointer_is_touch(&mut self, touch: bool) {
        self.pointer_is_touch = touch;
    }

    /// Starts a pan at `at` and returns the matching gesture.
    pub(crate) fn begin_pan(&mut self, at: Point) -> Gesture {
        self.pinch.end();
        self.drag.start(at);
        self.primary = Some(at);
        self.mode = GestureMode::Pan;
        Gesture::PanBegin { at }
    }

    /// Moves the pan to `at`; `None` when not panning or nothing moved.
    pub(crate) fn pan_to(&mut self, at: Point) -> Option<Gesture> {
        if self.mode != GestureMode::Pan {
            return None;
        }
        self.primary = Some(at);
        self.drag
            .update(at)
            .filter(|delta| *delta != Vec2::ZERO)
            .map(|delta| Gesture::PanBy { delta })
    }

    /// Starts a pinch; falls back to a pan from `p0` when the contacts coincide.
    pub(crate) fn begin_pinch(&mut self, p0: Point, p1: Point, scale: f64) -> Gesture {
        match self.pinch.begin(p0, p1, scale) {
            Some(midpoint) => {
                self.drag.end();
                self.primary = Some(p0);
                self.mode = GestureMode::Pinch;
                Gesture::PinchBegin { midpoint }
            }
            None => self.begin_pan(p0),
        }
    }

    /// Updates the pinch for contacts at `p0` and `p1`.
    pub(crate) fn pinch_to(&mut self, p0: Point, p1: Point) -> Option<Gesture> {
        if self.mode != GestureMode::Pinch {
            return None;
        }
        let anchor = self.pinch.midpoint()?;
        let scale = self.pinch.scale_for(p0, p1)?;
        Some(Gesture::PinchTo { anchor, scale })
    }

    /// Ends the interaction. Returns the mode that ended and the last pan position.
    pub(crate) fn release(&mut self) -> (GestureMode, Option<Point>) {
        let mode = self.mode;
        let last = self.drag.end();
        self.pinch.end();
        self.mode = GestureMode::Idle;
        (mode, last)
    }

    /// Drops all interaction state, keeping the double-tap window length.
    pub fn reset(&mut self) {
        *self = Self::new(self.tap_window());
    }

    fn tap_window(&self) -> u64 {
        self.tap.window_ms()
    }
}

impl Default for GestureSession {
    fn default() -> Self {
        Self::new(TapState::default().window_ms())
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{Gesture, GestureMode, GestureSession};

    #[test]
    fn pan_without_motion_emits_nothing() {
        let mut session = GestureSession::default();
        let at = Point::new(10.0, 10.0);
        assert_eq!(session.begin_pan(at), Gesture::PanBegin { at });
        assert_eq!(session.pan_to(at), None);
        assert_eq!(
            session.pan_to(Point::new(12.0, 9.0)),
            Some(Gesture::PanBy { delta: Vec2::new(2.0, -1.0) })
        );
    }

    #[test]
    fn degenerate_pinch_falls_back_to_pan() {
        let mut session = GestureSession::default();
        let p = Point::new(4.0, 4.0);
        assert_eq!(session.begin_pinch(p, p, 1.0), Gesture::PanBegin { at: p });
        assert_eq!(session.mode(), GestureMode::Pan);
    }

    #[test]
    fn release_returns_to_idle() {
        let mut session = GestureSession::default();
        session.begin_pinch(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 1.0);
        assert_eq!(session.mode(), GestureMode::Pinch);
        let (mode, last) = session.release();
        assert_eq!(mode, GestureMode::Pinch);
        assert_eq!(last, None);
        assert!(!session.is_active());
    }
}
