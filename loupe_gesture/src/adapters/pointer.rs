// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::adapters::InputAdapter;
use crate::{
    Gesture, GestureMode, GestureSession, Gestures, PointReason, PointerInput, PointerKind,
    PointerPhase,
};

/// Pointer-family adapter.
///
/// Mouse and pen pointers pan like a mouse and report a click on release.
/// Touch pointers pan with the primary contact, pinch between the primary
/// contact and a secondary one, and recognize double taps on the primary
/// contact. Lifting the secondary contact of a pinch continues as a pan from
/// the primary one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerAdapter;

impl PointerAdapter {
    /// Creates a pointer adapter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn translate_touch(session: &mut GestureSession, input: &PointerInput, scale: f64, out: &mut Gestures) {
        let pos = input.position;
        match (input.phase, input.primary) {
            (PointerPhase::Down, true) => {
                session.set_pointer_is_touch(true);
                if session.tap_mut().register(input.time_ms) {
                    session.release();
                    session.set_primary(pos);
                    out.push(Gesture::ToggleZoom { at: pos });
                } else {
                    out.push(session.begin_pan(pos));
                }
            }
            (PointerPhase::Down, false) => {
                if let Some(primary) = session.primary() {
                    out.push(session.begin_pinch(primary, pos, scale));
                }
            }
            (PointerPhase::Move, true) => {
                if session.mode() == GestureMode::Pan {
                    out.extend(session.pan_to(pos));
                } else {
                    session.set_primary(pos);
                }
            }
            (PointerPhase::Move, false) => {
                if let Some(primary) = session.primary() {
                    out.extend(session.pinch_to(primary, pos));
                }
            }
            (PointerPhase::Up | PointerPhase::Leave | PointerPhase::Cancel, false) => {
                // The primary contact keeps the interaction alive as a pan.
                if session.mode() == GestureMode::Pinch
                    && let Some(primary) = session.primary()
                {
                    out.push(session.begin_pan(primary));
                }
            }
            (PointerPhase::Up | PointerPhase::Leave | PointerPhase::Cancel, true) => {
                let (mode, _) = session.release();
                if mode == GestureMode::Idle {
                    return;
                }
                out.push(Gesture::Release);
                if mode == GestureMode::Pan && input.phase == PointerPhase::Up {
                    out.push(Gesture::Point {
                        at: pos,
                        reason: PointReason::TouchEnd,
                    });
                }
            }
        }
    }

    fn translate_mouse_like(session: &mut GestureSession, input: &PointerInput, out: &mut Gestures) {
        let pos = input.position;
        match input.phase {
            PointerPhase::Down => {
                session.set_pointer_is_touch(false);
                out.push(session.begin_pan(pos));
            }
            PointerPhase::Move => {
                if session.mode() == GestureMode::Pan {
                    out.extend(session.pan_to(pos));
                } else if !session.is_active() {
                    out.push(Gesture::Point {
                        at: pos,
                        reason: PointReason::MouseMove,
                    });
                }
            }
            PointerPhase::Up | PointerPhase::Leave | PointerPhase::Cancel => {
                let (mode, _) = session.release();
                if mode == GestureMode::Idle {
                    return;
                }
                out.push(Gesture::Release);
                if input.phase == PointerPhase::Up {
                    out.push(Gesture::Point {
                        at: pos,
                        reason: PointReason::Click,
                    });
                }
            }
        }
    }
}

impl InputAdapter for PointerAdapter {
    type Input = PointerInput;

    fn translate(
        &mut self,
        session: &mut GestureSession,
        input: &PointerInput,
        scale: f64,
        out: &mut Gestures,
    ) {
        // A touch session ignores stray mouse-like pointers until it ends.
        if input.kind == PointerKind::Touch {
            if session.is_active() && !session.pointer_is_touch() {
                return;
            }
            Self::translate_touch(session, input, scale, out);
        } else {
            if session.is_active() && session.pointer_is_touch() {
                return;
            }
            Self::translate_mouse_like(session, input, out);
        }
    }
}
