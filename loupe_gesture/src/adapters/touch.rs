// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::adapters::InputAdapter;
use crate::{Gesture, GestureMode, GestureSession, Gestures, PointReason, TouchInput, TouchPhase};

/// Touch-family adapter.
///
/// One contact pans, two contacts pinch, more are ignored. A second
/// single-contact start inside the double-tap window toggles zoom instead
/// of panning. Lifting one finger of a pinch continues as a pan from the
/// remaining contact. A finger that double-tapped does not pan until it
/// lifts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchAdapter;

impl TouchAdapter {
    /// Creates a touch adapter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl InputAdapter for TouchAdapter {
    type Input = TouchInput;

    fn translate(
        &mut self,
        session: &mut GestureSession,
        input: &TouchInput,
        scale: f64,
        out: &mut Gestures,
    ) {
        let touches = input.touches.as_slice();
        match input.phase {
            TouchPhase::Start => match touches {
                [at] => {
                    if session.tap_mut().register(input.time_ms) {
                        session.release();
                        out.push(Gesture::ToggleZoom { at: *at });
                    } else {
                        out.push(session.begin_pan(*at));
                    }
                }
                [p0, p1] => out.push(session.begin_pinch(*p0, *p1, scale)),
                _ => {}
            },
            TouchPhase::Move => match touches {
                // Idle: the finger double-tapped or the session was dropped.
                [at] => match session.mode() {
                    GestureMode::Pan => out.extend(session.pan_to(*at)),
                    GestureMode::Pinch => out.push(session.begin_pan(*at)),
                    GestureMode::Idle => {}
                },
                [p0, p1] => {
                    if session.mode() == GestureMode::Pinch {
                        out.extend(session.pinch_to(*p0, *p1));
                    } else {
                        out.push(session.begin_pinch(*p0, *p1, scale));
                    }
                }
                _ => {}
            },
            TouchPhase::End | TouchPhase::Cancel => {
                if let ([remaining], GestureMode::Pinch) = (touches, session.mode()) {
                    out.push(session.begin_pan(*remaining));
                    return;
                }
                if !touches.is_empty() && input.phase == TouchPhase::End {
                    return;
                }
                let (mode, last) = session.release();
                if mode == GestureMode::Idle {
                    return;
                }
                out.push(Gesture::Release);
                if let (GestureMode::Pan, TouchPhase::End, Some(at)) = (mode, input.phase, last) {
                    out.push(Gesture::Point {
                        at,
                        reason: PointReason::TouchEnd,
                    });
                }
            }
        }
    }
}
