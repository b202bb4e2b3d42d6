// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::adapters::InputAdapter;
use crate::{Gesture, GestureMode, GestureSession, Gestures, MouseInput, PointReason};

/// Mouse-family adapter.
///
/// In full mode the mouse drives panning, hover and click notifications,
/// double-click and the wheel. In supplementary mode (alongside a pointer
/// adapter) only the wheel and double-click are translated, since pointer
/// events never carry those.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseAdapter {
    full: bool,
}

impl MouseAdapter {
    /// Adapter that handles every mouse event.
    #[must_use]
    pub fn full() -> Self {
        Self { full: true }
    }

    /// Adapter that handles only the wheel and double-click.
    #[must_use]
    pub fn supplementary() -> Self {
        Self { full: false }
    }

    /// Returns `true` in full mode.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.full
    }
}

impl Default for MouseAdapter {
    fn default() -> Self {
        Self::full()
    }
}

impl InputAdapter for MouseAdapter {
    type Input = MouseInput;

    fn translate(
        &mut self,
        session: &mut GestureSession,
        input: &MouseInput,
        _scale: f64,
        out: &mut Gestures,
    ) {
        match *input {
            MouseInput::Wheel { at, delta } => {
                let steps = delta.steps();
                if steps != 0.0 && steps.is_finite() {
                    out.push(Gesture::Wheel { at, steps });
                }
            }
            MouseInput::DoubleClick(at) => out.push(Gesture::ToggleZoom { at }),
            _ if !self.full => {}
            MouseInput::Down(at) => out.push(session.begin_pan(at)),
            MouseInput::Move(at) => {
                if session.mode() == GestureMode::Pan {
                    out.extend(session.pan_to(at));
                } else if !session.is_active() {
                    out.push(Gesture::Point {
                        at,
                        reason: PointReason::MouseMove,
                    });
                }
            }
            MouseInput::Up(_) | MouseInput::Leave => {
                if session.is_active() {
                    session.release();
                    out.push(Gesture::Release);
                }
            }
            MouseInput::Click(at) => {
                if !session.is_active() {
                    out.push(Gesture::Point {
                        at,
                        reason: PointReason::Click,
                    });
                }
            }
        }
    }
}
