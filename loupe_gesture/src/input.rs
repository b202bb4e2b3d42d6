// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input event families, expressed in container coordinates.

use kurbo::Point;
use smallvec::SmallVec;

/// Contact positions of a touch event; only the first two are interpreted.
pub type Contacts = SmallVec<[Point; 2]>;

/// Amount of a mouse-wheel event, in the unit the platform reported.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelDelta {
    /// Legacy wheel units: 120 per notch, positive away from the user.
    Legacy(f64),
    /// Line counts: 3 per notch, positive toward the user.
    Lines(f64),
    /// Pixel deltas: 120 per notch, positive toward the user.
    Pixels(f64),
}

impl WheelDelta {
    /// Converts the delta into notches, positive meaning zoom in.
    #[must_use]
    pub fn steps(self) -> f64 {
        match self {
            Self::Legacy(v) => v / 120.0,
            Self::Lines(v) => v / -3.0,
            Self::Pixels(v) => v / -120.0,
        }
    }
}

/// Mouse-family input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MouseInput {
    /// A button went down.
    Down(Point),
    /// The mouse moved.
    Move(Point),
    /// A button was released.
    Up(Point),
    /// The mouse left the container.
    Leave,
    /// A click completed (press and release without leaving).
    Click(Point),
    /// A double click completed.
    DoubleClick(Point),
    /// The wheel turned.
    Wheel {
        /// Cursor position.
        at: Point,
        /// Amount turned.
        delta: WheelDelta,
    },
}

/// Phase of a touch event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    /// A contact touched down.
    Start,
    /// One or more contacts moved.
    Move,
    /// A contact lifted.
    End,
    /// The platform cancelled the touch sequence.
    Cancel,
}

/// Touch-family input.
///
/// `touches` lists the contacts still on the surface after the event, in
/// platform order, the way a browser's `touches` list does.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchInput {
    /// Event phase.
    pub phase: TouchPhase,
    /// Contacts currently down.
    pub touches: Contacts,
    /// Event timestamp in milliseconds.
    pub time_ms: u64,
}

impl TouchInput {
    /// Creates a touch event from its contacts.
    #[must_use]
    pub fn new(phase: TouchPhase, touches: &[Point], time_ms: u64) -> Self {
        Self {
            phase,
            touches: touches.iter().copied().collect(),
            time_ms,
        }
    }
}

/// Phase of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// The pointer went down.
    Down,
    /// The pointer moved.
    Move,
    /// The pointer was released.
    Up,
    /// The pointer left the container.
    Leave,
    /// The platform cancelled the pointer.
    Cancel,
}

/// Device that produced a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    /// A mouse.
    Mouse,
    /// A stylus.
    Pen,
    /// A finger.
    Touch,
}

/// Pointer-family input.
///
/// Contacts are told apart only by [`primary`](Self::primary): the first
/// touch is primary and any other is treated as the pinch partner. There is
/// no pointer id, so hosts track ids themselves and forward only the first
/// two touch pointers, dropping events from any further contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// Event phase.
    pub phase: PointerPhase,
    /// Producing device.
    pub kind: PointerKind,
    /// Whether this is the primary pointer of its kind.
    pub primary: bool,
    /// Position in container coordinates.
    pub position: Point,
    /// Event timestamp in milliseconds.
    pub time_ms: u64,
}

impl PointerInput {
    /// Creates a primary pointer event.
    #[must_use]
    pub fn new(phase: PointerPhase, kind: PointerKind, position: Point, time_ms: u64) -> Self {
        Self {
            phase,
            kind,
            primary: true,
            position,
            time_ms,
        }
    }

    /// Marks the event as coming from a secondary pointer.
    #[must_use]
    pub fn secondary(mut self) -> Self {
        self.primary = false;
        self
    }
}

/// Any input the gesture router accepts.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse family.
    Mouse(MouseInput),
    /// Touch family.
    Touch(TouchInput),
    /// Pointer family.
    Pointer(PointerInput),
}

impl From<MouseInput> for InputEvent {
    fn from(value: MouseInput) -> Self {
        Self::Mouse(value)
    }
}

impl From<TouchInput> for InputEvent {
    fn from(value: TouchInput) -> Self {
        Self::Touch(value)
    }
}

impl From<PointerInput> for InputEvent {
    fn from(value: PointerInput) -> Self {
        Self::Pointer(value)
    }
}
