// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::adapters::{InputAdapter, MouseAdapter, PointerAdapter, TouchAdapter};
use crate::{GestureSession, Gestures, InputEvent, MouseInput};

/// Input capabilities of the host platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputCapability {
    /// The platform delivers unified pointer events.
    pub pointer_events: bool,
}

impl InputCapability {
    /// A platform with unified pointer events.
    pub const POINTER: Self = Self {
        pointer_events: true,
    };
    /// A platform with separate mouse and touch events only.
    pub const MOUSE_AND_TOUCH: Self = Self {
        pointer_events: false,
    };
}

/// Which input families drive the router.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wiring {
    /// Pointer events drive pan, pinch and tap. The mouse family contributes
    /// only wheel and double-click; touch events are ignored.
    Pointer,
    /// Mouse and touch families are both wired.
    MouseAndTouch,
}

impl Wiring {
    /// Chooses the wiring for a platform.
    #[must_use]
    pub fn for_capability(capability: InputCapability) -> Self {
        if capability.pointer_events {
            Self::Pointer
        } else {
            Self::MouseAndTouch
        }
    }
}

/// Tuning knobs for gesture recognition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Double-tap window in milliseconds.
    pub double_tap_ms: u64,
    /// Zoom factor per wheel notch.
    pub wheel_base: f64,
}

impl GestureConfig {
    /// Sets the double-tap window.
    #[must_use]
    pub fn with_double_tap_ms(mut self, ms: u64) -> Self {
        self.double_tap_ms = ms;
        self
    }

    /// Sets the zoom factor per wheel notch. Values not above 1 are ignored.
    #[must_use]
    pub fn with_wheel_base(mut self, base: f64) -> Self {
        if base > 1.0 && base.is_finite() {
            self.wheel_base = base;
        }
        self
    }

    /// Returns the zoom factor for `steps` wheel notches.
    #[must_use]
    pub fn wheel_factor(&self, steps: f64) -> f64 {
        self.wheel_base.powf(steps)
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            double_tap_ms: 300,
            wheel_base: 1.1,
        }
    }
}

/// Normalizes mouse, touch and pointer input into [`Gesture`](crate::Gesture)s.
///
/// The wiring is fixed at construction. Events of a family that is not wired
/// are reported as not consumed so the host can let them through.
///
/// ```
/// use kurbo::Point;
/// use loupe_gesture::{Gesture, GestureRouter, InputCapability, MouseInput, TouchInput, TouchPhase};
///
/// let mut router = GestureRouter::new(InputCapability::MOUSE_AND_TOUCH, Default::default());
/// let at = Point::new(10.0, 10.0);
///
/// let gestures = router.route(&MouseInput::DoubleClick(at).into(), 1.0).unwrap();
/// assert_eq!(gestures.as_slice(), &[Gesture::ToggleZoom { at }]);
///
/// // Touch events are consumed even when they produce nothing yet.
/// let start = TouchInput::new(TouchPhase::Start, &[at; 3], 0);
/// assert!(router.route(&start.into(), 1.0).unwrap().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct GestureRouter {
    wiring: Wiring,
    config: GestureConfig,
    session: GestureSession,
    mouse: MouseAdapter,
    touch: TouchAdapter,
    pointer: PointerAdapter,
}

impl GestureRouter {
    /// Creates a router wired for `capability`.
    #[must_use]
    pub fn new(capability: InputCapability, config: GestureConfig) -> Self {
        let wiring = Wiring::for_capability(capability);
        let mouse = match wiring {
            Wiring::Pointer => MouseAdapter::supplementary(),
            Wiring::MouseAndTouch => MouseAdapter::full(),
        };
        Self {
            wiring,
            config,
            session: GestureSession::new(config.double_tap_ms),
            mouse,
            touch: TouchAdapter::new(),
            pointer: PointerAdapter::new(),
        }
    }

    /// Returns the wiring chosen at construction.
    #[must_use]
    pub fn wiring(&self) -> Wiring {
        self.wiring
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Returns the shared gesture session.
    #[must_use]
    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    /// Translates `event` into gestures.
    ///
    /// `scale` is the view scale a pinch starting now would begin from.
    /// Returns `None` when the event's family is not wired.
    pub fn route(&mut self, event: &InputEvent, scale: f64) -> Option<Gestures> {
        let mut out = Gestures::new();
        match (self.wiring, event) {
            (Wiring::Pointer, InputEvent::Touch(_)) | (Wiring::MouseAndTouch, InputEvent::Pointer(_)) => {
                return None;
            }
            (Wiring::Pointer, InputEvent::Mouse(input)) => {
                if !matches!(input, MouseInput::Wheel { .. } | MouseInput::DoubleClick(_)) {
                    return None;
                }
                self.mouse.translate(&mut self.session, input, scale, &mut out);
            }
            (Wiring::MouseAndTouch, InputEvent::Mouse(input)) => {
                self.mouse.translate(&mut self.session, input, scale, &mut out);
            }
            (Wiring::MouseAndTouch, InputEvent::Touch(input)) => {
                self.touch.translate(&mut self.session, input, scale, &mut out);
            }
            (Wiring::Pointer, InputEvent::Pointer(input)) => {
                self.pointer.translate(&mut self.session, input, scale, &mut out);
            }
        }
        Some(out)
    }

    /// Drops any interaction in progress.
    pub fn cancel(&mut self) {
        self.session.reset();
    }
}
