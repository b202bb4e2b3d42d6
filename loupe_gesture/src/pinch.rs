// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-contact pinch tracking with a fixed anchor.
//!
//! The anchor is the midpoint of the two contacts when the pinch began and
//! does not follow the fingers afterwards. The scale is proportional to the
//! distance between the contacts:
//!
//! ```
//! use kurbo::Point;
//! use loupe_gesture::pinch::PinchState;
//!
//! let mut pinch = PinchState::default();
//! let mid = pinch.begin(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 0.5);
//! assert_eq!(mid, Some(Point::new(50.0, 0.0)));
//!
//! // Spreading the fingers to twice the distance doubles the scale.
//! assert_eq!(pinch.scale_for(Point::new(-50.0, 0.0), Point::new(150.0, 0.0)), Some(1.0));
//! ```

use kurbo::Point;

/// Pinch session state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchState {
    midpoint: Option<Point>,
    factor: f64,
}

impl PinchState {
    /// Begins a pinch between `p0` and `p1` at the current view `scale`.
    ///
    /// Returns the fixed midpoint, or `None` when the contacts coincide or
    /// the inputs are not finite. A failed begin leaves the state inactive.
    pub fn begin(&mut self, p0: Point, p1: Point, scale: f64) -> Option<Point> {
        self.end();
        let dist = p0.distance(p1);
        if !(dist > 0.0) || !dist.is_finite() || !(scale > 0.0) {
            return None;
        }
        let mid = p0.midpoint(p1);
        self.midpoint = Some(mid);
        self.factor = scale / dist;
        Some(mid)
    }

    /// Returns the scale for contacts now at `p0` and `p1`.
    ///
    /// Returns `None` when no pinch is active or the contacts coincide.
    #[must_use]
    pub fn scale_for(&self, p0: Point, p1: Point) -> Option<f64> {
        self.midpoint?;
        let dist = p0.distance(p1);
        (dist > 0.0 && dist.is_finite()).then(|| self.factor * dist)
    }

    /// Returns the midpoint recorded when the pinch began.
    #[must_use]
    pub fn midpoint(&self) -> Option<Point> {
        self.midpoint
    }

    /// Returns the ratio of view scale to contact distance fixed at begin.
    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Returns `true` while a pinch is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.midpoint.is_some()
    }

    /// Ends the pinch.
    pub fn end(&mut self) {
        *self = Self::default();
    }
}
