// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::{PI, TAU};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Vec2};

use crate::ScaleLimits;

/// Wraps an angle in radians into the half-open interval `(-π, π]`.
///
/// ```
/// use core::f64::consts::PI;
/// use loupe_view::normalize_angle;
///
/// assert_eq!(normalize_angle(-PI), PI);
/// assert!((normalize_angle(1.5 * PI) + 0.5 * PI).abs() < 1e-12);
/// ```
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle % TAU;
    if wrapped > PI {
        wrapped - TAU
    } else if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Transform mapping media pixels onto the container.
///
/// A point `p` in media space lands at
/// `translate(x, y) · scale(scale) · rotate(angle) · p` in container space,
/// which is also the order in which the renderer applies the transform.
///
/// Invariants maintained by the constructors and by every method here:
/// - `angle` lies in `(-π, π]`.
/// - Methods that change `scale` clamp it into the supplied [`ScaleLimits`].
///
/// Equality is exact field equality. Two view params derived the same way
/// compare equal; no epsilon is involved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewParam {
    /// Uniform scale factor, strictly positive.
    pub scale: f64,
    /// Horizontal translation in container pixels.
    pub x: f64,
    /// Vertical translation in container pixels.
    pub y: f64,
    /// Rotation in radians, in `(-π, π]`.
    pub angle: f64,
}

impl ViewParam {
    /// Creates a view param, normalizing `angle`.
    #[must_use]
    pub fn new(scale: f64, x: f64, y: f64, angle: f64) -> Self {
        Self {
            scale,
            x,
            y,
            angle: normalize_angle(angle),
        }
    }

    /// Returns a copy with `angle` normalized into `(-π, π]`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            angle: normalize_angle(self.angle),
            ..self
        }
    }

    /// Returns the translation component.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Returns a copy moved by `delta` in container space.
    #[must_use]
    pub fn translated(self, delta: Vec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..self
        }
    }

    /// Returns the affine transform from media to container space.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation()) * Affine::scale(self.scale) * Affine::rotate(self.angle)
    }

    /// Converts a media-space point into container coordinates.
    #[must_use]
    pub fn media_to_container(&self, pt: Point) -> Point {
        self.to_affine() * pt
    }

    /// Converts a container-space point into media coordinates.
    ///
    /// Returns `None` when the scale is not strictly positive.
    #[must_use]
    pub fn container_to_media(&self, pt: Point) -> Option<Point> {
        if !(self.scale > 0.0) {
            return None;
        }
        Some(self.to_affine().inverse() * pt)
    }

    /// Zooms to `scale`, keeping the media point under `anchor` at `target`.
    ///
    /// The scale is clamped into `limits`. Passing the same point for
    /// `anchor` and `target` yields a zoom about that point; a different
    /// `target` pans while zooming. The angle is unchanged.
    #[must_use]
    pub fn zoom_about(&self, scale: f64, anchor: Point, target: Point, limits: ScaleLimits) -> Self {
        let scale = limits.clamp(scale);
        if !(self.scale > 0.0) {
            return Self { scale, ..*self };
        }
        let ratio = scale / self.scale;
        Self {
            scale,
            x: target.x - ratio * (anchor.x - self.x),
            y: target.y - ratio * (anchor.y - self.y),
            angle: self.angle,
        }
    }

    /// Rotates by `angle`, keeping the media point under `anchor` at `target`.
    ///
    /// The scale is unchanged and the resulting angle is normalized.
    #[must_use]
    pub fn rotate_about(&self, angle: f64, anchor: Point, target: Point) -> Self {
        let (sin, cos) = angle.sin_cos();
        let dx = anchor.x - self.x;
        let dy = anchor.y - self.y;
        Self {
            scale: self.scale,
            x: target.x - cos * dx + sin * dy,
            y: target.y - sin * dx - cos * dy,
            angle: normalize_angle(self.angle + angle),
        }
    }
}
