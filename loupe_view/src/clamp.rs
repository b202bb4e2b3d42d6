// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Rect, Size};

use crate::ViewParam;

/// Keeps a candidate transform from drifting the media out of view.
///
/// Zoomed-in media may be panned only as far as its scaled, rotated extent
/// allows: an edge of the media never moves inside the edge of the area the
/// fit transform covers. Zoomed-out candidates are replaced by the fit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundsClamp {
    media: Size,
}

impl BoundsClamp {
    /// Creates a clamp for media of the given natural size.
    #[must_use]
    pub fn new(media: Size) -> Self {
        Self { media }
    }

    /// Returns the media size this clamp was built for.
    #[must_use]
    pub fn media(&self) -> Size {
        self.media
    }

    /// Returns the rotated extents of the unscaled media rectangle at `angle`.
    ///
    /// The rectangle is expressed relative to the media origin after
    /// rotation, so `x0`/`y0` are non-positive and `x1`/`y1` non-negative.
    #[must_use]
    pub fn extents(&self, angle: f64) -> Rect {
        let (sin, cos) = angle.sin_cos();
        let half_w = self.media.width / 2.0;
        let half_h = self.media.height / 2.0;
        Rect::new(
            half_w * (cos - cos.abs()) + half_h * (-sin - sin.abs()),
            half_w * (sin - sin.abs()) + half_h * (cos - cos.abs()),
            half_w * (cos + cos.abs()) + half_h * (-sin + sin.abs()),
            half_w * (sin + sin.abs()) + half_h * (cos + cos.abs()),
        )
    }

    /// Returns the nearest acceptable transform to `candidate`.
    ///
    /// If `candidate.scale < fit.scale` the fit is returned unchanged.
    /// Otherwise scale and angle are preserved and the translation is clamped
    /// into an interval that always contains the fit translation.
    #[must_use]
    pub fn clamp(&self, candidate: ViewParam, fit: ViewParam) -> ViewParam {
        if candidate.scale < fit.scale {
            return fit;
        }
        let ext = self.extents(candidate.angle);
        let diff = fit.scale - candidate.scale;
        ViewParam {
            x: candidate.x.min(fit.x + diff * ext.x0).max(fit.x + diff * ext.x1),
            y: candidate.y.min(fit.y + diff * ext.y0).max(fit.y + diff * ext.y1),
            ..candidate
        }
    }
}
