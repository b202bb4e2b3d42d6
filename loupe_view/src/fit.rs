// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Size;

use crate::{ScaleLimits, ViewParam, normalize_angle};

/// Computes the transform that inscribes rotated media inside a container.
///
/// The solver is pure: identical inputs always produce bit-identical
/// outputs, and nothing is cached between calls.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FitSolver {
    limits: ScaleLimits,
}

impl FitSolver {
    /// Creates a solver whose fit scale is clamped into `limits`.
    #[must_use]
    pub fn new(limits: ScaleLimits) -> Self {
        Self { limits }
    }

    /// Returns the scale limits applied to the fit scale.
    #[must_use]
    pub fn limits(&self) -> ScaleLimits {
        self.limits
    }

    /// Returns the fit transform for `media` inside `container` at `angle`.
    ///
    /// The axis-aligned bounding box of the rotated media is scaled to fit
    /// the container (clamped into the scale limits) and centered.
    ///
    /// Returns `None` when either size has a zero, negative, or non-finite
    /// dimension.
    #[must_use]
    pub fn solve(&self, media: Size, container: Size, angle: f64) -> Option<ViewParam> {
        if !is_usable(media) || !is_usable(container) {
            return None;
        }
        let angle = normalize_angle(angle);
        let (sin, cos) = angle.sin_cos();
        let bbox = rotated_extent(media, angle);
        let scale = self
            .limits
            .clamp((container.width / bbox.width).min(container.height / bbox.height));
        let (w, h) = (media.width, media.height);
        Some(ViewParam {
            scale,
            x: container.width / 2.0 - scale * (w * cos - h * sin) / 2.0,
            y: container.height / 2.0 - scale * (w * sin + h * cos) / 2.0,
            angle,
        })
    }
}

/// Returns the size of the axis-aligned box enclosing `media` rotated by `angle`.
#[must_use]
pub fn rotated_extent(media: Size, angle: f64) -> Size {
    let (sin, cos) = angle.sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    Size::new(
        cos * media.width + sin * media.height,
        sin * media.width + cos * media.height,
    )
}

fn is_usable(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}
