// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Inclusive range of scale factors a view transform may take.
///
/// Shared by [`crate::FitSolver`] (the fit scale is clamped into it) and by
/// [`crate::ViewParam::zoom_about`] (interactive zoom is clamped into it).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLimits {
    /// Smallest allowed scale. Keeps media from degenerating to nothing.
    pub min: f64,
    /// Largest allowed scale.
    pub max: f64,
}

impl ScaleLimits {
    /// Default lower bound for every media kind.
    pub const DEFAULT_MIN: f64 = 0.01;
    /// Default upper bound for still, vector, and animated-image media.
    pub const STILL_MAX: f64 = 1.0;
    /// Default upper bound for video media.
    pub const PLAYABLE_MAX: f64 = 4.0;

    /// Creates limits from a `min`/`max` pair.
    ///
    /// The pair is normalized so that `min <= max`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Limits used for still, vector, and animated-image media.
    #[must_use]
    pub fn still() -> Self {
        Self::new(Self::DEFAULT_MIN, Self::STILL_MAX)
    }

    /// Limits used for video media.
    #[must_use]
    pub fn playable() -> Self {
        Self::new(Self::DEFAULT_MIN, Self::PLAYABLE_MAX)
    }

    /// Clamps `scale` into `[min, max]`.
    ///
    /// A NaN input resolves to `max`.
    #[must_use]
    pub fn clamp(self, scale: f64) -> f64 {
        scale.min(self.max).max(self.min)
    }

    /// Returns `true` if `scale` lies within the limits.
    #[must_use]
    pub fn contains(self, scale: f64) -> bool {
        scale >= self.min && scale <= self.max
    }
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self::still()
    }
}
