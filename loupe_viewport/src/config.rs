// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use loupe_gesture::GestureConfig;
use loupe_imaging::ProgressRingStyle;
use loupe_view::{AnimatorConfig, ScaleLimits};

/// Tuning knobs for a [`ViewportEngine`](crate::ViewportEngine).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    /// Scale bounds for still images and vector documents.
    pub still_limits: ScaleLimits,
    /// Scale bounds for video.
    pub playable_limits: ScaleLimits,
    /// Animation step sizes.
    pub animator: AnimatorConfig,
    /// Gesture recognition settings.
    pub gestures: GestureConfig,
    /// Loading indicator appearance.
    pub progress: ProgressRingStyle,
    /// Multiple of the fit scale a double click zooms to.
    ///
    /// The target never drops below natural resolution (scale 1).
    pub zoom_in_factor: f64,
    /// Start playable media as soon as it loads.
    pub autoplay: bool,
    /// Mute video that starts through autoplay.
    pub mute_autoplay: bool,
}

impl ViewportConfig {
    /// Sets the scale bounds for still media.
    #[must_use]
    pub fn with_still_limits(mut self, limits: ScaleLimits) -> Self {
        self.still_limits = limits;
        self
    }

    /// Sets the scale bounds for video.
    #[must_use]
    pub fn with_playable_limits(mut self, limits: ScaleLimits) -> Self {
        self.playable_limits = limits;
        self
    }

    /// Sets the animation configuration.
    #[must_use]
    pub fn with_animator(mut self, animator: AnimatorConfig) -> Self {
        self.animator = animator;
        self
    }

    /// Sets the gesture configuration.
    #[must_use]
    pub fn with_gestures(mut self, gestures: GestureConfig) -> Self {
        self.gestures = gestures;
        self
    }

    /// Sets the progress ring style.
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressRingStyle) -> Self {
        self.progress = progress;
        self
    }

    /// Sets the double-click zoom factor. Values not above 1 are ignored.
    #[must_use]
    pub fn with_zoom_in_factor(mut self, factor: f64) -> Self {
        if factor > 1.0 && factor.is_finite() {
            self.zoom_in_factor = factor;
        }
        self
    }

    /// Enables or disables autoplay.
    #[must_use]
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Controls whether autoplayed video starts muted.
    #[must_use]
    pub fn with_mute_autoplay(mut self, mute: bool) -> Self {
        self.mute_autoplay = mute;
        self
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            still_limits: ScaleLimits::still(),
            playable_limits: ScaleLimits::playable(),
            animator: AnimatorConfig::default(),
            gestures: GestureConfig::default(),
            progress: ProgressRingStyle::default(),
            zoom_in_factor: 2.0,
            autoplay: true,
            mute_autoplay: true,
        }
    }
}
