// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::PI;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

use crate::{ViewParam, normalize_angle};

/// Tuning knobs for [`TransformAnimator`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatorConfig {
    /// Largest rotation applied in a single frame, in radians.
    pub angle_step: f64,
    /// Remaining rotation below which the angle counts as aligned.
    pub angle_tolerance: f64,
    /// Upper bound on the number of easing frames.
    pub max_steps: u32,
    /// Easing frames contributed per container pixel of translation.
    pub translation_rate: f64,
    /// Easing frames contributed per unit of scale change.
    pub scale_rate: f64,
}

impl AnimatorConfig {
    /// Sets the per-frame rotation step. The tolerance follows as a tenth of it.
    ///
    /// Non-positive or non-finite steps fall back to the default.
    #[must_use]
    pub fn with_angle_step(mut self, step: f64) -> Self {
        let step = if step.is_finite() && step > 0.0 {
            step
        } else {
            Self::default().angle_step
        };
        self.angle_step = step;
        self.angle_tolerance = step / 10.0;
        self
    }

    /// Sets the upper bound on easing frames (at least one).
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Sets the translation and scale rates used to size the easing budget.
    #[must_use]
    pub fn with_rates(mut self, translation_rate: f64, scale_rate: f64) -> Self {
        self.translation_rate = translation_rate;
        self.scale_rate = scale_rate;
        self
    }
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        let angle_step = PI / 20.0;
        Self {
            angle_step,
            angle_tolerance: angle_step / 10.0,
            max_steps: 10,
            translation_rate: 0.02,
            scale_rate: 20.0,
        }
    }
}

/// Animation epoch.
///
/// Every started or cancelled animation bumps the epoch. Frame callbacks
/// carry the epoch they were scheduled for and become no-ops once it is
/// superseded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(pub u64);

impl Generation {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Where the animator is in its state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationPhase {
    /// No animation in flight.
    #[default]
    Idle,
    /// Rotating about the pivot until the angle matches the target.
    RotatingToAlign,
    /// Moving scale and translation toward the target in equal fractions.
    Easing,
}

/// Result of [`TransformAnimator::animate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationStart {
    /// Source and target already match. Render once; nothing is scheduled.
    Immediate,
    /// An animation was started. Schedule a frame carrying this generation.
    Scheduled(Generation),
}

/// Result of [`TransformAnimator::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationStep {
    /// The frame belonged to a superseded animation; nothing changed.
    Stale,
    /// The transform moved; schedule another frame with this generation.
    Continue(Generation),
    /// The transform reached the target; the animator is idle again.
    Finished,
}

/// Interpolates a live transform toward a target, rotation first.
///
/// The animator does not own the live transform. Callers pass it in on every
/// [`tick`](Self::tick), render after each step, and schedule the next frame
/// while the result is [`AnimationStep::Continue`].
///
/// ```
/// use kurbo::Point;
/// use loupe_view::{AnimationStart, AnimationStep, TransformAnimator, ViewParam};
///
/// let mut current = ViewParam::new(1.0, 0.0, 0.0, 0.0);
/// let target = ViewParam::new(2.0, -50.0, -50.0, 0.0);
///
/// let mut animator = TransformAnimator::default();
/// let AnimationStart::Scheduled(mut generation) = animator.animate(&current, target) else {
///     unreachable!();
/// };
/// loop {
///     match animator.tick(generation, &mut current, Point::new(50.0, 50.0)) {
///         AnimationStep::Continue(next) => generation = next,
///         AnimationStep::Finished => break,
///         AnimationStep::Stale => unreachable!(),
///     }
/// }
/// assert_eq!(current, target);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TransformAnimator {
    config: AnimatorConfig,
    generation: Generation,
    phase: AnimationPhase,
    final_target: Option<ViewParam>,
    steps: u32,
}

impl TransformAnimator {
    /// Creates an idle animator.
    #[must_use]
    pub fn new(config: AnimatorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the animator configuration.
    #[must_use]
    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// Returns the current generation.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Returns `true` while an animation is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != AnimationPhase::Idle
    }

    /// Returns the target of the animation in flight, if any.
    #[must_use]
    pub fn final_target(&self) -> Option<ViewParam> {
        self.final_target
    }

    /// Returns the remaining easing budget.
    #[must_use]
    pub fn remaining_steps(&self) -> u32 {
        self.steps
    }

    /// Returns the number of easing frames used to travel from `from` to `to`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the budget lies in [1, max_steps], which fits in u32"
    )]
    pub fn step_budget(&self, from: &ViewParam, to: &ViewParam) -> u32 {
        let cfg = &self.config;
        let dx = (to.x - from.x).abs() * cfg.translation_rate;
        let dy = (to.y - from.y).abs() * cfg.translation_rate;
        let ds = (to.scale - from.scale).abs() * cfg.scale_rate;
        let max = f64::from(cfg.max_steps.max(1));
        // NaN deltas fall through to the lower bound.
        dx.max(dy).max(ds).max(1.0).min(max).floor() as u32
    }

    /// Starts animating `current` toward `to`.
    ///
    /// Any animation already in flight is superseded.
    pub fn animate(&mut self, current: &ViewParam, to: ViewParam) -> AnimationStart {
        let to = to.normalized();
        self.generation = self.generation.next();
        if *current == to {
            self.reset();
            return AnimationStart::Immediate;
        }
        self.steps = self.step_budget(current, &to);
        self.final_target = Some(to);
        self.phase = self.phase_for(current, &to);
        AnimationStart::Scheduled(self.generation)
    }

    /// Advances the animation by one frame.
    ///
    /// `pivot` is the container point rotation happens about, normally the
    /// container center. Frames from a superseded generation change nothing.
    pub fn tick(&mut self, generation: Generation, current: &mut ViewParam, pivot: Point) -> AnimationStep {
        if generation != self.generation || self.phase == AnimationPhase::Idle {
            return AnimationStep::Stale;
        }
        let Some(target) = self.final_target else {
            self.reset();
            return AnimationStep::Stale;
        };

        let delta = normalize_angle(target.angle - current.angle);
        if delta.abs() > self.config.angle_tolerance {
            let step = delta.min(self.config.angle_step).max(-self.config.angle_step);
            *current = current.rotate_about(step, pivot, pivot);
            self.phase = self.phase_for(current, &target);
            return AnimationStep::Continue(self.generation);
        }

        if self.steps <= 1 {
            *current = target;
            self.reset();
            return AnimationStep::Finished;
        }

        let n = f64::from(self.steps);
        current.scale += (target.scale - current.scale) / n;
        current.x += (target.x - current.x) / n;
        current.y += (target.y - current.y) / n;
        current.angle = target.angle;
        self.steps -= 1;
        self.phase = AnimationPhase::Easing;
        AnimationStep::Continue(self.generation)
    }

    /// Cancels any animation in flight.
    ///
    /// The generation is bumped even when idle, so frames scheduled before
    /// the call are always stale afterwards.
    pub fn cancel(&mut self) {
        self.generation = self.generation.next();
        self.reset();
    }

    fn reset(&mut self) {
        self.phase = AnimationPhase::Idle;
        self.final_target = None;
        self.steps = 0;
    }

    fn phase_for(&self, current: &ViewParam, target: &ViewParam) -> AnimationPhase {
        if normalize_angle(target.angle - current.angle).abs() > self.config.angle_tolerance {
            AnimationPhase::RotatingToAlign
        } else {
            AnimationPhase::Easing
        }
    }
}
