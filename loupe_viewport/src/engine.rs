// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::f64::consts::FRAC_PI_2;
use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Size};
use log::{debug, trace, warn};
use loupe_gesture::{Gesture, GestureRouter, InputCapability, InputEvent, Wiring};
use loupe_imaging::Surface;
use loupe_view::{
    AnimationPhase, AnimationStart, AnimationStep, BoundsClamp, FitSolver, Generation, ScaleLimits,
    TransformAnimator, ViewParam, normalize_angle,
};

use crate::config::ViewportConfig;
use crate::media::{FrameSource, LoadToken, MediaDescriptor, MediaEvent, MediaKind, MediaLoader, Playback};
use crate::observer::{FrameScheduler, Observers, PointEvent, RenderedView};
use crate::renderer::Renderer;

struct LoadedMedia {
    descriptor: MediaDescriptor,
    source: Box<dyn FrameSource>,
}

/// Interactive viewport showing one piece of media on a [`Surface`].
///
/// The engine owns the live transform (`current`), the fit transform, and
/// the target of any animation in flight. Every mutation renders
/// immediately. Animations advance one step per [`tick`](Self::tick); the
/// engine asks the host's [`FrameScheduler`] for each next frame and also
/// exposes it through [`pending_frame`](Self::pending_frame).
///
/// ```
/// use loupe_imaging::{FrameId, Size};
/// use loupe_imaging_ref::RecordingSurface;
/// use loupe_viewport::{
///     FrameSource, InputCapability, LoadToken, MediaDescriptor, MediaEvent, ViewportConfig,
///     ViewportEngine,
/// };
///
/// struct Photo;
///
/// impl FrameSource for Photo {
///     fn natural_size(&self) -> Size {
///         Size::new(400.0, 300.0)
///     }
///
///     fn frame(&self) -> FrameId {
///         FrameId(0)
///     }
/// }
///
/// let mut engine = ViewportEngine::new(ViewportConfig::default());
/// engine.attach(RecordingSurface::new(200.0, 150.0), InputCapability::POINTER);
///
/// let mut requested = None;
/// let token = engine.load_media(MediaDescriptor::new("photo.png"), &mut |t: LoadToken, _: &MediaDescriptor| {
///     requested = Some(t);
/// });
/// assert_eq!(requested, Some(token));
///
/// engine.handle_media_event(MediaEvent::Loaded { token, source: Box::new(Photo) });
/// assert_eq!(engine.view_param().scale, 0.5);
/// ```
pub struct ViewportEngine<S: Surface> {
    config: ViewportConfig,
    surface: Option<S>,
    container: Size,
    router: Option<GestureRouter>,
    renderer: Renderer,
    observers: Observers,
    animator: TransformAnimator,
    current: ViewParam,
    fit: ViewParam,
    target: ViewParam,
    media: Option<LoadedMedia>,
    pending_load: Option<(LoadToken, MediaDescriptor)>,
    next_token: u64,
    pending_frame: Option<Generation>,
}

impl<S: Surface> ViewportEngine<S> {
    /// Creates a detached engine.
    #[must_use]
    pub fn new(config: ViewportConfig) -> Self {
        let placeholder = ViewParam::new(config.still_limits.min, 0.0, 0.0, 0.0);
        Self {
            config,
            surface: None,
            container: Size::ZERO,
            router: None,
            renderer: Renderer::new(),
            observers: Observers::default(),
            animator: TransformAnimator::new(config.animator),
            current: placeholder,
            fit: placeholder,
            target: placeholder,
            media: None,
            pending_load: None,
            next_token: 0,
            pending_frame: None,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    // --- Host wiring ---

    /// Takes ownership of `surface` and wires input for `capability`.
    ///
    /// The first attach centers the placeholder transform in the container.
    /// Attaching again swaps the surface, keeps the wiring, and behaves like
    /// [`resize`](Self::resize).
    pub fn attach(&mut self, surface: S, capability: InputCapability) {
        let reattach = self.surface.is_some();
        self.surface = Some(surface);
        if reattach {
            debug!("viewport surface replaced");
            self.resize();
            return;
        }

        self.container = self.surface_size();
        let router = GestureRouter::new(capability, self.config.gestures);
        debug!(
            "viewport attached: {}x{} container, {:?} wiring",
            self.container.width,
            self.container.height,
            router.wiring()
        );
        self.router = Some(router);
        self.current = ViewParam::new(
            self.limits().min,
            self.container.width / 2.0,
            self.container.height / 2.0,
            0.0,
        );
        self.fit = self.current;
        self.target = self.current;
        if self.media.is_some() {
            self.apply_initial_fit();
        }
    }

    /// Cancels any animation, drops media, input state and observers, and
    /// hands the surface back.
    pub fn detach(&mut self) -> Option<S> {
        self.cancel_animation();
        self.media = None;
        self.pending_load = None;
        self.router = None;
        self.observers = Observers::default();
        self.renderer.clear_view_observer();
        debug!("viewport detached");
        self.surface.take()
    }

    /// Returns `true` while a surface is attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// Returns the attached surface.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Returns the attached surface mutably.
    ///
    /// Changing its size only takes effect on the next [`resize`](Self::resize).
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Returns the wiring chosen at attach time.
    #[must_use]
    pub fn wiring(&self) -> Option<Wiring> {
        self.router.as_ref().map(GestureRouter::wiring)
    }

    /// Sets the callback that runs after every successful render.
    pub fn set_view_observer(&mut self, observer: impl FnMut(&RenderedView) + 'static) {
        self.renderer.set_view_observer(observer);
    }

    /// Sets the callback for clicks, touch ends and idle mouse moves.
    pub fn set_point_observer(&mut self, observer: impl FnMut(&PointEvent) + 'static) {
        self.observers.point = Some(Box::new(observer));
    }

    /// Sets the callback that runs on every [`resize`](Self::resize), before
    /// the fit is recomputed.
    pub fn set_resize_observer(&mut self, observer: impl FnMut(Size) + 'static) {
        self.observers.resize = Some(Box::new(observer));
    }

    /// Sets the hook used to request animation frames.
    pub fn set_frame_scheduler(&mut self, scheduler: impl FrameScheduler + 'static) {
        self.observers.scheduler = Some(Box::new(scheduler));
    }

    /// Returns the generation of the frame the engine is waiting for.
    #[must_use]
    pub fn pending_frame(&self) -> Option<Generation> {
        self.pending_frame
    }

    // --- Geometry queries ---

    /// Returns the live transform.
    #[must_use]
    pub fn view_param(&self) -> ViewParam {
        self.current
    }

    /// Returns the stored fit, or a fresh fit at `angle` without storing it.
    ///
    /// Before any media is loaded the stored fit is the centered placeholder.
    /// A fresh fit is `None` when none exists at `angle`, for example before
    /// any media is loaded.
    #[must_use]
    pub fn fit_view_param(&self, angle: Option<f64>) -> Option<ViewParam> {
        match angle.map(normalize_angle) {
            Some(angle) if angle != self.fit.angle => self.solve_fit(angle),
            _ => Some(self.fit),
        }
    }

    /// Returns the last transform an animation was asked to reach.
    #[must_use]
    pub fn animation_target(&self) -> ViewParam {
        self.target
    }

    /// Returns the container size read at the last attach or resize.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container
    }

    /// Returns the scale bounds for the current media.
    #[must_use]
    pub fn limits(&self) -> ScaleLimits {
        match self.media_kind() {
            Some(MediaKind::Video) => self.config.playable_limits,
            _ => self.config.still_limits,
        }
    }

    // --- Media ---

    /// Returns the kind of the loaded media.
    #[must_use]
    pub fn media_kind(&self) -> Option<MediaKind> {
        self.media.as_ref().map(|m| m.descriptor.kind)
    }

    /// Returns the descriptor of the loaded media.
    #[must_use]
    pub fn media_descriptor(&self) -> Option<&MediaDescriptor> {
        self.media.as_ref().map(|m| &m.descriptor)
    }

    /// Returns the natural size of the loaded media.
    #[must_use]
    pub fn media_size(&self) -> Option<Size> {
        self.media.as_ref().map(|m| m.source.natural_size())
    }

    /// Returns the duration of playable media, in seconds.
    #[must_use]
    pub fn media_duration(&self) -> Option<f64> {
        self.media.as_ref()?.source.playback()?.duration()
    }

    /// Returns `true` when the loaded media plays.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.media
            .as_ref()
            .is_some_and(|m| m.source.playback().is_some())
    }

    /// Returns the transport controls of playable media.
    pub fn playback_mut(&mut self) -> Option<&mut dyn Playback> {
        self.media.as_mut()?.source.playback_mut()
    }

    /// Returns `true` while a load request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    /// Requests `descriptor` from `loader`.
    ///
    /// A request for the URL already loading is dropped and the outstanding
    /// token is returned. The media on screen stays until the new media
    /// arrives.
    pub fn load_media(
        &mut self,
        descriptor: MediaDescriptor,
        loader: &mut (impl MediaLoader + ?Sized),
    ) -> LoadToken {
        if let Some((token, pending)) = &self.pending_load
            && pending.url == descriptor.url
        {
            trace!("ignoring repeated load of {}", descriptor.url);
            return *token;
        }
        self.next_token = self.next_token.wrapping_add(1);
        let token = LoadToken(self.next_token);
        debug!("loading {} as {:?} ({token:?})", descriptor.url, descriptor.kind);
        loader.request(token, &descriptor);
        self.pending_load = Some((token, descriptor));
        token
    }

    /// Applies a loader event.
    ///
    /// Events for anything but the outstanding request are ignored.
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        let token = event.token();
        let Some((pending, _)) = &self.pending_load else {
            warn!("ignoring media event for {token:?}: nothing is loading");
            return;
        };
        if *pending != token {
            warn!("ignoring stale media event for {token:?}");
            return;
        }

        match event {
            MediaEvent::Progress { fraction, .. } => self.render_progress(fraction),
            MediaEvent::Loaded { source, .. } => {
                let Some((_, descriptor)) = self.pending_load.take() else {
                    return;
                };
                let size = source.natural_size();
                debug!(
                    "loaded {}: {}x{} media",
                    descriptor.url, size.width, size.height
                );
                self.media = Some(LoadedMedia { descriptor, source });
                self.apply_initial_fit();
                self.autoplay();
            }
            MediaEvent::Failed { error, .. } => {
                let url = self.pending_load.take().map(|(_, d)| d.url);
                warn!("failed to load {}: {error}", url.unwrap_or_default());
            }
        }
    }

    /// Re-renders the current frame, for example after playable media
    /// decoded a new one.
    pub fn refresh(&mut self) {
        self.render();
    }

    // --- View operations ---

    /// Re-reads the container size and refits.
    ///
    /// Playable media jumps to the new fit; still media animates to it.
    pub fn resize(&mut self) {
        if self.surface.is_none() {
            return;
        }
        self.container = self.surface_size();
        self.observers.resize(self.container);
        debug!(
            "viewport resized to {}x{}",
            self.container.width, self.container.height
        );
        let Some(fit) = self.solve_fit(self.current.angle) else {
            self.render();
            return;
        };
        self.fit = fit;
        if self.is_playable() {
            self.snap_to(fit);
        } else {
            self.animate_to(fit);
        }
    }

    /// Recomputes the fit at the current angle and moves there.
    pub fn fit(&mut self, animated: bool) {
        let Some(fit) = self.solve_fit(self.current.angle) else {
            debug!("no fit for the current media and container");
            return;
        };
        self.fit = fit;
        if animated {
            self.animate_to(fit);
        } else {
            self.snap_to(fit);
        }
    }

    /// Rotates by `angle` radians.
    ///
    /// With `align`, the resulting angle snaps to the nearest quarter turn and
    /// the view animates to the fit at that angle. Without it, the view
    /// rotates freely about the container center.
    pub fn rotate(&mut self, angle: f64, align: bool) {
        if align {
            let quarter = ((self.current.angle + angle) / FRAC_PI_2).round();
            let Some(fit) = self.solve_fit(quarter * FRAC_PI_2) else {
                debug!("no fit to rotate into");
                return;
            };
            self.fit = fit;
            self.animate_to(fit);
        } else {
            let center = self.container_center();
            let to = self.current.rotate_about(angle, center, center);
            self.animate_to(to);
        }
    }

    /// Rotates a quarter turn clockwise, aligned.
    pub fn rotate_cw(&mut self) {
        self.rotate(FRAC_PI_2, true);
    }

    /// Rotates a quarter turn counter-clockwise, aligned.
    pub fn rotate_ccw(&mut self) {
        self.rotate(-FRAC_PI_2, true);
    }

    /// Animates to `view`, with its scale clamped to the limits.
    ///
    /// When `view` has a different angle than the stored fit, the fit is
    /// recomputed at that angle first.
    pub fn set_view_param(&mut self, view: ViewParam) {
        let limits = self.limits();
        let view = ViewParam {
            scale: limits.clamp(view.scale),
            ..view
        }
        .normalized();
        if view.angle != self.fit.angle
            && let Some(fit) = self.solve_fit(view.angle)
        {
            self.fit = fit;
        }
        self.animate_to(view);
    }

    // --- Input ---

    /// Routes `event` through the gesture router and applies the result.
    ///
    /// Returns `false` when the event belongs to an input family that is
    /// not wired, or when no surface is attached.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        let scale = self.floored_scale();
        let Some(router) = &mut self.router else {
            return false;
        };
        let Some(gestures) = router.route(event, scale) else {
            return false;
        };
        for gesture in gestures {
            self.apply_gesture(gesture);
        }
        true
    }

    fn apply_gesture(&mut self, gesture: Gesture) {
        trace!("applying {gesture:?}");
        match gesture {
            Gesture::PanBegin { .. } | Gesture::PinchBegin { .. } => {
                self.cancel_animation();
                if self.current.scale < self.fit.scale {
                    self.current = self.fit;
                    self.render();
                }
            }
            Gesture::PanBy { delta } => {
                self.current = self.current.translated(delta);
                self.render();
            }
            Gesture::PinchTo { anchor, scale } => {
                self.current = self.current.zoom_about(scale, anchor, anchor, self.limits());
                self.render();
            }
            Gesture::Release => {
                if let Some(clamped) = self.clamped(self.current)
                    && clamped != self.current
                {
                    self.animate_to(clamped);
                }
            }
            Gesture::Wheel { at, steps } => {
                self.cancel_animation();
                let factor = self.config.gestures.wheel_factor(steps);
                let zoomed = self
                    .current
                    .zoom_about(self.current.scale * factor, at, at, self.limits());
                self.current = self.clamped(zoomed).unwrap_or(zoomed);
                self.render();
            }
            Gesture::ToggleZoom { at } => self.toggle_zoom(at),
            Gesture::Point { at, reason } => self.observers.point(PointEvent { at, reason }),
        }
    }

    fn toggle_zoom(&mut self, at: Point) {
        if self.current != self.fit {
            self.animate_to(self.fit);
            return;
        }
        let limits = self.limits();
        let scale = limits.clamp((self.fit.scale * self.config.zoom_in_factor).max(1.0));
        let zoomed = self.current.zoom_about(scale, at, at, limits);
        let to = self.clamped(zoomed).unwrap_or(zoomed);
        self.animate_to(to);
    }

    // --- Animation ---

    /// Advances the animation by one frame.
    ///
    /// Frames from a superseded animation are ignored.
    pub fn tick(&mut self, generation: Generation) -> AnimationStep {
        if self.pending_frame == Some(generation) {
            self.pending_frame = None;
        }
        self.step(generation)
    }

    /// Returns the current animation phase.
    #[must_use]
    pub fn animation_phase(&self) -> AnimationPhase {
        self.animator.phase()
    }

    fn animate_to(&mut self, to: ViewParam) {
        self.target = to.normalized();
        self.pending_frame = None;
        match self.animator.animate(&self.current, self.target) {
            AnimationStart::Immediate => self.render(),
            // The first step runs now; later ones follow the host's frames.
            AnimationStart::Scheduled(generation) => {
                self.step(generation);
            }
        }
    }

    fn step(&mut self, generation: Generation) -> AnimationStep {
        let pivot = self.container_center();
        let result = self.animator.tick(generation, &mut self.current, pivot);
        match result {
            AnimationStep::Stale => trace!("dropping stale frame {generation:?}"),
            AnimationStep::Continue(next) => {
                self.render();
                self.pending_frame = Some(next);
                self.observers.request_frame(next);
            }
            AnimationStep::Finished => {
                self.render();
                self.pending_frame = None;
            }
        }
        result
    }

    fn snap_to(&mut self, to: ViewParam) {
        self.cancel_animation();
        self.current = to;
        self.target = to;
        self.render();
    }

    fn cancel_animation(&mut self) {
        self.animator.cancel();
        self.pending_frame = None;
    }

    // --- Internals ---

    fn surface_size(&self) -> Size {
        self.surface.as_ref().map_or(Size::ZERO, Surface::size)
    }

    fn container_center(&self) -> Point {
        Point::new(self.container.width / 2.0, self.container.height / 2.0)
    }

    fn solve_fit(&self, angle: f64) -> Option<ViewParam> {
        let media = self.media_size()?;
        FitSolver::new(self.limits()).solve(media, self.container, angle)
    }

    fn clamped(&self, candidate: ViewParam) -> Option<ViewParam> {
        let media = self.media_size()?;
        Some(BoundsClamp::new(media).clamp(candidate, self.fit))
    }

    /// Scale a pinch starting now begins from; never below the fit.
    fn floored_scale(&self) -> f64 {
        if self.current.scale < self.fit.scale {
            self.fit.scale
        } else {
            self.current.scale
        }
    }

    fn apply_initial_fit(&mut self) {
        if let Some(router) = &mut self.router {
            router.cancel();
        }
        // Keep the rotation the view has, or is rotating to.
        match self.solve_fit(self.target.angle) {
            Some(fit) => {
                self.fit = fit;
                self.snap_to(fit);
            }
            None => {
                debug!("media has no fit in the current container");
                self.cancel_animation();
                self.render();
            }
        }
    }

    fn autoplay(&mut self) {
        if !self.config.autoplay {
            return;
        }
        let mute = self.config.mute_autoplay && self.media_kind() == Some(MediaKind::Video);
        if let Some(playback) = self.playback_mut() {
            if mute {
                playback.set_muted(true);
            }
            playback.set_playing(true);
        }
    }

    fn render(&mut self) {
        let Some(surface) = &mut self.surface else {
            return;
        };
        let frame = self.media.as_ref().map(|m| &*m.source);
        self.renderer.draw(surface, &self.current, frame);
    }

    fn render_progress(&mut self, fraction: f64) {
        let Some(surface) = &mut self.surface else {
            return;
        };
        let frame = self.media.as_ref().map(|m| &*m.source);
        self.renderer
            .draw_progress(surface, &self.current, frame, fraction, &self.config.progress);
    }

    /// Returns a snapshot of the engine state for diagnostics.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            current: self.current,
            fit: self.fit,
            target: self.target,
            container: self.container,
            media_size: self.media_size(),
            media_kind: self.media_kind(),
            limits: self.limits(),
            phase: self.animator.phase(),
            wiring: self.wiring(),
            pending_frame: self.pending_frame,
            loading: self.is_loading(),
        }
    }
}

impl<S: Surface + fmt::Debug> fmt::Debug for ViewportEngine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportEngine")
            .field("config", &self.config)
            .field("surface", &self.surface)
            .field("container", &self.container)
            .field("router", &self.router)
            .field("renderer", &self.renderer)
            .field("observers", &self.observers)
            .field("animator", &self.animator)
            .field("current", &self.current)
            .field("fit", &self.fit)
            .field("target", &self.target)
            .field("media", &self.media.as_ref().map(|m| &m.descriptor))
            .field("pending_load", &self.pending_load)
            .field("next_token", &self.next_token)
            .field("pending_frame", &self.pending_frame)
            .finish()
    }
}

/// Snapshot of a [`ViewportEngine`]'s state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportDebugInfo {
    /// Live transform.
    pub current: ViewParam,
    /// Stored fit transform.
    pub fit: ViewParam,
    /// Last animation target.
    pub target: ViewParam,
    /// Container size.
    pub container: Size,
    /// Natural size of the loaded media.
    pub media_size: Option<Size>,
    /// Kind of the loaded media.
    pub media_kind: Option<MediaKind>,
    /// Scale bounds in effect.
    pub limits: ScaleLimits,
    /// Animation phase.
    pub phase: AnimationPhase,
    /// Input wiring, while attached.
    pub wiring: Option<Wiring>,
    /// Generation of the frame the engine waits for.
    pub pending_frame: Option<Generation>,
    /// Whether a load is outstanding.
    pub loading: bool,
}
