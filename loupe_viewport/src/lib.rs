// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Viewport: an interactive viewer for a single image or video frame.
//!
//! [`ViewportEngine`] ties the other Loupe crates together:
//! - [`loupe_view`] provides the fit, clamp and animation math.
//! - [`loupe_gesture`] turns mouse, touch and pointer input into gestures.
//! - [`loupe_imaging`] is the drawing surface the engine renders into.
//!
//! The host supplies the surface, a [`MediaLoader`] that fetches and decodes
//! media, and optionally a [`FrameScheduler`] that runs
//! [`ViewportEngine::tick`] on the next display frame. Everything runs on the
//! host's UI thread; no call blocks.
//!
//! ## Lifecycle
//!
//! 1. [`ViewportEngine::attach`] a surface. The input wiring is chosen once
//!    from the platform's [`InputCapability`].
//! 2. [`ViewportEngine::load_media`] and forward the loader's
//!    [`MediaEvent`]s to [`ViewportEngine::handle_media_event`]. Loaded media
//!    is fitted without animation; playable media starts playing.
//! 3. Forward input with [`ViewportEngine::handle_input`] and layout changes
//!    with [`ViewportEngine::resize`].
//! 4. [`ViewportEngine::detach`] to get the surface back.
//!
//! ## Logging
//!
//! The engine logs through the [`log`] facade: lifecycle at `debug`,
//! per-gesture and per-frame decisions at `trace`, and load failures at
//! `warn`. Installing a logger is up to the host.
//!
//! [`svg::fix_dimensions`] helps hosts give size-less SVG documents a
//! natural size before decoding them.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod config;
mod engine;
mod media;
mod observer;
mod renderer;
pub mod svg;

pub use config::ViewportConfig;
pub use engine::{ViewportDebugInfo, ViewportEngine};
pub use media::{
    FrameSource, LoadError, LoadToken, MediaDescriptor, MediaEvent, MediaKind, MediaLoader,
    Playback, progress_fraction,
};
pub use observer::{FrameScheduler, PointEvent, RenderedView};
pub use renderer::Renderer;

pub use loupe_gesture::{
    InputCapability, InputEvent, MouseInput, PointReason, PointerInput, PointerKind, PointerPhase,
    TouchInput, TouchPhase, WheelDelta, Wiring,
};
pub use loupe_view::{AnimationPhase, AnimationStep, Generation, ScaleLimits, ViewParam};
