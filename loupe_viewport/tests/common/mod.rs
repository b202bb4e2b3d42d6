// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for viewport integration tests.

#![allow(
    missing_docs,
    dead_code,
    reason = "Integration-test helper module; not every test file uses every helper."
)]

use kurbo::{Point, Size};
use loupe_imaging::FrameId;
use loupe_imaging_ref::RecordingSurface;
use loupe_viewport::{
    FrameSource, InputCapability, LoadToken, MediaDescriptor, MediaEvent, Playback, ViewParam,
    ViewportConfig, ViewportEngine,
};

pub(crate) type Engine = ViewportEngine<RecordingSurface>;

/// A still image.
pub(crate) struct Photo(pub(crate) Size);

impl FrameSource for Photo {
    fn natural_size(&self) -> Size {
        self.0
    }

    fn frame(&self) -> FrameId {
        FrameId(1)
    }
}

/// A video with scripted transport state.
pub(crate) struct Clip {
    pub(crate) size: Size,
    pub(crate) time: f64,
    pub(crate) playing: bool,
    pub(crate) muted: bool,
}

impl Clip {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            time: 0.0,
            playing: false,
            muted: false,
        }
    }
}

impl Playback for Clip {
    fn current_time(&self) -> f64 {
        self.time
    }

    fn duration(&self) -> Option<f64> {
        Some(10.0)
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    fn seek(&mut self, time: f64) {
        self.time = time;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}

impl FrameSource for Clip {
    fn natural_size(&self) -> Size {
        self.size
    }

    fn frame(&self) -> FrameId {
        FrameId(2)
    }

    fn playback(&self) -> Option<&dyn Playback> {
        Some(self)
    }

    fn playback_mut(&mut self) -> Option<&mut dyn Playback> {
        Some(self)
    }
}

/// An engine attached to a `width` x `height` recording surface.
pub(crate) fn engine(width: f64, height: f64, capability: InputCapability) -> Engine {
    engine_with(ViewportConfig::default(), width, height, capability)
}

pub(crate) fn engine_with(
    config: ViewportConfig,
    width: f64,
    height: f64,
    capability: InputCapability,
) -> Engine {
    let mut engine = Engine::new(config);
    engine.attach(RecordingSurface::new(width, height), capability);
    engine
}

/// Requests `url` and returns the token, ignoring the loader side.
pub(crate) fn request(engine: &mut Engine, url: &str) -> LoadToken {
    engine.load_media(MediaDescriptor::new(url), &mut |_: LoadToken, _: &MediaDescriptor| {})
}

/// Requests `url` and completes the load with `source`.
pub(crate) fn load(engine: &mut Engine, url: &str, source: impl FrameSource + 'static) -> LoadToken {
    let token = request(engine, url);
    engine.handle_media_event(MediaEvent::Loaded {
        token,
        source: Box::new(source),
    });
    token
}

/// The 200x150 container showing a 400x300 photo, fitted at half scale.
pub(crate) fn photo_engine(capability: InputCapability) -> Engine {
    let mut engine = engine(200.0, 150.0, capability);
    load(&mut engine, "photo.png", Photo(Size::new(400.0, 300.0)));
    engine
}

/// Drives pending frames until the animation ends. Returns the tick count.
pub(crate) fn run_animation(engine: &mut Engine) -> usize {
    let mut ticks = 0;
    while let Some(generation) = engine.pending_frame() {
        engine.tick(generation);
        ticks += 1;
        assert!(ticks <= 64, "animation did not settle");
    }
    ticks
}

pub(crate) fn assert_view_near(actual: ViewParam, expected: ViewParam) {
    let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
    assert!(
        close(actual.scale, expected.scale)
            && close(actual.x, expected.x)
            && close(actual.y, expected.y)
            && close(actual.angle, expected.angle),
        "expected {expected:?}, got {actual:?}"
    );
}

pub(crate) fn center(engine: &Engine) -> Point {
    let size = engine.container_size();
    Point::new(size.width / 2.0, size.height / 2.0)
}
