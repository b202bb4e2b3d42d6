// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use loupe_imaging::{Point, ProgressRingStyle, Rect, Surface, draw_progress_ring};
use loupe_view::ViewParam;

use crate::media::FrameSource;
use crate::observer::{RenderedView, ViewObserver};

/// Draws the current frame of the media under a [`ViewParam`].
///
/// Every draw clears the surface first. Media without a positive natural
/// size leaves the surface cleared and notifies nobody.
#[derive(Default)]
pub struct Renderer {
    on_view: Option<ViewObserver>,
}

impl Renderer {
    /// Creates a renderer without an observer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the callback that runs after every successful draw.
    pub fn set_view_observer(&mut self, observer: impl FnMut(&RenderedView) + 'static) {
        self.on_view = Some(Box::new(observer));
    }

    /// Removes the view callback.
    pub fn clear_view_observer(&mut self) {
        self.on_view = None;
    }

    /// Clears `surface` and draws `frame` under `view`.
    pub fn draw<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        view: &ViewParam,
        frame: Option<&dyn FrameSource>,
    ) -> Option<RenderedView> {
        surface.clear();
        let frame = frame?;
        let size = frame.natural_size();
        if !(size.width > 0.0 && size.height > 0.0) {
            return None;
        }

        surface.save();
        surface.translate(view.translation());
        surface.scale(view.scale);
        surface.rotate(view.angle);
        surface.draw_frame(frame.frame(), Rect::from_origin_size(Point::ORIGIN, size));
        surface.restore();

        let rendered = RenderedView {
            view: *view,
            time: frame.playback().map(|p| p.current_time()),
        };
        if let Some(observer) = &mut self.on_view {
            observer(&rendered);
        }
        Some(rendered)
    }

    /// Draws like [`draw`](Self::draw), then strokes the loading ring.
    pub fn draw_progress<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        view: &ViewParam,
        frame: Option<&dyn FrameSource>,
        fraction: f64,
        style: &ProgressRingStyle,
    ) {
        self.draw(surface, view, frame);
        draw_progress_ring(surface, fraction, style);
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("on_view", &self.on_view.is_some())
            .finish()
    }
}
