// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Size};
use loupe_gesture::PointReason;
use loupe_view::{Generation, ViewParam};

/// What was drawn by one successful render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedView {
    /// Transform the media was drawn with.
    pub view: ViewParam,
    /// Playback position in seconds, for playable media.
    pub time: Option<f64>,
}

/// A container point the host may want to react to, such as a click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointEvent {
    /// Position in container coordinates.
    pub at: Point,
    /// What produced the point.
    pub reason: PointReason,
}

/// Host hook that runs [`ViewportEngine::tick`](crate::ViewportEngine::tick)
/// on the next display frame.
pub trait FrameScheduler {
    /// Requests one frame carrying `generation`.
    fn request_frame(&mut self, generation: Generation);
}

impl<F: FnMut(Generation)> FrameScheduler for F {
    fn request_frame(&mut self, generation: Generation) {
        self(generation);
    }
}

pub(crate) type ViewObserver = Box<dyn FnMut(&RenderedView)>;
pub(crate) type PointObserver = Box<dyn FnMut(&PointEvent)>;
pub(crate) type ResizeObserver = Box<dyn FnMut(Size)>;

/// Host callbacks, all optional.
#[derive(Default)]
pub(crate) struct Observers {
    pub(crate) point: Option<PointObserver>,
    pub(crate) resize: Option<ResizeObserver>,
    pub(crate) scheduler: Option<Box<dyn FrameScheduler>>,
}

impl Observers {
    pub(crate) fn point(&mut self, event: PointEvent) {
        if let Some(observer) = &mut self.point {
            observer(&event);
        }
    }

    pub(crate) fn resize(&mut self, size: Size) {
        if let Some(observer) = &mut self.resize {
            observer(size);
        }
    }

    pub(crate) fn request_frame(&mut self, generation: Generation) {
        if let Some(scheduler) = &mut self.scheduler {
            scheduler.request_frame(generation);
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("point", &self.point.is_some())
            .field("resize", &self.resize.is_some())
            .field("scheduler", &self.scheduler.is_some())
            .finish()
    }
}
