// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-contact drag tracking: incremental deltas for 1:1 panning.
//!
//! ## Usage
//!
//! 1) Call [`DragState::start`] with the position where the contact went down.
//! 2) On each move, call [`DragState::update`] to get the movement since the last update.
//! 3) Call [`DragState::end`] when the contact is released or cancelled.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use loupe_gesture::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0));
//!
//! assert_eq!(drag.update(Point::new(15.0, 18.0)), Some(Vec2::new(5.0, -2.0)));
//! assert_eq!(drag.last_pos, Some(Point::new(15.0, 18.0)));
//!
//! drag.end();
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Tracks the origin and last position of a single-contact drag.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragState {
    /// Where the drag began.
    pub start_pos: Option<Point>,
    /// Last position seen during the drag.
    pub last_pos: Option<Point>,
}

impl DragState {
    /// Begins a drag at `pos`, discarding any drag in progress.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Records a move to `pos` and returns the delta since the previous position.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    /// Returns the offset of `pos` from the drag origin.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| pos - start)
    }

    /// Ends the drag and returns the last known position.
    pub fn end(&mut self) -> Option<Point> {
        let last = self.last_pos;
        self.start_pos = None;
        self.last_pos = None;
        last
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
