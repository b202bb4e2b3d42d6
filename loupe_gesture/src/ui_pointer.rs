// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion from [`ui_events`] pointer events into Loupe input.
//!
//! Scroll events become [`MouseInput::Wheel`]. Down, up, move, cancel and
//! leave events become a [`PointerInput`]; the rest are dropped. Positions are logical, so callers should
//! offset them into container coordinates if the container is not at the
//! window origin.

use kurbo::Point;
use ui_events::ScrollDelta;
use ui_events::pointer::{PointerEvent, PointerInfo, PointerType};

use crate::{InputEvent, MouseInput, PointerInput, PointerKind, PointerPhase, WheelDelta};

/// Stateful converter from [`PointerEvent`] to [`InputEvent`].
///
/// Cancel and leave events carry no position, so the converter remembers the
/// last one it saw.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UiEventConverter {
    last_position: Point,
    last_time_ms: u64,
}

impl UiEventConverter {
    /// Creates a converter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts `event`, returning `None` for events Loupe does not use.
    pub fn convert(&mut self, event: &PointerEvent) -> Option<InputEvent> {
        let (phase, info, position, time_ns) = match event {
            PointerEvent::Down(e) => (PointerPhase::Down, &e.pointer, e.state.logical_point(), e.state.time),
            PointerEvent::Up(e) => (PointerPhase::Up, &e.pointer, e.state.logical_point(), e.state.time),
            PointerEvent::Move(e) => (
                PointerPhase::Move,
                &e.pointer,
                e.current.logical_point(),
                e.current.time,
            ),
            PointerEvent::Scroll(e) => {
                let at = e.state.logical_point();
                self.last_position = at;
                let delta = match &e.delta {
                    ScrollDelta::PixelDelta(pos) => {
                        WheelDelta::Pixels(pos.to_logical::<f64>(e.state.scale_factor).y)
                    }
                    ScrollDelta::LineDelta(_, y) => WheelDelta::Lines(f64::from(*y)),
                    ScrollDelta::PageDelta(_, y) => WheelDelta::Lines(f64::from(*y) * 3.0),
                };
                return Some(MouseInput::Wheel { at, delta }.into());
            }
            PointerEvent::Cancel(info) => {
                return Some(self.positionless(PointerPhase::Cancel, info));
            }
            PointerEvent::Leave(info) => {
                return Some(self.positionless(PointerPhase::Leave, info));
            }
            _ => return None,
        };
        self.last_position = position;
        self.last_time_ms = time_ns / 1_000_000;
        Some(
            PointerInput {
                phase,
                kind: kind_of(info),
                primary: info.is_primary_pointer(),
                position,
                time_ms: self.last_time_ms,
            }
            .into(),
        )
    }

    fn positionless(&self, phase: PointerPhase, info: &PointerInfo) -> InputEvent {
        PointerInput {
            phase,
            kind: kind_of(info),
            primary: info.is_primary_pointer(),
            position: self.last_position,
            time_ms: self.last_time_ms,
        }
        .into()
    }
}

fn kind_of(info: &PointerInfo) -> PointerKind {
    match info.pointer_type {
        PointerType::Mouse => PointerKind::Mouse,
        PointerType::Touch => PointerKind::Touch,
        _ => PointerKind::Pen,
    }
}
