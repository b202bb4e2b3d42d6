// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for input handling in `ViewportEngine`.
//!
//! Each test feeds raw mouse, touch or pointer events and checks the
//! transform the engine settles on.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{Engine, assert_view_near, center, photo_engine, run_animation};
use kurbo::Point;
use loupe_viewport::{
    AnimationStep, InputCapability, InputEvent, MouseInput, PointEvent, PointReason, PointerInput,
    PointerKind, PointerPhase, TouchInput, TouchPhase, ViewParam, WheelDelta,
};

const FIT: ViewParam = ViewParam {
    scale: 0.5,
    x: 0.0,
    y: 0.0,
    angle: 0.0,
};

fn mouse_engine() -> Engine {
    photo_engine(InputCapability::MOUSE_AND_TOUCH)
}

fn pointer_engine() -> Engine {
    photo_engine(InputCapability::POINTER)
}

fn send(engine: &mut Engine, event: impl Into<InputEvent>) -> bool {
    engine.handle_input(&event.into())
}

fn touch(phase: TouchPhase, touches: &[Point], time_ms: u64) -> TouchInput {
    TouchInput::new(phase, touches, time_ms)
}

fn finger(phase: PointerPhase, x: f64, y: f64, time_ms: u64) -> PointerInput {
    PointerInput::new(phase, PointerKind::Touch, Point::new(x, y), time_ms)
}

fn points(engine: &mut Engine) -> Rc<RefCell<Vec<PointEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let seen = events.clone();
    engine.set_point_observer(move |event: &PointEvent| seen.borrow_mut().push(*event));
    events
}

#[test]
fn pan_without_motion_changes_nothing() {
    let mut engine = mouse_engine();
    let at = Point::new(50.0, 50.0);
    assert!(send(&mut engine, MouseInput::Down(at)));
    assert!(send(&mut engine, MouseInput::Up(at)));
    assert_eq!(engine.view_param(), FIT);
    assert_eq!(engine.pending_frame(), None);
}

#[test]
fn pan_past_the_edge_springs_back_to_fit() {
    let mut engine = mouse_engine();
    send(&mut engine, MouseInput::Down(Point::new(100.0, 75.0)));
    send(&mut engine, MouseInput::Move(Point::new(300.0, 75.0)));
    assert_eq!(engine.view_param().x, 200.0);

    send(&mut engine, MouseInput::Up(Point::new(300.0, 75.0)));
    assert!(engine.pending_frame().is_some());
    run_animation(&mut engine);
    assert_eq!(engine.view_param(), FIT);
}

#[test]
fn wheel_zooms_about_cursor_immediately() {
    let mut engine = mouse_engine();
    let at = center(&engine);
    send(
        &mut engine,
        MouseInput::Wheel {
            at,
            delta: WheelDelta::Lines(-3.0),
        },
    );
    assert_eq!(engine.pending_frame(), None);
    assert_view_near(engine.view_param(), ViewParam::new(0.55, -10.0, -7.5, 0.0));

    // Panning inside the zoomed bounds sticks.
    send(&mut engine, MouseInput::Down(at));
    send(&mut engine, MouseInput::Move(at + kurbo::Vec2::new(5.0, 0.0)));
    send(&mut engine, MouseInput::Up(at));
    assert_eq!(engine.pending_frame(), None);
    assert_view_near(engine.view_param(), ViewParam::new(0.55, -5.0, -7.5, 0.0));
}

#[test]
fn wheel_cannot_zoom_out_past_fit() {
    let mut engine = pointer_engine();
    let wheel = MouseInput::Wheel {
        at: Point::new(10.0, 10.0),
        delta: WheelDelta::Legacy(-240.0),
    };
    assert!(send(&mut engine, wheel));
    assert_eq!(engine.view_param(), FIT);
}

#[test]
fn wheel_is_clamped_to_scale_limits() {
    let mut engine = mouse_engine();
    let wheel = MouseInput::Wheel {
        at: Point::new(100.0, 75.0),
        delta: WheelDelta::Legacy(120.0 * 20.0),
    };
    send(&mut engine, wheel);
    assert_eq!(engine.view_param().scale, 1.0);
}

#[test]
fn double_click_toggles_between_fit_and_zoom() {
    let mut engine = mouse_engine();
    let at = center(&engine);
    send(&mut engine, MouseInput::DoubleClick(at));
    run_animation(&mut engine);
    let zoomed = engine.view_param();
    assert!(zoomed.scale > FIT.scale);
    assert_eq!(zoomed, ViewParam::new(1.0, -100.0, -75.0, 0.0));

    send(&mut engine, MouseInput::DoubleClick(at));
    run_animation(&mut engine);
    assert_eq!(engine.view_param(), FIT);
}

#[test]
fn double_click_near_the_edge_stays_in_bounds() {
    let mut engine = mouse_engine();
    send(&mut engine, MouseInput::DoubleClick(Point::new(0.0, 0.0)));
    run_animation(&mut engine);
    // Zooming about the corner keeps the corner fixed.
    assert_eq!(engine.view_param(), ViewParam::new(1.0, 0.0, 0.0, 0.0));
}

#[test]
fn gestures_cancel_running_animation() {
    let mut engine = mouse_engine();
    let at = center(&engine);
    send(&mut engine, MouseInput::DoubleClick(at));
    let pending = engine.pending_frame().unwrap();
    let midway = engine.view_param();

    send(&mut engine, MouseInput::Down(Point::new(10.0, 10.0)));
    assert_eq!(engine.pending_frame(), None);
    assert_eq!(engine.tick(pending), AnimationStep::Stale);
    assert_eq!(engine.view_param(), midway);
}

#[test]
fn interaction_starts_from_fit_when_zoomed_out() {
    let mut engine = pointer_engine();
    engine.set_view_param(ViewParam::new(0.25, 50.0, 37.5, 0.0));
    run_animation(&mut engine);
    assert_eq!(engine.view_param().scale, 0.25);

    let down = PointerInput::new(PointerPhase::Down, PointerKind::Mouse, Point::new(5.0, 5.0), 0);
    send(&mut engine, down);
    assert_eq!(engine.view_param(), FIT);
}

#[test]
fn mouse_points_reach_observer() {
    let mut engine = mouse_engine();
    let events = points(&mut engine);
    let at = Point::new(30.0, 40.0);
    send(&mut engine, MouseInput::Move(at));
    send(&mut engine, MouseInput::Click(at));
    assert_eq!(
        *events.borrow(),
        [
            PointEvent {
                at,
                reason: PointReason::MouseMove
            },
            PointEvent {
                at,
                reason: PointReason::Click
            },
        ]
    );
}

#[test]
fn touch_pinch_zooms_about_midpoint() {
    let mut engine = mouse_engine();
    let y = 75.0;
    send(&mut engine, touch(TouchPhase::Start, &[Point::new(80.0, y)], 0));
    send(
        &mut engine,
        touch(TouchPhase::Start, &[Point::new(80.0, y), Point::new(120.0, y)], 500),
    );
    send(
        &mut engine,
        touch(TouchPhase::Move, &[Point::new(60.0, y), Point::new(140.0, y)], 520),
    );
    assert_view_near(engine.view_param(), ViewParam::new(1.0, -100.0, -75.0, 0.0));

    // Lifting one finger continues as a pan from the other.
    send(&mut engine, touch(TouchPhase::End, &[Point::new(140.0, y)], 540));
    send(&mut engine, touch(TouchPhase::Move, &[Point::new(150.0, y)], 560));
    assert_view_near(engine.view_param(), ViewParam::new(1.0, -90.0, -75.0, 0.0));

    send(&mut engine, touch(TouchPhase::End, &[], 580));
    assert_eq!(engine.pending_frame(), None);
}

#[test]
fn touch_pan_end_reports_touch_end() {
    let mut engine = mouse_engine();
    let events = points(&mut engine);
    send(&mut engine, touch(TouchPhase::Start, &[Point::new(20.0, 20.0)], 0));
    send(&mut engine, touch(TouchPhase::Move, &[Point::new(25.0, 20.0)], 10));
    send(&mut engine, touch(TouchPhase::End, &[], 20));
    assert_eq!(
        *events.borrow(),
        [PointEvent {
            at: Point::new(25.0, 20.0),
            reason: PointReason::TouchEnd
        }]
    );
    run_animation(&mut engine);
    assert_eq!(engine.view_param(), FIT);
}

#[test]
fn touch_double_tap_zooms_in() {
    let mut engine = mouse_engine();
    let at = center(&engine);
    send(&mut engine, touch(TouchPhase::Start, &[at], 0));
    send(&mut engine, touch(TouchPhase::End, &[], 50));
    send(&mut engine, touch(TouchPhase::Start, &[at], 200));
    run_animation(&mut engine);
    assert_eq!(engine.view_param(), ViewParam::new(1.0, -100.0, -75.0, 0.0));
}

#[test]
fn finger_jitter_after_double_tap_keeps_zooming() {
    let mut engine = mouse_engine();
    let at = center(&engine);
    send(&mut engine, touch(TouchPhase::Start, &[at], 0));
    send(&mut engine, touch(TouchPhase::End, &[], 50));
    send(&mut engine, touch(TouchPhase::Start, &[at], 200));
    send(&mut engine, touch(TouchPhase::Move, &[at + kurbo::Vec2::new(1.0, 0.0)], 210));
    send(&mut engine, touch(TouchPhase::End, &[], 220));
    assert!(engine.pending_frame().is_some());
    run_animation(&mut engine);
    assert_eq!(engine.view_param(), ViewParam::new(1.0, -100.0, -75.0, 0.0));
}

#[test]
fn slow_second_tap_is_a_pan() {
    let mut engine = mouse_engine();
    let at = center(&engine);
    send(&mut engine, touch(TouchPhase::Start, &[at], 0));
    send(&mut engine, touch(TouchPhase::End, &[], 50));
    send(&mut engine, touch(TouchPhase::Start, &[at], 400));
    assert_eq!(engine.pending_frame(), None);
    assert_eq!(engine.view_param(), FIT);
}

#[test]
fn pointer_pinch_uses_primary_and_secondary() {
    let mut engine = pointer_engine();
    send(&mut engine, finger(PointerPhase::Down, 80.0, 75.0, 0));
    send(&mut engine, finger(PointerPhase::Down, 120.0, 75.0, 10).secondary());
    send(&mut engine, finger(PointerPhase::Move, 140.0, 75.0, 20).secondary());
    assert_view_near(engine.view_param(), ViewParam::new(0.75, -50.0, -37.5, 0.0));

    send(&mut engine, finger(PointerPhase::Up, 140.0, 75.0, 30).secondary());
    assert_eq!(engine.pending_frame(), None);
}

#[test]
fn pointer_pinch_continues_as_pan_when_secondary_lifts() {
    let mut engine = pointer_engine();
    send(&mut engine, finger(PointerPhase::Down, 80.0, 75.0, 0));
    send(&mut engine, finger(PointerPhase::Down, 120.0, 75.0, 10).secondary());
    send(&mut engine, finger(PointerPhase::Move, 140.0, 75.0, 20).secondary());
    send(&mut engine, finger(PointerPhase::Up, 140.0, 75.0, 30).secondary());
    assert_view_near(engine.view_param(), ViewParam::new(0.75, -50.0, -37.5, 0.0));

    send(&mut engine, finger(PointerPhase::Move, 100.0, 75.0, 40));
    assert_view_near(engine.view_param(), ViewParam::new(0.75, -30.0, -37.5, 0.0));

    send(&mut engine, finger(PointerPhase::Up, 100.0, 75.0, 50));
    assert_eq!(engine.pending_frame(), None);
    assert_view_near(engine.view_param(), ViewParam::new(0.75, -30.0, -37.5, 0.0));
}

#[test]
fn pen_release_reports_click() {
    let mut engine = pointer_engine();
    let events = points(&mut engine);
    let at = Point::new(12.0, 34.0);
    send(&mut engine, PointerInput::new(PointerPhase::Down, PointerKind::Pen, at, 0));
    send(&mut engine, PointerInput::new(PointerPhase::Up, PointerKind::Pen, at, 10));
    assert_eq!(
        *events.borrow(),
        [PointEvent {
            at,
            reason: PointReason::Click
        }]
    );
}

#[test]
fn pointer_wiring_rejects_raw_touch() {
    let mut engine = pointer_engine();
    assert!(!send(&mut engine, touch(TouchPhase::Start, &[Point::ZERO], 0)));
    assert!(!send(&mut engine, MouseInput::Down(Point::ZERO)));
    assert!(send(&mut engine, MouseInput::DoubleClick(Point::ZERO)));
}

#[test]
fn mouse_and_touch_wiring_rejects_pointer() {
    let mut engine = mouse_engine();
    assert!(!send(&mut engine, finger(PointerPhase::Down, 1.0, 1.0, 0)));
    assert_eq!(engine.view_param(), FIT);
}
