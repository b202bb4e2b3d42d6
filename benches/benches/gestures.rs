// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use loupe_gesture::{
    GestureConfig, GestureRouter, InputCapability, InputEvent, MouseInput, PointerInput,
    PointerKind, PointerPhase, TouchInput, TouchPhase,
};

const MOVES: usize = 256;

fn mouse_drag() -> Vec<InputEvent> {
    let mut events = vec![InputEvent::from(MouseInput::Down(Point::new(10.0, 10.0)))];
    events.extend(
        (0..MOVES).map(|i| InputEvent::from(MouseInput::Move(Point::new(10.0 + i as f64, 10.0)))),
    );
    events.push(MouseInput::Up(Point::new(10.0 + MOVES as f64, 10.0)).into());
    events
}

fn touch_pinch() -> Vec<InputEvent> {
    let contacts = |spread: f64| {
        [
            Point::new(100.0 - spread, 50.0),
            Point::new(100.0 + spread, 50.0),
        ]
    };
    let mut events = vec![InputEvent::from(TouchInput::new(
        TouchPhase::Start,
        &contacts(10.0),
        0,
    ))];
    events.extend((0..MOVES).map(|i| {
        let spread = 10.0 + i as f64 * 0.25;
        InputEvent::from(TouchInput::new(TouchPhase::Move, &contacts(spread), 16 * i as u64))
    }));
    events.push(TouchInput::new(TouchPhase::End, &[], 16 * MOVES as u64).into());
    events
}

fn pointer_pinch() -> Vec<InputEvent> {
    let finger = |phase: PointerPhase, x: f64, time_ms: u64| {
        PointerInput::new(phase, PointerKind::Touch, Point::new(x, 50.0), time_ms)
    };
    let mut events = vec![
        InputEvent::from(finger(PointerPhase::Down, 90.0, 0)),
        InputEvent::from(finger(PointerPhase::Down, 110.0, 1).secondary()),
    ];
    events.extend((0..MOVES).map(|i| {
        let x = 110.0 + i as f64 * 0.25;
        InputEvent::from(finger(PointerPhase::Move, x, 16 * i as u64).secondary())
    }));
    events.push(finger(PointerPhase::Up, 174.0, 16 * MOVES as u64).secondary().into());
    events
}

fn bench_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("gestures/route");
    group.throughput(Throughput::Elements(MOVES as u64 + 2));

    let streams = [
        ("mouse_drag", InputCapability::MOUSE_AND_TOUCH, mouse_drag()),
        ("touch_pinch", InputCapability::MOUSE_AND_TOUCH, touch_pinch()),
        ("pointer_pinch", InputCapability::POINTER, pointer_pinch()),
    ];
    for (name, capability, events) in &streams {
        group.bench_function(*name, |b| {
            b.iter_batched(
                || GestureRouter::new(*capability, GestureConfig::default()),
                |mut router| {
                    for event in events {
                        black_box(router.route(event, 1.0));
                    }
                    router
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_route);
criterion_main!(benches);
