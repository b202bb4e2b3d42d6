// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use loupe_imaging::FrameId;
use loupe_imaging_ref::RecordingSurface;
use loupe_viewport::{
    FrameSource, InputCapability, LoadToken, MediaDescriptor, MediaEvent, MouseInput,
    ViewportConfig, ViewportEngine, WheelDelta,
};

struct Photo;

impl FrameSource for Photo {
    fn natural_size(&self) -> Size {
        Size::new(4_000.0, 3_000.0)
    }

    fn frame(&self) -> FrameId {
        FrameId(0)
    }
}

fn loaded_engine() -> ViewportEngine<RecordingSurface> {
    let mut engine = ViewportEngine::new(ViewportConfig::default());
    engine.attach(RecordingSurface::new(1_280.0, 720.0), InputCapability::MOUSE_AND_TOUCH);
    let token = engine.load_media(
        MediaDescriptor::new("photo.png"),
        &mut |_: LoadToken, _: &MediaDescriptor| {},
    );
    engine.handle_media_event(MediaEvent::Loaded {
        token,
        source: Box::new(Photo),
    });
    engine
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");

    group.bench_function("wheel_zoom", |b| {
        b.iter_batched(
            loaded_engine,
            |mut engine| {
                for _ in 0..32 {
                    let wheel = MouseInput::Wheel {
                        at: Point::new(640.0, 360.0),
                        delta: WheelDelta::Legacy(120.0),
                    };
                    engine.handle_input(&wheel.into());
                }
                black_box(engine.view_param())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("double_click_animation", |b| {
        b.iter_batched(
            loaded_engine,
            |mut engine| {
                engine.handle_input(&MouseInput::DoubleClick(Point::new(300.0, 200.0)).into());
                while let Some(generation) = engine.pending_frame() {
                    engine.tick(generation);
                }
                black_box(engine.view_param())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
