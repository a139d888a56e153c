use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use codspeed_criterion_compat::{black_box, criterion_group, criterion_main, Criterion};
use padbind_handler::{
    AxisBinding, ButtonBinding, GamepadHandler, GamepadMapping, GamepadOptions, GamepadSnapshot,
    GamepadSource,
};

const BUTTONS: usize = 17;
const AXES: usize = 4;

/// Replays a fixed press pattern on a single device.
struct Replay {
    frame: usize,
}

impl GamepadSource for Replay {
    fn snapshots(&mut self) -> Vec<Option<GamepadSnapshot>> {
        self.frame += 1;
        let buttons: Vec<bool> = (0..BUTTONS).map(|i| (self.frame + i) % 4 < 2).collect();
        let axes: Vec<f32> = (0..AXES)
            .map(|i| ((self.frame + i) as f32 * 0.392_699_1).sin())
            .collect();
        vec![Some(
            GamepadSnapshot::new(0, "Xbox Wireless Controller")
                .with_buttons(&buttons)
                .with_axes(&axes),
        )]
    }
}

fn build_mapping(counter: &Rc<Cell<usize>>) -> GamepadMapping {
    let bump = |counter: &Rc<Cell<usize>>| {
        let counter = Rc::clone(counter);
        move || counter.set(counter.get() + 1)
    };
    let mut mapping = GamepadMapping::new("Xbox");
    for index in 0..BUTTONS {
        mapping = mapping.button(
            ButtonBinding::new(index)
                .on_press(bump(counter))
                .on_hold(bump(counter))
                .on_click(bump(counter)),
        );
    }
    for index in 0..AXES {
        mapping = mapping.axis(
            AxisBinding::new(index)
                .on_positive(bump(counter))
                .on_negative(bump(counter))
                .on_neutral(bump(counter)),
        );
    }
    mapping
}

pub fn bench_tick(c: &mut Criterion) {
    let counter = Rc::new(Cell::new(0));
    let mut handler = GamepadHandler::new(
        vec![build_mapping(&counter)],
        GamepadOptions::default(),
        Replay { frame: 0 },
    )
    .expect("valid mapping");
    handler.start().expect("supported source");

    let mut now = Instant::now();
    c.bench_function("tick_full_layout", |b| {
        b.iter(|| {
            now += Duration::from_millis(16);
            black_box(handler.tick(now));
        });
    });
    black_box(counter.get());
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
