//! Benchmarks for the confetti step loop.

use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use d20_core::{ConfettiAnimation, ConfettiConfig, ConfettiTrigger, SpriteId};

fn raining_animation(particle_count: usize) -> ConfettiAnimation {
    let mut anim = ConfettiAnimation::new(ConfettiConfig {
        particle_count,
        rain: Duration::from_secs(3600),
        ..Default::default()
    });
    anim.trigger(
        &ConfettiTrigger {
            sprites: vec![SpriteId::Confetti, SpriteId::CryingEmoji],
        },
        200.0,
        60.0,
    );
    anim
}

fn bench_step(c: &mut Criterion) {
    let frame = Duration::from_millis(16);

    c.bench_function("confetti_step_30", |b| {
        let mut anim = raining_animation(30);
        b.iter(|| {
            anim.step(black_box(frame));
            black_box(anim.particles().len());
        });
    });

    c.bench_function("confetti_step_1000", |b| {
        let mut anim = raining_animation(1000);
        b.iter(|| {
            anim.step(black_box(frame));
            black_box(anim.particles().len());
        });
    });
}

fn bench_trigger(c: &mut Criterion) {
    c.bench_function("confetti_trigger_30", |b| {
        b.iter(|| {
            let mut anim = ConfettiAnimation::new(ConfettiConfig::default());
            anim.trigger(
                &ConfettiTrigger {
                    sprites: vec![black_box(SpriteId::Confetti)],
                },
                200.0,
                60.0,
            );
            black_box(anim.particles().len());
        });
    });
}

criterion_group!(benches, bench_step, bench_trigger);
criterion_main!(benches);
