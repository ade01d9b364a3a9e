use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use mimalloc::MiMalloc;
use serde::Serialize;
use valtree::{SeqValue, StructValue, Value, to_value};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Serialize)]
struct Item {
    name: String,
    count: u8,
    enchanted: bool,
}

#[derive(Serialize)]
struct Player {
    name: String,
    level: i32,
    inventory: Vec<Item>,
    flags: Vec<bool>,
}

fn player() -> Player {
    Player {
        name: "Steve".to_owned(),
        level: 30,
        inventory: (0..256)
            .map(|i| Item {
                name: format!("item_{i}"),
                count: (i % 64) as u8,
                enchanted: i % 7 == 0,
            })
            .collect(),
        flags: (0..64).map(|i| i % 2 == 0).collect(),
    }
}

fn wide_tree(width: i32) -> Value {
    let mut root = StructValue::new();
    for i in 0..width {
        let mut seq = SeqValue::with_capacity(8);
        for j in 0..8 {
            seq.push_back(i * j);
        }
        root.insert(format!("key_{i:05}"), seq);
    }
    Value::from(root)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let tree = wide_tree(4096);
    group.bench_function("valtree/wide", |b| {
        b.iter(|| black_box(&tree).write_to_vec())
    });
    group.bench_function("serde_json/wide", |b| {
        b.iter(|| serde_json::to_vec(black_box(&tree)))
    });

    let player = player();
    let tree = to_value(&player).unwrap();
    group.bench_function("valtree/player", |b| {
        b.iter(|| black_box(&tree).write_to_vec())
    });
    group.bench_function("serde_json/player", |b| {
        b.iter(|| serde_json::to_vec(black_box(&player)))
    });

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let player = player();
    c.bench_function("to_value/player", |b| {
        b.iter(|| to_value(black_box(&player)))
    });
    c.bench_function("build/wide", |b| b.iter(|| wide_tree(black_box(1024))));
}

criterion_group!(benches, bench_render, bench_build);
criterion_main!(benches);
