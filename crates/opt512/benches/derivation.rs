//! Benchmarks for OPT512 type derivation.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use opt512::{clean_coin_text, distance, parse_coin_text, Coins, FunctionKind, Opt512};

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");
    group.throughput(Throughput::Elements(1));

    group.bench_function("from_number", |b| {
        b.iter(|| black_box(Opt512::from_number(black_box(0b1_0110_0011))));
    });

    let opt = Opt512::from_number(0b1_0110_0011);
    group.bench_function("number", |b| {
        b.iter(|| black_box(black_box(opt).number()));
    });

    group.bench_function("complement", |b| {
        b.iter(|| black_box(black_box(opt).complement()));
    });

    group.finish();
}

fn bench_stack(c: &mut Criterion) {
    let mut group = c.benchmark_group("function_stack");
    group.throughput(Throughput::Elements(1));

    let regular = Opt512::from_number(0b0_0000_0101);
    let jumper = Opt512::from_number(0b0_0001_1001);
    let partial = Opt512::new(Coins::from_trinary_index(4_321));

    group.bench_function("regular", |b| {
        b.iter(|| black_box(black_box(regular).function_stack()));
    });
    group.bench_function("jumper", |b| {
        b.iter(|| black_box(black_box(jumper).function_stack()));
    });
    group.bench_function("partial", |b| {
        b.iter(|| black_box(black_box(partial).function_stack()));
    });

    group.finish();
}

fn bench_animals(c: &mut Criterion) {
    let mut group = c.benchmark_group("animals");
    group.throughput(Throughput::Elements(1));

    let opt = Opt512::from_number(300);
    group.bench_function("animal_codes", |b| {
        b.iter(|| black_box(black_box(opt).animal_codes()));
    });
    group.bench_function("activation", |b| {
        b.iter(|| black_box(black_box(opt).function(FunctionKind::Thinking).activation()));
    });
    group.bench_function("functions", |b| {
        b.iter(|| black_box(black_box(opt).functions()));
    });

    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("coin_text");
    group.throughput(Throughput::Elements(1));

    let opt = Opt512::from_number(300);
    let text = opt.coin_text();

    group.bench_function("render", |b| {
        b.iter(|| black_box(black_box(opt).coin_text()));
    });
    group.bench_function("parse", |b| {
        b.iter(|| black_box(parse_coin_text(black_box(&text))));
    });
    group.bench_function("clean", |b| {
        b.iter(|| black_box(clean_coin_text(black_box(" FM ti / ne  cp/s(b) "))));
    });

    group.finish();
}

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");
    group.throughput(Throughput::Elements(1));

    let a = Opt512::from_number(17);
    let b_opt = Opt512::from_number(402);

    group.bench_function("position", |b| {
        b.iter(|| black_box(black_box(a).position()));
    });
    group.bench_function("distance", |b| {
        b.iter(|| black_box(distance(black_box(a), black_box(b_opt))));
    });

    group.throughput(Throughput::Elements(511));
    group.bench_function("nearest", |b| {
        b.iter(|| black_box(black_box(a).nearest()));
    });

    group.finish();
}

fn bench_all_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_types");
    group.throughput(Throughput::Elements(511));

    group.bench_function("report", |b| {
        b.iter(|| {
            for opt in Opt512::all() {
                black_box(opt.report());
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_encoding,
    bench_stack,
    bench_animals,
    bench_text,
    bench_distance,
    bench_all_types,
);
criterion_main!(benches);
