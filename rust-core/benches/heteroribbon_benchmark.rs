use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use ribbon_lattice::heteroribbon::{heteroribbon, valid_shifts, Align, Section};
use ribbon_lattice::interfaces::Axis;
use ribbon_lattice::lattice::agnr;

/// Pristine ribbons and connectivity checks for increasing widths
fn bench_nanoribbon(c: &mut Criterion) {
    let mut group = c.benchmark_group("nanoribbon");

    for width in [7, 13, 25] {
        group.bench_with_input(BenchmarkId::new("agnr", width), &width, |b, &width| {
            b.iter(|| agnr(black_box(width)));
        });

        let Ok(ribbon) = agnr(width) else { continue };
        group.bench_with_input(BenchmarkId::new("lone_atoms", width), &ribbon, |b, ribbon| {
            b.iter(|| ribbon.lone_atoms(black_box(1.562), &[Axis::X]));
        });
    }

    group.finish();
}

/// Shift enumeration over a grid of junctions
fn bench_valid_shifts(c: &mut Criterion) {
    c.bench_function("valid_shifts_grid", |b| {
        b.iter(|| {
            let mut total = 0;
            for previous in 1..=24 {
                for width in 1..=24 {
                    for open in [false, true] {
                        total += valid_shifts(previous, open, width, black_box(Align::Bottom)).len();
                    }
                }
            }
            total
        });
    });
}

/// Full heteroribbon assembly: alternating 7 and 13 wide sections
fn bench_heteroribbon(c: &mut Criterion) {
    let mut group = c.benchmark_group("heteroribbon");

    for count in [2, 8, 32] {
        let sections: Vec<Section> = (0..count)
            .map(|i| {
                let width = if i % 2 == 0 { 7 } else { 13 };
                Section::new(width).with_length(4)
            })
            .collect();

        group.bench_with_input(BenchmarkId::new("sections", count), &sections, |b, sections| {
            b.iter(|| heteroribbon(black_box(sections)));
        });
    }

    group.finish();
}

criterion_group!(
    heteroribbon_benches,
    bench_nanoribbon,
    bench_valid_shifts,
    bench_heteroribbon
);
criterion_main!(heteroribbon_benches);
