// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the per-frame ASCII pipeline.
//!
//! Measures:
//! - RGBA to glyph grid conversion at the default hero density
//! - Grouping rows into same-colour runs for the canvas
//! - Effect-boosted glyph lookup while a ripple is alive

use criterion::{criterion_group, criterion_main, Criterion};
use speaker_page::ascii::convert::{grid_rows, row_runs};
use speaker_page::ascii::effects::Effects;
use speaker_page::ascii::{AsciiFrame, Charset, GlyphRamp, GridPoint};
use std::hint::black_box;
use std::time::Instant;

const COLUMNS: u32 = 180;

/// Diagonal gradient so neighbouring cells differ in colour and glyph.
fn gradient_rgba(columns: u32, rows: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((columns * rows * 4) as usize);
    for row in 0..rows {
        for column in 0..columns {
            let r = (column * 255 / columns) as u8;
            let g = (row * 255 / rows) as u8;
            let b = ((column + row) % 256) as u8;
            data.extend_from_slice(&[r, g, b, 255]);
        }
    }
    data
}

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("ascii_conversion");
    let rows = grid_rows(COLUMNS, 1920, 1080);
    let rgba = gradient_rgba(COLUMNS, rows);

    for charset in [Charset::Minimal, Charset::Detailed] {
        let ramp = GlyphRamp::new(charset);
        group.bench_function(format!("from_rgba_{charset:?}"), |b| {
            b.iter(|| {
                black_box(AsciiFrame::from_rgba(
                    black_box(&rgba),
                    COLUMNS,
                    rows,
                    &ramp,
                    0.85,
                ))
            });
        });
    }

    group.finish();
}

fn bench_row_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("ascii_row_runs");
    let rows = grid_rows(COLUMNS, 1920, 1080);
    let ramp = GlyphRamp::new(Charset::Detailed);
    let Some(frame) = AsciiFrame::from_rgba(&gradient_rgba(COLUMNS, rows), COLUMNS, rows, &ramp, 0.85)
    else {
        return;
    };

    group.bench_function("colored", |b| {
        b.iter(|| {
            for row in frame.row_slices() {
                black_box(row_runs(row, true, |_, cell| cell.glyph));
            }
        });
    });

    group.bench_function("monochrome", |b| {
        b.iter(|| {
            for row in frame.row_slices() {
                black_box(row_runs(row, false, |_, cell| cell.glyph));
            }
        });
    });

    let mut effects = Effects::new(true, true);
    let now = Instant::now();
    effects.set_pointer(Some(GridPoint::new(90.0, 25.0)));
    effects.spawn_ripple(GridPoint::new(40.0, 20.0), now);

    group.bench_function("with_effects", |b| {
        b.iter(|| {
            for (row_index, row) in frame.row_slices().enumerate() {
                black_box(row_runs(row, true, |column, cell| {
                    ramp.glyph(cell.luminance + effects.boost(column, row_index, now))
                }));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_conversion, bench_row_runs);
criterion_main!(benches);
