use criterion::{Criterion, criterion_group, criterion_main};
use mosaic_layout::{CellKind, MosaicDelegate, MosaicLayout, Rect};
use std::hint::black_box;

/// Deterministic mix of one big cell for every two smalls.
struct PatternDelegate {
    count: usize,
}

impl MosaicDelegate for PatternDelegate {
    fn cell_kind(&self, index: usize) -> CellKind {
        if index % 3 == 0 {
            CellKind::Big
        } else {
            CellKind::Small
        }
    }
    fn item_count(&self) -> usize {
        self.count
    }
    fn content_width(&self) -> f32 {
        390.0
    }
    fn small_cell_height(&self) -> f32 {
        150.0
    }
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute");
    for count in [100usize, 1_000, 10_000] {
        group.bench_function(format!("{count}_items"), |b| {
            let delegate = PatternDelegate { count };
            let mut layout = MosaicLayout::new();
            b.iter(|| {
                layout.recompute(black_box(&delegate));
                black_box(layout.content_size())
            });
        });
    }
    group.finish();
}

fn bench_viewport_cull(c: &mut Criterion) {
    let delegate = PatternDelegate { count: 10_000 };
    let mut layout = MosaicLayout::new();
    layout.recompute(&delegate);
    let viewport = Rect::new(0.0, 30_000.0, 390.0, 800.0);

    c.bench_function("attributes_in_rect/10000_items", |b| {
        b.iter(|| black_box(layout.attributes_in_rect(black_box(&viewport))));
    });
}

criterion_group!(benches, bench_recompute, bench_viewport_cull);
criterion_main!(benches);
