//! Benchmarks for style resolution and painting
//!
//! Run with: cargo bench -p glasscard-core
//!
//! Resolution runs on every configuration change, so it should stay cheap
//! enough that no memoization is needed.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glasscard_core::{
    resolve, resolve_lossy, CssPaint, SizeClass, StructuralVariant, ThemeMode, VisualTier,
};

// ============================================================================
// Resolution Benchmarks
// ============================================================================

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for tier in VisualTier::ALL {
        group.bench_with_input(BenchmarkId::new("frosted_full_width", tier), &tier, |b, tier| {
            b.iter(|| {
                black_box(resolve(
                    *tier,
                    StructuralVariant::parse_lossy("navigation"),
                    SizeClass::FullWidth,
                ))
            })
        });
    }

    group.bench_function("all_combinations", |b| {
        b.iter(|| {
            for tier in VisualTier::ALL {
                for variant in StructuralVariant::ALL {
                    for size in SizeClass::ALL {
                        black_box(resolve(tier, variant, size));
                    }
                }
            }
        })
    });

    group.bench_function("lossy_strings", |b| {
        b.iter(|| black_box(resolve_lossy("emphasized", "expanded", "large")))
    });

    group.finish();
}

// ============================================================================
// Paint Benchmarks
// ============================================================================

fn bench_paint(c: &mut Criterion) {
    let spec = resolve(
        VisualTier::Solid,
        StructuralVariant::parse_lossy("content"),
        SizeClass::Large,
    );
    let paint = CssPaint::new(ThemeMode::Light);

    c.bench_function("style_attribute", |b| {
        b.iter(|| black_box(paint.style_attribute(&spec)))
    });

    c.bench_function("hovered_style_attribute", |b| {
        b.iter(|| black_box(paint.style_attribute(&spec.with_hover(0.5))))
    });
}

criterion_group!(resolve_benches, bench_resolve,);

criterion_group!(paint_benches, bench_paint,);

criterion_main!(resolve_benches, paint_benches);
