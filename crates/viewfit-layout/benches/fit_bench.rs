//! Fit computation under resize storm patterns.
//!
//! Resize events arrive at native drag frequency, so the fit computation
//! sits on the hot path of every drag. These benches drive `compute_fit`
//! with burst, oscillate, and sweep storm shapes.
//!
//! Run with: cargo bench -p viewfit-layout --bench fit_bench

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use viewfit_layout::{FitPolicy, Insets, Size, Surface, Viewport, compute_fit};

const FRAME: Surface = Surface::Authored(Size::new(1512.0, 982.0));
const INSETS: Insets = Insets::new(73.0, 0.0, 0.0, 293.0);

/// Deterministic storm sizes from a small LCG, seeded per pattern.
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    fn next_size(&mut self) -> Size {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        let w = 400.0 + (self.state % 3200) as f64;
        let h = 300.0 + ((self.state >> 16) % 1800) as f64;
        Size::new(w, h)
    }
}

fn burst_sizes(count: usize) -> Vec<Size> {
    let mut rng = Lcg::new(42);
    (0..count).map(|_| rng.next_size()).collect()
}

fn oscillate_sizes(cycles: usize) -> Vec<Size> {
    let a = Size::new(1280.0, 720.0);
    let b = Size::new(1920.0, 1080.0);
    (0..cycles * 2)
        .map(|i| if i % 2 == 0 { a } else { b })
        .collect()
}

fn sweep_sizes(steps: usize) -> Vec<Size> {
    (0..steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            Size::new(800.0 + t * 1120.0, 600.0 + t * 480.0)
        })
        .collect()
}

fn bench_storm(c: &mut Criterion, name: &str, sizes: Vec<Size>) {
    c.bench_function(name, |b| {
        b.iter(|| {
            for &size in &sizes {
                black_box(compute_fit(
                    Viewport::new(black_box(size)),
                    INSETS,
                    FRAME,
                    FitPolicy::ShrinkToFitBoth,
                ));
            }
        });
    });
}

fn fit_storms(c: &mut Criterion) {
    bench_storm(c, "fit_burst_50", burst_sizes(50));
    bench_storm(c, "fit_oscillate_10", oscillate_sizes(10));
    bench_storm(c, "fit_sweep_20", sweep_sizes(20));
}

criterion_group!(benches, fit_storms);
criterion_main!(benches);
