use candle_layout::api::FinancialTheme;
use candle_layout::core::{
    Bounds, FinancialDataPoint, LinearIndexAxis, LinearScale, LinearValueAxis,
    compute_extent, compute_min_sample_size,
};
use candle_layout::render::RecordingContext;
use candle_layout::{FinancialSeries, SeriesConfig};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn generated_points(count: usize) -> Vec<FinancialDataPoint> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            let base = 100.0 + t * 0.05;
            let open = base;
            let close = if i % 2 == 0 { base + 1.0 } else { base - 1.0 };
            let low = open.min(close) - 0.75;
            let high = open.max(close) + 0.75;
            FinancialDataPoint::new(t, open, high, low, close)
        })
        .collect()
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new(0.0, 10_000.0, 0.0, 1_920.0).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.domain_to_pixel(black_box(4_321.123));
            let _ = scale.pixel_to_domain(px);
        })
    });
}

fn bench_min_sample_size_10k(c: &mut Criterion) {
    let pixels: Vec<f64> = (0..10_000).map(|i| i as f64 * 0.19).collect();
    let ticks: Vec<f64> = (0..20).map(|i| i as f64 * 96.0).collect();

    c.bench_function("min_sample_size_10k", |b| {
        b.iter(|| compute_min_sample_size(black_box(&pixels), black_box(&ticks), 1_920.0))
    });
}

fn bench_extent_10k(c: &mut Criterion) {
    let points = generated_points(10_000);

    c.bench_function("extent_10k", |b| {
        b.iter(|| compute_extent(black_box(&points), 0, points.len()))
    });
}

fn bench_layout_pass_10k(c: &mut Criterion) {
    let series = FinancialSeries::new(
        generated_points(10_000),
        SeriesConfig::candlestick(),
        FinancialTheme::light(),
    )
    .expect("series init");
    let value_axis = LinearValueAxis::new(0.0, 2_500.0, 1_080.0, 0.0).expect("value axis");
    let index_axis = LinearIndexAxis::new(-1.0, 10_001.0, 0.0, 1_920.0)
        .expect("index axis")
        .with_tick_step(500.0)
        .expect("tick step");

    c.bench_function("candle_layout_pass_10k", |b| {
        b.iter(|| series.layout(black_box(&value_axis), black_box(&index_axis), false))
    });
}

fn bench_draw_pass_10k(c: &mut Criterion) {
    let series = FinancialSeries::new(
        generated_points(10_000),
        SeriesConfig::ohlc(),
        FinancialTheme::dark(),
    )
    .expect("series init");
    let value_axis = LinearValueAxis::new(0.0, 2_500.0, 1_080.0, 0.0).expect("value axis");
    let index_axis = LinearIndexAxis::new(-1.0, 10_001.0, 0.0, 1_920.0).expect("index axis");
    let layout = series.layout(&value_axis, &index_axis, false);
    let plot_area = Bounds {
        left: 0.0,
        right: 1_920.0,
        top: 0.0,
        bottom: 1_080.0,
    };

    c.bench_function("ohlc_draw_pass_10k", |b| {
        b.iter(|| {
            let mut ctx = RecordingContext::new();
            series
                .draw(&mut ctx, plot_area, black_box(&layout))
                .expect("draw should succeed");
            ctx
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_min_sample_size_10k,
    bench_extent_10k,
    bench_layout_pass_10k,
    bench_draw_pass_10k
);
criterion_main!(benches);
