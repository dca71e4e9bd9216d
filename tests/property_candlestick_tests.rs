use candle_layout::api::FinancialTheme;
use candle_layout::core::{
    Bounds, FinancialDataPoint, HitMode, LinearIndexAxis, LinearValueAxis,
};
use candle_layout::render::RecordingContext;
use candle_layout::{FinancialSeries, SeriesConfig};
use proptest::prelude::*;

fn bar_at(x: f64) -> impl Strategy<Value = FinancialDataPoint> {
    (0.0f64..1_000.0, 0.0f64..1_000.0, 0.0f64..100.0, 0.0f64..100.0).prop_map(
        move |(open, close, up, down)| {
            FinancialDataPoint::new(x, open, open.max(close) + up, open.min(close) - down, close)
        },
    )
}

fn series_strategy() -> impl Strategy<Value = Vec<FinancialDataPoint>> {
    (1usize..40).prop_flat_map(|len| {
        (0..len)
            .map(|i| bar_at(i as f64))
            .collect::<Vec<_>>()
    })
}

proptest! {
    #[test]
    fn body_spans_open_and_close_pixels(
        points in series_strategy(),
        ohlc in any::<bool>(),
        is_reset in any::<bool>()
    ) {
        let config = if ohlc { SeriesConfig::ohlc() } else { SeriesConfig::candlestick() };
        let series = FinancialSeries::new(points.clone(), config, FinancialTheme::light())
            .expect("series");
        let value_axis = LinearValueAxis::new(-200.0, 1_200.0, 600.0, 0.0).expect("value axis");
        let index_axis =
            LinearIndexAxis::new(-1.0, points.len() as f64, 0.0, 800.0).expect("index axis");
        let layout = series.layout(&value_axis, &index_axis, is_reset);

        prop_assert_eq!(layout.elements.len(), points.len());
        for (element, point) in layout.elements.iter().zip(&points) {
            prop_assert!(element.record.is_finite());
            prop_assert!(!element.record.collapsed);

            let open_px = value_axis.scale().domain_to_pixel(point.o);
            let close_px = value_axis.scale().domain_to_pixel(point.c);
            let body = element.bounds(HitMode::Body);
            prop_assert!((body.top - open_px.min(close_px)).abs() <= 1e-9);
            prop_assert!((body.bottom - open_px.max(close_px)).abs() <= 1e-9);

            let wick = element.bounds(HitMode::Wick);
            prop_assert!(wick.top <= body.top && wick.bottom >= body.bottom);
            prop_assert!(element.record.width >= 0.0);
        }

        let mut ctx = RecordingContext::new();
        let area = Bounds { left: 0.0, right: 800.0, top: 0.0, bottom: 600.0 };
        series.draw(&mut ctx, area, &layout).expect("draw");
        prop_assert_eq!(ctx.rejected_non_finite, 0);
        prop_assert!(ctx.is_balanced());
    }

    #[test]
    fn arbitrary_prices_never_produce_non_finite_geometry(
        prices in prop::collection::vec(
            prop_oneof![
                6 => (-1_000.0f64..1_000.0),
                1 => Just(f64::NAN),
                1 => Just(f64::INFINITY),
            ],
            4..64
        )
    ) {
        let points: Vec<_> = prices
            .chunks_exact(4)
            .enumerate()
            .map(|(i, p)| FinancialDataPoint::new(i as f64, p[0], p[1], p[2], p[3]))
            .collect();
        let series = FinancialSeries::new(points.clone(), SeriesConfig::default(), FinancialTheme::light())
            .expect("series");
        let value_axis = LinearValueAxis::new(-1_000.0, 1_000.0, 400.0, 0.0).expect("value axis");
        let index_axis =
            LinearIndexAxis::new(-1.0, points.len() as f64, 0.0, 400.0).expect("index axis");
        let layout = series.layout(&value_axis, &index_axis, false);

        let expected_collapsed = points.iter().filter(|p| !p.has_finite_prices()).count();
        prop_assert_eq!(layout.collapsed_count(), expected_collapsed);
        for element in &layout.elements {
            prop_assert!(element.record.is_finite());
        }
    }
}
