use approx::assert_abs_diff_eq;
use candle_layout::core::{
    Direction, FinancialElement, GeometricRecord, HitMode, LinearIndexAxis, LinearValueAxis,
    FinancialDataPoint,
};
use candle_layout::api::FinancialTheme;
use candle_layout::{FinancialSeries, SeriesConfig};

fn identity_element(open: f64, high: f64, low: f64, close: f64) -> FinancialElement {
    FinancialElement::new(
        0,
        GeometricRecord {
            center_x: 10.0,
            width: 8.0,
            open,
            high,
            low,
            close,
            base_pixel: low,
            direction: Direction::Unchanged,
            collapsed: false,
        },
    )
}

#[test]
fn center_point_and_tooltip_anchor_use_different_spans() {
    let bar = identity_element(100.0, 120.0, 90.0, 102.0);
    assert_abs_diff_eq!(bar.center_point().y, 105.0, epsilon = 1e-12);
    assert_abs_diff_eq!(bar.tooltip_anchor().y, 101.0, epsilon = 1e-12);
    assert_ne!(bar.center_point(), bar.tooltip_anchor());
    assert_eq!(bar.center_point().x, bar.tooltip_anchor().x);
}

#[test]
fn body_bounds_are_sign_normalized() {
    let rising = identity_element(150.0, 75.0, 180.0, 105.0);
    let falling = identity_element(105.0, 75.0, 180.0, 150.0);
    for bar in [rising, falling] {
        let body = bar.bounds(HitMode::Body);
        assert_eq!((body.top, body.bottom), (105.0, 150.0));
        let rect = bar.body_rect(0.0);
        assert_eq!((rect.top, rect.bottom), (105.0, 150.0));
        assert_eq!((rect.left, rect.right), (6.0, 14.0));
    }
}

#[test]
fn wick_mode_hits_where_body_mode_misses() {
    let bar = identity_element(150.0, 75.0, 180.0, 105.0);
    assert!(bar.contains_point(Some(10.0), Some(80.0), HitMode::Wick));
    assert!(!bar.contains_point(Some(10.0), Some(80.0), HitMode::Body));
    assert!(bar.contains_point(Some(10.0), Some(120.0), HitMode::Body));
    assert!(!bar.contains_point(Some(15.0), Some(120.0), HitMode::Body));
}

#[test]
fn series_tooltip_uses_data_values_and_body_anchor() {
    let points = vec![
        FinancialDataPoint::new(1.0, 100.0, 105.0, 98.0, 103.0),
        FinancialDataPoint::new(2.0, 103.0, 108.0, 101.0, 106.0),
        FinancialDataPoint::new(3.0, 106.0, 107.0, 104.0, 105.0),
    ];
    let series = FinancialSeries::new(
        points,
        SeriesConfig::candlestick().with_width_ratio(0.8),
        FinancialTheme::light(),
    )
    .expect("series");
    let value_axis = LinearValueAxis::new(90.0, 110.0, 300.0, 0.0).expect("value axis");
    let index_axis = LinearIndexAxis::new(0.0, 4.0, 0.0, 200.0).expect("index axis");
    let layout = series.layout(&value_axis, &index_axis, false);

    let tooltip = series
        .tooltip_at(&layout, Some(52.0), Some(120.0), HitMode::Body)
        .expect("first bar hit");
    assert_eq!(tooltip.index, 0);
    assert_eq!(tooltip.label, "O: 100  H: 105  L: 98  C: 103");
    assert_abs_diff_eq!(tooltip.anchor.y, 127.5, epsilon = 1e-9);
    assert_eq!(tooltip.direction, Direction::Down);

    let crosshair = layout
        .hit_test(Some(100.0), None, HitMode::Wick)
        .expect("index-only hit");
    assert_eq!(crosshair.index, 1);
    assert!(layout.hit_test(Some(75.0), None, HitMode::Wick).is_none());
    assert_eq!(layout.nearest_by_x(76.0).map(|e| e.index), Some(1));
    assert_eq!(series.tooltip_label(2).as_deref(), Some("O: 106  H: 107  L: 104  C: 105"));
    assert!(series.tooltip_label(3).is_none());
}
