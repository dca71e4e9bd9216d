use std::ops::Range;

use crate::core::FinancialDataPoint;

/// Converts an inclusive visible `x` range into the half-open index window
/// consumed by the extent resolver.
///
/// Assumes points are sorted by ascending `x`. Reversed bounds are swapped;
/// non-finite bounds select nothing.
#[must_use]
pub fn index_window_for_x_range(
    points: &[FinancialDataPoint],
    x_start: f64,
    x_end: f64,
) -> Range<usize> {
    if !x_start.is_finite() || !x_end.is_finite() {
        return 0..0;
    }
    let (min_x, max_x) = if x_start <= x_end {
        (x_start, x_end)
    } else {
        (x_end, x_start)
    };

    let start = points.partition_point(|point| point.x < min_x);
    let end = points.partition_point(|point| point.x <= max_x);
    start..end.max(start)
}

/// Points whose `x` falls inside an inclusive visible range.
#[must_use]
pub fn points_in_x_range(
    points: &[FinancialDataPoint],
    x_start: f64,
    x_end: f64,
) -> &[FinancialDataPoint] {
    &points[index_window_for_x_range(points, x_start, x_end)]
}
