use crate::core::types::AxisExtent;
use crate::core::FinancialDataPoint;

/// Value-axis extent over the half-open index window `[window_start, window_end)`.
///
/// Uses lows for the minimum and highs for the maximum so the axis covers
/// every wick. The window is clamped to the slice. Windows with fewer than two
/// points, or without a single finite low/high, yield [`AxisExtent::DEGENERATE`].
#[must_use]
pub fn compute_extent(
    points: &[FinancialDataPoint],
    window_start: usize,
    window_end: usize,
) -> AxisExtent {
    let window = clamp_window(points, window_start, window_end);
    if window.len() < 2 {
        return AxisExtent::DEGENERATE;
    }

    let (min, max) = window.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min, max), point| {
            let min = if point.l.is_finite() { min.min(point.l) } else { min };
            let max = if point.h.is_finite() { max.max(point.h) } else { max };
            (min, max)
        },
    );

    if min.is_finite() && max.is_finite() {
        AxisExtent::new(min, max)
    } else {
        AxisExtent::DEGENERATE
    }
}

/// Index-axis extent: first and last `x` of the window.
///
/// Points are expected in ascending `x` order; the engine never sorts.
#[must_use]
pub fn compute_index_extent(
    points: &[FinancialDataPoint],
    window_start: usize,
    window_end: usize,
) -> AxisExtent {
    let window = clamp_window(points, window_start, window_end);
    match (window.first(), window.last()) {
        (Some(first), Some(last))
            if window.len() >= 2 && first.x.is_finite() && last.x.is_finite() =>
        {
            AxisExtent::new(first.x, last.x)
        }
        _ => AxisExtent::DEGENERATE,
    }
}

fn clamp_window(
    points: &[FinancialDataPoint],
    window_start: usize,
    window_end: usize,
) -> &[FinancialDataPoint] {
    let end = window_end.min(points.len());
    let start = window_start.min(end);
    &points[start..end]
}
