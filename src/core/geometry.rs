use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::direction::{Direction, classify};
use crate::core::ruler::{BarSlotOptions, RulerConfig, bar_slot};
use crate::core::scale::{IndexAxis, ValueAxis};
use crate::core::FinancialDataPoint;

/// Pixel geometry of one bar.
///
/// `open`/`high`/`low`/`close` are value-axis pixels. `base_pixel` is where the
/// bar animates from: the axis baseline on a reset layout, the bar's own low
/// otherwise. `collapsed` marks records degraded to zero height because the
/// source prices (or their pixel mapping) were not finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometricRecord {
    pub center_x: f64,
    pub width: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub base_pixel: f64,
    pub direction: Direction,
    pub collapsed: bool,
}

impl GeometricRecord {
    /// Zero-size record at `(center_x, pixel)`.
    #[must_use]
    pub fn collapsed_at(center_x: f64, width: f64, pixel: f64) -> Self {
        Self {
            center_x,
            width,
            open: pixel,
            high: pixel,
            low: pixel,
            close: pixel,
            base_pixel: pixel,
            direction: Direction::Unchanged,
            collapsed: true,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        [
            self.center_x,
            self.width,
            self.open,
            self.high,
            self.low,
            self.close,
            self.base_pixel,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Resolves bar `index` of a single (unstacked) series.
#[must_use]
pub fn resolve_geometry(
    index: usize,
    point: &FinancialDataPoint,
    ruler: &RulerConfig,
    slots: BarSlotOptions,
    value_axis: &dyn ValueAxis,
    index_axis: &dyn IndexAxis,
    is_reset: bool,
) -> GeometricRecord {
    resolve_stacked_geometry(
        index, 0, point, ruler, slots, value_axis, index_axis, is_reset,
    )
}

/// Resolves bar `index` placed in stack `stack_index` of its category.
///
/// Each price is mapped through the value axis on its own since the axis may
/// be non-linear. Never produces non-finite coordinates: bad prices collapse
/// to the axis baseline and a bad slot collapses to a zero-width bar at the
/// index axis start.
#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn resolve_stacked_geometry(
    index: usize,
    stack_index: usize,
    point: &FinancialDataPoint,
    ruler: &RulerConfig,
    slots: BarSlotOptions,
    value_axis: &dyn ValueAxis,
    index_axis: &dyn IndexAxis,
    is_reset: bool,
) -> GeometricRecord {
    let slot = bar_slot(index, ruler, slots, stack_index);
    let slot_ok = slot.center.is_finite() && slot.size.is_finite();
    let (center_x, width) = if slot_ok {
        (slot.center, slot.size.max(0.0))
    } else {
        (finite_or_zero(index_axis.start_pixel()), 0.0)
    };

    let axis_base = finite_or_zero(value_axis.base_pixel());
    let open = value_axis.pixel_for_value(point.o);
    let high = value_axis.pixel_for_value(point.h);
    let low = value_axis.pixel_for_value(point.l);
    let close = value_axis.pixel_for_value(point.c);

    let prices_ok = point.has_finite_prices()
        && open.is_finite()
        && high.is_finite()
        && low.is_finite()
        && close.is_finite();
    if !prices_ok {
        trace!(index, x = point.x, "collapsing bar with non-finite prices");
        return GeometricRecord::collapsed_at(center_x, width, axis_base);
    }

    GeometricRecord {
        center_x,
        width,
        open,
        high,
        low,
        close,
        base_pixel: if is_reset { axis_base } else { low },
        direction: classify(point.o, point.c),
        collapsed: !slot_ok,
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
