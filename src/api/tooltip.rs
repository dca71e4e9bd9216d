use serde::{Deserialize, Serialize};

use crate::core::{Direction, FinancialDataPoint, FinancialElement, Point};

/// Tooltip text for one bar, in data units: `O: <o>  H: <h>  L: <l>  C: <c>`.
#[must_use]
pub fn format_tooltip_label(point: &FinancialDataPoint) -> String {
    format!(
        "O: {}  H: {}  L: {}  C: {}",
        point.o, point.h, point.l, point.c
    )
}

/// Everything a host tooltip callback needs for one hovered bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipItem {
    pub index: usize,
    pub x: f64,
    pub anchor: Point,
    pub direction: Direction,
    pub label: String,
}

impl TooltipItem {
    #[must_use]
    pub fn new(element: &FinancialElement, point: &FinancialDataPoint) -> Self {
        Self {
            index: element.index,
            x: point.x,
            anchor: element.tooltip_anchor(),
            direction: element.record.direction,
            label: format_tooltip_label(point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::format_tooltip_label;
    use crate::core::FinancialDataPoint;

    #[test]
    fn label_keeps_field_order_and_double_spacing() {
        let point = FinancialDataPoint::new(1.0, 100.0, 105.5, 98.0, 103.25);
        assert_eq!(
            format_tooltip_label(&point),
            "O: 100  H: 105.5  L: 98  C: 103.25"
        );
    }

    #[test]
    fn label_shows_missing_values_verbatim() {
        let point = FinancialDataPoint::new(1.0, f64::NAN, 1.0, 0.0, 0.5);
        assert_eq!(format_tooltip_label(&point), "O: NaN  H: 1  L: 0  C: 0.5");
    }
}
