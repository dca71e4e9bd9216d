use serde::{Deserialize, Serialize};

use crate::core::FinancialDataPoint;
use crate::core::scale::IndexAxis;
use crate::error::{ChartError, ChartResult};

/// How much of each index slot a bar may occupy.
///
/// `category_percentage × bar_percentage` is the effective width ratio unless
/// `width_ratio` pins it directly or `bar_thickness` fixes the pixel width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarSlotOptions {
    pub category_percentage: f64,
    pub bar_percentage: f64,
    pub width_ratio: Option<f64>,
    pub bar_thickness: Option<f64>,
    pub max_bar_thickness: Option<f64>,
}

impl Default for BarSlotOptions {
    fn default() -> Self {
        Self {
            category_percentage: 0.8,
            bar_percentage: 0.9,
            width_ratio: None,
            bar_thickness: None,
            max_bar_thickness: None,
        }
    }
}

impl BarSlotOptions {
    #[must_use]
    pub fn with_width_ratio(mut self, ratio: f64) -> Self {
        self.width_ratio = Some(ratio);
        self
    }

    #[must_use]
    pub fn with_bar_thickness(mut self, thickness_px: f64) -> Self {
        self.bar_thickness = Some(thickness_px);
        self
    }

    #[must_use]
    pub fn with_max_bar_thickness(mut self, thickness_px: f64) -> Self {
        self.max_bar_thickness = Some(thickness_px);
        self
    }

    /// Ratio applied to the per-stack spacing when no fixed thickness is set.
    #[must_use]
    pub fn effective_ratio(self) -> f64 {
        if self.bar_thickness.is_some() {
            return 1.0;
        }
        self.width_ratio
            .unwrap_or(self.category_percentage * self.bar_percentage)
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("category_percentage", Some(self.category_percentage)),
            ("bar_percentage", Some(self.bar_percentage)),
            ("width_ratio", self.width_ratio),
        ] {
            if value.is_some_and(|v| !v.is_finite() || v <= 0.0 || v > 1.0) {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} must be finite and in (0, 1]"
                )));
            }
        }
        for (name, value) in [
            ("bar_thickness", self.bar_thickness),
            ("max_bar_thickness", self.max_bar_thickness),
        ] {
            if value.is_some_and(|v| !v.is_finite() || v <= 0.0) {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Shared spacing facts for every bar of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulerConfig {
    pub min_spacing: f64,
    pub pixel_positions: Vec<f64>,
    pub axis_start: f64,
    pub axis_end: f64,
    pub stack_count: usize,
    pub width_ratio: f64,
}

impl RulerConfig {
    /// Measures the index axis once for a whole series.
    #[must_use]
    pub fn compute(
        points: &[FinancialDataPoint],
        index_axis: &dyn IndexAxis,
        slots: BarSlotOptions,
        stack_count: usize,
    ) -> Self {
        let pixel_positions: Vec<f64> = points
            .iter()
            .map(|point| index_axis.pixel_for_value(point.x))
            .collect();
        let ticks = index_axis.tick_pixel_positions();
        let min_spacing =
            compute_min_sample_size(&pixel_positions, &ticks, index_axis.axis_length());

        Self {
            min_spacing,
            pixel_positions,
            axis_start: index_axis.start_pixel(),
            axis_end: index_axis.end_pixel(),
            stack_count: stack_count.max(1),
            width_ratio: slots.effective_ratio(),
        }
    }
}

/// Smallest spacing that keeps adjacent bars from overlapping.
///
/// Starts from the axis length and shrinks to the tightest consecutive gap in
/// both the plotted positions and the tick positions. Non-finite positions are
/// skipped. A non-finite or negative axis length counts as an axis that is not
/// laid out yet and contributes no bound; with nothing else to measure the
/// result is `0`.
#[must_use]
pub fn compute_min_sample_size(
    index_pixels: &[f64],
    tick_pixels: &[f64],
    axis_length: f64,
) -> f64 {
    let initial = if axis_length.is_finite() && axis_length >= 0.0 {
        axis_length
    } else {
        f64::INFINITY
    };

    let min = min_consecutive_gap(tick_pixels, min_consecutive_gap(index_pixels, initial));
    if min.is_finite() { min } else { 0.0 }
}

fn min_consecutive_gap(pixels: &[f64], initial: f64) -> f64 {
    pixels
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).abs())
        .filter(|gap| gap.is_finite())
        .fold(initial, f64::min)
}

/// Horizontal pixel slot of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSlot {
    pub center: f64,
    pub size: f64,
}

impl BarSlot {
    #[must_use]
    pub fn start(self) -> f64 {
        self.center - self.size / 2.0
    }

    #[must_use]
    pub fn end(self) -> f64 {
        self.center + self.size / 2.0
    }
}

/// Pixel slot of bar `index` within stack `stack_index`.
///
/// The category (spacing × category percentage, the full spacing when a width
/// ratio is pinned, or `bar_thickness` per stack) is split into `stack_count`
/// chunks that position the bars. Without a fixed thickness the bar is
/// `min_spacing / stack_count × ruler.width_ratio` wide; the result is capped
/// by `max_bar_thickness`.
#[must_use]
pub fn bar_slot(
    index: usize,
    ruler: &RulerConfig,
    slots: BarSlotOptions,
    stack_index: usize,
) -> BarSlot {
    let stack_count = ruler.stack_count.max(1) as f64;
    let (category_size, bar_size) = match (slots.bar_thickness, slots.width_ratio) {
        (Some(thickness), _) => (thickness * stack_count, thickness),
        (None, Some(_)) => (
            ruler.min_spacing,
            ruler.min_spacing / stack_count * ruler.width_ratio,
        ),
        (None, None) => (
            ruler.min_spacing * slots.category_percentage,
            ruler.min_spacing / stack_count * ruler.width_ratio,
        ),
    };
    let chunk = category_size / stack_count;
    let pixel = ruler
        .pixel_positions
        .get(index)
        .copied()
        .unwrap_or(f64::NAN);
    let start = pixel - category_size / 2.0;
    let center = start + chunk * stack_index as f64 + chunk / 2.0;
    let size = slots
        .max_bar_thickness
        .map_or(bar_size, |max| bar_size.min(max));

    BarSlot { center, size }
}
