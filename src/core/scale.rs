//! Scale boundary between the engine and the host charting library.
//!
//! The resolvers only ever see [`ValueAxis`] and [`IndexAxis`]; hosts adapt
//! their own scale objects once at the integration boundary. The concrete
//! adapters here cover the common linear/log cases and back the test suite.
//!
//! Both traits require `Sync` so one layout pass can resolve bars in parallel.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Price axis as seen by the geometry resolver.
pub trait ValueAxis: Sync {
    /// Maps a data value to a pixel. May return a non-finite value when the
    /// axis cannot represent `value` (for example `<= 0` on a log axis).
    fn pixel_for_value(&self, value: f64) -> f64;

    /// Pixel bars grow from on their first (reset) layout.
    fn base_pixel(&self) -> f64;

    /// Optional user-pinned `(min, max)`; `None` means auto.
    fn user_bounds(&self) -> (Option<f64>, Option<f64>) {
        (None, None)
    }
}

/// Time/ordinal axis as seen by the ruler and geometry resolver.
pub trait IndexAxis: Sync {
    fn pixel_for_value(&self, value: f64) -> f64;

    /// Pixel position of every tick the axis currently displays.
    fn tick_pixel_positions(&self) -> Vec<f64>;

    fn start_pixel(&self) -> f64;

    fn end_pixel(&self) -> f64;

    fn axis_length(&self) -> f64 {
        (self.end_pixel() - self.start_pixel()).abs()
    }
}

/// Linear mapping from a data domain onto a pixel range.
///
/// The pixel range may be inverted (`pixel_start > pixel_end`), which is the
/// usual orientation for a price axis on a canvas whose y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    pixel_start: f64,
    pixel_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        pixel_start: f64,
        pixel_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !pixel_start.is_finite() || !pixel_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale pixel range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            pixel_start,
            pixel_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn pixel_range(self) -> (f64, f64) {
        (self.pixel_start, self.pixel_end)
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.pixel_start + normalized * (self.pixel_end - self.pixel_start)
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.pixel_start) / (self.pixel_end - self.pixel_start);
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}

/// Linear price axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearValueAxis {
    scale: LinearScale,
    #[serde(default)]
    user_min: Option<f64>,
    #[serde(default)]
    user_max: Option<f64>,
}

impl LinearValueAxis {
    /// Maps `[min, max]` onto `[bottom_px, top_px]`.
    pub fn new(min: f64, max: f64, bottom_px: f64, top_px: f64) -> ChartResult<Self> {
        Ok(Self {
            scale: LinearScale::new(min, max, bottom_px, top_px)?,
            user_min: None,
            user_max: None,
        })
    }

    #[must_use]
    pub fn with_user_bounds(mut self, user_min: Option<f64>, user_max: Option<f64>) -> Self {
        self.user_min = user_min;
        self.user_max = user_max;
        self
    }

    #[must_use]
    pub fn scale(self) -> LinearScale {
        self.scale
    }

    /// Value bars are anchored to: zero when the domain straddles it,
    /// otherwise the domain end nearest to zero.
    #[must_use]
    pub fn base_value(self) -> f64 {
        let (start, end) = self.scale.domain();
        let (min, max) = (start.min(end), start.max(end));
        if min > 0.0 {
            min
        } else if max < 0.0 {
            max
        } else {
            0.0
        }
    }
}

impl ValueAxis for LinearValueAxis {
    fn pixel_for_value(&self, value: f64) -> f64 {
        self.scale.domain_to_pixel(value)
    }

    fn base_pixel(&self) -> f64 {
        self.scale.domain_to_pixel(self.base_value())
    }

    fn user_bounds(&self) -> (Option<f64>, Option<f64>) {
        (self.user_min, self.user_max)
    }
}

/// Natural-log price axis. Values `<= 0` map to NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogValueAxis {
    log_scale: LinearScale,
    min: f64,
}

impl LogValueAxis {
    pub fn new(min: f64, max: f64, bottom_px: f64, top_px: f64) -> ChartResult<Self> {
        if !(min > 0.0 && max > 0.0) {
            return Err(ChartError::InvalidData(
                "log axis domain must be strictly positive".to_owned(),
            ));
        }
        Ok(Self {
            log_scale: LinearScale::new(min.ln(), max.ln(), bottom_px, top_px)?,
            min,
        })
    }
}

impl ValueAxis for LogValueAxis {
    fn pixel_for_value(&self, value: f64) -> f64 {
        if value <= 0.0 {
            return f64::NAN;
        }
        self.log_scale.domain_to_pixel(value.ln())
    }

    fn base_pixel(&self) -> f64 {
        self.pixel_for_value(self.min)
    }
}

/// Linear time/ordinal axis with an explicit tick set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearIndexAxis {
    scale: LinearScale,
    #[serde(default)]
    ticks: Vec<f64>,
}

impl LinearIndexAxis {
    /// Maps `[x_start, x_end]` onto `[start_px, end_px]` with no ticks.
    pub fn new(x_start: f64, x_end: f64, start_px: f64, end_px: f64) -> ChartResult<Self> {
        Ok(Self {
            scale: LinearScale::new(x_start, x_end, start_px, end_px)?,
            ticks: Vec::new(),
        })
    }

    /// Sets tick positions in data units.
    #[must_use]
    pub fn with_ticks(mut self, ticks: Vec<f64>) -> Self {
        self.ticks = ticks;
        self
    }

    /// Places a tick every `step` data units from the domain start.
    ///
    /// Fails when the step would put more than one tick per axis pixel.
    pub fn with_tick_step(self, step: f64) -> ChartResult<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ChartError::InvalidData(
                "tick step must be finite and > 0".to_owned(),
            ));
        }
        let (start, end) = self.scale.domain();
        let (lo, hi) = (start.min(end), start.max(end));
        let steps = ((hi - lo) / step).floor();
        let max_steps = self.axis_length().ceil().max(1.0);
        if !steps.is_finite() || steps > max_steps {
            return Err(ChartError::InvalidData(format!(
                "tick step {step} yields more ticks than the axis has pixels ({max_steps})"
            )));
        }
        let count = steps as usize;
        let ticks = (0..=count).map(|i| lo + step * i as f64).collect();
        Ok(self.with_ticks(ticks))
    }

    #[must_use]
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }
}

impl IndexAxis for LinearIndexAxis {
    fn pixel_for_value(&self, value: f64) -> f64 {
        self.scale.domain_to_pixel(value)
    }

    fn tick_pixel_positions(&self) -> Vec<f64> {
        self.ticks
            .iter()
            .map(|&tick| self.scale.domain_to_pixel(tick))
            .collect()
    }

    fn start_pixel(&self) -> f64 {
        self.scale.pixel_range().0
    }

    fn end_pixel(&self) -> f64 {
        self.scale.pixel_range().1
    }
}
