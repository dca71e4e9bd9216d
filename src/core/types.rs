use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One OHLC record as supplied by the host.
///
/// `x` is either a timestamp or an ordinal position. The `h >= max(o, c)` and
/// `l <= min(o, c)` relationship is expected but never enforced: inverted or
/// non-finite records are laid out as-is or collapsed, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialDataPoint {
    pub x: f64,
    pub o: f64,
    pub h: f64,
    pub l: f64,
    pub c: f64,
}

impl FinancialDataPoint {
    #[must_use]
    pub const fn new(x: f64, o: f64, h: f64, l: f64, c: f64) -> Self {
        Self { x, o, h, l, c }
    }

    /// Builds a point from a UTC timestamp and exact decimal prices.
    ///
    /// `x` becomes fractional Unix seconds at millisecond precision.
    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        let price = |value: Decimal, field: &str| {
            value
                .to_f64()
                .ok_or_else(|| ChartError::InvalidData(format!("{field} price does not fit in f64")))
        };
        Ok(Self::new(
            time.timestamp_millis() as f64 / 1000.0,
            price(open, "open")?,
            price(high, "high")?,
            price(low, "low")?,
            price(close, "close")?,
        ))
    }

    /// `true` when all four prices are finite.
    #[must_use]
    pub fn has_finite_prices(&self) -> bool {
        self.o.is_finite() && self.h.is_finite() && self.l.is_finite() && self.c.is_finite()
    }

    /// `true` when the record satisfies `l <= min(o, c) <= max(o, c) <= h`.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.has_finite_prices()
            && self.l <= self.o.min(self.c)
            && self.h >= self.o.max(self.c)
    }
}

/// Pixel-space point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn contains_x(self, x: f64) -> bool {
        x >= self.left && x <= self.right
    }

    #[must_use]
    pub fn contains_y(self, y: f64) -> bool {
        y >= self.top && y <= self.bottom
    }
}

/// Data-space range an axis must display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisExtent {
    pub min: f64,
    pub max: f64,
}

impl AxisExtent {
    /// Range used whenever there is not enough data to measure one.
    pub const DEGENERATE: Self = Self { min: 0.0, max: 1.0 };

    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Replaces either end with an explicit user bound when present.
    #[must_use]
    pub fn with_user_bounds(self, user_min: Option<f64>, user_max: Option<f64>) -> Self {
        Self {
            min: user_min.filter(|v| v.is_finite()).unwrap_or(self.min),
            max: user_max.filter(|v| v.is_finite()).unwrap_or(self.max),
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

/// Plot-area dimensions in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}
