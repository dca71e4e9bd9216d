use serde::{Deserialize, Serialize};

use crate::core::{BarSlotOptions, Orientation};
use crate::error::{ChartError, ChartResult};
use crate::render::{CandlestickStyle, OhlcStyle};

/// Drawing variant of a financial series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    #[default]
    Candlestick,
    Ohlc,
}

/// Immutable per-series configuration.
///
/// Every field has a default, so a JSON document only needs the overrides:
///
/// ```
/// use candle_layout::{SeriesConfig, SeriesKind};
///
/// let config = SeriesConfig::from_json_str(r#"{"kind": "ohlc", "ohlc": {"arm_length_ratio": 1.0}}"#)
///     .expect("valid config");
/// assert_eq!(config.kind, SeriesKind::Ohlc);
/// assert_eq!(config.ohlc.line_width, 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    pub kind: SeriesKind,
    pub slots: BarSlotOptions,
    pub candlestick: CandlestickStyle,
    pub ohlc: OhlcStyle,
    pub orientation: Orientation,
    pub stack_count: usize,
    pub stack_index: usize,
    /// Theme name looked up in a `ThemeRegistry`; `None` uses the active one.
    pub theme: Option<String>,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            kind: SeriesKind::Candlestick,
            slots: BarSlotOptions::default(),
            candlestick: CandlestickStyle::default(),
            ohlc: OhlcStyle::default(),
            orientation: Orientation::Vertical,
            stack_count: 1,
            stack_index: 0,
            theme: None,
        }
    }
}

impl SeriesConfig {
    #[must_use]
    pub fn candlestick() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ohlc() -> Self {
        Self {
            kind: SeriesKind::Ohlc,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_slots(mut self, slots: BarSlotOptions) -> Self {
        self.slots = slots;
        self
    }

    #[must_use]
    pub fn with_width_ratio(mut self, ratio: f64) -> Self {
        self.slots = self.slots.with_width_ratio(ratio);
        self
    }

    #[must_use]
    pub fn with_candlestick_style(mut self, style: CandlestickStyle) -> Self {
        self.candlestick = style;
        self
    }

    #[must_use]
    pub fn with_ohlc_style(mut self, style: OhlcStyle) -> Self {
        self.ohlc = style;
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_stack(mut self, stack_index: usize, stack_count: usize) -> Self {
        self.stack_index = stack_index;
        self.stack_count = stack_count;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, name: impl Into<String>) -> Self {
        self.theme = Some(name.into());
        self
    }

    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    pub fn to_json_string(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.slots.validate()?;
        self.candlestick.validate()?;
        self.ohlc.validate()?;
        if self.stack_count == 0 || self.stack_index >= self.stack_count {
            return Err(ChartError::InvalidConfig(format!(
                "stack index {} out of range for {} stacks",
                self.stack_index, self.stack_count
            )));
        }
        Ok(self)
    }
}
