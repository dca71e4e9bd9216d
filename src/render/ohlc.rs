use serde::{Deserialize, Serialize};

use crate::core::FinancialElement;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawContext};

/// Per-series OHLC style.
///
/// With no explicit `arm_length` each arm is `width × arm_length_ratio × 0.5`:
/// neighbouring arms just touch at ratio `1.0` and vanish at `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OhlcStyle {
    pub line_width: f64,
    pub arm_length: Option<f64>,
    pub arm_length_ratio: f64,
}

impl Default for OhlcStyle {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            arm_length: None,
            arm_length_ratio: 0.8,
        }
    }
}

impl OhlcStyle {
    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_arm_length(mut self, arm_length: f64) -> Self {
        self.arm_length = Some(arm_length);
        self
    }

    #[must_use]
    pub fn with_arm_length_ratio(mut self, ratio: f64) -> Self {
        self.arm_length_ratio = ratio;
        self
    }

    /// Arm length in pixels for a bar of `width`.
    #[must_use]
    pub fn arm_length_px(self, width: f64) -> f64 {
        self.arm_length
            .unwrap_or(width * self.arm_length_ratio * 0.5)
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "ohlc line width must be finite and > 0".to_owned(),
            ));
        }
        if self
            .arm_length
            .is_some_and(|arm| !arm.is_finite() || arm < 0.0)
        {
            return Err(ChartError::InvalidConfig(
                "ohlc arm length must be finite and >= 0".to_owned(),
            ));
        }
        if !self.arm_length_ratio.is_finite() || !(0.0..=1.0).contains(&self.arm_length_ratio) {
            return Err(ChartError::InvalidConfig(
                "ohlc arm length ratio must be in [0, 1]".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Draws one OHLC bar: high-low spine, open arm to the left, close arm to the
/// right, all in a single stroke.
pub fn draw_ohlc<C: DrawContext + ?Sized>(
    ctx: &mut C,
    element: &FinancialElement,
    color: Color,
    style: OhlcStyle,
) -> ChartResult<()> {
    let arm_length = style.arm_length_px(element.record.width);

    ctx.set_line_width(style.line_width);
    ctx.set_stroke_style(color);
    ctx.begin_path();
    for segment in element.ohlc_segments(arm_length) {
        ctx.move_to(segment.from.x, segment.from.y);
        ctx.line_to(segment.to.x, segment.to.y);
    }
    ctx.stroke()
}
