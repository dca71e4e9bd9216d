use serde::{Deserialize, Serialize};

use crate::core::FinancialElement;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawContext};

/// Per-series candlestick style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandlestickStyle {
    pub border_width: f64,
}

impl Default for CandlestickStyle {
    fn default() -> Self {
        Self { border_width: 1.0 }
    }
}

impl CandlestickStyle {
    #[must_use]
    pub fn with_border_width(mut self, border_width: f64) -> Self {
        self.border_width = border_width;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ChartError::InvalidConfig(
                "candlestick border width must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Draws one candle: two wick segments around the body, then the body.
///
/// The body is inset by half the border width on every side so a thin border
/// lands inside the body bounds and renders crisply.
pub fn draw_candlestick<C: DrawContext + ?Sized>(
    ctx: &mut C,
    element: &FinancialElement,
    fill: Color,
    border: Color,
    style: CandlestickStyle,
) -> ChartResult<()> {
    ctx.set_line_width(style.border_width);
    ctx.set_stroke_style(border);
    ctx.set_fill_style(fill);

    ctx.begin_path();
    for segment in element.wick_segments() {
        ctx.move_to(segment.from.x, segment.from.y);
        ctx.line_to(segment.to.x, segment.to.y);
    }
    ctx.stroke()?;

    let body = element.body_rect(style.border_width / 2.0);
    ctx.fill_rect(body.left, body.top, body.width(), body.height())?;
    if style.border_width > 0.0 {
        ctx.stroke_rect(body.left, body.top, body.width(), body.height())?;
    }
    ctx.close_path();
    Ok(())
}
