use serde::{Deserialize, Serialize};

use crate::core::Direction;
use crate::error::ChartResult;
use crate::render::Color;

/// One color per direction bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub up: Color,
    pub down: Color,
    pub unchanged: Color,
}

impl ColorPalette {
    #[must_use]
    pub const fn new(up: Color, down: Color, unchanged: Color) -> Self {
        Self {
            up,
            down,
            unchanged,
        }
    }

    /// Same palette at a different opacity, e.g. for companion volume bars.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self::new(
            self.up.with_alpha(alpha),
            self.down.with_alpha(alpha),
            self.unchanged.with_alpha(alpha),
        )
    }

    #[must_use]
    pub fn color_for(&self, direction: Direction) -> Color {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Unchanged => self.unchanged,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.up.validate()?;
        self.down.validate()?;
        self.unchanged.validate()?;
        Ok(self)
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::new(
            Color::rgba8(80, 160, 115, 1.0),
            Color::rgba8(215, 85, 65, 1.0),
            Color::rgba8(90, 90, 90, 1.0),
        )
    }
}

/// Which part of a bar a color is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorChannel {
    /// Candle body.
    Fill,
    /// Wicks, body outline and OHLC strokes.
    Border,
}

/// Independent fill and border palettes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct DirectionalColors {
    pub fill: ColorPalette,
    pub border: ColorPalette,
}

impl DirectionalColors {
    /// Uses one palette for both channels.
    #[must_use]
    pub const fn uniform(palette: ColorPalette) -> Self {
        Self {
            fill: palette,
            border: palette,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.fill.validate()?;
        self.border.validate()?;
        Ok(self)
    }
}

/// Themed color for `direction` on `channel`.
#[must_use]
pub fn resolve_color(
    direction: Direction,
    colors: &DirectionalColors,
    channel: ColorChannel,
) -> Color {
    match channel {
        ColorChannel::Fill => colors.fill.color_for(direction),
        ColorChannel::Border => colors.border.color_for(direction),
    }
}
