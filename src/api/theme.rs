use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Direction, FinancialDataPoint, classify};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, ColorChannel, ColorPalette, DirectionalColors, resolve_color};

/// Every color a financial series needs for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialTheme {
    pub candlestick: DirectionalColors,
    pub ohlc: ColorPalette,
    /// Companion volume bars; same buckets as the price bars, lighter.
    pub volume: DirectionalColors,
}

impl Default for FinancialTheme {
    fn default() -> Self {
        Self::light()
    }
}

impl FinancialTheme {
    #[must_use]
    pub fn light() -> Self {
        let palette = ColorPalette::default();
        Self {
            candlestick: DirectionalColors::uniform(palette),
            ohlc: palette,
            volume: DirectionalColors::uniform(palette.with_alpha(0.5)),
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        let palette = ColorPalette::new(
            Color::rgba8(38, 166, 154, 1.0),
            Color::rgba8(239, 83, 80, 1.0),
            Color::rgba8(158, 158, 158, 1.0),
        );
        Self {
            candlestick: DirectionalColors::uniform(palette),
            ohlc: palette,
            volume: DirectionalColors::uniform(palette.with_alpha(0.4)),
        }
    }

    /// Volume-bar color for `point`, classified like its price bar.
    #[must_use]
    pub fn volume_color(&self, point: &FinancialDataPoint, channel: ColorChannel) -> Color {
        resolve_color(classify(point.o, point.c), &self.volume, channel)
    }

    #[must_use]
    pub fn candlestick_color(&self, direction: Direction, channel: ColorChannel) -> Color {
        resolve_color(direction, &self.candlestick, channel)
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.candlestick.validate()?;
        self.ohlc.validate()?;
        self.volume.validate()?;
        Ok(self)
    }
}

/// Named themes with one active entry.
///
/// Created once at startup and handed to series explicitly; switching themes
/// yields a different value instead of mutating shared defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeRegistry {
    themes: IndexMap<String, FinancialTheme>,
    active: String,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        let mut themes = IndexMap::new();
        themes.insert("light".to_owned(), FinancialTheme::light());
        themes.insert("dark".to_owned(), FinancialTheme::dark());
        Self {
            themes,
            active: "light".to_owned(),
        }
    }
}

impl ThemeRegistry {
    /// Adds or replaces a theme, keeping its original position when replaced.
    pub fn insert(&mut self, name: impl Into<String>, theme: FinancialTheme) -> ChartResult<()> {
        let theme = theme.validate()?;
        self.themes.insert(name.into(), theme);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FinancialTheme> {
        self.themes.get(name)
    }

    #[must_use]
    pub fn active_name(&self) -> &str {
        &self.active
    }

    #[must_use]
    pub fn active(&self) -> FinancialTheme {
        self.themes.get(&self.active).copied().unwrap_or_default()
    }

    pub fn set_active(&mut self, name: &str) -> ChartResult<()> {
        if !self.themes.contains_key(name) {
            return Err(ChartError::InvalidConfig(format!("unknown theme `{name}`")));
        }
        name.clone_into(&mut self.active);
        Ok(())
    }

    /// Activates the next theme in insertion order, wrapping around.
    pub fn toggle(&mut self) -> &str {
        let next = self
            .themes
            .get_index_of(&self.active)
            .map_or(0, |index| (index + 1) % self.themes.len());
        if let Some((name, _)) = self.themes.get_index(next) {
            name.clone_into(&mut self.active);
        }
        &self.active
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.themes.keys().map(String::as_str).collect()
    }
}
