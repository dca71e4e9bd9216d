mod chart;
mod config;
mod series_renderer;
mod theme;
mod tooltip;

pub use chart::{FinancialSeries, SeriesLayout};
pub use config::{SeriesConfig, SeriesKind};
pub use series_renderer::{
    CandlestickRenderer, FinancialSeriesRenderer, OhlcRenderer, SeriesGeometry, renderer_for,
};
pub use theme::{FinancialTheme, ThemeRegistry};
pub use tooltip::{TooltipItem, format_tooltip_label};
