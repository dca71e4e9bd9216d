//! candle-layout: layout and drawing engine for financial bar series.
//!
//! Turns ordered `{x, o, h, l, c}` records into positioned, colored and
//! hit-testable candlestick or OHLC primitives. The crate is split into pure
//! geometry (`core`), drawing procedures against a canvas-like context
//! (`render`) and the series-level facade (`api`).

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{FinancialSeries, SeriesConfig, SeriesKind, SeriesLayout};
pub use error::{ChartError, ChartResult};
