mod candlestick;
mod context;
mod ohlc;
mod palette;
mod primitives;
mod recording;

pub use candlestick::{CandlestickStyle, draw_candlestick};
pub use context::DrawContext;
pub use ohlc::{OhlcStyle, draw_ohlc};
pub use palette::{ColorChannel, ColorPalette, DirectionalColors, resolve_color};
pub use primitives::Color;
pub use recording::{DrawCommand, RecordingContext};

use crate::core::{Bounds, FinancialElement};
use crate::error::ChartResult;

/// Draws every element inside one clip bracket over `plot_area`.
///
/// The context is saved and clipped once before the first bar and restored
/// once after the last, including when a bar fails to draw.
pub fn draw_clipped<C, F>(
    ctx: &mut C,
    plot_area: Bounds,
    elements: &[FinancialElement],
    mut draw_one: F,
) -> ChartResult<()>
where
    C: DrawContext + ?Sized,
    F: FnMut(&mut C, &FinancialElement) -> ChartResult<()>,
{
    ctx.save()?;
    ctx.clip_rect(plot_area)?;
    let drawn = elements
        .iter()
        .try_for_each(|element| draw_one(&mut *ctx, element));
    ctx.restore()?;
    drawn
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoDrawContext, CairoSurfaceRenderer};
