use crate::core::{
    BarSlotOptions, Bounds, FinancialDataPoint, FinancialElement, GeometricRecord, IndexAxis,
    Orientation, RulerConfig, ValueAxis, resolve_stacked_geometry,
};
use crate::error::ChartResult;
use crate::render::{
    CandlestickStyle, ColorChannel, ColorPalette, DirectionalColors, DrawContext, OhlcStyle,
    draw_candlestick, draw_clipped, draw_ohlc, resolve_color,
};

use super::{FinancialTheme, SeriesConfig, SeriesKind};

/// Geometry settings shared by every financial variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesGeometry {
    pub slots: BarSlotOptions,
    pub stack_index: usize,
    pub orientation: Orientation,
}

impl SeriesGeometry {
    #[must_use]
    pub fn from_config(config: &SeriesConfig) -> Self {
        Self {
            slots: config.slots,
            stack_index: config.stack_index,
            orientation: config.orientation,
        }
    }
}

/// A financial series drawing variant.
///
/// Variants share the geometry math through the provided methods and only
/// supply how one element is drawn.
pub trait FinancialSeriesRenderer: Send + Sync {
    fn kind(&self) -> SeriesKind;

    fn geometry(&self) -> &SeriesGeometry;

    fn draw_element(&self, ctx: &mut dyn DrawContext, element: &FinancialElement)
    -> ChartResult<()>;

    fn compute_geometry(
        &self,
        index: usize,
        point: &FinancialDataPoint,
        ruler: &RulerConfig,
        value_axis: &dyn ValueAxis,
        index_axis: &dyn IndexAxis,
        is_reset: bool,
    ) -> GeometricRecord {
        let geometry = self.geometry();
        resolve_stacked_geometry(
            index,
            geometry.stack_index,
            point,
            ruler,
            geometry.slots,
            value_axis,
            index_axis,
            is_reset,
        )
    }

    fn element(&self, index: usize, record: GeometricRecord) -> FinancialElement {
        FinancialElement::new(index, record).with_orientation(self.geometry().orientation)
    }

    /// Draws all elements inside a single clip bracket over `plot_area`.
    fn draw(
        &self,
        ctx: &mut dyn DrawContext,
        plot_area: Bounds,
        elements: &[FinancialElement],
    ) -> ChartResult<()> {
        draw_clipped(ctx, plot_area, elements, |ctx, element| {
            self.draw_element(ctx, element)
        })
    }
}

/// Filled body plus wicks, colored per direction on both channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandlestickRenderer {
    geometry: SeriesGeometry,
    style: CandlestickStyle,
    colors: DirectionalColors,
}

impl CandlestickRenderer {
    #[must_use]
    pub fn new(geometry: SeriesGeometry, style: CandlestickStyle, colors: DirectionalColors) -> Self {
        Self {
            geometry,
            style,
            colors,
        }
    }
}

impl FinancialSeriesRenderer for CandlestickRenderer {
    fn kind(&self) -> SeriesKind {
        SeriesKind::Candlestick
    }

    fn geometry(&self) -> &SeriesGeometry {
        &self.geometry
    }

    fn draw_element(
        &self,
        ctx: &mut dyn DrawContext,
        element: &FinancialElement,
    ) -> ChartResult<()> {
        let direction = element.record.direction;
        draw_candlestick(
            ctx,
            element,
            resolve_color(direction, &self.colors, ColorChannel::Fill),
            resolve_color(direction, &self.colors, ColorChannel::Border),
            self.style,
        )
    }
}

/// Open/close arms on a high-low spine, stroke colors only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OhlcRenderer {
    geometry: SeriesGeometry,
    style: OhlcStyle,
    colors: ColorPalette,
}

impl OhlcRenderer {
    #[must_use]
    pub fn new(geometry: SeriesGeometry, style: OhlcStyle, colors: ColorPalette) -> Self {
        Self {
            geometry,
            style,
            colors,
        }
    }
}

impl FinancialSeriesRenderer for OhlcRenderer {
    fn kind(&self) -> SeriesKind {
        SeriesKind::Ohlc
    }

    fn geometry(&self) -> &SeriesGeometry {
        &self.geometry
    }

    fn draw_element(
        &self,
        ctx: &mut dyn DrawContext,
        element: &FinancialElement,
    ) -> ChartResult<()> {
        let color = self.colors.color_for(element.record.direction);
        draw_ohlc(ctx, element, color, self.style)
    }
}

/// Builds the renderer matching `config.kind`.
#[must_use]
pub fn renderer_for(
    config: &SeriesConfig,
    theme: &FinancialTheme,
) -> Box<dyn FinancialSeriesRenderer> {
    let geometry = SeriesGeometry::from_config(config);
    match config.kind {
        SeriesKind::Candlestick => Box::new(CandlestickRenderer::new(
            geometry,
            config.candlestick,
            theme.candlestick,
        )),
        SeriesKind::Ohlc => Box::new(OhlcRenderer::new(geometry, config.ohlc, theme.ohlc)),
    }
}
