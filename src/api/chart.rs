use std::ops::Range;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::core::{
    AxisExtent, Bounds, FinancialDataPoint, FinancialElement, HitMode, IndexAxis, RulerConfig,
    ValueAxis, compute_extent, compute_index_extent, index_window_for_x_range,
};
use crate::error::ChartResult;
use crate::render::DrawContext;

use super::{
    FinancialSeriesRenderer, FinancialTheme, SeriesConfig, SeriesKind, ThemeRegistry,
    TooltipItem, format_tooltip_label, renderer_for,
};

/// Output of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLayout {
    pub ruler: RulerConfig,
    /// Value-axis range over `window`, user bounds applied.
    pub value_extent: AxisExtent,
    /// First/last `x` over `window`.
    pub index_extent: AxisExtent,
    pub window: Range<usize>,
    /// One element per point, in data order.
    pub elements: Vec<FinancialElement>,
}

impl SeriesLayout {
    #[must_use]
    pub fn element(&self, index: usize) -> Option<&FinancialElement> {
        self.elements.get(index)
    }

    /// First element whose `mode` bounds contain the query.
    #[must_use]
    pub fn hit_test(&self, x: Option<f64>, y: Option<f64>, mode: HitMode) -> Option<&FinancialElement> {
        self.elements
            .iter()
            .find(|element| element.contains_point(x, y, mode))
    }

    /// Element whose center is closest to `x` along the index axis.
    #[must_use]
    pub fn nearest_by_x(&self, x: f64) -> Option<&FinancialElement> {
        if !x.is_finite() {
            return None;
        }
        self.elements.iter().min_by(|a, b| {
            let da = (a.record.center_x - x).abs();
            let db = (b.record.center_x - x).abs();
            da.total_cmp(&db)
        })
    }

    #[must_use]
    pub fn collapsed_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|element| element.record.collapsed)
            .count()
    }
}

/// A financial series: ordered data, immutable config and the renderer they
/// select.
pub struct FinancialSeries {
    points: Vec<FinancialDataPoint>,
    config: SeriesConfig,
    theme: FinancialTheme,
    renderer: Box<dyn FinancialSeriesRenderer>,
}

impl std::fmt::Debug for FinancialSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinancialSeries")
            .field("points", &self.points.len())
            .field("config", &self.config)
            .field("kind", &self.renderer.kind())
            .finish()
    }
}

impl FinancialSeries {
    pub fn new(
        points: Vec<FinancialDataPoint>,
        config: SeriesConfig,
        theme: FinancialTheme,
    ) -> ChartResult<Self> {
        let config = config.validate()?;
        let theme = theme.validate()?;
        let renderer = renderer_for(&config, &theme);
        debug!(count = points.len(), kind = ?config.kind, "create financial series");
        Ok(Self {
            points,
            config,
            theme,
            renderer,
        })
    }

    /// Resolves the theme named in `config`, falling back to the registry's
    /// active theme when the name is unknown.
    pub fn from_registry(
        points: Vec<FinancialDataPoint>,
        config: SeriesConfig,
        registry: &ThemeRegistry,
    ) -> ChartResult<Self> {
        let theme = match config.theme.as_deref() {
            Some(name) => registry.get(name).copied().unwrap_or_else(|| {
                warn!(
                    theme = name,
                    fallback = registry.active_name(),
                    "unknown series theme, using active theme"
                );
                registry.active()
            }),
            None => registry.active(),
        };
        Self::new(points, config, theme)
    }

    #[must_use]
    pub fn points(&self) -> &[FinancialDataPoint] {
        &self.points
    }

    pub fn set_points(&mut self, points: Vec<FinancialDataPoint>) {
        debug!(
            previous = self.points.len(),
            count = points.len(),
            "replace financial points"
        );
        self.points = points;
    }

    #[must_use]
    pub fn config(&self) -> &SeriesConfig {
        &self.config
    }

    #[must_use]
    pub fn theme(&self) -> &FinancialTheme {
        &self.theme
    }

    #[must_use]
    pub fn kind(&self) -> SeriesKind {
        self.renderer.kind()
    }

    #[must_use]
    pub fn renderer(&self) -> &dyn FinancialSeriesRenderer {
        self.renderer.as_ref()
    }

    /// Swaps the theme between passes; the next `draw` uses the new colors.
    pub fn set_theme(&mut self, theme: FinancialTheme) -> ChartResult<()> {
        self.theme = theme.validate()?;
        self.renderer = renderer_for(&self.config, &self.theme);
        Ok(())
    }

    /// Lays out every point with the value extent taken over all of them.
    #[must_use]
    pub fn layout(
        &self,
        value_axis: &dyn ValueAxis,
        index_axis: &dyn IndexAxis,
        is_reset: bool,
    ) -> SeriesLayout {
        self.layout_window(value_axis, index_axis, 0..self.points.len(), is_reset)
    }

    /// Lays out every point with extents taken over the visible `x` range.
    #[must_use]
    pub fn layout_visible_x(
        &self,
        value_axis: &dyn ValueAxis,
        index_axis: &dyn IndexAxis,
        x_start: f64,
        x_end: f64,
        is_reset: bool,
    ) -> SeriesLayout {
        let window = index_window_for_x_range(&self.points, x_start, x_end);
        self.layout_window(value_axis, index_axis, window, is_reset)
    }

    /// One layout pass: ruler and extents once, geometry once per point.
    #[must_use]
    pub fn layout_window(
        &self,
        value_axis: &dyn ValueAxis,
        index_axis: &dyn IndexAxis,
        window: Range<usize>,
        is_reset: bool,
    ) -> SeriesLayout {
        let ruler = RulerConfig::compute(
            &self.points,
            index_axis,
            self.config.slots,
            self.config.stack_count,
        );
        let (user_min, user_max) = value_axis.user_bounds();
        let value_extent =
            compute_extent(&self.points, window.start, window.end).with_user_bounds(user_min, user_max);
        let index_extent = compute_index_extent(&self.points, window.start, window.end);
        let elements = self.resolve_elements(&ruler, value_axis, index_axis, is_reset);

        let layout = SeriesLayout {
            ruler,
            value_extent,
            index_extent,
            window,
            elements,
        };
        debug!(
            count = layout.elements.len(),
            min_spacing = layout.ruler.min_spacing,
            extent_min = layout.value_extent.min,
            extent_max = layout.value_extent.max,
            collapsed = layout.collapsed_count(),
            is_reset,
            "financial layout pass"
        );
        layout
    }

    fn resolve_elements(
        &self,
        ruler: &RulerConfig,
        value_axis: &dyn ValueAxis,
        index_axis: &dyn IndexAxis,
        is_reset: bool,
    ) -> Vec<FinancialElement> {
        let renderer = self.renderer.as_ref();
        let resolve = |(index, point): (usize, &FinancialDataPoint)| {
            let record =
                renderer.compute_geometry(index, point, ruler, value_axis, index_axis, is_reset);
            renderer.element(index, record)
        };

        #[cfg(feature = "parallel-projection")]
        {
            self.points.par_iter().enumerate().map(resolve).collect()
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            self.points.iter().enumerate().map(resolve).collect()
        }
    }

    /// Draws a laid-out pass, clipped once to `plot_area`.
    pub fn draw(
        &self,
        ctx: &mut dyn DrawContext,
        plot_area: Bounds,
        layout: &SeriesLayout,
    ) -> ChartResult<()> {
        trace!(count = layout.elements.len(), kind = ?self.kind(), "draw financial series");
        self.renderer.draw(ctx, plot_area, &layout.elements)
    }

    #[must_use]
    pub fn tooltip_label(&self, index: usize) -> Option<String> {
        self.points.get(index).map(format_tooltip_label)
    }

    /// Tooltip for the first bar hit by the query, see
    /// [`FinancialElement::contains_point`].
    #[must_use]
    pub fn tooltip_at(
        &self,
        layout: &SeriesLayout,
        x: Option<f64>,
        y: Option<f64>,
        mode: HitMode,
    ) -> Option<TooltipItem> {
        let element = layout.hit_test(x, y, mode)?;
        let point = self.points.get(element.index)?;
        Some(TooltipItem::new(element, point))
    }
}
