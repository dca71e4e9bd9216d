use std::io::Write;

use cairo::{Context, Format, ImageSurface};

use crate::api::{FinancialSeries, SeriesLayout};
use crate::core::{Bounds, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawContext};

/// [`DrawContext`] over an external Cairo context (for example a GTK
/// `DrawingArea` callback).
///
/// Cairo has a single source pattern, so stroke and fill styles are tracked
/// here and applied right before each paint operation.
pub struct CairoDrawContext<'a> {
    context: &'a Context,
    stroke_style: Color,
    fill_style: Color,
}

impl<'a> CairoDrawContext<'a> {
    #[must_use]
    pub fn new(context: &'a Context) -> Self {
        Self {
            context,
            stroke_style: Color::rgb(0.0, 0.0, 0.0),
            fill_style: Color::rgb(0.0, 0.0, 0.0),
        }
    }

    /// Paints a standalone rectangle without disturbing the current path,
    /// matching canvas `fillRect`/`strokeRect`.
    fn paint_rect(
        &mut self,
        (x, y, width, height): (f64, f64, f64, f64),
        color: Color,
        fill: bool,
    ) -> ChartResult<()> {
        let path = self
            .context
            .copy_path()
            .map_err(|err| map_backend_error("failed to copy path", err))?;
        self.context.new_path();
        self.context.rectangle(x, y, width, height);
        apply_color(self.context, color);
        let painted = if fill {
            self.context.fill()
        } else {
            self.context.stroke()
        };
        self.context.append_path(&path);
        painted.map_err(|err| map_backend_error("failed to paint rectangle", err))
    }
}

impl DrawContext for CairoDrawContext<'_> {
    fn save(&mut self) -> ChartResult<()> {
        self.context
            .save()
            .map_err(|err| map_backend_error("failed to save context", err))
    }

    fn restore(&mut self) -> ChartResult<()> {
        self.context
            .restore()
            .map_err(|err| map_backend_error("failed to restore context", err))
    }

    fn clip_rect(&mut self, area: Bounds) -> ChartResult<()> {
        self.context.new_path();
        self.context
            .rectangle(area.left, area.top, area.width(), area.height());
        self.context.clip();
        Ok(())
    }

    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn stroke(&mut self) -> ChartResult<()> {
        apply_color(self.context, self.stroke_style);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke path", err))
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> ChartResult<()> {
        self.paint_rect((x, y, width, height), self.fill_style, true)
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> ChartResult<()> {
        self.paint_rect((x, y, width, height), self.stroke_style, false)
    }

    fn set_line_width(&mut self, width: f64) {
        self.context.set_line_width(width);
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.stroke_style = color;
    }

    fn set_fill_style(&mut self, color: Color) {
        self.fill_style = color;
    }
}

/// Offscreen renderer drawing a laid-out series onto an ARGB image surface.
#[derive(Debug)]
pub struct CairoSurfaceRenderer {
    surface: ImageSurface,
    clear_color: Color,
}

impl CairoSurfaceRenderer {
    pub fn new(viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let width = i32::try_from(viewport.width)
            .map_err(|_| ChartError::InvalidData("surface width overflows i32".to_owned()))?;
        let height = i32::try_from(viewport.height)
            .map_err(|_| ChartError::InvalidData("surface height overflows i32".to_owned()))?;
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    /// Clears the surface and draws `layout` clipped to `plot_area`.
    pub fn render(
        &mut self,
        series: &FinancialSeries,
        layout: &SeriesLayout,
        plot_area: Bounds,
    ) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        apply_color(&context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut draw_context = CairoDrawContext::new(&context);
        series.draw(&mut draw_context, plot_area, layout)
    }

    pub fn write_png<W: Write>(&self, writer: &mut W) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| ChartError::Backend(format!("failed to encode png: {err}")))
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
