use crate::core::Bounds;
use crate::error::ChartResult;
use crate::render::Color;

/// Canvas-like 2D drawing surface the draw procedures target.
///
/// Mirrors the subset of the HTML canvas API financial bars need. Operations a
/// real backend can fail on return `ChartResult`.
pub trait DrawContext {
    fn save(&mut self) -> ChartResult<()>;
    fn restore(&mut self) -> ChartResult<()>;
    /// Intersects the current clip with `area`; undone by `restore`.
    fn clip_rect(&mut self, area: Bounds) -> ChartResult<()>;

    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self) -> ChartResult<()>;

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> ChartResult<()>;
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> ChartResult<()>;

    fn set_line_width(&mut self, width: f64);
    fn set_stroke_style(&mut self, color: Color);
    fn set_fill_style(&mut self, color: Color);
}
