use crate::core::{Bounds, Point};
use crate::error::ChartResult;
use crate::render::{Color, DrawContext};

/// One call captured by [`RecordingContext`], with the style in effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Clip(Bounds),
    BeginPath,
    ClosePath,
    MoveTo(Point),
    LineTo(Point),
    Stroke { color: Color, width: f64 },
    FillRect { rect: Bounds, color: Color },
    StrokeRect { rect: Bounds, color: Color, width: f64 },
}

/// Headless drawing context used by tests and hosts without a backend.
///
/// Records every call in order. Calls carrying a non-finite coordinate are
/// counted in `rejected_non_finite` and dropped so they cannot corrupt the
/// recorded path, the same way a canvas silently ignores them.
#[derive(Debug, Clone)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    line_width: f64,
    stroke_style: Color,
    fill_style: Color,
    depth: usize,
    pub rejected_non_finite: usize,
}

impl Default for RecordingContext {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            line_width: 1.0,
            stroke_style: Color::rgb(0.0, 0.0, 0.0),
            fill_style: Color::rgb(0.0, 0.0, 0.0),
            depth: 0,
            rejected_non_finite: 0,
        }
    }
}

impl RecordingContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.rejected_non_finite = 0;
    }

    /// `true` when every `save` has a matching `restore`.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.depth == 0
    }

    #[must_use]
    pub fn filled_rects(&self) -> Vec<(Bounds, Color)> {
        self.commands
            .iter()
            .filter_map(|command| match *command {
                DrawCommand::FillRect { rect, color } => Some((rect, color)),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Stroke { .. }))
            .count()
    }

    /// Line segments built from `move_to`/`line_to` pairs, in order.
    #[must_use]
    pub fn path_segments(&self) -> Vec<(Point, Point)> {
        let mut cursor = None;
        let mut segments = Vec::new();
        for command in &self.commands {
            match *command {
                DrawCommand::MoveTo(point) => cursor = Some(point),
                DrawCommand::LineTo(point) => {
                    if let Some(from) = cursor {
                        segments.push((from, point));
                    }
                    cursor = Some(point);
                }
                DrawCommand::BeginPath => cursor = None,
                _ => {}
            }
        }
        segments
    }

    fn push_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Option<Bounds> {
        if ![x, y, width, height].iter().all(|v| v.is_finite()) {
            self.rejected_non_finite += 1;
            return None;
        }
        Some(Bounds {
            left: x.min(x + width),
            right: x.max(x + width),
            top: y.min(y + height),
            bottom: y.max(y + height),
        })
    }

    fn push_point(&mut self, x: f64, y: f64) -> Option<Point> {
        if x.is_finite() && y.is_finite() {
            Some(Point::new(x, y))
        } else {
            self.rejected_non_finite += 1;
            None
        }
    }
}

impl DrawContext for RecordingContext {
    fn save(&mut self) -> ChartResult<()> {
        self.depth += 1;
        self.commands.push(DrawCommand::Save);
        Ok(())
    }

    fn restore(&mut self) -> ChartResult<()> {
        self.depth = self.depth.saturating_sub(1);
        self.commands.push(DrawCommand::Restore);
        Ok(())
    }

    fn clip_rect(&mut self, area: Bounds) -> ChartResult<()> {
        self.commands.push(DrawCommand::Clip(area));
        Ok(())
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        if let Some(point) = self.push_point(x, y) {
            self.commands.push(DrawCommand::MoveTo(point));
        }
    }

    fn line_to(&mut self, x: f64, y: f64) {
        if let Some(point) = self.push_point(x, y) {
            self.commands.push(DrawCommand::LineTo(point));
        }
    }

    fn stroke(&mut self) -> ChartResult<()> {
        self.commands.push(DrawCommand::Stroke {
            color: self.stroke_style,
            width: self.line_width,
        });
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> ChartResult<()> {
        if let Some(rect) = self.push_rect(x, y, width, height) {
            self.commands.push(DrawCommand::FillRect {
                rect,
                color: self.fill_style,
            });
        }
        Ok(())
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> ChartResult<()> {
        if let Some(rect) = self.push_rect(x, y, width, height) {
            self.commands.push(DrawCommand::StrokeRect {
                rect,
                color: self.stroke_style,
                width: self.line_width,
            });
        }
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.stroke_style = color;
    }

    fn set_fill_style(&mut self, color: Color) {
        self.fill_style = color;
    }
}
