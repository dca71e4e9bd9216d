use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::geometry::GeometricRecord;
use crate::core::types::{Bounds, Point};

/// Which vertical span a hit-test or bounds query uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HitMode {
    /// Open/close span only.
    Body,
    /// Full high/low span.
    #[default]
    Wick,
}

/// Direction the index axis runs in.
///
/// `Horizontal` lays bars along the y axis with prices on x; every query
/// swaps coordinates accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// One stroked segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Hit-testable wrapper around one resolved bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialElement {
    pub index: usize,
    pub record: GeometricRecord,
    pub orientation: Orientation,
}

impl FinancialElement {
    #[must_use]
    pub fn new(index: usize, record: GeometricRecord) -> Self {
        Self {
            index,
            record,
            orientation: Orientation::Vertical,
        }
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    fn value_span(&self, mode: HitMode) -> (f64, f64) {
        let r = &self.record;
        let (a, b) = match mode {
            HitMode::Body => (r.open, r.close),
            HitMode::Wick => (r.high, r.low),
        };
        (a.min(b), a.max(b))
    }

    /// Maps an (index-axis, value-axis) pixel pair onto screen coordinates.
    fn screen(&self, index_px: f64, value_px: f64) -> Point {
        match self.orientation {
            Orientation::Vertical => Point::new(index_px, value_px),
            Orientation::Horizontal => Point::new(value_px, index_px),
        }
    }

    #[must_use]
    pub fn bounds(&self, mode: HitMode) -> Bounds {
        let half = self.record.width / 2.0;
        let (index_lo, index_hi) = (self.record.center_x - half, self.record.center_x + half);
        let (value_lo, value_hi) = self.value_span(mode);
        match self.orientation {
            Orientation::Vertical => Bounds {
                left: index_lo,
                right: index_hi,
                top: value_lo,
                bottom: value_hi,
            },
            Orientation::Horizontal => Bounds {
                left: value_lo,
                right: value_hi,
                top: index_lo,
                bottom: index_hi,
            },
        }
    }

    /// Tests `(x, y)` against `bounds(mode)`.
    ///
    /// Passing `None` for one coordinate restricts the test to the other axis,
    /// which is how index-only and value-only crosshair queries work. Passing
    /// `None` for both never matches.
    #[must_use]
    pub fn contains_point(&self, x: Option<f64>, y: Option<f64>, mode: HitMode) -> bool {
        let bounds = self.bounds(mode);
        match (x, y) {
            (Some(x), Some(y)) => bounds.contains_x(x) && bounds.contains_y(y),
            (Some(x), None) => bounds.contains_x(x),
            (None, Some(y)) => bounds.contains_y(y),
            (None, None) => false,
        }
    }

    /// Midpoint of the high/low span.
    #[must_use]
    pub fn center_point(&self) -> Point {
        let r = &self.record;
        self.screen(r.center_x, (r.high + r.low) / 2.0)
    }

    /// Midpoint of the open/close span; tooltips hug the body.
    #[must_use]
    pub fn tooltip_anchor(&self) -> Point {
        let r = &self.record;
        self.screen(r.center_x, (r.open + r.close) / 2.0)
    }

    /// Upper and lower wick, leaving the body span uncovered.
    #[must_use]
    pub fn wick_segments(&self) -> SmallVec<[Segment; 2]> {
        let r = &self.record;
        let (body_lo, body_hi) = self.value_span(HitMode::Body);
        smallvec![
            self.segment(r.center_x, r.high, r.center_x, body_lo),
            self.segment(r.center_x, r.low, r.center_x, body_hi),
        ]
    }

    /// High-low spine, left open arm and right close arm.
    #[must_use]
    pub fn ohlc_segments(&self, arm_length: f64) -> SmallVec<[Segment; 3]> {
        let r = &self.record;
        smallvec![
            self.segment(r.center_x, r.high, r.center_x, r.low),
            self.segment(r.center_x - arm_length, r.open, r.center_x, r.open),
            self.segment(r.center_x + arm_length, r.close, r.center_x, r.close),
        ]
    }

    /// Body rectangle with non-negative size, shrunk by `inset` on every side.
    ///
    /// The inset is clamped so a thin body degrades to a zero-size rectangle
    /// at its center instead of flipping.
    #[must_use]
    pub fn body_rect(&self, inset: f64) -> Bounds {
        let outer = self.bounds(HitMode::Body);
        let inset_x = inset.max(0.0).min(outer.width() / 2.0);
        let inset_y = inset.max(0.0).min(outer.height() / 2.0);
        Bounds {
            left: outer.left + inset_x,
            right: outer.right - inset_x,
            top: outer.top + inset_y,
            bottom: outer.bottom - inset_y,
        }
    }

    fn segment(&self, index_a: f64, value_a: f64, index_b: f64, value_b: f64) -> Segment {
        Segment {
            from: self.screen(index_a, value_a),
            to: self.screen(index_b, value_b),
        }
    }
}
