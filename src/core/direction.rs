use serde::{Deserialize, Serialize};

/// Up/down/unchanged bucket of one bar.
///
/// The buckets follow the long-standing financial-series convention where
/// `close < open` lands in `Up` and `close > open` lands in `Down`. Colors are
/// keyed by these buckets, so the mapping is part of the visible output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    #[default]
    Unchanged,
}

impl Direction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Unchanged => "unchanged",
        }
    }
}

/// Classifies a bar from its open and close.
///
/// Total over `f64`: any non-finite input yields [`Direction::Unchanged`].
#[must_use]
pub fn classify(open: f64, close: f64) -> Direction {
    if !open.is_finite() || !close.is_finite() {
        return Direction::Unchanged;
    }
    if close < open {
        Direction::Up
    } else if close > open {
        Direction::Down
    } else {
        Direction::Unchanged
    }
}
