pub mod direction;
pub mod element;
pub mod extent;
pub mod geometry;
pub mod ruler;
pub mod scale;
pub mod types;
pub mod windowing;

pub use direction::{Direction, classify};
pub use element::{FinancialElement, HitMode, Orientation, Segment};
pub use extent::{compute_extent, compute_index_extent};
pub use geometry::{GeometricRecord, resolve_geometry, resolve_stacked_geometry};
pub use ruler::{BarSlot, BarSlotOptions, RulerConfig, bar_slot, compute_min_sample_size};
pub use scale::{IndexAxis, LinearIndexAxis, LinearScale, LinearValueAxis, LogValueAxis, ValueAxis};
pub use types::{AxisExtent, Bounds, FinancialDataPoint, Point, Viewport};
pub use windowing::{index_window_for_x_range, points_in_x_range};
