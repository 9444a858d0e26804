//! An import prelude that re-exports commonly used items.

pub use crate::bbox::Bbox;
pub use crate::dir::Dir;
pub use crate::point::Point;
pub use crate::rect::Rect;
pub use crate::ring::Ring;
pub use crate::shape::Shape;
pub use crate::side::Side;
pub use crate::snap::{round_to_decimals, snap_to_grid, DEFAULT_GRID};
pub use crate::span::Span;
pub use crate::transform::{Translate, Transpose};
