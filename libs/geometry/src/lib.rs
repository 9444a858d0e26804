//! 2-D geometric operations relevant to integrated circuit layout.
//!
//! Coordinates are real numbers in micrometers, matching the units
//! in which process design rules are usually written.
//!
//! # Examples
//!
//! Create a [rectangle](crate::rect::Rect) and cut a
//! [ring](crate::ring::Ring) out of it:
//!
//! ```
//! # use geometry::prelude::*;
//! let outer = Rect::from_sides(0., 0., 4., 2.);
//! let inner = Rect::from_sides(0.5, 0.5, 3.5, 1.5);
//! let ring = outer.cutout(inner).unwrap();
//! assert_eq!(ring.area(), 5.);
//! ```
#![warn(missing_docs)]

pub mod bbox;
pub mod dir;
pub mod point;
pub mod prelude;
pub mod rect;
pub mod ring;
pub mod shape;
pub mod side;
pub mod snap;
pub mod span;
pub mod transform;
