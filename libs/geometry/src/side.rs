//! The four sides of an axis-aligned rectangle.

use serde::{Deserialize, Serialize};

use crate::dir::Dir;

/// An enumeration of the sides of an axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum Side {
    /// The left side.
    Left,
    /// The bottom side.
    Bot,
    /// The right side.
    Right,
    /// The top side.
    Top,
}

impl Side {
    /// All four sides, counterclockwise from the left.
    pub const ALL: [Side; 4] = [Side::Left, Side::Bot, Side::Right, Side::Top];

    /// The direction along which a segment lying on this side runs.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// assert_eq!(Side::Left.edge_dir(), Dir::Vert);
    /// assert_eq!(Side::Top.edge_dir(), Dir::Horiz);
    /// ```
    pub const fn edge_dir(&self) -> Dir {
        match *self {
            Side::Left | Side::Right => Dir::Vert,
            Side::Bot | Side::Top => Dir::Horiz,
        }
    }
}
