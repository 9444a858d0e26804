//! 2-D points.

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::dir::Dir;
use crate::snap::snap_to_grid;
use crate::transform::{Translate, Transpose};

/// A point in two-dimensional space.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Point {
    /// The x-coordinate of the point.
    pub x: f64,
    /// The y-coordinate of the point.
    pub y: f64,
}

impl Point {
    /// Creates a new [`Point`] from (x,y) coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a new point from the given direction and coordinates.
    ///
    /// If `dir` is [`Dir::Horiz`], `a` becomes the x-coordinate and `b` becomes the y-coordinate.
    /// If `dir` is [`Dir::Vert`], `a` becomes the y-coordinate and `b` becomes the x-coordinate.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// assert_eq!(Point::from_dir_coords(Dir::Horiz, 1., 2.), Point::new(1., 2.));
    /// assert_eq!(Point::from_dir_coords(Dir::Vert, 1., 2.), Point::new(2., 1.));
    /// ```
    pub const fn from_dir_coords(dir: Dir, a: f64, b: f64) -> Self {
        match dir {
            Dir::Horiz => Self::new(a, b),
            Dir::Vert => Self::new(b, a),
        }
    }

    /// Snaps the x and y coordinates of this point to the nearest multiple of `grid`.
    #[inline]
    pub fn snap_to_grid(&self, grid: f64) -> Self {
        Self::new(snap_to_grid(self.x, grid), snap_to_grid(self.y, grid))
    }
}

impl Translate for Point {
    fn translate(&self, p: Point) -> Self {
        Self::new(self.x + p.x, self.y + p.y)
    }
}

impl Transpose for Point {
    fn transpose(&self) -> Self {
        Self::new(self.y, self.x)
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}
