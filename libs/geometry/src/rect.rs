//! Axis-aligned rectangles.

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::dir::Dir;
use crate::point::Point;
use crate::ring::Ring;
use crate::span::Span;
use crate::transform::{Translate, Transpose};

/// An axis-aligned rectangle, specified by lower-left and upper-right corners.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Rect {
    /// The lower-left corner.
    p0: Point,
    /// The upper-right corner.
    p1: Point,
}

impl Rect {
    /// Creates a rectangle with the given corners.
    ///
    /// The corners need not be the lower-left and upper-right corners;
    /// coordinates are sorted so that the rectangle is well formed.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::new(Point::new(3., 0.), Point::new(1., 2.));
    /// assert_eq!(rect, Rect::from_sides(1., 0., 3., 2.));
    /// ```
    pub fn new(p0: Point, p1: Point) -> Self {
        let x = Span::new(p0.x, p1.x);
        let y = Span::new(p0.y, p1.y);
        Self::from_spans(x, y)
    }

    /// Creates a rectangle from all 4 sides (left, bottom, right, top).
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(0.5, 1., 2.5, 4.);
    /// assert_eq!(rect.left(), 0.5);
    /// assert_eq!(rect.bot(), 1.);
    /// assert_eq!(rect.right(), 2.5);
    /// assert_eq!(rect.top(), 4.);
    /// ```
    ///
    /// # Panics
    ///
    /// This method panics if `left > right` or if `bot > top`.
    ///
    /// If you want sides to be sorted for you, consider using [`Rect::new`] instead.
    /// If you want to handle empty rectangles, use [`Rect::try_from_sides`].
    #[inline]
    pub fn from_sides(left: f64, bot: f64, right: f64, top: f64) -> Self {
        assert!(
            left <= right,
            "Rect::from_sides requires that left ({}) <= right ({})",
            left,
            right
        );
        assert!(
            bot <= top,
            "Rect::from_sides requires that bot ({}) <= top ({})",
            bot,
            top
        );
        Self {
            p0: Point::new(left, bot),
            p1: Point::new(right, top),
        }
    }

    /// Creates a rectangle from all 4 sides (left, bottom, right, top),
    /// but returns `None` if the rectangle would have no area.
    ///
    /// A rectangle has no area if `left >= right` or `bot >= top`,
    /// or if any side is not a finite number.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// assert!(Rect::try_from_sides(0., 0., 1., 1.).is_some());
    /// assert!(Rect::try_from_sides(0., 0., 0., 1.).is_none());
    /// assert!(Rect::try_from_sides(0., 2., 1., 1.).is_none());
    /// ```
    pub fn try_from_sides(left: f64, bot: f64, right: f64, top: f64) -> Option<Self> {
        let finite = [left, bot, right, top].iter().all(|v| v.is_finite());
        if finite && left < right && bot < top {
            Some(Self::from_sides(left, bot, right, top))
        } else {
            None
        }
    }

    /// Creates a rectangle from horizontal and vertical [`Span`]s.
    pub fn from_spans(h: Span, v: Span) -> Self {
        Self {
            p0: Point::new(h.start(), v.start()),
            p1: Point::new(h.stop(), v.stop()),
        }
    }

    /// Creates a square with side length `size` whose lower-left corner is `p`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let sq = Rect::square(Point::new(1., 2.), 0.5);
    /// assert_eq!(sq, Rect::from_sides(1., 2., 1.5, 2.5));
    /// ```
    pub fn square(p: Point, size: f64) -> Self {
        Self::from_sides(p.x, p.y, p.x + size, p.y + size)
    }

    /// The lower-left corner.
    #[inline]
    pub const fn lower_left(&self) -> Point {
        self.p0
    }

    /// The upper-right corner.
    #[inline]
    pub const fn upper_right(&self) -> Point {
        self.p1
    }

    /// The left edge coordinate.
    #[inline]
    pub const fn left(&self) -> f64 {
        self.p0.x
    }

    /// The bottom edge coordinate.
    #[inline]
    pub const fn bot(&self) -> f64 {
        self.p0.y
    }

    /// The right edge coordinate.
    #[inline]
    pub const fn right(&self) -> f64 {
        self.p1.x
    }

    /// The top edge coordinate.
    #[inline]
    pub const fn top(&self) -> f64 {
        self.p1.y
    }

    /// The horizontal extent of the rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.p1.x - self.p0.x
    }

    /// The vertical extent of the rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.p1.y - self.p0.y
    }

    /// The area of the rectangle.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// The center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.hspan().center(), self.vspan().center())
    }

    /// The horizontal span of the rectangle.
    #[inline]
    pub fn hspan(&self) -> Span {
        Span::new(self.p0.x, self.p1.x)
    }

    /// The vertical span of the rectangle.
    #[inline]
    pub fn vspan(&self) -> Span {
        Span::new(self.p0.y, self.p1.y)
    }

    /// The span of the rectangle in the given direction.
    pub fn span(&self, dir: Dir) -> Span {
        match dir {
            Dir::Horiz => self.hspan(),
            Dir::Vert => self.vspan(),
        }
    }

    /// Expands the rectangle by `amount` on all sides.
    pub fn expand_all(&self, amount: f64) -> Self {
        Self::from_spans(self.hspan().expand_all(amount), self.vspan().expand_all(amount))
    }

    /// Insets the rectangle by `amount` on all sides.
    ///
    /// Returns [`None`] if nothing would be left of the rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(0., 0., 3., 2.);
    /// assert_eq!(rect.try_shrink_all(0.5), Some(Rect::from_sides(0.5, 0.5, 2.5, 1.5)));
    /// assert_eq!(rect.try_shrink_all(1.), None);
    /// ```
    pub fn try_shrink_all(&self, amount: f64) -> Option<Self> {
        Some(Self::from_spans(
            self.hspan().try_shrink_all(amount)?,
            self.vspan().try_shrink_all(amount)?,
        ))
    }

    /// Returns `true` if `other` lies inside this rectangle with a
    /// positive margin on every side.
    pub fn strictly_contains(&self, other: &Rect) -> bool {
        self.hspan().strictly_contains(&other.hspan())
            && self.vspan().strictly_contains(&other.vspan())
    }

    /// Returns `true` if the two rectangles share any point, including edges.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.hspan().intersects(&other.hspan()) && self.vspan().intersects(&other.vspan())
    }

    /// Returns `true` if the interiors of the two rectangles overlap.
    ///
    /// Rectangles that only touch along an edge or at a corner do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.bot() < other.top()
            && other.bot() < self.top()
    }

    /// The smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: Rect) -> Self {
        Self::from_spans(
            self.hspan().union(other.hspan()),
            self.vspan().union(other.vspan()),
        )
    }

    /// Subtracts `inner` from this rectangle, producing a [`Ring`].
    ///
    /// Returns [`None`] unless `inner` is strictly contained in `self`.
    /// See [`Ring::difference`].
    #[inline]
    pub fn cutout(&self, inner: Rect) -> Option<Ring> {
        Ring::difference(*self, inner)
    }

    /// Snaps all four sides of the rectangle to the nearest multiple of `grid`.
    pub fn snap_to_grid(&self, grid: f64) -> Self {
        Self::from_spans(self.hspan().snap_to_grid(grid), self.vspan().snap_to_grid(grid))
    }
}

impl Bbox for Rect {
    #[inline]
    fn bbox(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl Translate for Rect {
    fn translate(&self, p: Point) -> Self {
        Self {
            p0: self.p0.translate(p),
            p1: self.p1.translate(p),
        }
    }
}

impl Transpose for Rect {
    fn transpose(&self) -> Self {
        Self::from_spans(self.vspan(), self.hspan())
    }
}

impl AbsDiffEq for Rect {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.p0.abs_diff_eq(&other.p0, epsilon) && self.p1.abs_diff_eq(&other.p1, epsilon)
    }
}
