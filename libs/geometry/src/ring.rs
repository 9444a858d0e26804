//! Rectangular ring geometry.
//!
//! May be useful for drawing structures that enclose other structures,
//! such as guard rings.

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// A rectangular ring: an outer rectangle with a rectangular hole cut out of it.
///
/// The hole is always strictly inside the outer rectangle,
/// so every side of the ring has a positive width.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Ring {
    /// Vertical span of top segment.
    topv: Span,
    /// Vertical span of bottom segment.
    botv: Span,
    /// Horizontal span of left segment.
    lefth: Span,
    /// Horizontal span of right segment.
    righth: Span,
}

impl Ring {
    /// Computes the boolean difference `outer - inner`.
    ///
    /// Returns [`None`] if `inner` is not strictly contained in `outer`,
    /// since the difference would then not be a closed ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let outer = Rect::from_sides(0., 0., 3., 2.);
    /// let ring = Ring::difference(outer, Rect::from_sides(0.5, 0.5, 2.5, 1.5)).unwrap();
    /// assert_eq!(ring.outer(), outer);
    /// assert_eq!(ring.width(Side::Left), 0.5);
    ///
    /// assert!(Ring::difference(outer, Rect::from_sides(0., 0.5, 2.5, 1.5)).is_none());
    /// ```
    pub fn difference(outer: Rect, inner: Rect) -> Option<Self> {
        if !outer.strictly_contains(&inner) {
            return None;
        }
        let ring = Self {
            topv: Span::new(inner.top(), outer.top()),
            botv: Span::new(outer.bot(), inner.bot()),
            lefth: Span::new(outer.left(), inner.left()),
            righth: Span::new(inner.right(), outer.right()),
        };
        debug_assert!(ring.is_valid());
        Some(ring)
    }

    /// Checks that the ring is valid.
    pub(crate) fn is_valid(&self) -> bool {
        self.topv.start() > self.botv.stop() && self.righth.start() > self.lefth.stop()
    }

    /// The horizontal span of the annulus of the ring.
    pub fn outer_hspan(&self) -> Span {
        Span::new(self.lefth.start(), self.righth.stop())
    }

    /// The horizontal span of the inner portion of the ring.
    pub fn inner_hspan(&self) -> Span {
        Span::new(self.lefth.stop(), self.righth.start())
    }

    /// The vertical span of the annulus of the ring.
    pub fn outer_vspan(&self) -> Span {
        Span::new(self.botv.start(), self.topv.stop())
    }

    /// The vertical span of the inner portion of the ring.
    pub fn inner_vspan(&self) -> Span {
        Span::new(self.botv.stop(), self.topv.start())
    }

    /// The outer annulus bounding box.
    pub fn outer(&self) -> Rect {
        Rect::from_spans(self.outer_hspan(), self.outer_vspan())
    }

    /// The inner rectangle (the hole).
    pub fn inner(&self) -> Rect {
        Rect::from_spans(self.inner_hspan(), self.inner_vspan())
    }

    /// The width of the ring wall on the given side.
    pub fn width(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.topv.length(),
            Side::Right => self.righth.length(),
            Side::Bot => self.botv.length(),
            Side::Left => self.lefth.length(),
        }
    }

    /// The area covered by the ring, excluding the hole.
    pub fn area(&self) -> f64 {
        self.outer().area() - self.inner().area()
    }

    /// The annular rectangle on the given side.
    ///
    /// Rectangles on adjacent sides overlap at the corners of the ring.
    /// For a non-overlapping decomposition, see [`Ring::decompose`].
    #[inline]
    pub fn rect(&self, side: Side) -> Rect {
        match side {
            Side::Top => Rect::from_spans(self.outer_hspan(), self.topv),
            Side::Right => Rect::from_spans(self.righth, self.outer_vspan()),
            Side::Bot => Rect::from_spans(self.outer_hspan(), self.botv),
            Side::Left => Rect::from_spans(self.lefth, self.outer_vspan()),
        }
    }

    /// The annular rectangle on the given side, but limited to the width/height of the inner rectangle.
    #[inline]
    pub fn inner_rect(&self, side: Side) -> Rect {
        match side {
            Side::Top => Rect::from_spans(self.inner_hspan(), self.topv),
            Side::Right => Rect::from_spans(self.righth, self.inner_vspan()),
            Side::Bot => Rect::from_spans(self.inner_hspan(), self.botv),
            Side::Left => Rect::from_spans(self.lefth, self.inner_vspan()),
        }
    }

    /// Decomposes the ring into four non-overlapping rectangles that
    /// exactly cover it.
    ///
    /// The bottom and top rectangles span the full width of the ring;
    /// the left and right rectangles fill the gap between them.
    /// The order is bottom, right, top, left.
    pub fn decompose(&self) -> [Rect; 4] {
        [
            self.rect(Side::Bot),
            self.inner_rect(Side::Right),
            self.rect(Side::Top),
            self.inner_rect(Side::Left),
        ]
    }

    /// Returns `true` if the point lies on the ring itself (not in the hole).
    ///
    /// Points on the boundary of the hole count as lying on the ring.
    pub fn contains_point(&self, p: Point) -> bool {
        let outer = self.outer();
        let inner = self.inner();
        let in_outer = outer.hspan().contains(p.x) && outer.vspan().contains(p.y);
        let in_hole = inner.left() < p.x
            && p.x < inner.right()
            && inner.bot() < p.y
            && p.y < inner.top();
        in_outer && !in_hole
    }
}

impl Bbox for Ring {
    #[inline]
    fn bbox(&self) -> Option<Rect> {
        self.outer().bbox()
    }
}

impl Translate for Ring {
    fn translate(&self, p: Point) -> Self {
        Self {
            topv: self.topv.translate(p.y),
            botv: self.botv.translate(p.y),
            lefth: self.lefth.translate(p.x),
            righth: self.righth.translate(p.x),
        }
    }
}

impl Transpose for Ring {
    fn transpose(&self) -> Self {
        Self {
            topv: self.righth,
            botv: self.lefth,
            lefth: self.botv,
            righth: self.topv,
        }
    }
}

impl AbsDiffEq for Ring {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.outer().abs_diff_eq(&other.outer(), epsilon)
            && self.inner().abs_diff_eq(&other.inner(), epsilon)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::prelude::*;

    fn psd_ring() -> Ring {
        let outer = Rect::from_sides(0., 0., 3., 2.);
        let inner = Rect::from_sides(0.53, 0.53, 3. - 0.53, 2. - 0.53);
        outer.cutout(inner).unwrap()
    }

    #[test]
    fn difference_preserves_outer_and_inner() {
        let ring = psd_ring();
        assert_eq!(ring.outer(), Rect::from_sides(0., 0., 3., 2.));
        assert_abs_diff_eq!(
            ring.inner(),
            Rect::from_sides(0.53, 0.53, 2.47, 1.47),
            epsilon = 1e-12
        );
        for side in Side::ALL {
            assert_relative_eq!(ring.width(side), 0.53, max_relative = 1e-9);
        }
    }

    #[test]
    fn area_is_outer_minus_inner() {
        assert_relative_eq!(psd_ring().area(), 6.0 - 1.94 * 0.94, max_relative = 1e-9);
    }

    #[test]
    fn decomposition_covers_ring_without_overlap() {
        let ring = psd_ring();
        let rects = ring.decompose();
        let total: f64 = rects.iter().map(Rect::area).sum();
        assert_relative_eq!(total, ring.area(), max_relative = 1e-9);
        for (i, a) in rects.iter().enumerate() {
            assert!(!a.overlaps(&ring.inner()));
            for b in rects.iter().skip(i + 1) {
                assert!(!a.overlaps(b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn difference_requires_strict_containment() {
        let outer = Rect::from_sides(0., 0., 1., 1.);
        assert!(outer.cutout(outer).is_none());
        assert!(outer.cutout(Rect::from_sides(0.2, 0.2, 1.2, 0.8)).is_none());
        assert!(outer.cutout(Rect::from_sides(2., 2., 3., 3.)).is_none());
    }

    #[test]
    fn contains_points_on_ring_only() {
        let ring = psd_ring();
        assert!(ring.contains_point(Point::new(0.1, 1.)));
        assert!(ring.contains_point(Point::new(0.53, 1.)));
        assert!(!ring.contains_point(Point::new(1.5, 1.)));
        assert!(!ring.contains_point(Point::new(3.5, 1.)));
    }

    #[test]
    fn transpose_matches_transposed_difference() {
        let ring = psd_ring();
        let expected = ring.outer().transpose().cutout(ring.inner().transpose()).unwrap();
        assert_eq!(ring.transpose(), expected);
        assert_eq!(ring.transpose().width(Side::Bot), ring.width(Side::Left));
    }
}
