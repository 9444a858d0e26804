//! An enumeration of geometric shapes and their properties.

use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::point::Point;
use crate::rect::Rect;
use crate::ring::Ring;
use crate::transform::{Translate, Transpose};

/// An enumeration of geometric shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// A rectangle.
    Rect(Rect),
    /// A rectangular ring (a rectangle with a rectangular hole).
    Ring(Ring),
}

impl Shape {
    /// If this shape is a rectangle, returns the contained rectangle.
    /// Otherwise, returns [`None`].
    pub fn rect(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(*r),
            _ => None,
        }
    }

    /// If this shape is a ring, returns the contained ring.
    /// Otherwise, returns [`None`].
    pub fn ring(&self) -> Option<Ring> {
        match self {
            Self::Ring(r) => Some(*r),
            _ => None,
        }
    }

    /// The area covered by the shape.
    pub fn area(&self) -> f64 {
        match self {
            Shape::Rect(rect) => rect.area(),
            Shape::Ring(ring) => ring.area(),
        }
    }

    /// Non-overlapping rectangles that exactly cover the shape.
    ///
    /// Useful for exporting to formats that have no notion of holes.
    pub fn rects(&self) -> Vec<Rect> {
        match self {
            Shape::Rect(rect) => vec![*rect],
            Shape::Ring(ring) => ring.decompose().to_vec(),
        }
    }
}

impl Translate for Shape {
    fn translate(&self, p: Point) -> Self {
        match self {
            Shape::Rect(rect) => Shape::Rect(rect.translate(p)),
            Shape::Ring(ring) => Shape::Ring(ring.translate(p)),
        }
    }
}

impl Transpose for Shape {
    fn transpose(&self) -> Self {
        match self {
            Shape::Rect(rect) => Shape::Rect(rect.transpose()),
            Shape::Ring(ring) => Shape::Ring(ring.transpose()),
        }
    }
}

impl Bbox for Shape {
    fn bbox(&self) -> Option<Rect> {
        match self {
            Shape::Rect(rect) => rect.bbox(),
            Shape::Ring(ring) => ring.bbox(),
        }
    }
}

impl From<Rect> for Shape {
    #[inline]
    fn from(value: Rect) -> Self {
        Self::Rect(value)
    }
}

impl From<Ring> for Shape {
    #[inline]
    fn from(value: Ring) -> Self {
        Self::Ring(value)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::prelude::*;

    #[test]
    fn ring_shape_exports_four_rects() {
        let ring = Rect::from_sides(0., 0., 2., 2.)
            .cutout(Rect::from_sides(0.5, 0.5, 1.5, 1.5))
            .unwrap();
        let shape = Shape::from(ring);
        assert_eq!(shape.ring(), Some(ring));
        assert_eq!(shape.rect(), None);
        assert_eq!(shape.rects().len(), 4);
        assert_relative_eq!(shape.area(), 3.);
        assert_eq!(shape.bbox(), Some(Rect::from_sides(0., 0., 2., 2.)));
    }

    #[test]
    fn translate_moves_bbox() {
        let shape = Shape::from(Rect::from_sides(0., 0., 1., 1.));
        let moved = shape.translate(Point::new(1., 2.));
        assert_eq!(moved.bbox(), Some(Rect::from_sides(1., 2., 2., 3.)));
    }
}
