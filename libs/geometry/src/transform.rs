//! Rigid transformations of layout geometry.
//!
//! Only the transformations needed by Manhattan generators are provided:
//! translation and transposition (reflection across the line `y = x`).

use crate::point::Point;

/// A trait for specifying how an object is translated by a [`Point`].
pub trait Translate: Sized {
    /// Returns a copy of `self` translated by the given point.
    fn translate(&self, p: Point) -> Self;
}

/// A trait for reflecting an object across the line `y = x`.
///
/// Transposing twice yields the original object.
///
/// # Example
///
/// ```
/// # use geometry::prelude::*;
/// let rect = Rect::from_sides(1., 2., 3., 5.);
/// assert_eq!(rect.transpose(), Rect::from_sides(2., 1., 5., 3.));
/// assert_eq!(rect.transpose().transpose(), rect);
/// ```
pub trait Transpose: Sized {
    /// Returns a copy of `self` with x and y coordinates exchanged.
    fn transpose(&self) -> Self;
}

impl<T: Translate> Translate for Vec<T> {
    fn translate(&self, p: Point) -> Self {
        self.iter().map(|t| t.translate(p)).collect()
    }
}

impl<T: Transpose> Transpose for Vec<T> {
    fn transpose(&self) -> Self {
        self.iter().map(Transpose::transpose).collect()
    }
}
