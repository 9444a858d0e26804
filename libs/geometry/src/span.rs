//! A one-dimensional span.
//!
//! A span represents the closed interval `[start, stop]`.
use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::snap::snap_to_grid;

/// A closed interval of coordinates in one dimension.
///
/// Represents the range `[start, stop]`.
#[derive(Debug, Default, Clone, Copy, PartialOrd, Serialize, Deserialize, PartialEq)]
pub struct Span {
    start: f64,
    stop: f64,
}

impl Span {
    /// Creates a new [`Span`] between two coordinates.
    ///
    /// The endpoints are sorted, so `Span::new(3., 1.)` is the same as `Span::new(1., 3.)`.
    pub fn new(start: f64, stop: f64) -> Self {
        Self {
            start: start.min(stop),
            stop: start.max(stop),
        }
    }

    /// Creates a new [`Span`] expanded by `amount` in both directions.
    ///
    /// A negative `amount` shrinks the span; the result is not
    /// guaranteed to be non-empty, see [`Span::try_shrink_all`].
    pub fn expand_all(self, amount: f64) -> Self {
        Self::new(self.start - amount, self.stop + amount)
    }

    /// Shrinks the span by `amount` at both ends.
    ///
    /// Returns [`None`] if the result would have zero or negative length.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let span = Span::new(0., 4.);
    /// assert_eq!(span.try_shrink_all(1.), Some(Span::new(1., 3.)));
    /// assert_eq!(span.try_shrink_all(2.), None);
    /// ```
    pub fn try_shrink_all(self, amount: f64) -> Option<Self> {
        let start = self.start + amount;
        let stop = self.stop - amount;
        (start < stop).then_some(Self { start, stop })
    }

    /// Gets the center of the span.
    #[inline]
    pub fn center(&self) -> f64 {
        (self.start + self.stop) / 2.
    }

    /// Gets the length of the span.
    #[inline]
    pub fn length(&self) -> f64 {
        self.stop - self.start
    }

    /// Gets the start of the span.
    #[inline]
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// Gets the stop of the span.
    #[inline]
    pub const fn stop(&self) -> f64 {
        self.stop
    }

    /// Returns `true` if `x` lies within the closed interval.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.start <= x && x <= self.stop
    }

    /// Returns `true` if `other` lies inside this span with a positive
    /// margin at both ends.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let span = Span::new(0., 10.);
    /// assert!(span.strictly_contains(&Span::new(1., 9.)));
    /// assert!(!span.strictly_contains(&Span::new(0., 9.)));
    /// ```
    #[inline]
    pub fn strictly_contains(&self, other: &Self) -> bool {
        self.start < other.start && other.stop < self.stop
    }

    /// Checks if the span intersects with the [`Span`] `other`.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(other.stop < self.start || self.stop < other.start)
    }

    /// Returns the smallest span containing both `self` and `other`.
    pub fn union(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            stop: self.stop.max(other.stop),
        }
    }

    /// Translates the span by `amount`.
    #[inline]
    pub fn translate(self, amount: f64) -> Self {
        Self {
            start: self.start + amount,
            stop: self.stop + amount,
        }
    }

    /// Snaps both endpoints of the span to the nearest multiple of `grid`.
    pub fn snap_to_grid(self, grid: f64) -> Self {
        Self::new(snap_to_grid(self.start, grid), snap_to_grid(self.stop, grid))
    }
}

impl AbsDiffEq for Span {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.start.abs_diff_eq(&other.start, epsilon) && self.stop.abs_diff_eq(&other.stop, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sorts_endpoints() {
        let span = Span::new(3., 1.);
        assert_eq!(span.start(), 1.);
        assert_eq!(span.stop(), 3.);
        assert_eq!(span.length(), 2.);
        assert_eq!(span.center(), 2.);
    }

    #[test]
    fn union_and_intersection() {
        let a = Span::new(0., 2.);
        let b = Span::new(1.5, 5.);
        let c = Span::new(6., 7.);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert_eq!(a.union(c), Span::new(0., 7.));
    }

    #[test]
    fn shrink_never_produces_empty_span() {
        let span = Span::new(0., 1.);
        assert_eq!(span.try_shrink_all(0.5), None);
        assert_eq!(span.try_shrink_all(0.75), None);
        assert_eq!(span.try_shrink_all(0.25), Some(Span::new(0.25, 0.75)));
    }
}
