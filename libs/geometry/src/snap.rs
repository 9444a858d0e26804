//! Snapping utilities (eg. snap to a grid).
//!
//! Ties are rounded half to even in every function of this module,
//! so that `0.0025` snapped to a `0.005` grid and `0.0075` snapped to the
//! same grid move in opposite directions rather than drifting upward.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// The manufacturing grid to fall back on when a technology reports a
/// grid resolution of zero.
pub const DEFAULT_GRID: f64 = 0.005;

/// Snaps `pos` to the nearest multiple of `grid`.
///
/// # Example
///
/// ```
/// # use geometry::prelude::*;
/// assert_eq!(snap_to_grid(1.25, 0.5), 1.0);
/// assert_eq!(snap_to_grid(1.75, 0.5), 2.0);
/// assert_eq!(snap_to_grid(1.3, 0.5), 1.5);
/// ```
///
/// # Panics
///
/// Panics if `grid` is not strictly positive.
pub fn snap_to_grid(pos: f64, grid: f64) -> f64 {
    assert!(grid > 0., "grid must be positive (got {grid})");
    (pos / grid).round_ties_even() * grid
}

/// Rounds `value` to the given number of decimal digits.
///
/// The exact binary value of `value` is rounded, so `0.3555`, which is
/// stored as slightly less than `0.3555`, rounds down. Values that cannot
/// be represented as a [`Decimal`] (non-finite or out of range) are
/// returned unchanged.
///
/// # Example
///
/// ```
/// # use geometry::prelude::*;
/// assert_eq!(round_to_decimals(0.1234, 3), 0.123);
/// assert_eq!(round_to_decimals(2.5, 0), 2.);
/// assert_eq!(round_to_decimals(0.711 / 2., 3), 0.355);
/// ```
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn snapping_is_idempotent() {
        for grid in [DEFAULT_GRID, 0.001, 0.01, 0.05] {
            for i in -200..200 {
                let pos = i as f64 * 0.0137;
                let once = snap_to_grid(pos, grid);
                assert_eq!(snap_to_grid(once, grid), once);
            }
        }
    }

    #[test]
    fn snapping_lands_on_nearest_multiple() {
        assert_abs_diff_eq!(snap_to_grid(0.531, DEFAULT_GRID), 0.53, epsilon = 1e-12);
        assert_abs_diff_eq!(snap_to_grid(0.534, DEFAULT_GRID), 0.535, epsilon = 1e-12);
        assert_abs_diff_eq!(snap_to_grid(-0.531, DEFAULT_GRID), -0.53, epsilon = 1e-12);
    }

    #[test]
    fn ties_round_to_even() {
        assert_eq!(snap_to_grid(2.5, 1.), 2.);
        assert_eq!(snap_to_grid(3.5, 1.), 4.);
        assert_eq!(snap_to_grid(-2.5, 1.), -2.);
        assert_eq!(round_to_decimals(0.5, 0), 0.);
        assert_eq!(round_to_decimals(0.0625, 3), 0.062);
    }

    #[test]
    fn rounding_uses_exact_binary_value() {
        // Each of these is stored just below the decimal midpoint.
        assert_eq!(round_to_decimals(0.711 / 2., 3), 0.355);
        assert_eq!(round_to_decimals(1.0005, 3), 1.0);
        assert_eq!(round_to_decimals(-0.711 / 2., 3), -0.355);
        assert!(round_to_decimals(f64::NAN, 3).is_nan());
        assert_eq!(round_to_decimals(f64::INFINITY, 3), f64::INFINITY);
    }

    #[test]
    #[should_panic]
    fn snapping_to_zero_grid_panics() {
        snap_to_grid(1., 0.);
    }
}
