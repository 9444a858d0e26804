//! Even distribution of points along a line segment.

use geometry::snap::round_to_decimals;
use serde::{Deserialize, Serialize};

/// Offsets of evenly spaced points along a segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsOnLine {
    /// Offsets from the start of the segment, rounded to 3 decimal places.
    ///
    /// Always contains at least one point, at offset zero.
    pub points: Vec<f64>,
    /// The center-to-center distance between adjacent points,
    /// or zero if there is only one point.
    pub spacing: f64,
}

impl PointsOnLine {
    /// Shifts every offset by `offset`.
    pub fn shifted(&self, offset: f64) -> Vec<f64> {
        self.points.iter().map(|p| p + offset).collect()
    }
}

/// Distributes as many points as possible along a segment of the given
/// `length`, keeping at least `min_spacing` between the edges of
/// adjacent points of diameter `point_diameter`.
///
/// With `n = floor(length / (min_spacing + point_diameter))`, the
/// spacing is stretched to `length / n` so that `n + 1` points span the
/// segment exactly, from offset `0` to offset `length`. A segment too
/// short for two points yields a single point at offset `0`.
///
/// # Example
///
/// ```
/// # use sg13::gring::calculate_points_on_line;
/// let line = calculate_points_on_line(1.0, 0.3, 0.2);
/// assert_eq!(line.points, vec![0.0, 0.5, 1.0]);
/// assert_eq!(line.spacing, 0.5);
///
/// let line = calculate_points_on_line(0.4, 0.3, 0.2);
/// assert_eq!(line.points, vec![0.0]);
/// assert_eq!(line.spacing, 0.0);
/// ```
///
/// # Panics
///
/// Panics if `min_spacing + point_diameter` is not positive.
pub fn calculate_points_on_line(length: f64, min_spacing: f64, point_diameter: f64) -> PointsOnLine {
    let effective_spacing = min_spacing + point_diameter;
    assert!(
        effective_spacing > 0.,
        "effective point spacing must be positive (got {effective_spacing})"
    );

    let num_points = floor_div(length, effective_spacing);
    let spacing = if num_points > 0 {
        length / num_points as f64
    } else {
        0.
    };

    let points = (0..=num_points)
        .map(|i| round_to_decimals(i as f64 * spacing, 3))
        .collect();

    PointsOnLine { points, spacing }
}

/// The floor of the exact quotient `a / b` for positive `b`.
///
/// Computing `(a / b).floor()` can round up across an integer boundary
/// (`1.0 / 0.1` evaluates to exactly `10.0` even though `0.1` is stored
/// as slightly more than one tenth); subtracting the exact remainder first
/// avoids that.
fn floor_div(a: f64, b: f64) -> usize {
    if !(a > 0.) || !a.is_finite() {
        return 0;
    }
    let rem = a % b;
    ((a - rem) / b).round() as usize
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn count_matches_floor_of_length_over_pitch() {
        for (length, gap, d, count) in [
            (4.47, 0.18, 0.16, 14),
            (2.47, 0.18, 0.16, 8),
            (0.34, 0.18, 0.16, 2),
            (10.0, 0.5, 0.5, 11),
            (7.3, 0.2, 0.1, 25),
        ] {
            let line = calculate_points_on_line(length, gap, d);
            assert_eq!(line.points.len(), count, "length {length}");
            let n = count - 1;
            assert_eq!(line.points[0], 0.);
            assert_abs_diff_eq!(
                *line.points.last().unwrap(),
                n as f64 * line.spacing,
                epsilon = 5e-4
            );
            assert!(line.spacing * n as f64 <= length + 1e-9);
            if n > 0 {
                assert!(line.spacing >= gap + d - 1e-9);
            }
        }
    }

    #[test]
    fn spacing_is_stretched_to_fill_segment() {
        let line = calculate_points_on_line(1.0, 0.18, 0.16);
        assert_eq!(line.points.len(), 3);
        assert_relative_eq!(line.spacing, 0.5);
        assert_eq!(line.points, vec![0., 0.5, 1.]);
    }

    #[test]
    fn offsets_are_rounded_to_three_decimals() {
        let line = calculate_points_on_line(1.0, 0.18, 0.15);
        assert_eq!(line.points.len(), 4);
        assert_eq!(line.points, vec![0., 0.333, 0.667, 1.]);
    }

    #[test]
    fn offsets_round_exact_binary_value() {
        // 0.711 / 2 is stored just below 0.3555.
        let line = calculate_points_on_line(0.711, 0.18, 0.16);
        assert_eq!(line.points, vec![0., 0.355, 0.711]);
    }

    #[test]
    fn short_segments_yield_one_point() {
        for length in [0.2, 0.339, 0., -1.] {
            let line = calculate_points_on_line(length, 0.18, 0.16);
            assert_eq!(line.points, vec![0.]);
            assert_eq!(line.spacing, 0.);
        }
    }

    #[test]
    fn floor_div_uses_exact_quotient() {
        assert_eq!(floor_div(1.0, 0.1), 9);
        assert_eq!(floor_div(1.0, 0.5), 2);
        assert_eq!(floor_div(0.99, 0.5), 1);
        assert_eq!(floor_div(f64::INFINITY, 0.5), 0);
    }

    #[test]
    fn shifted_adds_offset() {
        let line = calculate_points_on_line(1.0, 0.3, 0.2);
        assert_eq!(line.shifted(0.25), vec![0.25, 0.75, 1.25]);
    }
}
