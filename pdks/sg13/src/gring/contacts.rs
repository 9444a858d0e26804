//! Placement of contact squares around the perimeter of a guard ring.

use std::collections::HashSet;

use geometry::prelude::*;

use super::points::calculate_points_on_line;

/// The side length of a guard ring contact square.
pub const CONT_SIZE: f64 = 0.16;

/// The minimum edge-to-edge spacing between guard ring contact squares.
pub const CONT_MIN_SPACING: f64 = 0.18;

/// Where the contacts of a guard ring go.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct ContactRing {
    /// The guard ring length (x extent).
    pub(crate) l: f64,
    /// The guard ring width (y extent).
    pub(crate) w: f64,
    /// The width of the implant ring the contacts are centered in.
    pub(crate) min_sd: f64,
    /// The coordinate of the left and bottom rows of contacts.
    pub(crate) edge: f64,
    /// The grid to snap contact corners to.
    pub(crate) grid: f64,
}

impl ContactRing {
    /// Computes the lower-left corners of every contact, snapped to the grid,
    /// and returns the contact squares.
    ///
    /// The left and right columns are followed by the bottom and top rows.
    /// A corner reached by both a column and a row is emitted once.
    pub(crate) fn squares(&self) -> Vec<Rect> {
        let offset = (self.min_sd - CONT_SIZE) / 2.;
        let inset = (offset + CONT_SIZE / 2.) * 2.;

        let mut squares = Vec::new();
        let mut seen = HashSet::new();

        for dir in [Dir::Vert, Dir::Horiz] {
            // Extent along the edges running in `dir`, and across them.
            let (along_len, across_len) = match dir {
                Dir::Vert => (self.w, self.l),
                Dir::Horiz => (self.l, self.w),
            };
            let line = calculate_points_on_line(along_len - inset, CONT_MIN_SPACING, CONT_SIZE);
            tracing::debug!(
                %dir,
                count = line.points.len(),
                spacing = line.spacing,
                "placing contact row"
            );
            let positions = line.shifted(offset);
            for across in [self.edge, across_len - (CONT_SIZE + offset)] {
                for &along in positions.iter() {
                    let p = Point::from_dir_coords(dir, along, across).snap_to_grid(self.grid);
                    if seen.insert(self.grid_key(p)) {
                        squares.push(Rect::square(p, CONT_SIZE));
                    }
                }
            }
        }

        squares
    }

    fn grid_key(&self, p: Point) -> (i64, i64) {
        (
            (p.x / self.grid).round() as i64,
            (p.y / self.grid).round() as i64,
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, AbsDiffEq};

    use super::*;

    fn ring(l: f64, w: f64) -> ContactRing {
        ContactRing {
            l,
            w,
            min_sd: 0.53,
            edge: 0.53 / 2. - 0.16 / 2.,
            grid: DEFAULT_GRID,
        }
    }

    #[test]
    fn contacts_do_not_overlap_and_lie_on_grid() {
        let squares = ring(3., 2.).squares();
        assert!(!squares.is_empty());
        for (i, a) in squares.iter().enumerate() {
            assert_abs_diff_eq!(a.width(), CONT_SIZE, epsilon = 1e-12);
            let k = a.left() / DEFAULT_GRID;
            assert_abs_diff_eq!(k, k.round(), epsilon = 1e-6);
            for b in squares.iter().skip(i + 1) {
                assert!(!a.overlaps(b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn corners_are_not_duplicated() {
        let squares = ring(3., 2.).squares();
        let corner = Rect::square(Point::new(0.185, 0.185), CONT_SIZE);
        let hits = squares
            .iter()
            .filter(|s| corner.abs_diff_eq(*s, 1e-9))
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn contact_count_for_reference_ring() {
        // Columns: w - 0.53 = 1.47 fits 4 pitches (5 contacts each).
        // Rows: l - 0.53 = 2.47 fits 7 pitches (8 contacts each).
        // The 4 corners are shared.
        let squares = ring(3., 2.).squares();
        assert_eq!(squares.len(), 2 * 5 + 2 * 8 - 4);
    }
}
