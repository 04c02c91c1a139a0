//! The [`Coord`] geometry primitive.

use std::fmt;

/// A 2D grid coordinate. Rows grow down, columns grow right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub column: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, column: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Return a coordinate shifted by (drow, dcolumn).
    #[inline]
    pub const fn shift(self, drow: i32, dcolumn: i32) -> Self {
        Self {
            row: self.row + drow,
            column: self.column + dcolumn,
        }
    }

    /// The four cardinal neighbours, in fixed order: down, up, right, left.
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        [
            Self::new(self.row + 1, self.column),
            Self::new(self.row - 1, self.column),
            Self::new(self.row, self.column + 1),
            Self::new(self.row, self.column - 1),
        ]
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row
            .cmp(&other.row)
            .then(self.column.cmp(&other.column))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_moves_both_axes() {
        let c = Coord::new(2, 3);
        assert_eq!(c.shift(1, 0), Coord::new(3, 3));
        assert_eq!(c.shift(-2, 4), Coord::new(0, 7));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut coords = vec![Coord::new(1, 0), Coord::new(0, 5), Coord::new(1, -1)];
        coords.sort();
        assert_eq!(
            coords,
            vec![Coord::new(0, 5), Coord::new(1, -1), Coord::new(1, 0)]
        );
    }

    #[test]
    fn neighbors_4_order() {
        let n = Coord::new(4, 4).neighbors_4();
        assert_eq!(
            n,
            [
                Coord::new(5, 4),
                Coord::new(3, 4),
                Coord::new(4, 5),
                Coord::new(4, 3),
            ]
        );
    }

    #[test]
    fn display_format() {
        assert_eq!(Coord::new(3, 7).to_string(), "(3, 7)");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coord_round_trip() {
        let c = Coord::new(5, -2);
        let json = serde_json::to_string(&c).unwrap();
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
