//! The [`Grid`] type — a square board of [`Cell`]s with barrier flags.
//!
//! The grid exclusively owns its cells and is fixed in size after
//! construction. Adjacency is always computed from the current barrier
//! flags, never cached.

use std::fmt;

use crate::cell::Cell;
use crate::coord::Coord;

/// Error building a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Requested size was zero or negative.
    InvalidSize { rows: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { rows } => {
                write!(f, "grid size must be positive, got {rows}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A square `rows × rows` grid of [`Cell`]s, stored row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new open grid (no barriers) of the given side length.
    pub fn new(rows: i32) -> Result<Self, GridError> {
        if rows <= 0 {
            return Err(GridError::InvalidSize { rows });
        }
        let n = (rows as usize) * (rows as usize);
        let mut cells = Vec::with_capacity(n);
        for row in 0..rows {
            for column in 0..rows {
                cells.push(Cell::new(Coord::new(row, column)));
            }
        }
        Ok(Self { rows, cells })
    }

    /// Side length of the grid.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Whether the coordinate lies within bounds.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.column >= 0 && c.column < self.rows
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some((c.row as usize) * (self.rows as usize) + (c.column as usize))
        } else {
            None
        }
    }

    /// The cell at a coordinate, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<&Cell> {
        self.index(c).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at a coordinate.
    #[inline]
    pub fn at_mut(&mut self, c: Coord) -> Option<&mut Cell> {
        self.index(c).map(move |i| &mut self.cells[i])
    }

    /// Mark a single cell as a barrier. Out-of-bounds coordinates are
    /// ignored.
    pub fn set_barrier(&mut self, c: Coord) {
        if let Some(cell) = self.at_mut(c) {
            cell.is_barrier = true;
        }
    }

    /// Return a single cell to its pristine state: barrier flag cleared and
    /// search fields back to initial values. Other cells are unaffected.
    pub fn clear(&mut self, c: Coord) {
        if let Some(cell) = self.at_mut(c) {
            cell.is_barrier = false;
            cell.reset_search();
        }
    }

    /// Return every cell's search-state fields to their initial values
    /// without altering barrier flags.
    pub fn reset_all(&mut self) {
        for cell in &mut self.cells {
            cell.reset_search();
        }
    }

    /// Full wipe: every cell back to pristine, barriers included.
    pub fn clear_all(&mut self) {
        for cell in &mut self.cells {
            cell.is_barrier = false;
            cell.reset_search();
        }
    }

    /// Append the orthogonally adjacent, in-bounds, non-barrier neighbours
    /// of `c` into `buf`, in fixed order: down, up, right, left.
    ///
    /// The caller clears `buf` before calling.
    pub fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        for n in c.neighbors_4() {
            if self.at(n).is_some_and(|cell| !cell.is_barrier) {
                buf.push(n);
            }
        }
    }

    /// Row-major iterator over every coordinate in the grid.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let rows = self.rows;
        (0..rows).flat_map(move |row| (0..rows).map(move |column| Coord::new(row, column)))
    }

    /// Iterator over the coordinates of all barrier cells, row-major.
    pub fn barriers(&self) -> impl Iterator<Item = Coord> {
        self.cells
            .iter()
            .filter(|cell| cell.is_barrier)
            .map(|cell| cell.coord())
    }
}

// Serialized form: the logical content only (size + barriers). Search
// bookkeeping is transient and rebuilt fresh on deserialize.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    rows: i32,
    barriers: Vec<Coord>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GridRepr {
            rows: self.rows,
            barriers: self.barriers().collect(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = GridRepr::deserialize(deserializer)?;
        let mut grid = Grid::new(repr.rows).map_err(serde::de::Error::custom)?;
        for b in repr.barriers {
            grid.set_barrier(b);
        }
        Ok(grid)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::cell::UNREACHABLE;

    #[test]
    fn grid_round_trip_preserves_barriers_only() {
        let mut grid = Grid::new(6).unwrap();
        grid.set_barrier(Coord::new(2, 3));
        grid.set_barrier(Coord::new(5, 0));
        if let Some(cell) = grid.at_mut(Coord::new(0, 0)) {
            cell.g_score = 0;
        }

        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();

        assert_eq!(back.rows(), 6);
        assert_eq!(
            back.barriers().collect::<Vec<_>>(),
            vec![Coord::new(2, 3), Coord::new(5, 0)]
        );
        // Search bookkeeping is rebuilt fresh, not round-tripped.
        assert_eq!(back.at(Coord::new(0, 0)).unwrap().g_score, UNREACHABLE);
    }

    #[test]
    fn grid_deserialize_rejects_bad_size() {
        let json = r#"{"rows":0,"barriers":[]}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }
}
