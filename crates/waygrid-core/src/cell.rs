//! The [`Cell`] type — a single grid position with search bookkeeping.

use crate::coord::Coord;

/// Sentinel cost meaning "not yet discovered" (the +∞ default).
pub const UNREACHABLE: i32 = i32::MAX;

/// Logical search state of a cell, reported through progress callbacks.
///
/// Purely observational: the search itself never branches on it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Not yet discovered by the current run.
    #[default]
    Unvisited,
    /// Discovered and queued for expansion (open set).
    Frontier,
    /// Fully expanded (closed set).
    Visited,
    /// The run's start cell.
    Start,
    /// The run's end cell.
    End,
    /// Part of the reconstructed shortest path.
    Path,
}

/// A single grid position.
///
/// `(row, column)` is the cell's identity and never changes after
/// construction. The barrier flag persists across search runs; the
/// remaining fields are per-run bookkeeping reset by
/// [`Grid::reset_all`](crate::Grid::reset_all).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    /// Whether the cell is excluded from adjacency.
    pub is_barrier: bool,
    /// Best known cost from the start (only ever lowered within a run).
    pub g_score: i32,
    /// `g_score` plus the heuristic estimate to the end.
    pub f_score: i32,
    /// The cell this one was best reached from, set on strict improvement.
    pub predecessor: Option<Coord>,
    /// Reportable state for progress consumers.
    pub state: CellState,
}

impl Cell {
    pub(crate) fn new(coord: Coord) -> Self {
        Self {
            coord,
            is_barrier: false,
            g_score: UNREACHABLE,
            f_score: UNREACHABLE,
            predecessor: None,
            state: CellState::Unvisited,
        }
    }

    /// The cell's position.
    #[inline]
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    /// Return the search fields to their initial values, keeping the
    /// barrier flag.
    pub(crate) fn reset_search(&mut self) {
        self.g_score = UNREACHABLE;
        self.f_score = UNREACHABLE;
        self.predecessor = None;
        self.state = CellState::Unvisited;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_starts_undiscovered() {
        let c = Cell::new(Coord::new(1, 2));
        assert_eq!(c.coord(), Coord::new(1, 2));
        assert!(!c.is_barrier);
        assert_eq!(c.g_score, UNREACHABLE);
        assert_eq!(c.f_score, UNREACHABLE);
        assert_eq!(c.predecessor, None);
        assert_eq!(c.state, CellState::Unvisited);
    }

    #[test]
    fn reset_search_keeps_barrier() {
        let mut c = Cell::new(Coord::ZERO);
        c.is_barrier = true;
        c.g_score = 3;
        c.f_score = 7;
        c.predecessor = Some(Coord::new(0, 1));
        c.state = CellState::Visited;

        c.reset_search();
        assert!(c.is_barrier);
        assert_eq!(c.g_score, UNREACHABLE);
        assert_eq!(c.f_score, UNREACHABLE);
        assert_eq!(c.predecessor, None);
        assert_eq!(c.state, CellState::Unvisited);
    }
}
