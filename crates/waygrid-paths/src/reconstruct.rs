//! Predecessor-chain walking.

use waygrid_core::{Coord, Grid};

use crate::error::SearchError;

/// Walk the predecessor chain recorded during a search from `end` back to
/// `start`, returning the full inclusive path: start first, end last.
///
/// The walk is bounded by `rows²` steps. Exceeding the bound, or reaching
/// a cell without a predecessor before arriving at `start`, indicates a
/// corrupted chain and yields [`SearchError::DisconnectedPath`].
pub fn reconstruct(grid: &Grid, start: Coord, end: Coord) -> Result<Vec<Coord>, SearchError> {
    let bound = (grid.rows() as usize).pow(2);
    let mut path = vec![end];
    let mut current = end;

    while current != start {
        if path.len() > bound {
            log::warn!("predecessor chain exceeded {bound} steps without reaching {start}");
            return Err(SearchError::DisconnectedPath);
        }
        let Some(pred) = grid.at(current).and_then(|cell| cell.predecessor) else {
            return Err(SearchError::DisconnectedPath);
        };
        path.push(pred);
        current = pred;
    }

    path.reverse();
    Ok(path)
}
