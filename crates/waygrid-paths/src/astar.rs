//! A* shortest-path search over a barrier [`Grid`].

use waygrid_core::{CellState, Coord, Grid};

use crate::distance::manhattan;
use crate::error::SearchError;
use crate::frontier::PriorityFrontier;
use crate::reconstruct::reconstruct;

/// Engine phase over a single run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchPhase {
    /// No run started yet.
    #[default]
    Idle,
    /// The search loop is executing.
    Running,
    /// The last run reached the end cell.
    Succeeded,
    /// The last run exhausted the frontier without reaching the end.
    Failed,
    /// The last run was stopped by the caller's cancellation check.
    Cancelled,
}

/// Result of a completed run. All three variants are ordinary outcomes,
/// not errors.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// The shortest path, start first, end last (cell count = cost + 1).
    PathFound(Vec<Coord>),
    /// The end is unreachable from the start.
    NoPathExists,
    /// The caller requested early termination. The grid keeps its partial
    /// Frontier/Visited marks; reset before reuse.
    Cancelled,
}

/// A* search engine with Manhattan-distance heuristic and unit edge cost.
///
/// The engine owns its open set so repeated runs reuse allocations. One
/// run mutates one grid at a time; the `&mut Grid` receiver enforces
/// exclusive access.
pub struct SearchEngine {
    frontier: PriorityFrontier,
    phase: SearchPhase,
}

impl SearchEngine {
    /// Create a new engine.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frontier: PriorityFrontier::new(),
            phase: SearchPhase::Idle,
        }
    }

    /// The engine's current phase.
    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Run a search with no progress reporting and no cancellation.
    ///
    /// See [`run_with`](Self::run_with).
    pub fn run(
        &mut self,
        grid: &mut Grid,
        start: Coord,
        end: Coord,
    ) -> Result<SearchOutcome, SearchError> {
        self.run_with(grid, start, end, |_, _| {}, || false)
    }

    /// Compute the shortest path from `start` to `end`.
    ///
    /// `on_progress` is invoked synchronously for every cell transition to
    /// [`CellState::Frontier`], [`CellState::Visited`], and
    /// [`CellState::Path`], in exactly the order the loop generates them.
    /// `cancelled` is consulted once per expansion; returning `true` stops
    /// the run promptly with [`SearchOutcome::Cancelled`].
    ///
    /// Endpoint violations (start equals end, out of bounds, or a barrier)
    /// are rejected before any grid state is touched.
    pub fn run_with(
        &mut self,
        grid: &mut Grid,
        start: Coord,
        end: Coord,
        mut on_progress: impl FnMut(Coord, CellState),
        mut cancelled: impl FnMut() -> bool,
    ) -> Result<SearchOutcome, SearchError> {
        validate_endpoints(grid, start, end)?;

        self.phase = SearchPhase::Running;
        self.frontier.clear();
        grid.reset_all();

        if let Some(cell) = grid.at_mut(start) {
            cell.g_score = 0;
            cell.f_score = manhattan(start, end);
            cell.state = CellState::Start;
            self.frontier.push(start, cell.f_score);
        }
        if let Some(cell) = grid.at_mut(end) {
            cell.state = CellState::End;
        }

        let mut expanded: u64 = 0;
        let mut nbuf: Vec<Coord> = Vec::with_capacity(4);

        let outcome = loop {
            if cancelled() {
                self.phase = SearchPhase::Cancelled;
                break SearchOutcome::Cancelled;
            }
            if self.frontier.is_empty() {
                self.phase = SearchPhase::Failed;
                break SearchOutcome::NoPathExists;
            }

            let current = self.frontier.pop_min()?;

            if current == end {
                let path = reconstruct(grid, start, end)?;
                for &c in &path[1..path.len() - 1] {
                    if let Some(cell) = grid.at_mut(c) {
                        cell.state = CellState::Path;
                    }
                    on_progress(c, CellState::Path);
                }
                if let Some(cell) = grid.at_mut(end) {
                    cell.state = CellState::End;
                }
                self.phase = SearchPhase::Succeeded;
                break SearchOutcome::PathFound(path);
            }

            expanded += 1;
            let Some(current_g) = grid.at(current).map(|cell| cell.g_score) else {
                continue;
            };

            nbuf.clear();
            grid.neighbors(current, &mut nbuf);
            for &n in &nbuf {
                let tentative_g = current_g + 1;
                let Some(cell) = grid.at_mut(n) else {
                    continue;
                };
                // Strict improvement only; UNREACHABLE makes first
                // discovery qualify.
                if tentative_g < cell.g_score {
                    cell.predecessor = Some(current);
                    cell.g_score = tentative_g;
                    cell.f_score = tentative_g + manhattan(n, end);
                    if !self.frontier.is_active(n) {
                        self.frontier.push(n, cell.f_score);
                        cell.state = CellState::Frontier;
                        on_progress(n, CellState::Frontier);
                    }
                }
            }

            if current != start {
                if let Some(cell) = grid.at_mut(current) {
                    cell.state = CellState::Visited;
                }
                on_progress(current, CellState::Visited);
            }
        };

        log::debug!(
            "search finished: phase={:?} expanded={expanded} frontier_left={}",
            self.phase,
            self.frontier.len()
        );
        Ok(outcome)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_endpoints(grid: &Grid, start: Coord, end: Coord) -> Result<(), SearchError> {
    if start == end {
        return Err(SearchError::InvalidEndpoint {
            reason: format!("start and end coincide at {start}"),
        });
    }
    for (name, c) in [("start", start), ("end", end)] {
        let Some(cell) = grid.at(c) else {
            return Err(SearchError::InvalidEndpoint {
                reason: format!("{name} {c} is out of bounds"),
            });
        };
        if cell.is_barrier {
            return Err(SearchError::InvalidEndpoint {
                reason: format!("{name} {c} is a barrier"),
            });
        }
    }
    Ok(())
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        let outcome = SearchOutcome::PathFound(vec![Coord::new(0, 0), Coord::new(0, 1)]);
        let json = serde_json::to_string(&outcome).unwrap();
        let back: SearchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }
}
