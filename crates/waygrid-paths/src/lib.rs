//! A* shortest-path search over barrier grids.
//!
//! This crate provides the search layer of the *waygrid* workspace:
//!
//! - **A\*** search ([`SearchEngine::run`]) with Manhattan-distance
//!   heuristic and uniform unit edge cost
//! - A deterministic open set ([`PriorityFrontier`]) that breaks f-score
//!   ties by insertion order, making search traces reproducible
//! - Predecessor-chain path reconstruction ([`reconstruct`])
//!
//! The engine is a pure function of (grid, start, end, cancellation
//! signal): it performs no I/O, timing, or display calls. Visualizing
//! callers observe the run through a per-transition progress callback
//! ([`SearchEngine::run_with`]).

mod astar;
mod distance;
mod error;
mod frontier;
mod reconstruct;

pub use astar::{SearchEngine, SearchOutcome, SearchPhase};
pub use distance::manhattan;
pub use error::{EmptyFrontierError, SearchError};
pub use frontier::PriorityFrontier;
pub use reconstruct::reconstruct;
