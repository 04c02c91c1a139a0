//! Typed search errors.
//!
//! [`SearchError::InvalidEndpoint`] is a pre-flight contract violation,
//! reported before the loop starts and without touching grid state. The
//! remaining variants are internal invariant violations that a correct
//! engine never surfaces. The ordinary run results — path found, no path,
//! cancelled — are not errors at all; see
//! [`SearchOutcome`](crate::SearchOutcome).

use std::fmt;

/// Error popping from an empty [`PriorityFrontier`](crate::PriorityFrontier).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyFrontierError;

impl fmt::Display for EmptyFrontierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pop_min called on an empty frontier")
    }
}

impl std::error::Error for EmptyFrontierError {}

/// Failures surfaced by [`SearchEngine::run`](crate::SearchEngine::run).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start and end coincide, lie out of bounds, or sit on a barrier.
    InvalidEndpoint { reason: String },
    /// The frontier was popped while empty — an engine logic fault.
    EmptyFrontier,
    /// The predecessor chain did not lead back to the start — a corrupted
    /// chain, never expected in correct operation.
    DisconnectedPath,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoint { reason } => {
                write!(f, "invalid endpoint: {reason}")
            }
            Self::EmptyFrontier => fmt::Display::fmt(&EmptyFrontierError, f),
            Self::DisconnectedPath => {
                write!(f, "predecessor chain does not terminate at the start")
            }
        }
    }
}

impl std::error::Error for SearchError {}

impl From<EmptyFrontierError> for SearchError {
    fn from(_: EmptyFrontierError) -> Self {
        Self::EmptyFrontier
    }
}
