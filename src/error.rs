//! Error taxonomy for roster validation and search preconditions.
//!
//! All validation happens up front — in [`crate::problem::BalanceProblem::new`],
//! in the initial-assignment builder, and at annealer entry — so the search
//! loop itself is infallible. Cooperative cancellation is *not* an error: a
//! cancelled run still returns the best assignment found so far (see
//! [`crate::optimizer::AnnealResult::cancelled`]).

use thiserror::Error;

/// Errors raised before any search work is performed.
///
/// Any of these means no usable assignment was produced; callers must not
/// present a partial result in their place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed input data or configuration: zero requested classes, fewer
    /// teachers than classes, duplicate identifiers, non-finite weights, or
    /// an out-of-range annealing parameter.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Fewer than two classes available to a search whose swap and
    /// teacher-swap moves require two distinct classes.
    #[error("degenerate search: {0}")]
    DegenerateSearch(String),
}
