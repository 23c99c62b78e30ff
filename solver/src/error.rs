use thiserror::Error;

/// Errors the core can raise.
///
/// Conflicts discovered during propagation are *not* represented here —
/// they are a first-class formula state observed through
/// [`crate::store::FormulaStore::has_conflict`], not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The loader rejected the input: a header mismatch, a non-integer
    /// token, a literal outside `[-V, V] \ {0}`, or a declared clause count
    /// that disagrees with the number of clauses actually parsed.
    #[error("malformed DIMACS input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// An invariant of the formula store was violated at runtime, e.g.
    /// `undo` was requested with no decision above the base snapshot. This
    /// indicates a bug in the caller (typically the search driver), not a
    /// property of the input formula.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),

    /// The ranking heuristic was invoked with every variable already
    /// assigned. The search driver is expected to check
    /// [`crate::store::FormulaStore::is_empty`] before branching, so this
    /// should never surface in practice.
    #[error("heuristic invoked with no unassigned variable remaining")]
    NoUnassignedVariable,
}
