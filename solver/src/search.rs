//! Recursive DPLL search driver: decide, propagate, backtrack.

use log::debug;

use crate::error::SolveError;
use crate::heuristic::JeroslowWang;
use crate::store::FormulaStore;

/// The outcome of deciding a formula. `Unsat` is a plain value, not an
/// error — running out of decisions with no satisfying assignment is an
/// ordinary, expected result.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Sat,
    Unsat,
}

/// Decides `store` via DPLL: unit propagation is handled entirely inside
/// `decide`; this function only chooses a branch literal, recurses on it,
/// and backtracks to try its negation on failure.
///
/// The core is a pure decision procedure over the CNF given at
/// construction: no clause learning, no restarts, no watched literals.
pub fn dp(store: &mut FormulaStore) -> Result<Outcome, SolveError> {
    if store.is_empty() {
        return Ok(Outcome::Sat);
    }
    if store.has_conflict() {
        return Ok(Outcome::Unsat);
    }

    let literal = JeroslowWang::pick_literal(store)?;

    store.decide(literal);
    if dp(store)? == Outcome::Sat {
        return Ok(Outcome::Sat);
    }
    store.undo();

    store.decide(-literal);
    let outcome = dp(store)?;
    if outcome == Outcome::Sat {
        return Ok(Outcome::Sat);
    }
    store.undo();

    debug!("unsat at depth {}", store.depth());
    Ok(Outcome::Unsat)
}
