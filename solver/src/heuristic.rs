//! Jeroslow-Wang branching heuristic.

use crate::error::SolveError;
use crate::literal::{Literal, VarId};
use crate::store::{FormulaStore, VarValue};

/// `2^(-k)` for `k` up to 10, the hot path for Sudoku-sized clauses. Larger
/// `k` falls back to `f64::powi`.
const POWERS_OF_TWO_NEG: [f64; 11] = [
    1.0,
    0.5,
    0.25,
    0.125,
    0.0625,
    0.03125,
    0.015625,
    0.0078125,
    0.00390625,
    0.001953125,
    0.0009765625,
];

fn weight(active_literal_count: usize) -> f64 {
    match POWERS_OF_TWO_NEG.get(active_literal_count) {
        Some(&w) => w,
        None => 2f64.powi(-(active_literal_count as i32)),
    }
}

/// Picks the next branch literal by the Jeroslow-Wang rule: for every
/// active clause `C`, each of its unassigned literals accumulates
/// `2^(-k(C))`, where `k(C)` is the number of unassigned literals in `C`.
/// The variable maximizing the sum of its positive and negative scores is
/// chosen; its literal is the positive one unless the negative score
/// strictly exceeds it. Ties break by smallest variable index, then
/// positive polarity.
///
/// Scores are recomputed from scratch on every call in two clean phases —
/// accumulate, then scan for the maximum — rather than folding the running
/// maximum into the accumulation loop, which can miss the true maximum
/// when a later clause still has more to contribute to an already-scanned
/// variable.
pub struct JeroslowWang;

impl JeroslowWang {
    pub fn pick_literal(store: &FormulaStore) -> Result<Literal, SolveError> {
        let num_variables = store.num_variables();
        let mut pos_score = vec![0.0f64; num_variables + 1];
        let mut neg_score = vec![0.0f64; num_variables + 1];

        for &clause_id in store.active_clauses() {
            let clause = store.db().clause(clause_id);
            let unassigned_count = clause
                .iter()
                .filter(|lit| store.assignment()[lit.var()] == VarValue::Unassigned)
                .count();
            let increment = weight(unassigned_count);

            for &lit in clause {
                if store.assignment()[lit.var()] == VarValue::Unassigned {
                    if lit.is_positive() {
                        pos_score[lit.var()] += increment;
                    } else {
                        neg_score[lit.var()] += increment;
                    }
                }
            }
        }

        let mut best: Option<(VarId, f64)> = None;
        for var in 1..=num_variables {
            if store.assignment()[var] != VarValue::Unassigned {
                continue;
            }
            let total = pos_score[var] + neg_score[var];
            best = match best {
                Some((_, best_total)) if total <= best_total => best,
                _ => Some((var, total)),
            };
        }

        let (var, _) = best.ok_or(SolveError::NoUnassignedVariable)?;
        Ok(if pos_score[var] >= neg_score[var] {
            Literal::pos(var)
        } else {
            Literal::neg(var)
        })
    }
}
