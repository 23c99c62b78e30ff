//! Brute-force truth-table oracle, used only to check the search driver's
//! completeness on small instances.

use crate::clause::ClauseDatabase;

/// Exhaustively checks every valuation of `db`'s variables and returns the
/// first satisfying one found, if any.
pub fn solve(db: &ClauseDatabase) -> Option<Vec<bool>> {
    let mut valuation = vec![false; db.num_variables()];
    if guess(db, 0, &mut valuation) {
        Some(valuation)
    } else {
        None
    }
}

fn guess(db: &ClauseDatabase, index: usize, valuation: &mut Vec<bool>) -> bool {
    if index == valuation.len() {
        return is_satisfied(db, valuation);
    }
    if guess(db, index + 1, valuation) {
        return true;
    }
    valuation[index] = true;
    let satisfied = guess(db, index + 1, valuation);
    if !satisfied {
        valuation[index] = false;
    }
    satisfied
}

/// True iff every clause in `db` has at least one literal that is true
/// under `valuation` (indexed 0-based, i.e. variable `v` is `valuation[v-1]`).
pub fn is_satisfied(db: &ClauseDatabase, valuation: &[bool]) -> bool {
    db.clauses().all(|clause| {
        clause.iter().any(|lit| {
            let value = valuation[lit.var() - 1];
            value == lit.is_positive()
        })
    })
}
