//! Unit propagation: `decide`/`undo` and the classification they lean on.

use log::trace;

use crate::literal::Literal;
use crate::store::{FormulaStore, Snapshot, VarValue};

enum ClauseState {
    Satisfied,
    Conflict,
    Unit(Literal),
    Open,
}

/// Classifies a clause under the current assignment, scanning
/// left-to-right and short-circuiting the moment a literal is found true.
fn classify(clause: &[Literal], assignment: &[VarValue]) -> ClauseState {
    let mut unassigned: Option<Literal> = None;
    let mut unassigned_count = 0usize;

    for &lit in clause {
        match assignment[lit.var()] {
            VarValue::True if lit.is_positive() => return ClauseState::Satisfied,
            VarValue::False if !lit.is_positive() => return ClauseState::Satisfied,
            VarValue::Unassigned => {
                unassigned_count += 1;
                unassigned = Some(lit);
            }
            _ => {}
        }
    }

    match unassigned_count {
        0 => ClauseState::Conflict,
        1 => ClauseState::Unit(unassigned.expect("counted exactly one unassigned literal")),
        _ => ClauseState::Open,
    }
}

impl FormulaStore {
    /// Pushes a new snapshot, adds `literal` to the pending-unit set, and
    /// runs propagation to a fixed point. After returning, either
    /// `has_conflict()` or `is_empty()` holds, or neither does.
    pub fn decide(&mut self, literal: Literal) {
        trace!("decide {:?} at depth {}", literal, self.depth() + 1);
        self.snapshots.push(Snapshot {
            active_before: self.active.clone(),
            assigned: Vec::new(),
        });
        self.pending.insert(literal);
        self.propagate();
    }

    /// Pops the most recent snapshot, resetting every variable it assigned
    /// back to `Unassigned`, restoring the active-clause set to what it was
    /// just before the matching `decide`, and clearing the conflict flag
    /// and pending-unit set. A no-op if only the base snapshot remains.
    pub fn undo(&mut self) {
        if self.snapshots.len() <= 1 {
            return;
        }
        let snapshot = self.snapshots.pop().expect("checked len > 1 above");
        for var in snapshot.assigned {
            self.assignment[var] = VarValue::Unassigned;
        }
        self.active = snapshot.active_before;
        self.conflict = false;
        self.pending.clear();
        trace!("undo to depth {}", self.depth());
    }

    pub(crate) fn propagate(&mut self) {
        while let Some(&literal) = self.pending.iter().next() {
            self.pending.remove(&literal);

            let var = literal.var();
            match self.assignment[var] {
                VarValue::True if literal.is_positive() => continue,
                VarValue::False if !literal.is_positive() => continue,
                VarValue::True | VarValue::False => {
                    // Already assigned to the opposite value.
                    self.conflict = true;
                    return;
                }
                VarValue::Unassigned => {}
            }

            self.assignment[var] = if literal.is_positive() {
                VarValue::True
            } else {
                VarValue::False
            };
            self.snapshots
                .last_mut()
                .expect("decide always pushes a snapshot first")
                .assigned
                .push(var);

            let mut next_active = Vec::with_capacity(self.active.len());
            for &clause_id in &self.active {
                match classify(self.db.clause(clause_id), &self.assignment) {
                    ClauseState::Satisfied => {}
                    ClauseState::Conflict => {
                        self.conflict = true;
                        return;
                    }
                    ClauseState::Unit(unit_literal) => {
                        if self.pending.contains(&-unit_literal) {
                            self.conflict = true;
                            return;
                        }
                        self.pending.insert(unit_literal);
                        next_active.push(clause_id);
                    }
                    ClauseState::Open => next_active.push(clause_id),
                }
            }
            self.active = next_active;
        }
    }
}
