use std::collections::BTreeSet;

use crate::clause::{ClauseDatabase, ClauseId};
use crate::error::SolveError;
use crate::literal::{Literal, VarId};

/// The value of a variable under the current partial assignment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VarValue {
    Unassigned,
    False,
    True,
}

/// The state saved before a decision (and the unit propagation it
/// triggers), so that [`FormulaStore::undo`] can restore it exactly.
pub(crate) struct Snapshot {
    pub(crate) active_before: Vec<ClauseId>,
    pub(crate) assigned: Vec<VarId>,
}

/// Owns the clause database, the current partial assignment, the
/// active-clause set, the snapshot stack and the pending-unit set — every
/// piece of mutable state the propagation engine and search driver need.
///
/// Single-threaded and synchronous: nothing here is safe to share across
/// threads without external locking (see the workspace's host binaries,
/// which run the search on one dedicated thread).
pub struct FormulaStore {
    pub(crate) db: ClauseDatabase,
    pub(crate) assignment: Vec<VarValue>,
    pub(crate) active: Vec<ClauseId>,
    pub(crate) snapshots: Vec<Snapshot>,
    pub(crate) pending: BTreeSet<Literal>,
    pub(crate) conflict: bool,
}

impl FormulaStore {
    /// Builds a store from an already-parsed clause database, with every
    /// variable unassigned and the active-clause set equal to all clause
    /// ids, then seeds the pending-unit set with every unit clause and
    /// drains it via the initial propagation.
    ///
    /// An empty clause in `db` sets the conflict flag immediately, before
    /// any propagation runs — the formula is unsatisfiable without search.
    pub fn new(db: ClauseDatabase) -> FormulaStore {
        let num_variables = db.num_variables();
        let mut conflict = false;
        let mut pending = BTreeSet::new();

        for id in db.clause_ids() {
            let clause = db.clause(id);
            if clause.is_empty() {
                conflict = true;
            } else if clause.len() == 1 {
                pending.insert(clause[0]);
            }
        }

        let active: Vec<ClauseId> = db.clause_ids().collect();

        let mut store = FormulaStore {
            db,
            assignment: vec![VarValue::Unassigned; num_variables + 1],
            active,
            snapshots: vec![Snapshot {
                active_before: Vec::new(),
                assigned: Vec::new(),
            }],
            pending,
            conflict,
        };

        if !store.conflict {
            store.propagate();
        }
        // The base snapshot captures the state *after* initial propagation;
        // undo() never pops it (depth 0 has no decision to undo).
        store.snapshots[0].active_before = store.active.clone();

        store
    }

    /// True iff every clause in the active-clause set has been satisfied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// True iff some active clause is falsified under the current
    /// assignment, or propagation found complementary pending literals.
    #[inline]
    pub fn has_conflict(&self) -> bool {
        self.conflict
    }

    /// Read-only view of the assignment vector, indexed by variable;
    /// index 0 is unused.
    #[inline]
    pub fn assignment(&self) -> &[VarValue] {
        &self.assignment
    }

    #[inline]
    pub fn num_variables(&self) -> usize {
        self.db.num_variables()
    }

    #[inline]
    pub fn num_clauses(&self) -> usize {
        self.db.num_clauses()
    }

    #[inline]
    pub(crate) fn active_clauses(&self) -> &[ClauseId] {
        &self.active
    }

    #[inline]
    pub(crate) fn db(&self) -> &ClauseDatabase {
        &self.db
    }

    /// Current decision depth: the number of decisions above the base
    /// snapshot.
    pub fn depth(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// The current active-clause set, as an id collection. Exposed only
    /// for test assertions; production callers observe the formula
    /// through [`is_empty`](Self::is_empty) and [`has_conflict`](Self::has_conflict) instead.
    #[cfg(any(test, feature = "testing-utils"))]
    pub fn active_clause_ids_for_test(&self) -> std::collections::HashSet<ClauseId> {
        self.active.iter().copied().collect()
    }
}
