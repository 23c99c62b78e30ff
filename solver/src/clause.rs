use crate::literal::Literal;

/// Identifier of a clause in a [`ClauseDatabase`], stable for the lifetime
/// of the database.
pub type ClauseId = usize;

/// Flat, read-only clause storage, built once by [`crate::dimacs::parse`]
/// and never mutated afterwards.
///
/// Duplicate literals within a clause are tolerated. Complementary
/// literals within a clause (`x` and `-x` both present) make the clause
/// trivially satisfied; it is still stored as-is rather than special-cased
/// away, since the propagation engine's classification already treats such
/// a clause as `Satisfied` the moment either literal is assigned.
#[derive(Debug, Clone)]
pub struct ClauseDatabase {
    clauses: Vec<Vec<Literal>>,
    num_variables: usize,
}

impl ClauseDatabase {
    pub fn new(clauses: Vec<Vec<Literal>>, num_variables: usize) -> ClauseDatabase {
        ClauseDatabase {
            clauses,
            num_variables,
        }
    }

    #[inline]
    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    #[inline]
    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    #[inline]
    pub fn clause(&self, id: ClauseId) -> &[Literal] {
        &self.clauses[id]
    }

    pub fn clause_ids(&self) -> impl Iterator<Item = ClauseId> {
        0..self.clauses.len()
    }

    pub fn clauses(&self) -> impl Iterator<Item = &[Literal]> {
        self.clauses.iter().map(Vec::as_slice)
    }
}
