//! End-to-end scenarios exercised as literal DIMACS text, the same way a
//! caller would hand the engine a `.cnf` file.

use sat_core::{dp, FormulaStore, Outcome, VarValue};

fn solve(text: &str) -> (Outcome, FormulaStore) {
    let mut store = FormulaStore::load(text).expect("valid DIMACS input");
    let outcome = dp(&mut store).expect("search never errors on a valid formula");
    (outcome, store)
}

/// A single unit clause is satisfiable by the only valuation consistent
/// with it.
#[test]
fn unit_clause_is_sat() {
    let (outcome, store) = solve("p cnf 1 1\n1 0\n");
    assert_eq!(outcome, Outcome::Sat);
    assert_eq!(store.assignment()[1], VarValue::True);
}

/// Two complementary unit clauses over the same variable are
/// unsatisfiable without any search.
#[test]
fn complementary_unit_clauses_are_unsat() {
    let (outcome, _) = solve("p cnf 1 2\n1 0\n-1 0\n");
    assert_eq!(outcome, Outcome::Unsat);
}

/// A small 3-clause formula with one free variable is satisfiable, and
/// the assignment the engine returns actually satisfies every clause.
#[test]
fn three_clause_formula_is_sat_and_sound() {
    let text = "p cnf 3 3\n1 2 0\n-1 3 0\n-2 -3 0\n";
    let (outcome, store) = solve(text);
    assert_eq!(outcome, Outcome::Sat);

    let value_of = |var: usize| matches!(store.assignment()[var], VarValue::True);
    assert!(value_of(1) || value_of(2));
    assert!(!value_of(1) || value_of(3));
    assert!(!value_of(2) || !value_of(3));
}

/// PHP(3,2): three pigeons into two holes, unsatisfiable by the
/// pigeonhole principle. Each pigeon must occupy at least one hole; no
/// two pigeons may share a hole.
#[test]
fn pigeonhole_three_into_two_is_unsat() {
    // Variables: pigeon p in hole h is var (p - 1) * 2 + h, p in 1..=3, h in 1..=2.
    let text = "\
p cnf 6 9
1 2 0
3 4 0
5 6 0
-1 -3 0
-1 -5 0
-3 -5 0
-2 -4 0
-2 -6 0
-4 -6 0
";
    let (outcome, _) = solve(text);
    assert_eq!(outcome, Outcome::Unsat);
}

/// `dp` is idempotent in the sense that re-running it on an
/// already-decided store (no remaining snapshots to undo, no pending
/// work) reports the same outcome rather than panicking.
#[test]
fn rerunning_dp_on_a_solved_store_is_stable() {
    let (first, mut store) = solve("p cnf 2 2\n1 0\n2 0\n");
    assert_eq!(first, Outcome::Sat);
    let second = dp(&mut store).expect("re-running on an already-solved store does not error");
    assert_eq!(second, Outcome::Sat);
}
