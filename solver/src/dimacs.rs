//! Loader and exporter for the DIMACS-like CNF wire format described in
//! the core's external interface: `c` comments, a `p cnf V C` header, and
//! clauses of whitespace-separated signed integers terminated by `0`.

use crate::clause::ClauseDatabase;
use crate::error::SolveError;
use crate::literal::Literal;
use crate::store::{FormulaStore, VarValue};

impl FormulaStore {
    /// Parses `text` as DIMACS CNF and builds a formula store with every
    /// variable unassigned, the active-clause set equal to all clauses, and
    /// every unit clause already propagated.
    pub fn load(text: &str) -> Result<FormulaStore, SolveError> {
        let db = parse(text)?;
        Ok(FormulaStore::new(db))
    }
}

fn malformed(line: usize, reason: impl Into<String>) -> SolveError {
    SolveError::MalformedInput {
        line,
        reason: reason.into(),
    }
}

/// Parses a DIMACS CNF buffer into a [`ClauseDatabase`].
///
/// The clause body is tokenized across line boundaries, so a clause may
/// span multiple lines; the "one clause per line" shape described in the
/// wire format is simply the common case. Blank lines and `c`-comment
/// lines are ignored anywhere. The `p cnf V C` header must appear before
/// any clause tokens. Once exactly `C` clauses have been read, any
/// remaining input is ignored.
pub fn parse(text: &str) -> Result<ClauseDatabase, SolveError> {
    let mut num_variables: Option<usize> = None;
    let mut expected_clauses: Option<usize> = None;
    let mut clauses: Vec<Vec<Literal>> = Vec::new();
    let mut current: Vec<Literal> = Vec::new();
    let mut last_line_no = 0;

    'lines: for (line_no, raw_line) in text.lines().enumerate() {
        let line_no = line_no + 1;
        last_line_no = line_no;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('c') {
            continue;
        }

        if line.starts_with('p') {
            if num_variables.is_some() {
                return Err(malformed(line_no, "duplicate 'p cnf' header"));
            }
            let mut tokens = line.split_whitespace();
            let _p = tokens.next();
            if tokens.next() != Some("cnf") {
                return Err(malformed(line_no, "expected 'p cnf <vars> <clauses>'"));
            }
            let vars: usize = tokens
                .next()
                .and_then(|t| t.parse().ok())
                .ok_or_else(|| malformed(line_no, "missing or invalid variable count"))?;
            let count: usize = tokens
                .next()
                .and_then(|t| t.parse().ok())
                .ok_or_else(|| malformed(line_no, "missing or invalid clause count"))?;
            if tokens.next().is_some() {
                return Err(malformed(line_no, "trailing tokens on problem line"));
            }
            num_variables = Some(vars);
            expected_clauses = Some(count);
            continue;
        }

        let vars = num_variables
            .ok_or_else(|| malformed(line_no, "clause appears before 'p cnf' header"))?;

        for token in line.split_whitespace() {
            if token == "-0" {
                return Err(malformed(
                    line_no,
                    "'-0' does not denote a valid literal (variable 0 is never valid)",
                ));
            }

            let value: i64 = token
                .parse()
                .map_err(|_| malformed(line_no, format!("non-integer token '{}'", token)))?;

            if value == 0 {
                clauses.push(std::mem::take(&mut current));
                if clauses.len() == expected_clauses.unwrap_or(usize::MAX) {
                    break 'lines;
                }
            } else {
                let var = value.unsigned_abs() as usize;
                if var == 0 || var > vars {
                    return Err(malformed(
                        line_no,
                        format!("literal {} is outside [-{vars}, {vars}] \\ {{0}}", value),
                    ));
                }
                current.push(Literal::new(value as i32));
            }
        }
    }

    if !current.is_empty() {
        return Err(malformed(last_line_no, "clause is missing its terminating 0"));
    }

    let expected_clauses = expected_clauses
        .ok_or_else(|| malformed(1, "input is missing its 'p cnf <vars> <clauses>' header"))?;

    if clauses.len() != expected_clauses {
        return Err(malformed(
            1,
            format!(
                "header declares {} clauses but {} were parsed",
                expected_clauses,
                clauses.len()
            ),
        ));
    }

    let num_variables = num_variables.unwrap();
    Ok(ClauseDatabase::new(clauses, num_variables))
}

/// Renders the final assignment as `Variable <v> Value <0|1|-1>` lines, one
/// per variable in ascending order, `0` meaning unassigned, `1` true and
/// `-1` false.
pub fn format_assignment(assignment: &[VarValue]) -> String {
    let mut out = String::new();
    for (var, value) in assignment.iter().enumerate().skip(1) {
        let rendered = match value {
            VarValue::Unassigned => 0,
            VarValue::True => 1,
            VarValue::False => -1,
        };
        out.push_str(&format!("Variable {} Value {}\n", var, rendered));
    }
    out
}

/// Serializes a clause database back to DIMACS CNF text, mirroring
/// [`parse`]. Mostly useful for round-tripping in tests and for
/// `demos/sudoku`, which builds clauses directly and only needs text at
/// the one real file boundary.
pub fn to_dimacs(db: &ClauseDatabase) -> String {
    let mut out = format!("p cnf {} {}\n", db.num_variables(), db.num_clauses());
    for clause in db.clauses() {
        for lit in clause {
            out.push_str(&lit.to_i32().to_string());
            out.push(' ');
        }
        out.push_str("0\n");
    }
    out
}
