//! Sudoku-as-SAT: the `(row, col, digit)` encoding and the grid
//! parser/formatter around it. A thin external collaborator over
//! `sat-core` — it owns no solving logic of its own.

pub mod encode;
pub mod grid;
