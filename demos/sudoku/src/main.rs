use std::fs;
use std::process;
use std::thread;

use clap::{App, Arg};
use log::info;

use sat_core::{dp, FormulaStore, Outcome};
use sudoku_demo::encode;
use sudoku_demo::grid::Grid;

const SEARCH_STACK_SIZE_BYTES: usize = 256 * 1024 * 1024;

fn main() {
    env_logger::init();

    let matches = App::new("sudoku-demo")
        .version("1.0")
        .author("Alex&Korbi&Radek inc.")
        .about("Solves a Sudoku puzzle by reduction to SAT")
        .arg(
            Arg::with_name("input")
                .help("Path to a 9-line puzzle file ('.' or '0' for blanks)")
                .required(true)
                .index(1),
        )
        .get_matches();

    let path = matches.value_of("input").unwrap();
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("cannot read '{}': {}", path, e);
        process::exit(2);
    });

    let grid = Grid::parse(&text).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(2);
    });

    let givens = grid.givens();
    info!("loaded puzzle with {} givens", givens.len());
    let db = encode::build(&givens);
    let mut store = FormulaStore::new(db);

    let outcome = thread::Builder::new()
        .name("sudoku-search".to_string())
        .stack_size(SEARCH_STACK_SIZE_BYTES)
        .spawn(move || dp(&mut store).map(|outcome| (outcome, store)))
        .expect("failed to spawn search thread")
        .join()
        .expect("search thread panicked");

    match outcome {
        Ok((Outcome::Sat, store)) => {
            let solved = Grid::from_assignment(store.assignment());
            print!("{}", solved);
        }
        Ok((Outcome::Unsat, _)) => {
            println!("UNSAT");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    }
}
