mod config;

use std::fs;
use std::process;
use std::thread;

use log::info;

use sat_core::{dimacs, dp, FormulaStore, Outcome};

fn main() {
    env_logger::init();
    let config = config::parse_args();

    let text = fs::read_to_string(&config.input).unwrap_or_else(|e| {
        eprintln!("cannot read '{}': {}", config.input, e);
        process::exit(2);
    });

    let mut store = FormulaStore::load(&text).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(2);
    });

    info!(
        "loaded {} variables, {} clauses from '{}'",
        store.num_variables(),
        store.num_clauses(),
        config.input
    );

    // The recursive search can run as deep as there are variables; run it
    // on a dedicated thread with a stack large enough for full-size
    // instances instead of rewriting it as an explicit work stack.
    let outcome = thread::Builder::new()
        .name("sat-search".to_string())
        .stack_size(config.stack_size_bytes)
        .spawn(move || dp(&mut store).map(|outcome| (outcome, store)))
        .expect("failed to spawn search thread")
        .join()
        .expect("search thread panicked");

    match outcome {
        Ok((Outcome::Sat, store)) => {
            println!("SAT");
            print!("{}", dimacs::format_assignment(store.assignment()));
            if config.return_code {
                process::exit(0);
            }
        }
        Ok((Outcome::Unsat, _)) => {
            println!("UNSAT");
            if config.return_code {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    }
}
