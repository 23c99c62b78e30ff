use clap::{App, Arg};

/// Parsed command-line options.
pub struct Config {
    pub input: String,
    pub return_code: bool,
    pub stack_size_bytes: usize,
}

const DEFAULT_STACK_SIZE_BYTES: usize = 512 * 1024 * 1024;

pub fn parse_args() -> Config {
    let matches = App::new("solver-cli")
        .version("1.0")
        .author("Alex&Korbi&Radek inc.")
        .about("Decides a DIMACS CNF file: unit propagation, Jeroslow-Wang branching, DPLL search.")
        .arg(
            Arg::with_name("input")
                .help("Path to a DIMACS CNF file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("return_code")
                .long("return-code")
                .short("r")
                .takes_value(false)
                .help("Exit 0 if satisfiable, 1 if unsatisfiable (useful for scripting)"),
        )
        .arg(
            Arg::with_name("stack_size")
                .long("stack-size")
                .takes_value(true)
                .help("Stack size in bytes for the search thread (default 512 MiB; the recursive \
                       search can run hundreds of frames deep on large instances)"),
        )
        .get_matches();

    Config {
        input: matches.value_of("input").map(String::from).unwrap(),
        return_code: matches.is_present("return_code"),
        stack_size_bytes: matches
            .value_of("stack_size")
            .map(|s| s.parse().expect("--stack-size must be a positive integer"))
            .unwrap_or(DEFAULT_STACK_SIZE_BYTES),
    }
}
