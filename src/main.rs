use std::fs;

use clap::Parser;
use coutlet::{Interpreter, interpreter::outcome::Outcome};

/// coutlet is a line-oriented interpreter for a tiny arithmetic teaching
/// language with variables and a C++-style `cout <<` print statement.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells coutlet to look at a file instead of inline source.
    #[arg(short, long)]
    file: bool,

    /// Echoes the numeric result of bare expression statements as well.
    #[arg(short, long)]
    echo_results: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut interpreter = Interpreter::new();
    let mut printed = Vec::new();

    for line in script.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match interpreter.interpret(line) {
            Ok(outcomes) => {
                for outcome in outcomes {
                    match outcome {
                        Outcome::Printed(value) => printed.push(value),
                        Outcome::Computed(value) => {
                            if args.echo_results {
                                println!("{value}");
                            }
                        },
                        Outcome::Errored(message) => eprintln!("Error for '{line}': {message}"),
                    }
                }
            },
            Err(error) => eprintln!("Error for '{line}': {error}"),
        }
    }

    // Printed values are grouped after all per-line diagnostics.
    for value in printed {
        println!("{value}");
    }
}
