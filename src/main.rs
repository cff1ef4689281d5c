use std::{fs, io, path::PathBuf, process};

use clap::Parser;
use curly::run_source;

/// curly is a tree-walking interpreter for a small curly-brace language of
/// integers, variables, functions, conditionals and loops.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the source file to run.
    file: PathBuf,
}

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(&args.file).unwrap_or_else(|_| {
                                                   eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                             args.file.display());
                                                   process::exit(1);
                                               });

    let mut stdout = io::stdout();
    if let Err(e) = run_source(&source, &mut stdout) {
        eprintln!("{e}");
        process::exit(1);
    }
}
