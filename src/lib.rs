//! # curly
//!
//! curly is a tree-walking interpreter for a small curly-brace imperative
//! language with a single data type: signed 64-bit integers. Programs are
//! sequences of assignments, `if`/`else`, `while`, scoped function
//! definitions, `return`, and `print` statements, and every expression is at
//! most one `operand operator operand` step; there is no precedence and no
//! nesting. Source text is normalized into logical lines, parsed once into a
//! syntax tree, and evaluated directly, printing to the output stream as a
//! side effect.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::{error::Error, fs, io::Write, path::Path};

use crate::interpreter::{evaluator::core::Context, lexer, parser};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and related types that represent
/// the syntactic structure of source code as a tree, along with the
/// `Evaluation` result every node produces when it runs.
///
/// # Responsibilities
/// - Defines node types for all language constructs.
/// - Defines the operand and binary-operator vocabularies.
/// - Defines function definitions and the evaluation-result type.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, or evaluating code. Every error carries the source line it came
/// from.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for user feedback.
/// - Integrates with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scoping, and evaluation to
/// provide a complete runtime for the language. It contains the pipeline
/// stages the public entry points wire together.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, environment,
///   evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a source program, writing `print` output to `out`.
///
/// The program is tokenized into logical lines, parsed into one syntax
/// tree (populating the function table along the way), and evaluated once
/// against a fresh environment.
///
/// # Errors
/// Returns the first [`error::ParseError`] or [`error::RuntimeError`]
/// encountered; nothing is evaluated unless the whole program parses.
///
/// # Examples
/// ```
/// use curly::run_source;
///
/// let mut out = Vec::new();
/// run_source("x = 2\ny = 3\nz = x + y\nprint ( z )", &mut out).unwrap();
/// assert_eq!(out, b"5\n");
///
/// // Reading a variable that was never assigned is an error.
/// let mut out = Vec::new();
/// assert!(run_source("print ( missing )", &mut out).is_err());
/// ```
pub fn run_source<W: Write>(source: &str, out: &mut W) -> Result<(), Box<dyn Error>> {
    let lines = lexer::tokenize(source)?;
    let (root, functions) = parser::core::parse(&lines)?;

    let mut context = Context::new(functions, out);
    context.eval(&root)?;

    Ok(())
}

/// Reads a source file and runs it, writing `print` output to `out`.
///
/// # Errors
/// Returns the I/O error if the file cannot be read, or whatever
/// [`run_source`] reports for its contents.
pub fn run_file<W: Write>(path: &Path, out: &mut W) -> Result<(), Box<dyn Error>> {
    let source = fs::read_to_string(path)?;
    run_source(&source, out)
}
