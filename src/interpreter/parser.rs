/// Core parsing logic.
///
/// Holds the line cursor, the statement dispatcher, and the `parse` entry
/// point that turns a program's logical lines into one syntax tree.
pub mod core;

/// Block parsing.
///
/// Matches braces by depth counting and parses braced bodies, `if`/`else`,
/// `while`, and function definitions.
pub mod block;

/// Statement parsing.
///
/// Parses assignments, `print`, `return`, lone calls, and the value spans
/// they share.
pub mod statement;

/// Function signature extraction.
///
/// Pulls a function's name and its input tokens out of a definition header
/// or a call site.
pub mod signature;
