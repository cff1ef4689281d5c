/// The evaluator module executes syntax tree nodes and computes results.
///
/// The evaluator traverses the tree, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages variable state, and
/// writes `print` output. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates syntax tree nodes, performing all supported operations.
/// - Handles variables, functions, and control flow.
/// - Propagates the `return` signal through sequences and loops and absorbs
///   it at call boundaries.
/// - Reports runtime errors such as division by zero or unbound variables.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source and produces logical lines of tokens,
/// each line corresponding to one statement, control header, or brace.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source line
///   numbers.
/// - Normalizes the program: braces on lines of their own, punctuation as
///   standalone tokens, blank lines dropped.
/// - Reports lexical errors for unrecognized input.
pub mod lexer;
/// The parser module builds the abstract syntax tree from logical lines.
///
/// The parser walks the line sequence produced by the lexer with a line
/// cursor and constructs a tree representing the program's statements,
/// registering function definitions in the function table as it goes.
///
/// # Responsibilities
/// - Converts logical lines into structured tree nodes.
/// - Matches braces by depth counting to find block boundaries.
/// - Validates statement shapes, reporting errors with line numbers.
pub mod parser;
/// The environment module stores variables and their scopes.
///
/// The environment keeps a stack of scope frames together with the
/// function-scope boundaries that keep a function body from reaching its
/// caller's variables.
///
/// # Responsibilities
/// - Resolves reads and writes against the visible frames.
/// - Pushes and pops block and function scopes with stack discipline.
pub mod env;
