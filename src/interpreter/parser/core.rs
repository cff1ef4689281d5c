use std::collections::HashMap;

use crate::{
    ast::{FunctionDef, Node},
    error::ParseError,
    interpreter::lexer::{Line, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The statement forms a line can open with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatementKind {
    Assignment,
    IfElse,
    Return,
    Print,
    FunctionDefinition,
    While,
    FunctionCall,
}

/// A line-indexed recursive-descent parser.
///
/// The parser addresses the program by logical-line index: a mutable cursor
/// advances as each statement parser consumes its lines, and block parsers
/// compute their end line up front by brace matching. The function table is
/// populated as definitions are parsed and consulted to recognize call
/// syntax, which is why a function must be defined before the first line
/// that calls it.
pub struct Parser<'a> {
    pub(in crate::interpreter::parser) lines:     &'a [Line],
    pub(in crate::interpreter::parser) cursor:    usize,
    pub(in crate::interpreter::parser) functions: HashMap<String, FunctionDef>,
}

/// Parses a full program into one root node and the table of functions it
/// defined.
///
/// The root is a single node when the program holds exactly one statement
/// and a statement sequence otherwise; an empty program yields an empty
/// node.
///
/// # Errors
/// Returns a [`ParseError`] for unknown statement forms, malformed
/// expressions or conditions, unbalanced braces, missing punctuation, and
/// function redefinitions.
///
/// # Example
/// ```
/// use curly::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let lines = tokenize("x = 1\nprint ( x )").unwrap();
/// let (root, functions) = parse(&lines).unwrap();
///
/// assert!(functions.is_empty());
/// assert!(matches!(root, curly::ast::Node::Sequence { .. }));
/// ```
pub fn parse(lines: &[Line]) -> ParseResult<(Node, HashMap<String, FunctionDef>)> {
    let mut parser = Parser { lines,
                              cursor: 0,
                              functions: HashMap::new() };

    let root = if lines.is_empty() {
        Node::Empty
    } else {
        parser.parse_span(lines.len() - 1)?
    };

    Ok((root, parser.functions))
}

impl<'a> Parser<'a> {
    /// Parses statements until the cursor moves past `end` (inclusive).
    ///
    /// A span holding exactly one statement yields that statement's node
    /// directly; anything else yields a sequence node.
    pub(in crate::interpreter::parser) fn parse_span(&mut self, end: usize) -> ParseResult<Node> {
        let mut statements = Vec::new();
        while self.cursor <= end {
            statements.push(self.parse_statement()?);
        }

        if statements.len() == 1 {
            Ok(statements.remove(0))
        } else {
            Ok(Node::Sequence { statements })
        }
    }

    /// Dispatches on the current line's leading tokens and parses one
    /// statement.
    fn parse_statement(&mut self) -> ParseResult<Node> {
        match self.statement_kind()? {
            StatementKind::Assignment => self.parse_assignment(),
            StatementKind::IfElse => self.parse_if_else(),
            StatementKind::Return => self.parse_return(),
            StatementKind::Print => self.parse_print(),
            StatementKind::FunctionDefinition => self.parse_function_definition(),
            StatementKind::While => self.parse_while(),
            StatementKind::FunctionCall => self.parse_lone_call(),
        }
    }

    /// Classifies the current line: a second token `=` means assignment, a
    /// leading keyword selects its statement, a leading known function name
    /// is a lone call, and anything else is an unknown statement.
    fn statement_kind(&self) -> ParseResult<StatementKind> {
        let line = self.current_line();
        let tokens = &line.tokens;

        if tokens.len() > 1 && tokens[1] == Token::Equals {
            return Ok(StatementKind::Assignment);
        }

        match tokens.first() {
            Some(Token::If) => Ok(StatementKind::IfElse),
            Some(Token::Return) => Ok(StatementKind::Return),
            Some(Token::Print) => Ok(StatementKind::Print),
            Some(Token::Function) => Ok(StatementKind::FunctionDefinition),
            Some(Token::While) => Ok(StatementKind::While),
            Some(Token::Identifier(name)) if self.functions.contains_key(name) => {
                Ok(StatementKind::FunctionCall)
            },
            Some(token) => {
                Err(ParseError::UnknownStatement { token: token.to_string(),
                                                   line:  line.number, })
            },
            None => {
                Err(ParseError::UnknownStatement { token: String::new(),
                                                   line:  line.number, })
            },
        }
    }

    /// The line under the cursor.
    ///
    /// Callers guarantee the cursor is in bounds: `parse_span` only runs the
    /// cursor up to its end line, and block parsers check for input running
    /// out before descending.
    pub(in crate::interpreter::parser) fn current_line(&self) -> &'a Line {
        &self.lines[self.cursor]
    }

    /// The source line number of the last logical line, for end-of-input
    /// diagnostics.
    pub(in crate::interpreter::parser) fn last_line_number(&self) -> usize {
        self.lines.last().map_or(0, |line| line.number)
    }
}
