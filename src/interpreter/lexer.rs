use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `function`
    #[token("function")]
    Function,
    /// `return`
    #[token("return")]
    Return,
    /// `print`
    #[token("print")]
    Print,
    /// Identifier tokens; variable or function names such as `x` or `total`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,

    /// Line breaks; kept as tokens so the line builder can split on them.
    #[token("\n", |lex| lex.extras.line += 1)]
    Newline,
    /// Tabs and spaces.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the token slice is not a valid integer.
fn parse_integer(lex: &mut logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::If => write!(f, "if"),
            Self::Else => write!(f, "else"),
            Self::While => write!(f, "while"),
            Self::Function => write!(f, "function"),
            Self::Return => write!(f, "return"),
            Self::Print => write!(f, "print"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Comma => write!(f, ","),
            Self::Equals => write!(f, "="),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::EqualEqual => write!(f, "=="),
            Self::BangEqual => write!(f, "!="),
            Self::LessEqual => write!(f, "<="),
            Self::GreaterEqual => write!(f, ">="),
            Self::Less => write!(f, "<"),
            Self::Greater => write!(f, ">"),
            Self::AndAnd => write!(f, "&&"),
            Self::OrOr => write!(f, "||"),
            Self::Newline => write!(f, "\\n"),
            Self::Ignored => Ok(()),
        }
    }
}

/// One logical line: the parser's unit of addressing.
///
/// A logical line holds the whitespace-delimited tokens of exactly one
/// statement, control header, or brace. Braces always occupy a line of their
/// own, and blank lines never become logical lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// The tokens making up the statement.
    pub tokens: Vec<Token>,
    /// The 1-based physical source line the statement started on.
    pub number: usize,
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, token) in self.tokens.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Tokenizes source text into the sequence of logical lines the parser
/// consumes.
///
/// Normalization happens while the token stream is grouped:
/// - `{` and `}` terminate the current line and become lines of their own;
/// - `(`, `)` and `,` are standalone tokens by construction;
/// - runs of horizontal whitespace vanish inside the lexer;
/// - lines left without tokens produce no logical line.
///
/// Tokenizing is a fixed point: rendering the returned lines (one per text
/// line, tokens separated by single spaces) and tokenizing again yields the
/// same token sequences.
///
/// # Errors
/// Returns [`ParseError::UnrecognizedToken`] for any text the lexer cannot
/// match, including integer literals too large for an `i64`.
///
/// # Example
/// ```
/// use curly::interpreter::lexer::tokenize;
///
/// let lines = tokenize("x = 1\nif ( x == 1 ) { print ( x ) }").unwrap();
///
/// let rendered: Vec<String> = lines.iter().map(ToString::to_string).collect();
/// assert_eq!(rendered,
///            vec!["x = 1", "if ( x == 1 )", "{", "print ( x )", "}"]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Line>, ParseError> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    let mut lines = Vec::new();
    let mut current = Vec::new();
    let mut current_number = 1;

    while let Some(token) = lexer.next() {
        let Ok(token) = token else {
            return Err(ParseError::UnrecognizedToken { token: lexer.slice().to_string(),
                                                       line:  lexer.extras.line, });
        };

        match token {
            Token::Newline => flush(&mut lines, &mut current, current_number),
            Token::LBrace | Token::RBrace => {
                flush(&mut lines, &mut current, current_number);
                lines.push(Line { tokens: vec![token],
                                  number: lexer.extras.line, });
            },
            other => {
                if current.is_empty() {
                    current_number = lexer.extras.line;
                }
                current.push(other);
            },
        }
    }
    flush(&mut lines, &mut current, current_number);

    Ok(lines)
}

fn flush(lines: &mut Vec<Line>, tokens: &mut Vec<Token>, number: usize) {
    if !tokens.is_empty() {
        lines.push(Line { tokens: std::mem::take(tokens),
                          number });
    }
}
