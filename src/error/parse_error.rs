#[derive(Debug)]
/// Represents all errors that can occur during tokenization or parsing.
pub enum ParseError {
    /// The lexer found text it could not turn into a token.
    UnrecognizedToken {
        /// The offending text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A line did not match any known statement form.
    UnknownStatement {
        /// The first token of the line.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An operator token was expected but not recognized.
    UnknownOperator {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A value span was not a single operand, a call, or `operand operator
    /// operand`.
    MalformedExpression {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A statement required a value but its value span was empty.
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An identifier was expected but another token was found.
    ExpectedIdentifier {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A literal or identifier was expected but another token was found.
    ExpectedOperand {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An opening parenthesis `(` was expected but not found.
    ExpectedOpeningParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An opening brace `{` was expected but not found.
    ExpectedOpeningBrace {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An opening brace `{` has no matching closing brace.
    UnmatchedBrace {
        /// The source line of the opening brace.
        line: usize,
    },
    /// An `if` or `while` header was not of the form `( left op right )`.
    MalformedCondition {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function was defined twice.
    FunctionRedefined {
        /// The name of the function.
        name: String,
        /// The source line of the second definition.
        line: usize,
    },
    /// The program ended where more lines were required.
    UnexpectedEndOfInput {
        /// The source line where input ran out.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedToken { token, line } => {
                write!(f, "Error on line {line}: Unrecognized token: {token}.")
            },

            Self::UnknownStatement { token, line } => write!(f,
                                                             "Error on line {line}: Unknown statement starting with '{token}'."),

            Self::UnknownOperator { token, line } => {
                write!(f, "Error on line {line}: Unknown operator: {token}.")
            },

            Self::MalformedExpression { line } => write!(f,
                                                         "Error on line {line}: Malformed expression. Expected a single operand, a function call, or 'operand operator operand'."),

            Self::MissingValue { line } => write!(f, "Error on line {line}: Expected a value."),

            Self::ExpectedIdentifier { token, line } => write!(f,
                                                               "Error on line {line}: Expected identifier, found '{token}'."),

            Self::ExpectedOperand { token, line } => write!(f,
                                                            "Error on line {line}: Expected a literal or identifier, found '{token}'."),

            Self::ExpectedOpeningParen { line } => write!(f,
                                                          "Error on line {line}: Expected opening parenthesis '(' but none found."),

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedOpeningBrace { line } => write!(f,
                                                          "Error on line {line}: Expected a block opening with '{{'."),

            Self::UnmatchedBrace { line } => {
                write!(f, "Error on line {line}: No closing brace found.")
            },

            Self::MalformedCondition { line } => write!(f,
                                                        "Error on line {line}: Malformed condition. Expected '( left operator right )'."),

            Self::FunctionRedefined { name, line } => write!(f,
                                                             "Error on line {line}: Function '{name}' is already defined."),

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
