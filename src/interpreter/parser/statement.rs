use crate::{
    ast::{BinaryOperator, Node, Operand},
    error::ParseError,
    interpreter::{
        lexer::{Line, Token},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses an assignment statement of the form `name = <value>`.
    ///
    /// The value span runs from the token after `=` to the end of the line.
    pub(in crate::interpreter::parser) fn parse_assignment(&mut self) -> ParseResult<Node> {
        let line = self.current_line();

        let name = match line.tokens.first() {
            Some(Token::Identifier(name)) => name.clone(),
            Some(token) => {
                return Err(ParseError::ExpectedIdentifier { token: token.to_string(),
                                                            line:  line.number, });
            },
            None => {
                return Err(ParseError::ExpectedIdentifier { token: String::new(),
                                                            line:  line.number, });
            },
        };

        let value = self.parse_value(line, 2, line.tokens.len() - 1)?;
        self.cursor += 1;

        Ok(Node::Assignment { name,
                              value: Box::new(value) })
    }

    /// Parses a print statement of the form `print ( <value> )`.
    ///
    /// The value span runs from the token after `(` up to the first `)` in
    /// the line.
    pub(in crate::interpreter::parser) fn parse_print(&mut self) -> ParseResult<Node> {
        let line = self.current_line();

        match line.tokens.get(1) {
            Some(Token::LParen) => {},
            _ => return Err(ParseError::ExpectedOpeningParen { line: line.number }),
        }
        let closing = line.tokens
                          .iter()
                          .position(|token| *token == Token::RParen)
                          .ok_or(ParseError::ExpectedClosingParen { line: line.number })?;

        let value = self.parse_value(line, 2, closing - 1)?;
        self.cursor += 1;

        Ok(Node::Print { value: Box::new(value),
                         line:  line.number, })
    }

    /// Parses a return statement of the form `return <value>`.
    pub(in crate::interpreter::parser) fn parse_return(&mut self) -> ParseResult<Node> {
        let line = self.current_line();

        let value = self.parse_value(line, 1, line.tokens.len() - 1)?;
        self.cursor += 1;

        Ok(Node::Return { value: Box::new(value) })
    }

    /// Parses a line that is nothing but a function call.
    pub(in crate::interpreter::parser) fn parse_lone_call(&mut self) -> ParseResult<Node> {
        let line = self.current_line();

        let node = self.parse_call(line)?;
        self.cursor += 1;

        Ok(node)
    }

    /// Parses the value span `start..=end` of a line.
    ///
    /// Classification follows the span shape: exactly one token is an
    /// operand; a span opening with a known function name is a call; any
    /// other span must be exactly `operand operator operand`.
    ///
    /// # Errors
    /// - [`ParseError::MissingValue`] for an empty span.
    /// - [`ParseError::MalformedExpression`] when a binary span is not
    ///   exactly three tokens.
    /// - [`ParseError::UnknownOperator`] for an unrecognized operator token.
    pub(in crate::interpreter::parser) fn parse_value(&self,
                                                      line: &Line,
                                                      start: usize,
                                                      end: usize)
                                                      -> ParseResult<Node> {
        if start > end || end >= line.tokens.len() {
            return Err(ParseError::MissingValue { line: line.number });
        }

        let length = end - start + 1;
        if length == 1 {
            return parse_operand(&line.tokens[start], line.number);
        }

        if let Token::Identifier(name) = &line.tokens[start]
           && self.functions.contains_key(name)
        {
            return self.parse_call(line);
        }

        if length != 3 {
            return Err(ParseError::MalformedExpression { line: line.number });
        }
        parse_binary_operation(&line.tokens[start],
                               &line.tokens[start + 1],
                               &line.tokens[start + 2],
                               line.number)
    }

    /// Parses a function call anywhere in a line into a call node holding
    /// the callee name and one operand node per argument.
    ///
    /// The body is not resolved here; the evaluator looks the name up in the
    /// function table when the call runs.
    pub(in crate::interpreter::parser) fn parse_call(&self, line: &Line) -> ParseResult<Node> {
        let signature = self.call_signature(line)?;

        let mut arguments = Vec::with_capacity(signature.inputs.len());
        for token in &signature.inputs {
            arguments.push(parse_operand(token, line.number)?);
        }

        Ok(Node::FunctionCall { name: signature.name,
                                arguments,
                                line: line.number, })
    }
}

/// Parses a single operand token: an integer literal or an identifier.
pub(in crate::interpreter::parser) fn parse_operand(token: &Token,
                                                    number: usize)
                                                    -> ParseResult<Node> {
    match token {
        Token::Integer(value) => {
            Ok(Node::Operand { operand: Operand::Literal(*value),
                               line:    number, })
        },
        Token::Identifier(name) => {
            Ok(Node::Operand { operand: Operand::Identifier(name.clone()),
                               line:    number, })
        },
        other => {
            Err(ParseError::ExpectedOperand { token: other.to_string(),
                                              line:  number, })
        },
    }
}

/// Parses `left op right` into a binary operation node.
pub(in crate::interpreter::parser) fn parse_binary_operation(left: &Token,
                                                             op: &Token,
                                                             right: &Token,
                                                             number: usize)
                                                             -> ParseResult<Node> {
    let operator =
        binary_operator(op).ok_or_else(|| ParseError::UnknownOperator { token: op.to_string(),
                                                                        line:  number, })?;

    Ok(Node::BinaryOp { op:    operator,
                        left:  Box::new(parse_operand(left, number)?),
                        right: Box::new(parse_operand(right, number)?),
                        line:  number, })
}

/// Maps an operator token to its [`BinaryOperator`], or `None` for tokens
/// that are not operators.
const fn binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::AndAnd => Some(BinaryOperator::And),
        Token::OrOr => Some(BinaryOperator::Or),
        _ => None,
    }
}
