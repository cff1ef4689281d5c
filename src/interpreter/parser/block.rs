use crate::{
    ast::{FunctionDef, Node},
    error::ParseError,
    interpreter::{
        lexer::{Line, Token},
        parser::{
            core::{ParseResult, Parser},
            statement::parse_binary_operation,
        },
    },
};

impl Parser<'_> {
    /// Finds the line of the `}` matching the `{` at `opening`.
    ///
    /// The scan walks forward counting nested brace depth, starting at 1;
    /// the line that brings the depth to 0 is the match.
    fn closing_brace_line(&self, opening: usize) -> ParseResult<usize> {
        let mut depth = 1;
        let mut index = opening + 1;

        while index < self.lines.len() {
            match self.lines[index].tokens.first() {
                Some(Token::LBrace) => depth += 1,
                Some(Token::RBrace) => depth -= 1,
                _ => {},
            }
            if depth == 0 {
                return Ok(index);
            }
            index += 1;
        }

        Err(ParseError::UnmatchedBrace { line: self.lines[opening].number })
    }

    /// Parses a braced block with the cursor on its `{` line.
    ///
    /// The span strictly between the braces is parsed recursively, and the
    /// cursor lands on the line after the `}`.
    fn parse_braced_block(&mut self) -> ParseResult<Node> {
        self.expect_block_open()?;

        let opening = self.cursor;
        let closing = self.closing_brace_line(opening)?;

        self.cursor = opening + 1;
        let node = self.parse_span(closing - 1)?;
        self.cursor = closing + 1;

        Ok(node)
    }

    fn expect_block_open(&self) -> ParseResult<()> {
        match self.lines.get(self.cursor) {
            Some(line) if line.tokens.first() == Some(&Token::LBrace) => Ok(()),
            Some(line) => Err(ParseError::ExpectedOpeningBrace { line: line.number }),
            None => Err(ParseError::UnexpectedEndOfInput { line: self.last_line_number() }),
        }
    }

    /// Parses the condition of an `if` or `while` header.
    ///
    /// The header must be exactly `keyword ( left op right )`; the operands
    /// and operator sit at fixed token offsets 2, 3 and 4.
    fn parse_condition(line: &Line) -> ParseResult<Node> {
        let tokens = &line.tokens;
        if tokens.len() != 6 || tokens[1] != Token::LParen || tokens[5] != Token::RParen {
            return Err(ParseError::MalformedCondition { line: line.number });
        }

        parse_binary_operation(&tokens[2], &tokens[3], &tokens[4], line.number)
    }

    /// Parses an `if` header, its braced block, and an optional `else`
    /// block.
    ///
    /// When the line after the if-block is not a lone `else`, the else
    /// branch is an empty node.
    pub(in crate::interpreter::parser) fn parse_if_else(&mut self) -> ParseResult<Node> {
        let condition = Self::parse_condition(self.current_line())?;
        self.cursor += 1;

        let then_block = self.parse_braced_block()?;

        let else_block = match self.lines.get(self.cursor) {
            Some(line) if line.tokens == [Token::Else] => {
                self.cursor += 1;
                self.parse_braced_block()?
            },
            _ => Node::Empty,
        };

        Ok(Node::IfElse { condition:  Box::new(condition),
                          then_block: Box::new(then_block),
                          else_block: Box::new(else_block), })
    }

    /// Parses a `while` header and its braced body.
    pub(in crate::interpreter::parser) fn parse_while(&mut self) -> ParseResult<Node> {
        let condition = Self::parse_condition(self.current_line())?;
        self.cursor += 1;

        let body = self.parse_braced_block()?;

        Ok(Node::While { condition: Box::new(condition),
                         body:      Box::new(body), })
    }

    /// Parses a `function name ( p1 , p2 )` header and its braced body, and
    /// registers the definition in the function table.
    ///
    /// A definition contributes no runtime statement, so the enclosing
    /// sequence receives an empty node.
    pub(in crate::interpreter::parser) fn parse_function_definition(&mut self)
                                                                    -> ParseResult<Node> {
        let line = self.current_line();
        let number = line.number;

        let signature = self.definition_signature(line)?;
        if self.functions.contains_key(&signature.name) {
            return Err(ParseError::FunctionRedefined { name: signature.name,
                                                       line: number, });
        }

        let mut params = Vec::with_capacity(signature.inputs.len());
        for token in signature.inputs {
            match token {
                Token::Identifier(name) => params.push(name),
                other => {
                    return Err(ParseError::ExpectedIdentifier { token: other.to_string(),
                                                                line:  number, });
                },
            }
        }

        self.cursor += 1;
        let body = self.parse_braced_block()?;

        self.functions.insert(signature.name.clone(),
                              FunctionDef { name: signature.name,
                                            params,
                                            body,
                                            line: number, });

        Ok(Node::Empty)
    }
}
