use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Line, Token},
        parser::core::{ParseResult, Parser},
    },
};

/// A function's name and its raw input tokens, pulled from a definition
/// header or a call site.
///
/// For a definition the inputs are the parameter names; for a call they are
/// the argument tokens. Either way each input is a single literal or
/// identifier token; the language has no nested argument expressions.
pub(in crate::interpreter::parser) struct SignatureDetails {
    pub name:   String,
    pub inputs: Vec<Token>,
}

impl Parser<'_> {
    /// Extracts the signature of a `function` definition header, where the
    /// name is the token after the `function` keyword.
    pub(in crate::interpreter::parser) fn definition_signature(&self,
                                                               line: &Line)
                                                               -> ParseResult<SignatureDetails> {
        let name = match line.tokens.get(1) {
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

        let inputs = signature_inputs(line, 1)?;
        Ok(SignatureDetails { name, inputs })
    }

    /// Extracts the signature of a call site: the name is the first token in
    /// the line naming a known function, found by a linear scan from the
    /// start of the line.
    pub(in crate::interpreter::parser) fn call_signature(&self,
                                                         line: &Line)
                                                         -> ParseResult<SignatureDetails> {
        let name_index = line.tokens.iter().position(|token| {
                                                match token {
                                                    Token::Identifier(name) => {
                                                        self.functions.contains_key(name)
                                                    },
                                                    _ => false,
                                                }
                                            });

        let Some(name_index) = name_index else {
            return Err(ParseError::UnknownStatement { token: line.tokens
                                                                 .first()
                                                                 .map(ToString::to_string)
                                                                 .unwrap_or_default(),
                                                      line:  line.number, });
        };
        let Token::Identifier(name) = &line.tokens[name_index] else {
            unreachable!("position matched an identifier")
        };

        let inputs = signature_inputs(line, name_index)?;
        Ok(SignatureDetails { name: name.clone(),
                              inputs })
    }
}

/// Collects the input tokens between the parenthesis following `name_index`
/// and the next `)`, skipping commas.
fn signature_inputs(line: &Line, name_index: usize) -> ParseResult<Vec<Token>> {
    match line.tokens.get(name_index + 1) {
        Some(Token::LParen) => {},
        _ => return Err(ParseError::ExpectedOpeningParen { line: line.number }),
    }

    let mut inputs = Vec::new();
    for token in &line.tokens[name_index + 2..] {
        match token {
            Token::RParen => return Ok(inputs),
            Token::Comma => {},
            other => inputs.push(other.clone()),
        }
    }

    Err(ParseError::ExpectedClosingParen { line: line.number })
}
