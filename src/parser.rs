use crate::ast::{Node, Program, Token};
use std::fmt;

/// Errors produced while building the source AST.
///
/// Positions are indices into the token sequence. The parser fails fast: it
/// never returns a partial tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Token cannot appear where it was found (stray `)`, missing call
    /// name, literal in callee position)
    UnexpectedToken { token: Token, position: usize },

    /// The token sequence ended inside an open call
    UnexpectedEof { position: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { token, position } => {
                write!(f, "Unexpected token {:?} at position {}", token, position)
            }
            ParseError::UnexpectedEof { position } => {
                write!(f, "Unexpected end of tokens at position {}", position)
            }
        }
    }
}

impl std::error::Error for ParseError {}

static EOF: Token = Token::Eof;

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            position: 0,
        }
    }

    /// The token under the cursor. Running off the end of the sequence is
    /// treated as `Eof`, so sequences without the sentinel also parse.
    fn current(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&EOF)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Parse the whole token sequence into a `Program`.
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();
        while *self.current() != Token::Eof {
            body.push(self.parse_expression()?);
        }
        Ok(Program { body })
    }

    /// Parse one expression: a literal or a parenthesized call.
    fn parse_expression(&mut self) -> Result<Node, ParseError> {
        match self.current() {
            Token::Number(value) => {
                let value = value.clone();
                self.advance();
                Ok(Node::NumberLiteral { value })
            }
            Token::String(value) => {
                let value = value.clone();
                self.advance();
                Ok(Node::StringLiteral { value })
            }
            Token::LParen => {
                self.advance();
                self.parse_call()
            }
            Token::Eof => Err(ParseError::UnexpectedEof {
                position: self.position,
            }),
            // Stray `)` or a bare name outside a call
            token => Err(ParseError::UnexpectedToken {
                token: token.clone(),
                position: self.position,
            }),
        }
    }

    /// Parse a call whose opening paren has already been consumed: the
    /// callable name, then sub-expressions until the closing paren.
    fn parse_call(&mut self) -> Result<Node, ParseError> {
        let name = match self.current() {
            Token::Name(name) => name.clone(),
            Token::Eof => {
                return Err(ParseError::UnexpectedEof {
                    position: self.position,
                });
            }
            token => {
                return Err(ParseError::UnexpectedToken {
                    token: token.clone(),
                    position: self.position,
                });
            }
        };
        self.advance();

        let mut params = Vec::new();
        loop {
            match self.current() {
                Token::RParen => break,
                Token::Eof => {
                    return Err(ParseError::UnexpectedEof {
                        position: self.position,
                    });
                }
                _ => params.push(self.parse_expression()?),
            }
        }
        self.advance(); // Consume closing paren

        Ok(Node::CallExpression { name, params })
    }
}

/// Parse `tokens` into a `Program` in one call.
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    Parser::new(tokens).parse()
}
