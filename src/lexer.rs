use crate::ast::Token;
use std::fmt;

/// Errors produced while scanning source text.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// Character matches none of the recognized classes
    UnexpectedChar { ch: char, position: usize },

    /// Input ended before a string's closing quote; `position` is the
    /// opening quote
    UnterminatedString { position: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedChar { ch, position } => {
                write!(f, "Unexpected character '{}' at position {}", ch, position)
            }
            LexError::UnterminatedString { position } => {
                write!(
                    f,
                    "Unterminated string: missing closing quote for the string opened at position {}",
                    position
                )
            }
        }
    }
}

impl std::error::Error for LexError {}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_name(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphabetic() {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_number(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_string(&mut self) -> Result<String, LexError> {
        let opening = self.position;
        self.advance(); // Consume opening quote

        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch == '"' {
                self.advance();
                return Ok(result);
            }
            result.push(ch);
            self.advance();
        }

        Err(LexError::UnterminatedString { position: opening })
    }

    /// Read the next token. Returns `Token::Eof` once input is exhausted.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        match self.current_char() {
            None => Ok(Token::Eof),
            Some('(') => {
                self.advance();
                Ok(Token::LParen)
            }
            Some(')') => {
                self.advance();
                Ok(Token::RParen)
            }
            Some('"') => Ok(Token::String(self.read_string()?)),
            Some(ch) if ch.is_ascii_digit() => Ok(Token::Number(self.read_number())),
            Some(ch) if ch.is_alphabetic() => Ok(Token::Name(self.read_name())),
            Some(ch) => Err(LexError::UnexpectedChar {
                ch,
                position: self.position,
            }),
        }
    }

    /// Tokenize the entire input. The last token is always `Eof`.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token == Token::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
        Ok(tokens)
    }
}

/// Tokenize `source` in one call.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

#[test]
fn test_call_tokens() {
    let mut lexer = Lexer::new("(add 1 2)");
    assert_eq!(lexer.next_token().unwrap(), Token::LParen);
    assert_eq!(lexer.next_token().unwrap(), Token::Name("add".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::Number("1".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::Number("2".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::RParen);
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

#[test]
fn test_unexpected_character() {
    let mut lexer = Lexer::new("@");
    assert_eq!(
        lexer.next_token(),
        Err(LexError::UnexpectedChar {
            ch: '@',
            position: 0
        })
    );
}
