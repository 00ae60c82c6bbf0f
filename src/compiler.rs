//! The end-to-end compilation facade.

use crate::lexer::{self, LexError};
use crate::parser::{self, ParseError};
use crate::render::render;
use crate::transform::transform;
use std::fmt;

/// Errors surfaced by [`compile`].
///
/// `compile` does not translate stage errors; it wraps the first failure
/// verbatim and stops.
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    /// Lexer error
    Lex(LexError),
    /// Parser error
    Parse(ParseError),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Lex(e) => write!(f, "Lex error: {}", e),
            CompileError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Lex(e) => Some(e),
            CompileError::Parse(e) => Some(e),
        }
    }
}

impl From<LexError> for CompileError {
    fn from(e: LexError) -> Self {
        CompileError::Lex(e)
    }
}

impl From<ParseError> for CompileError {
    fn from(e: ParseError) -> Self {
        CompileError::Parse(e)
    }
}

/// Compile prefix-call source text into C-style call syntax.
///
/// Composes the four pipeline stages in order - lex, parse, transform,
/// render - short-circuiting on the first failure. Transform and render
/// are total over well-formed trees, so the only failures are lexical and
/// structural.
///
/// # Examples
///
/// ```
/// use prefixc::compile;
///
/// assert_eq!(
///     compile("(add 2 (subtract 4 2))").unwrap(),
///     "add(2, subtract(4, 2));"
/// );
/// ```
pub fn compile(source: &str) -> Result<String, CompileError> {
    let tokens = lexer::lex(source)?;
    let ast = parser::parse(tokens)?;
    let new_ast = transform(&ast);
    Ok(render(&new_ast))
}
