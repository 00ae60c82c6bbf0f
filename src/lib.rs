//! A tiny compiler: parenthesized prefix calls in, C-style calls out.
//!
//!   source text -> Lexer -> Tokens -> Parser -> AST -> Transformer -> new AST -> Renderer -> output text

pub mod ast;
pub mod compiler;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod transform;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{Node, Program, Token};
pub use compiler::{CompileError, compile};
pub use lexer::{LexError, Lexer, lex};
pub use parser::{ParseError, Parser, parse};
pub use render::render;
pub use transform::transform;
