//! # prefixc - Token and AST definitions
//!
//! This module defines the data carried between the stages of the compiler
//! pipeline: lexical tokens, the source AST produced by the parser, and the
//! target AST produced by the transformer.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[source]** - The source AST (prefix call shape: name + params)
//! - **[target]** - The target AST (infix call shape: callee + arguments)
//!
//! ## Quick Start
//!
//! ```text
//! (add 2 (subtract 4 2))
//! ```
//!
//! compiles to
//!
//! ```text
//! add(2, subtract(4, 2));
//! ```
//!
//! ## Core Concepts
//!
//! ### Two tree shapes
//!
//! The parser builds a minimal tree that mirrors the prefix notation: a call
//! is a `name` plus ordered `params`. The transformer rewrites that tree into
//! the shape of the output language: a call is a `callee` identifier plus
//! ordered `arguments`, and each top-level call is wrapped in an
//! `ExpressionStatement` so the renderer can terminate it with `;`. Nested
//! calls stay bare expressions inside their parent's argument list.
//!
//! ### Literals are text
//!
//! Numbers and strings flow through the pipeline as uninterpreted text. The
//! compiler never parses a numeral; `NumberLiteral { value: "42" }` renders
//! as exactly `42`.
//!
//! ### Serialization
//!
//! Tokens and both tree shapes serialize to JSON with a `"type"` tag per
//! node, so intermediate stages can be dumped and inspected:
//!
//! ```text
//! {"type":"CallExpression","name":"add","params":[...]}
//! ```
pub mod tokens;
pub mod source;
pub mod target;

pub use tokens::Token;
pub use source::{Node, Program};
