//! Target AST: the output language's call shape.
//!
//! Produced by the transformer, consumed by the renderer. Differs from the
//! source shape in two ways: calls name their callee with an [`Identifier`]
//! and hold `arguments` instead of `params`, and each call sitting directly
//! in the program body is wrapped in an [`Node::ExpressionStatement`] so it
//! renders as a `;`-terminated statement.

use serde::Serialize;

/// A transformed program: the ordered top-level elements of the output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub body: Vec<Node>,
}

/// The callee position of a call.
///
/// A call can never legally be invoked through a literal, so the callee is
/// typed as a dedicated struct rather than a node variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Identifier {
    pub name: String,
}

/// Target AST node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Wraps a call that sits directly in the program body, marking it as a
    /// standalone statement. Never wraps a nested call.
    ExpressionStatement { expression: Box<Node> },

    /// Infix-shape call
    ///
    /// # Example
    /// ```text
    /// add(2, 3)
    /// ```
    CallExpression {
        callee: Identifier,
        arguments: Vec<Node>,
    },

    /// Number literal, rendered verbatim
    NumberLiteral { value: String },

    /// String literal, re-wrapped in `"` quotes by the renderer
    StringLiteral { value: String },
}
