use serde::Serialize;

/// A parsed program: the ordered top-level expressions of the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub body: Vec<Node>,
}

/// Source AST node in the prefix call shape.
///
/// Every node owns its children outright; nodes are created once per
/// compile and never shared.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Prefix call: the name after the opening paren plus the ordered
    /// sub-expressions before the closing paren
    ///
    /// # Example
    /// ```text
    /// (add 2 3)
    /// ```
    CallExpression { name: String, params: Vec<Node> },

    /// Number literal, carried as uninterpreted text
    NumberLiteral { value: String },

    /// String literal, carried as uninterpreted text without its quotes
    StringLiteral { value: String },
}
