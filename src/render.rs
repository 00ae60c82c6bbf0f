//! Text rendering for the target AST.
//!
//! The renderer is the last pipeline stage: it turns a transformed program
//! back into text. Output is byte-for-byte deterministic; the only
//! whitespace it produces is the newline between statements and the space
//! after each argument comma.

use crate::ast::target::{Node, Program};

/// Render a target program to output text.
///
/// Body elements render one per line. An `ExpressionStatement` gets a `;`
/// suffix; a bare literal in the body renders without one.
///
/// # Examples
///
/// ```
/// use prefixc::{lex, parse, render, transform};
///
/// let ast = parse(lex("(add 1 2)").unwrap()).unwrap();
/// assert_eq!(render(&transform(&ast)), "add(1, 2);");
/// ```
pub fn render(program: &Program) -> String {
    program
        .body
        .iter()
        .map(render_node)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_node(node: &Node) -> String {
    match node {
        Node::ExpressionStatement { expression } => {
            format!("{};", render_node(expression))
        }
        Node::CallExpression { callee, arguments } => {
            let arguments: Vec<String> = arguments.iter().map(render_node).collect();
            format!("{}({})", callee.name, arguments.join(", "))
        }
        Node::NumberLiteral { value } => value.clone(),
        Node::StringLiteral { value } => format!("\"{}\"", value),
    }
}
