//! Source-to-target AST rewriting.
//!
//! The transformer walks the source tree once, depth-first and pre-order,
//! and builds a brand-new target tree. The input is read-only; nothing is
//! rewritten in place.
//!
//! Each step of the walk appends its rewritten form to an output list owned
//! by the node's parent in the *new* tree: the program body at top level,
//! the enclosing call's argument list below that. The output list is passed
//! down the recursion as an explicit `&mut Vec` parameter, which keeps the
//! whole pass reentrant and free of shared state.

use crate::ast::source;
use crate::ast::target::{self, Identifier};

/// Rewrite a source program into the target call shape.
///
/// Output order exactly mirrors input order; nothing is reordered,
/// deduplicated, or merged.
///
/// # Examples
///
/// ```
/// use prefixc::ast::{Node, Program, target};
/// use prefixc::transform;
///
/// let ast = Program {
///     body: vec![Node::CallExpression {
///         name: "add".to_string(),
///         params: vec![
///             Node::NumberLiteral { value: "1".to_string() },
///             Node::NumberLiteral { value: "2".to_string() },
///         ],
///     }],
/// };
///
/// let new_ast = transform(&ast);
/// assert!(matches!(
///     new_ast.body[0],
///     target::Node::ExpressionStatement { .. }
/// ));
/// ```
pub fn transform(program: &source::Program) -> target::Program {
    let mut body = Vec::new();
    for node in &program.body {
        transform_node(node, &mut body, false);
    }
    target::Program { body }
}

/// Rewrite one node, appending its target form to `out`.
///
/// `in_call` says whether the source parent is itself a call. Only calls
/// sitting directly in the program body become statements; nested calls
/// stay bare expressions inside their parent's arguments.
fn transform_node(node: &source::Node, out: &mut Vec<target::Node>, in_call: bool) {
    match node {
        source::Node::NumberLiteral { value } => {
            out.push(target::Node::NumberLiteral {
                value: value.clone(),
            });
        }

        source::Node::StringLiteral { value } => {
            out.push(target::Node::StringLiteral {
                value: value.clone(),
            });
        }

        source::Node::CallExpression { name, params } => {
            let mut arguments = Vec::new();
            for param in params {
                transform_node(param, &mut arguments, true);
            }

            let call = target::Node::CallExpression {
                callee: Identifier { name: name.clone() },
                arguments,
            };

            if in_call {
                out.push(call);
            } else {
                out.push(target::Node::ExpressionStatement {
                    expression: Box::new(call),
                });
            }
        }
    }
}
