// tests/render_tests.rs

use prefixc::ast::target::{Identifier, Node, Program};
use prefixc::render::render;

fn number(s: &str) -> Node {
    Node::NumberLiteral {
        value: s.to_string(),
    }
}

fn string(s: &str) -> Node {
    Node::StringLiteral {
        value: s.to_string(),
    }
}

fn call(name: &str, arguments: Vec<Node>) -> Node {
    Node::CallExpression {
        callee: Identifier {
            name: name.to_string(),
        },
        arguments,
    }
}

fn statement(expression: Node) -> Node {
    Node::ExpressionStatement {
        expression: Box::new(expression),
    }
}

// ============================================================================
// Node Rendering
// ============================================================================

#[test]
fn test_number_renders_verbatim() {
    let program = Program {
        body: vec![number("42")],
    };
    assert_eq!(render(&program), "42");
}

#[test]
fn test_string_is_requoted() {
    let program = Program {
        body: vec![string("bar")],
    };
    assert_eq!(render(&program), "\"bar\"");
}

#[test]
fn test_statement_gets_semicolon() {
    let program = Program {
        body: vec![statement(call("f", vec![]))],
    };
    assert_eq!(render(&program), "f();");
}

#[test]
fn test_call_arguments_join_with_comma_space() {
    let program = Program {
        body: vec![statement(call("add", vec![number("1"), number("2")]))],
    };
    assert_eq!(render(&program), "add(1, 2);");
}

#[test]
fn test_nested_call_renders_inside_argument_list() {
    let program = Program {
        body: vec![statement(call(
            "add",
            vec![number("2"), call("subtract", vec![number("4"), number("2")])],
        ))],
    };
    assert_eq!(render(&program), "add(2, subtract(4, 2));");
}

// ============================================================================
// Program Rendering
// ============================================================================

#[test]
fn test_empty_program_renders_empty_string() {
    let program = Program { body: vec![] };
    assert_eq!(render(&program), "");
}

#[test]
fn test_body_elements_join_with_newline() {
    let program = Program {
        body: vec![
            statement(call("f", vec![number("1")])),
            number("42"),
            statement(call("g", vec![string("x")])),
        ],
    };
    assert_eq!(render(&program), "f(1);\n42\ng(\"x\");");
}

#[test]
fn test_rendering_is_deterministic() {
    let program = Program {
        body: vec![statement(call("add", vec![number("1"), number("2")]))],
    };
    assert_eq!(render(&program), render(&program));
}
