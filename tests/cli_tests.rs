// tests/cli_tests.rs
//
// The CLI's stage-emission surface, exercised through execute_compile so no
// process spawning is needed.

#![cfg(feature = "cli")]

use prefixc::cli::{CliError, CompileOptions, EmitStage, execute_check, execute_compile};
use serde_json::json;

fn emit(source: &str, emit: EmitStage) -> Result<String, CliError> {
    execute_compile(&CompileOptions {
        source: source.to_string(),
        emit,
        pretty: false,
    })
}

// ============================================================================
// Stage Emission
// ============================================================================

#[test]
fn test_emit_defaults_to_code() {
    let options = CompileOptions {
        source: "(add 1 2)".to_string(),
        ..Default::default()
    };
    assert_eq!(execute_compile(&options).unwrap(), "add(1, 2);");
}

#[test]
fn test_emit_tokens_matches_classic_dump() {
    let output = emit("(add 2 (subtract 4 2))", EmitStage::Tokens).unwrap();
    let tokens: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(
        tokens,
        json!([
            { "type": "paren",  "value": "(" },
            { "type": "name",   "value": "add" },
            { "type": "number", "value": "2" },
            { "type": "paren",  "value": "(" },
            { "type": "name",   "value": "subtract" },
            { "type": "number", "value": "4" },
            { "type": "number", "value": "2" },
            { "type": "paren",  "value": ")" },
            { "type": "paren",  "value": ")" },
        ])
    );
}

#[test]
fn test_emit_tokens_drops_eof_sentinel() {
    let output = emit("", EmitStage::Tokens).unwrap();
    assert_eq!(output, "[]");
}

#[test]
fn test_emit_ast_carries_type_tags() {
    let output = emit("(add 1 2)", EmitStage::Ast).unwrap();
    let ast: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(
        ast,
        json!({
            "type": "Program",
            "body": [{
                "type": "CallExpression",
                "name": "add",
                "params": [
                    { "type": "NumberLiteral", "value": "1" },
                    { "type": "NumberLiteral", "value": "2" },
                ],
            }],
        })
    );
}

#[test]
fn test_emit_target_ast_wraps_top_level_call() {
    let output = emit("(add 1 2)", EmitStage::TargetAst).unwrap();
    let ast: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(
        ast,
        json!({
            "type": "Program",
            "body": [{
                "type": "ExpressionStatement",
                "expression": {
                    "type": "CallExpression",
                    "callee": { "type": "Identifier", "name": "add" },
                    "arguments": [
                        { "type": "NumberLiteral", "value": "1" },
                        { "type": "NumberLiteral", "value": "2" },
                    ],
                },
            }],
        })
    );
}

#[test]
fn test_pretty_emission_is_indented() {
    let output = execute_compile(&CompileOptions {
        source: "(f 1)".to_string(),
        emit: EmitStage::Ast,
        pretty: true,
    })
    .unwrap();

    assert!(output.contains('\n'));
    assert!(output.contains("  \"type\""));
}

// ============================================================================
// Errors and Check
// ============================================================================

#[test]
fn test_emit_surfaces_stage_errors() {
    assert!(matches!(
        emit("@", EmitStage::Code),
        Err(CliError::Lex(_))
    ));
    assert!(matches!(
        emit("(add 2", EmitStage::Ast),
        Err(CliError::Parse(_))
    ));
}

#[test]
fn test_check_accepts_valid_source() {
    assert!(execute_check("(add 2 (subtract 4 2))").is_ok());
}

#[test]
fn test_check_rejects_malformed_source() {
    assert!(matches!(execute_check("(add 2"), Err(CliError::Parse(_))));
    assert!(matches!(execute_check("(add @)"), Err(CliError::Lex(_))));
}
