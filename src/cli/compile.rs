//! Run the compiler pipeline and emit a chosen stage

use super::CliError;
use crate::ast::Token;
use crate::{lexer, parser, render, transform};

/// Options for the compile command
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Prefix-call source text
    pub source: String,
    /// Pipeline stage to emit
    pub emit: EmitStage,
    /// Pretty-print JSON stages
    pub pretty: bool,
}

/// Pipeline stage selectable with `--emit`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum EmitStage {
    /// Token sequence as JSON
    Tokens,
    /// Source AST as JSON
    Ast,
    /// Transformed AST as JSON
    TargetAst,
    /// Rendered output text
    #[default]
    Code,
}

/// Execute the pipeline over `options.source` and return the printable
/// form of the requested stage: JSON for the intermediate stages, the
/// rendered text for `Code`.
pub fn execute_compile(options: &CompileOptions) -> Result<String, CliError> {
    let mut tokens = lexer::lex(&options.source)?;

    if options.emit == EmitStage::Tokens {
        // The Eof sentinel is an implementation detail, not part of the dump
        if tokens.last() == Some(&Token::Eof) {
            tokens.pop();
        }
        return to_json(&tokens, options.pretty);
    }

    let ast = parser::parse(tokens)?;
    if options.emit == EmitStage::Ast {
        return to_json(&ast, options.pretty);
    }

    let new_ast = transform::transform(&ast);
    if options.emit == EmitStage::TargetAst {
        return to_json(&new_ast, options.pretty);
    }

    Ok(render::render(&new_ast))
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }?;
    Ok(json)
}
