//! Validate source syntax without compiling it

use super::CliError;
use crate::{lexer, parser};

/// Check that `source` lexes and parses cleanly.
pub fn execute_check(source: &str) -> Result<(), CliError> {
    let tokens = lexer::lex(source)?;
    parser::parse(tokens)?;
    Ok(())
}
