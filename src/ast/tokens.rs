use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Lexical token produced by the lexer.
///
/// Tokens are immutable once produced and their order equals source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Opening parenthesis
    LParen,

    /// Closing parenthesis
    RParen,

    /// Callable name: a maximal run of letters
    ///
    /// # Examples
    /// ```text
    /// add
    /// subtract
    /// ```
    Name(String),

    /// Number literal: a maximal run of digits, kept as text
    ///
    /// # Examples
    /// ```text
    /// 2
    /// 42
    /// ```
    Number(String),

    /// String literal: the run between two `"` quotes, kept as text
    /// without the quotes
    ///
    /// # Examples
    /// ```text
    /// "bar"
    /// ```
    String(String),

    /// End of input sentinel, always the last token of a full tokenization
    Eof,
}

impl Token {
    /// The kind tag used in serialized token dumps.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::LParen | Token::RParen => "paren",
            Token::Name(_) => "name",
            Token::Number(_) => "number",
            Token::String(_) => "string",
            Token::Eof => "eof",
        }
    }

    /// The literal source text of the token.
    pub fn text(&self) -> &str {
        match self {
            Token::LParen => "(",
            Token::RParen => ")",
            Token::Name(s) | Token::Number(s) | Token::String(s) => s,
            Token::Eof => "",
        }
    }
}

// Unit and newtype variants cannot carry an internal tag through derive,
// so tokens serialize by hand into the same {"type","value"} shape the
// AST nodes get from their derives.
impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Token", 2)?;
        s.serialize_field("type", self.kind())?;
        s.serialize_field("value", self.text())?;
        s.end()
    }
}
