use serde::Serialize;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenType {
    /// Whitespace runs, unrecognised characters and whole TeX documents.
    Blank,
    Identifier,
    Keyword,
    String,
    Number,
    /// Reserved for operator highlighting; never produced by the scanner.
    Operator,
    Punctuation,
}

impl TokenType {
    pub const ALL: [TokenType; 7] = [
        TokenType::Blank,
        TokenType::Identifier,
        TokenType::Keyword,
        TokenType::String,
        TokenType::Number,
        TokenType::Operator,
        TokenType::Punctuation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Blank => "Blank",
            TokenType::Identifier => "Identifier",
            TokenType::Keyword => "Keyword",
            TokenType::String => "String",
            TokenType::Number => "Number",
            TokenType::Operator => "Operator",
            TokenType::Punctuation => "Punctuation",
        }
    }

    /// Class attached to the `<span>` rendered for tokens of this type.
    pub fn css_class(&self) -> String {
        format!("sy-{}", self.name())
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub value: String,
    /// Byte range of `value` within the scanned input.
    pub span: Range<usize>,
}

impl Token {
    pub fn new(token_type: TokenType, value: &str, start: usize) -> Self {
        Self {
            token_type,
            value: value.to_string(),
            span: start..start + value.len(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.value.len()
    }
}
