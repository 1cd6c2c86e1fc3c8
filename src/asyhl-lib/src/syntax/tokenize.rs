use super::{
    keywords::{is_keyword, PUNCTUATION_CHARS},
    language::Language,
    token::{Token, TokenType},
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PUNCTUATION_REGEX: Regex = {
        let chars: String = PUNCTUATION_CHARS
            .iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        Regex::new(&format!("^[{chars}]")).unwrap()
    };
    // Every pattern is anchored and consumes at least one character. Their
    // leading characters are disjoint, so at most one of them matches.
    static ref TOKEN_PATTERNS: Vec<(Regex, TokenType)> = vec![
        (
            Regex::new(r"^'(?:[^'\\]|\\[\s\S]|\\\z)*'?").unwrap(),
            TokenType::String
        ),
        (
            Regex::new(r#"^"(?:[^"\\]|\\[\s\S]|\\\z)*"?"#).unwrap(),
            TokenType::String
        ),
        (
            Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").unwrap(),
            TokenType::Identifier
        ),
        (Regex::new(r"^[0-9]+").unwrap(), TokenType::Number),
        (PUNCTUATION_REGEX.clone(), TokenType::Punctuation),
        (Regex::new(r"^[ \n\r\t]+").unwrap(), TokenType::Blank),
    ];
}

/// Splits `input` into highlighting tokens.
///
/// Never fails. The values of the returned tokens concatenate to `input`.
pub fn tokenize(input: &str, language: Language) -> Vec<Token> {
    match language {
        Language::Asy => tokenize_asy(input),
        Language::Tex => tokenize_tex(input),
    }
}

fn tokenize_asy(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut position = 0;
    let mut remaining = input;
    while !remaining.is_empty() {
        let token = match next_token(remaining, position) {
            Some(token) => token,
            None => fallback_token(remaining, position),
        };
        position += token.len();
        remaining = &remaining[token.len()..];
        tokens.push(token);
    }
    tokens
}

fn next_token(remaining: &str, position: usize) -> Option<Token> {
    for (pattern, token_type) in TOKEN_PATTERNS.iter() {
        if let Some(mat) = pattern.find(remaining) {
            let value = mat.as_str();
            let token_type = match token_type {
                TokenType::Identifier if is_keyword(value) => TokenType::Keyword,
                other => *other,
            };
            return Some(Token::new(token_type, value, position));
        }
    }
    None
}

/// Any character no production claims becomes its own blank token.
fn fallback_token(remaining: &str, position: usize) -> Token {
    let len = remaining.chars().next().map_or(0, char::len_utf8);
    Token::new(TokenType::Blank, &remaining[..len], position)
}

fn tokenize_tex(input: &str) -> Vec<Token> {
    vec![Token::new(TokenType::Blank, input, 0)]
}
