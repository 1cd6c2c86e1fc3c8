use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashSet;

pub const KW_IF: &str = "if";
pub const KW_ELSE: &str = "else";
pub const KW_WHILE: &str = "while";
pub const KW_FOR: &str = "for";
pub const KW_DO: &str = "do";
pub const KW_RETURN: &str = "return";
pub const KW_BREAK: &str = "break";
pub const KW_CONTINUE: &str = "continue";
pub const KW_IMPORT: &str = "import";

/// Words that turn an identifier-shaped run into a keyword token.
pub const KEYWORDS: &[&str] = &[
    "and",
    "controls",
    "tension",
    "atleast",
    "curl",
    KW_IF,
    KW_ELSE,
    KW_WHILE,
    KW_FOR,
    KW_DO,
    KW_RETURN,
    KW_BREAK,
    KW_CONTINUE,
    "struct",
    "typedef",
    "new",
    "access",
    KW_IMPORT,
    "unravel",
    "from",
    "include",
    "quote",
    "static",
    "public",
    "private",
    "restricted",
    "this",
    "explicit",
    "operator",
];

/// Built-in constants. Scanned as plain identifiers.
pub const LITERALS: &[&str] = &["true", "false", "null", "cycle", "newframe"];

/// Operator table of the language. The scanner does not consult it.
pub const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "#", "%", "^", "**", "==", "!=", "<", "<=", ">", ">=", "&&", "||", "!",
    "&", "|", "=", "+=", "-=", "*=", "/=", "#=", "%=", "^=", "++", "--", "::", "..", "---", "^^",
    "<<", ">>", "$", "$$", "@", "@@", "~", "<>", "controls", "tension", "atleast", "curl",
];

/// Punctuation table of the language. The scanner only matches
/// [`PUNCTUATION_CHARS`].
pub const PUNCTUATION: &[&str] = &[",", ":", ";", "(", ")", "[", "]", "{", "}", ".", "..."];

/// Characters emitted as single-character punctuation tokens.
pub const PUNCTUATION_CHARS: &[char] = &['(', ')', '=', ';', '{', '}', '*', '+', ',', '.', ':'];

lazy_static! {
    static ref KEYWORD_SET: HashSet<&'static str> = KEYWORDS.iter().copied().collect();
}

pub fn is_keyword(word: &str) -> bool {
    KEYWORD_SET.contains(word)
}

/// Serializable view of the lexical tables.
#[derive(Debug, Clone, Serialize)]
pub struct Lexicon {
    pub keywords: Vec<&'static str>,
    pub literals: Vec<&'static str>,
    pub operators: Vec<&'static str>,
    pub punctuation: Vec<&'static str>,
    pub scanned_punctuation: String,
}

impl Lexicon {
    pub fn asy() -> Self {
        Self {
            keywords: KEYWORDS.to_vec(),
            literals: LITERALS.to_vec(),
            operators: OPERATORS.to_vec(),
            punctuation: PUNCTUATION.to_vec(),
            scanned_punctuation: PUNCTUATION_CHARS.iter().collect(),
        }
    }
}
