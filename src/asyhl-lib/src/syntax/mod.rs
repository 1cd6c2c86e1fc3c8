pub mod error;
pub mod keywords;
pub mod language;
pub mod token;
pub mod tokenize;

pub use error::UnknownLanguage;
pub use keywords::{is_keyword, Lexicon};
pub use language::Language;
pub use token::{Token, TokenType};
pub use tokenize::tokenize;
