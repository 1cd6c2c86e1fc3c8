//! Lexical scanner and highlighter for the Asymptote / TeX online editor.
//!
//! The scanner never fails: every input, including half-typed code with
//! unterminated strings or stray symbols, maps to a token sequence whose
//! values concatenate back to the input.

pub mod highlight;
pub mod syntax;

pub use highlight::{highlight, render_document, render_html, HighlightOptions};
pub use syntax::{tokenize, Language, Token, TokenType};
