pub mod highlight;
pub mod lexicon;
pub mod shared;
pub mod tokenize;
pub mod validators;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    Tokenize(tokenize::TokenizeArgs),
    Highlight(highlight::HighlightArgs),
    Lexicon(lexicon::LexiconArgs),
}
