use crate::commands::shared::{resolve_language, LanguageArgs, OutputArgs, SourceArgs};
use crate::debug_log;
use asyhl_lib::{tokenize, Token};
use clap::Args;

#[derive(Debug, Args)]
#[command(about = "Print the highlighting tokens of a source file")]
pub struct TokenizeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub language: LanguageArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// `TYPE start..end "value"`, with the value debug-escaped so blanks stay visible.
pub fn token_line(token: &Token) -> String {
    format!(
        "{} {}..{} {:?}",
        token.token_type, token.span.start, token.span.end, token.value
    )
}

pub fn execute(args: &TokenizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let language = resolve_language(&args.language, &args.source)?;
    let input = args.source.read()?;
    let tokens = tokenize(&input, language);
    debug_log!("{} tokens from {} bytes", tokens.len(), input.len());

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!("{}", formatter.format_lines(&tokens, token_line));
    Ok(())
}
