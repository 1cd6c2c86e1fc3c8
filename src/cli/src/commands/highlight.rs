use crate::commands::shared::{resolve_language, LanguageArgs, SourceArgs};
use crate::commands::validators;
use crate::debug_log;
use asyhl_lib::highlight::{render_document, HighlightOptions, DEFAULT_CLASS};
use asyhl_lib::tokenize;
use clap::Args;

#[derive(Debug, Args)]
#[command(about = "Render a source file as HTML spans")]
pub struct HighlightArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub language: LanguageArgs,

    #[arg(long = "wrap", help = "Wrap the spans in <pre><code>")]
    pub wrap: bool,

    #[arg(
        long = "class",
        default_value = DEFAULT_CLASS,
        help = "Class of the wrapping <pre> element",
        value_parser = validators::validate_class_name
    )]
    pub class: String,
}

impl HighlightArgs {
    fn options(&self) -> HighlightOptions {
        HighlightOptions {
            wrap: self.wrap,
            class: self.class.clone(),
        }
    }
}

pub fn execute(args: &HighlightArgs) -> Result<(), Box<dyn std::error::Error>> {
    let language = resolve_language(&args.language, &args.source)?;
    let input = args.source.read()?;
    let tokens = tokenize(&input, language);
    debug_log!("Rendering {} tokens as {}", tokens.len(), language.display_name());

    println!("{}", render_document(&tokens, &args.options()));
    Ok(())
}
