use crate::commands::shared::OutputArgs;
use asyhl_lib::syntax::Lexicon;
use clap::Args;

#[derive(Debug, Args)]
#[command(about = "List the keywords and symbols of the Asymptote scanner")]
pub struct LexiconArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute(args: &LexiconArgs) -> Result<(), Box<dyn std::error::Error>> {
    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    println!("{}", formatter.format(&Lexicon::asy()));
    Ok(())
}
