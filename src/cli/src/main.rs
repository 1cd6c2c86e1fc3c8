use clap::Parser;

mod commands;
mod core;

use commands::Commands;
use crate::core::exit_code::ExitCode;

#[derive(Parser)]
#[command(name = "asyhl")]
#[command(about = "Syntax highlighter for the Asymptote and LaTeX editor.")]
#[command(version = crate::core::version::app_version())]
struct Args {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        let exit_code = ExitCode::from(&e);
        std::process::exit(exit_code.code());
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    crate::core::logger::Logger::init(args.debug);
    crate::core::logger::Logger::debug(&format!(
        "asyhl {}",
        crate::core::version::app_version()
    ));

    match args.command {
        Commands::Tokenize(tokenize_args) => commands::tokenize::execute(&tokenize_args),
        Commands::Highlight(highlight_args) => commands::highlight::execute(&highlight_args),
        Commands::Lexicon(lexicon_args) => commands::lexicon::execute(&lexicon_args),
    }
}
