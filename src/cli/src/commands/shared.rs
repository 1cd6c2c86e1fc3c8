use crate::commands::validators;
use crate::core::error::HlError;
use crate::core::formatter::OutputFormat;
use crate::core::paths;
use crate::debug_log;
use asyhl_lib::Language;
use clap::Args;
use std::io::Read;

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long = "output",
        help = "Output format: text or json",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true
    )]
    pub output: OutputFormat,
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    #[arg(
        default_value = paths::STDIN,
        help = "Path to the .asy or .tex file, or '-' for standard input",
        value_parser = validators::validate_source
    )]
    pub source: String,
}

impl SourceArgs {
    pub fn read(&self) -> Result<String, HlError> {
        if paths::is_stdin(&self.source) {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            return Ok(input);
        }
        std::fs::read_to_string(&self.source).map_err(|e| HlError::Read(self.source.clone(), e))
    }
}

#[derive(Debug, Args)]
pub struct LanguageArgs {
    #[arg(
        short = 'l',
        long = "lang",
        alias = "language",
        help = "Input language: asy or tex [default: from file extension, else asy]"
    )]
    pub lang: Option<String>,
}

/// Explicit `--lang` wins, then the file extension, then Asymptote.
pub fn resolve_language(lang: &LanguageArgs, source: &SourceArgs) -> Result<Language, HlError> {
    if let Some(tag) = &lang.lang {
        let language = tag.parse::<Language>()?;
        debug_log!("Language {language} from --lang");
        return Ok(language);
    }
    match paths::extension(&source.source).and_then(Language::from_extension) {
        Some(language) => {
            debug_log!("Language {language} from extension of {}", source.source);
            Ok(language)
        }
        None => {
            debug_log!("Language {} by default", Language::default());
            Ok(Language::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(lang: Option<&str>, source: &str) -> (LanguageArgs, SourceArgs) {
        (
            LanguageArgs {
                lang: lang.map(str::to_string),
            },
            SourceArgs {
                source: source.to_string(),
            },
        )
    }

    #[test]
    fn test_explicit_language_wins() {
        let (lang, source) = args(Some("tex"), "plot.asy");
        assert_eq!(resolve_language(&lang, &source).unwrap(), Language::Tex);
    }

    #[test]
    fn test_language_from_extension() {
        let (lang, source) = args(None, "paper.tex");
        assert_eq!(resolve_language(&lang, &source).unwrap(), Language::Tex);
    }

    #[test]
    fn test_language_default() {
        let (lang, source) = args(None, "-");
        assert_eq!(resolve_language(&lang, &source).unwrap(), Language::Asy);
        let (lang, source) = args(None, "notes.txt");
        assert_eq!(resolve_language(&lang, &source).unwrap(), Language::Asy);
    }

    #[test]
    fn test_unknown_language() {
        let (lang, source) = args(Some("python"), "-");
        assert!(matches!(
            resolve_language(&lang, &source),
            Err(HlError::Language(_))
        ));
    }
}
