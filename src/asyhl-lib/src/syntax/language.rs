use super::error::UnknownLanguage;
use std::fmt;
use std::str::FromStr;

/// Input language of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Asymptote, the drawing language. Fully scanned.
    #[default]
    Asy,
    /// TeX/LaTeX. Passed through as a single blank token.
    Tex,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Asy, Language::Tex];

    pub fn tag(&self) -> &'static str {
        match self {
            Language::Asy => "asy",
            Language::Tex => "tex",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Asy => "Asymptote",
            Language::Tex => "LaTeX",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "asy" => Some(Language::Asy),
            "tex" => Some(Language::Tex),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asy" | "asymptote" | "primary" => Ok(Language::Asy),
            "tex" | "latex" | "secondary" => Ok(Language::Tex),
            _ => Err(UnknownLanguage::new(s)),
        }
    }
}
