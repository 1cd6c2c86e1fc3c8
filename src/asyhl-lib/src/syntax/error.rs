#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage {
    pub tag: String,
}

impl UnknownLanguage {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
        }
    }
}

impl std::fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown language: '{}' (expected 'asy' or 'tex')",
            self.tag
        )
    }
}

impl std::error::Error for UnknownLanguage {}
