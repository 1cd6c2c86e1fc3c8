use std::path::Path;

/// Argument value that stands for standard input.
pub const STDIN: &str = "-";

pub fn clean_path_str(s: &str) -> &str {
    #[cfg(windows)]
    {
        if let Some(stripped) = s.strip_prefix(r"\\?\") {
            return stripped;
        }
    }
    s
}

pub fn is_stdin(source: &str) -> bool {
    source == STDIN
}

pub fn extension(source: &str) -> Option<&str> {
    if is_stdin(source) {
        return None;
    }
    Path::new(source).extension().and_then(|ext| ext.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension() {
        assert_eq!(extension("figures/plot.asy"), Some("asy"));
        assert_eq!(extension("paper.TEX"), Some("TEX"));
        assert_eq!(extension("Makefile"), None);
        assert_eq!(extension(STDIN), None);
    }
}
