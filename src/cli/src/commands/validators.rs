use crate::core::paths;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    static ref CLASS_REGEX: Regex = Regex::new(r"^[a-zA-Z_-][a-zA-Z0-9_-]*$").unwrap();
}

pub fn validate_source(path: &str) -> Result<String, String> {
    if paths::is_stdin(path) || Path::new(path).exists() {
        Ok(path.to_string())
    } else {
        Err(format!("Path does not exist: {path}"))
    }
}

pub fn validate_class_name(name: &str) -> Result<String, String> {
    if name.len() > 50 {
        return Err("Class name must be 50 characters or less".to_string());
    }
    if !CLASS_REGEX.is_match(name) {
        return Err("Class name must match pattern: ^[a-zA-Z_-][a-zA-Z0-9_-]*$".to_string());
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_source() {
        assert!(validate_source("-").is_ok());
        assert!(validate_source("Cargo.toml").is_ok());
        assert_eq!(
            validate_source("missing.asy"),
            Err("Path does not exist: missing.asy".to_string())
        );
    }

    #[test]
    fn test_validate_class_name() {
        assert!(validate_class_name("asyhl").is_ok());
        assert!(validate_class_name("code-block_2").is_ok());

        assert!(validate_class_name("").is_err());
        assert!(validate_class_name("2col").is_err());
        assert!(validate_class_name("a b").is_err());
        assert!(validate_class_name("x\"><script").is_err());
        assert!(validate_class_name(&"a".repeat(51)).is_err());
    }
}
