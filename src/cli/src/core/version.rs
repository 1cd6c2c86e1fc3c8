pub fn app_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_version_is_semver() {
        let version = app_version();
        assert_eq!(version.split('.').count(), 3, "Version should be in semantic format");
    }
}
