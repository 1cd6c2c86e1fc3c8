use crate::core::error::HlError;
use asyhl_lib::syntax::UnknownLanguage;

/// Exit codes for the asyhl CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General/unspecified error
    GeneralError = 1,
    /// Bad command line input, same code clap uses
    UsageError = 2,
    /// File not readable or other IO error
    FileError = 4,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&Box<dyn std::error::Error>> for ExitCode {
    fn from(error: &Box<dyn std::error::Error>) -> Self {
        if let Some(hl_error) = error.downcast_ref::<HlError>() {
            match hl_error {
                HlError::Io(_) => ExitCode::FileError,
                HlError::Read(_, _) => ExitCode::FileError,
                HlError::Language(_) => ExitCode::UsageError,
            }
        } else if error.is::<UnknownLanguage>() {
            ExitCode::UsageError
        } else if error.is::<std::io::Error>() {
            ExitCode::FileError
        } else {
            ExitCode::GeneralError
        }
    }
}
