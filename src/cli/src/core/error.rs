use asyhl_lib::syntax::UnknownLanguage;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum HlError {
    Io(io::Error),
    Read(String, io::Error),
    Language(UnknownLanguage),
}

impl fmt::Display for HlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HlError::Io(err) => write!(f, "IO error: {err}"),
            HlError::Read(path, err) => write!(
                f,
                "Cannot read {}: {err}",
                crate::core::paths::clean_path_str(path)
            ),
            HlError::Language(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for HlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HlError::Io(err) => Some(err),
            HlError::Read(_, err) => Some(err),
            HlError::Language(err) => Some(err),
        }
    }
}

impl From<io::Error> for HlError {
    fn from(err: io::Error) -> Self {
        HlError::Io(err)
    }
}

impl From<UnknownLanguage> for HlError {
    fn from(err: UnknownLanguage) -> Self {
        HlError::Language(err)
    }
}
