use std::fmt;

/// Error types for rawlinks operations
#[derive(Debug)]
pub enum RawLinksError {
    /// IO error (writing output, reading files, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Directory walking error
    FileWalking(ignore::Error),
}

impl fmt::Display for RawLinksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawLinksError::Io(err) => write!(f, "IO error: {err}"),
            RawLinksError::Config(msg) => write!(f, "Configuration error: {msg}"),
            RawLinksError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            RawLinksError::FileWalking(err) => write!(f, "File walking error: {err}"),
        }
    }
}

impl std::error::Error for RawLinksError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RawLinksError::Io(err) => Some(err),
            RawLinksError::TomlParsing(err) => Some(err),
            RawLinksError::FileWalking(err) => Some(err),
            RawLinksError::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for RawLinksError {
    fn from(err: std::io::Error) -> Self {
        RawLinksError::Io(err)
    }
}

impl From<toml::de::Error> for RawLinksError {
    fn from(err: toml::de::Error) -> Self {
        RawLinksError::TomlParsing(err)
    }
}

impl From<ignore::Error> for RawLinksError {
    fn from(err: ignore::Error) -> Self {
        RawLinksError::FileWalking(err)
    }
}

/// Type alias for Results using RawLinksError
pub type Result<T> = std::result::Result<T, RawLinksError>;
