//! Errors for the surfaces around the parser
//!
//! Parsing itself never fails; these cover configuration, input and output.

use crate::formats::FormatError;
use config::ConfigError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    /// Reading a signature file or stdin failed
    Io(io::Error),
    /// Configuration could not be loaded or deserialized
    Config(ConfigError),
    /// Rendering the parse reports failed
    Format(FormatError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::Config(err) => write!(f, "Configuration error: {err}"),
            Error::Format(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Config(err) => Some(err),
            Error::Format(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<FormatError> for Error {
    fn from(err: FormatError) -> Self {
        Error::Format(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
