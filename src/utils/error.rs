use std::io;
use thiserror::Error;

/// Command-level failures carry the tokens as received, so the report can
/// echo them back verbatim.
#[derive(Error, Debug)]
pub enum Error {
    #[error("MALFORMED {}", .0.join(","))]
    MalformedCommand(Vec<String>),
    #[error("MALFORMED {}", .0.join(","))]
    InvalidNumeric(Vec<String>),
    #[error("MALFORMED {}", .0.join(","))]
    UnreachableQuery(Vec<String>),
    #[error("failed to read config file: {0}")]
    ConfigRead(io::Error),
    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
    #[error("failed to process command stream: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether the command stream should just report and move on.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::MalformedCommand(_)
            | Error::InvalidNumeric(_)
            | Error::UnreachableQuery(_))
    }
}
