use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for qinfo
#[derive(Error, Debug)]
pub enum QinfoError {
    /// The backing file or device could not be opened or read.
    #[error("Could not open {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source was scanned to its end without finding the label.
    #[error("Field '{label}' not found in {source_name}")]
    FieldNotFound { label: String, source_name: String },

    /// The label was found but its value had an unexpected shape.
    #[error("Malformed value for '{label}': {detail}")]
    ParseError { label: String, detail: String },

    /// A fact the configuration requires could not be determined.
    #[error("Could not determine {fact}: {source}")]
    RequiredFact {
        fact: String,
        #[source]
        source: Box<QinfoError>,
    },

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for qinfo
pub type Result<T> = std::result::Result<T, QinfoError>;

impl QinfoError {
    pub fn source_unavailable<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        QinfoError::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn field_not_found<L: Into<String>, S: Into<String>>(label: L, source_name: S) -> Self {
        QinfoError::FieldNotFound {
            label: label.into(),
            source_name: source_name.into(),
        }
    }

    pub fn parse<L: Into<String>, D: Into<String>>(label: L, detail: D) -> Self {
        QinfoError::ParseError {
            label: label.into(),
            detail: detail.into(),
        }
    }

    pub fn required_fact<S: Into<String>>(fact: S, source: QinfoError) -> Self {
        QinfoError::RequiredFact {
            fact: fact.into(),
            source: Box::new(source),
        }
    }

    pub fn unsupported_platform<S: Into<String>>(msg: S) -> Self {
        QinfoError::UnsupportedPlatform(msg.into())
    }

    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        QinfoError::Config(msg.into())
    }
}
