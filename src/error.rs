//! Error types for locale probing and formatting

use std::path::PathBuf;

use thiserror::Error;

/// Error type for locale operations
#[derive(Debug, Error)]
pub enum Error {
    /// The locale identifier could not be parsed
    #[error("Invalid locale identifier: {0}")]
    InvalidLocale(String),

    /// An error occurred while parsing locale data
    #[error("Error parsing locale data: {0}")]
    LocaleData(String),

    /// A locale data file could not be read
    #[error("Failed to read locale data from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A number pattern could not be parsed
    #[error("Invalid number pattern: {0}")]
    Pattern(String),

    /// The formatted output is too short to hold the character being probed
    #[error("Formatted output {output:?} has no character at position {position}")]
    ShortOutput { output: String, position: usize },

    /// The expression used by the numeric self-test did not compile
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

/// Result type for locale operations
pub type Result<T> = std::result::Result<T, Error>;
