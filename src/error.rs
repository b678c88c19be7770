//! Error types for the encoding pipeline.

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The sample file the code is derived from cannot be read.
    #[error("cannot read encoding sample file {path}: {source}")]
    EncodingFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The target file to be encoded cannot be read.
    #[error("cannot read input file {path}: {source}")]
    InputFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The code table file cannot be created or written. Aborts the run;
    /// continuing would leave the encoder with an incomplete table.
    #[error("cannot write code table file {path}: {source}")]
    TableWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A target-file character never appeared in the sample file, so it
    /// has no code.
    #[error("character {0:?} has no code (absent from the sample file)")]
    UnknownCharacter(char),

    /// A line of a code table file does not match `<char> : <freq> : <code>`.
    #[error("malformed table line {lineno}: {line:?}")]
    TableParse { lineno: usize, line: String },

    /// The bitstream ended in the middle of a code.
    #[error("bitstream ends mid-code, dangling bits {0:?}")]
    DanglingBits(String),

    /// Other I/O failure (decoder-side reads and writes).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The terminal status string reported for this failure. The two file
    /// errors keep their historical wording; everything else reports its
    /// own message.
    pub fn status(&self) -> String {
        match self {
            Error::EncodingFile { .. } => "Encoding File Error".to_string(),
            Error::InputFile { .. } => "Input File Error".to_string(),
            other => other.to_string(),
        }
    }
}
