//! Error types for the codec.

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HuffmanError>;

#[derive(Error, Debug)]
pub enum HuffmanError {
    /// Nothing to compress.
    #[error("cannot compress an empty input")]
    EmptyInput,

    /// Malformed container: truncated header, bad length field, bad padding.
    #[error("malformed container: {0}")]
    Format(String),

    /// The payload bit stream does not decode against the code table.
    #[error("corrupt payload: {0}")]
    Decode(String),

    /// An input symbol has no codeword. Analyzer and tree disagree.
    #[error("symbol {0} missing from code table")]
    UnknownSymbol(String),

    #[error("input is not valid UTF-8 text: {0}")]
    InvalidText(#[from] std::str::Utf8Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HuffmanError {
    pub fn format(message: impl Into<String>) -> Self {
        HuffmanError::Format(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        HuffmanError::Decode(message.into())
    }

    pub fn unknown_symbol(symbol: impl std::fmt::Debug) -> Self {
        HuffmanError::UnknownSymbol(format!("{:?}", symbol))
    }
}
