//! Error types for Morse codecs

use std::fmt;
use thiserror::Error;

/// Which side of the converter rejected an empty input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Morse,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Text => f.write_str("text"),
            InputKind::Morse => f.write_str("Morse code"),
        }
    }
}

/// Codec error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MorseError {
    #[error("Input {kind} is empty")]
    EmptyInput { kind: InputKind },

    #[error("Character '{ch}' cannot be converted to Morse code")]
    UnsupportedCharacter { ch: char },

    #[error("Morse code '{symbol}' does not match any character")]
    UnknownSymbol { symbol: String },

    #[error("Invalid symbol table: {msg}")]
    InvalidTable { msg: String },
}

/// Result type for Morse codec operations
pub type Result<T> = std::result::Result<T, MorseError>;
