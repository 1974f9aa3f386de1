//! Morse Codecs - English text <-> Morse code conversion
//!
//! This crate provides the symbol table, input validation, and the text
//! encoder/decoder. It performs no I/O; callers hand in strings and get back
//! strings or a [`MorseError`].

pub mod table;
pub mod validate;
pub mod encode;
pub mod decode;
pub mod error;

pub use decode::{decode, Decoder};
pub use encode::{encode, encode_skip_unknown, EncodeOptions, Encoder};
pub use error::{InputKind, MorseError, Result};
pub use table::SymbolTable;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        table::{SymbolTable, MorseElement, WORD_SEPARATOR, LETTER_SEPARATOR},
        validate::{validate_text, validate_morse, normalize_separators},
        encode::{Encoder, EncodeOptions, encode, encode_skip_unknown},
        decode::{Decoder, decode},
        error::{MorseError, InputKind, Result},
    };
}
