//! Input validation for text and Morse code

use crate::error::InputKind;
use crate::table::{SymbolTable, LETTER_SEPARATOR, WORD_SEPARATOR};
use crate::{MorseError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static SLASH_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*/\s*").expect("static regex"));

/// Trim the input and rewrite every `/` with its surrounding whitespace as
/// the canonical `" / "` word separator.
pub fn normalize_separators(morse: &str) -> Cow<'_, str> {
    SLASH_RUN.replace_all(morse.trim(), WORD_SEPARATOR)
}

/// Split normalized Morse into words of letter tokens. Empty tokens are kept;
/// callers decide how to treat them.
pub(crate) fn split_words(normalized: &str) -> impl Iterator<Item = std::str::Split<'_, char>> {
    normalized
        .split(WORD_SEPARATOR)
        .map(|word| word.split(LETTER_SEPARATOR))
}

/// Check that every character of `text` can be encoded
pub fn validate_text(table: &SymbolTable, text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(MorseError::EmptyInput {
            kind: InputKind::Text,
        });
    }

    match text
        .to_uppercase()
        .chars()
        .find(|&ch| ch != ' ' && !table.contains(ch))
    {
        Some(ch) => Err(MorseError::UnsupportedCharacter { ch }),
        None => Ok(()),
    }
}

/// Check that every letter token of `morse` is a known symbol
pub fn validate_morse(table: &SymbolTable, morse: &str) -> Result<()> {
    if morse.is_empty() {
        return Err(MorseError::EmptyInput {
            kind: InputKind::Morse,
        });
    }

    let normalized = normalize_separators(morse);
    for word in split_words(&normalized) {
        for token in word {
            if !token.is_empty() && table.character(token).is_none() {
                return Err(MorseError::UnknownSymbol {
                    symbol: token.to_string(),
                });
            }
        }
    }

    Ok(())
}
