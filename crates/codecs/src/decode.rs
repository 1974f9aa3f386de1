//! Morse to text decoder

use crate::table::SymbolTable;
use crate::validate::{normalize_separators, split_words, validate_morse};
use crate::Result;
use tracing::debug;

/// Converts Morse code back to text
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'t> {
    table: &'t SymbolTable,
}

impl Default for Decoder<'static> {
    fn default() -> Self {
        Self::with_table(SymbolTable::standard())
    }
}

impl<'t> Decoder<'t> {
    pub fn with_table(table: &'t SymbolTable) -> Self {
        Self { table }
    }

    /// Decode `morse`. Slash separators may carry any surrounding whitespace;
    /// letters are separated by spaces.
    pub fn decode(&self, morse: &str) -> Result<String> {
        validate_morse(self.table, morse)?;

        let normalized = normalize_separators(morse);
        let words: Vec<String> = split_words(&normalized)
            .map(|tokens| {
                tokens
                    .filter(|token| !token.is_empty())
                    .filter_map(|token| self.table.character(token))
                    .collect()
            })
            .collect();

        debug!("Decoded {} words", words.len());

        Ok(words.join(" "))
    }
}

/// Decode with the standard table
pub fn decode(morse: &str) -> Result<String> {
    Decoder::default().decode(morse)
}
