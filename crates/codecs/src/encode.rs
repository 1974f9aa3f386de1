//! Text to Morse encoder

use crate::table::{SymbolTable, WORD_SEPARATOR};
use crate::validate::validate_text;
use crate::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Encoder behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeOptions {
    /// Skip validation and treat unsupported characters as word boundaries
    #[serde(default)]
    pub skip_unknown: bool,
}

/// Converts English text to Morse code
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'t> {
    table: &'t SymbolTable,
    options: EncodeOptions,
}

impl Default for Encoder<'static> {
    fn default() -> Self {
        Self::new(EncodeOptions::default())
    }
}

impl Encoder<'static> {
    /// Encoder over the standard table
    pub fn new(options: EncodeOptions) -> Self {
        Self::with_table(SymbolTable::standard(), options)
    }
}

impl<'t> Encoder<'t> {
    pub fn with_table(table: &'t SymbolTable, options: EncodeOptions) -> Self {
        Self { table, options }
    }

    /// Encode `text`, joining symbols with a space and words with `" / "`.
    pub fn encode(&self, text: &str) -> Result<String> {
        let upper = text.to_uppercase();

        let words: Vec<String> = if self.options.skip_unknown {
            // Unsupported characters become ordinary whitespace
            let sanitized: String = upper
                .chars()
                .map(|ch| if self.table.contains(ch) { ch } else { ' ' })
                .collect();
            self.encode_words(&sanitized)
        } else {
            validate_text(self.table, text)?;
            self.encode_words(&upper)
        };

        debug!(
            "Encoded {} characters into {} words (skip_unknown={})",
            text.chars().count(),
            words.len(),
            self.options.skip_unknown
        );

        Ok(words.join(WORD_SEPARATOR))
    }

    fn encode_words(&self, upper: &str) -> Vec<String> {
        upper
            .split_whitespace()
            .map(|word| self.encode_word(word))
            .filter(|encoded| !encoded.is_empty())
            .collect()
    }

    fn encode_word(&self, word: &str) -> String {
        let mut out = String::new();
        for symbol in word.chars().filter_map(|ch| self.table.symbol(ch)) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(symbol);
        }
        out
    }
}

/// Encode with the standard table, validating first
pub fn encode(text: &str) -> Result<String> {
    Encoder::default().encode(text)
}

/// Encode with the standard table, splitting words at unsupported characters
pub fn encode_skip_unknown(text: &str) -> Result<String> {
    Encoder::new(EncodeOptions { skip_unknown: true }).encode(text)
}
