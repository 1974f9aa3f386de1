//! Character <-> Morse symbol lookup table
//!
//! Both directions are built from a single list of pairs, so the inverse can
//! never drift from the forward mapping.

use crate::{MorseError, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Separator placed between encoded words
pub const WORD_SEPARATOR: &str = " / ";

/// Separator placed between symbols of one word
pub const LETTER_SEPARATOR: char = ' ';

/// Standard table: letters, digits and punctuation
const STANDARD_PAIRS: [(char, &str); 54] = [
    // Letters
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    // Numbers
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    // Punctuation
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

static STANDARD: Lazy<SymbolTable> = Lazy::new(|| SymbolTable {
    entries: STANDARD_PAIRS.to_vec(),
    forward: STANDARD_PAIRS.iter().copied().collect(),
    inverse: STANDARD_PAIRS.iter().map(|&(ch, sym)| (sym, ch)).collect(),
});

/// Morse code element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorseElement {
    Dot,
    Dash,
}

impl MorseElement {
    /// Parse a single `.` or `-`
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(MorseElement::Dot),
            '-' => Some(MorseElement::Dash),
            _ => None,
        }
    }
}

/// Immutable bidirectional mapping between characters and Morse symbols
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: Vec<(char, &'static str)>,
    forward: HashMap<char, &'static str>,
    inverse: HashMap<&'static str, char>,
}

impl SymbolTable {
    /// The process-wide standard table
    pub fn standard() -> &'static SymbolTable {
        &STANDARD
    }

    /// Build a custom table, rejecting anything that would make decoding
    /// ambiguous.
    pub fn from_pairs(pairs: &[(char, &'static str)]) -> Result<Self> {
        let mut forward = HashMap::with_capacity(pairs.len());
        let mut inverse = HashMap::with_capacity(pairs.len());

        for &(ch, symbol) in pairs {
            if symbol.is_empty() {
                return Err(MorseError::InvalidTable {
                    msg: format!("empty symbol for '{}'", ch),
                });
            }
            if let Some(bad) = symbol.chars().find(|&c| MorseElement::from_char(c).is_none()) {
                return Err(MorseError::InvalidTable {
                    msg: format!("symbol '{}' for '{}' contains '{}'", symbol, ch, bad),
                });
            }
            if forward.insert(ch, symbol).is_some() {
                return Err(MorseError::InvalidTable {
                    msg: format!("character '{}' listed twice", ch),
                });
            }
            if let Some(other) = inverse.insert(symbol, ch) {
                return Err(MorseError::InvalidTable {
                    msg: format!("symbol '{}' shared by '{}' and '{}'", symbol, other, ch),
                });
            }
        }

        Ok(Self {
            entries: pairs.to_vec(),
            forward,
            inverse,
        })
    }

    /// Morse symbol for an (already upper-cased) character
    pub fn symbol(&self, ch: char) -> Option<&'static str> {
        self.forward.get(&ch).copied()
    }

    /// Character for a Morse symbol
    pub fn character(&self, symbol: &str) -> Option<char> {
        self.inverse.get(symbol).copied()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.forward.contains_key(&ch)
    }

    /// Entries in definition order
    pub fn iter(&self) -> impl Iterator<Item = (char, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
