//! Alphabet validation and the byte-to-digit lookup table.

use std::fmt;
use std::str::FromStr;

use crate::IdError;

/// Base58-style default: digits and letters without `0`, `O`, `I` and `l`.
pub const DEFAULT_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Largest symbol count (exclusive); digit 255 is reserved as the sentinel.
pub const MAX_BASE: usize = 255;

/// Marks a lookup slot that holds no alphabet symbol.
const NO_DIGIT: u8 = 255;

/// An ordered set of distinct symbols used as digits.
///
/// Every symbol's code point must fit in a byte so it can index the
/// 256-entry lookup table.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    source: String,
    digits: [u8; 256],
}

impl Alphabet {
    /// Validates `symbols` and builds the lookup table.
    pub fn new(symbols: &str) -> Result<Self, IdError> {
        let chars: Vec<char> = symbols.chars().collect();

        if chars.len() >= MAX_BASE {
            return Err(IdError::AlphabetTooLong { len: chars.len() });
        }
        if chars.len() < 2 {
            return Err(IdError::AlphabetTooShort { len: chars.len() });
        }

        let mut digits = [NO_DIGIT; 256];
        for (digit, &symbol) in chars.iter().enumerate() {
            let slot = u8::try_from(u32::from(symbol))
                .map_err(|_| IdError::UnsupportedSymbol { symbol })?;

            if digits[usize::from(slot)] != NO_DIGIT {
                return Err(IdError::AmbiguousSymbol { symbol });
            }
            // digit < MAX_BASE, checked above
            digits[usize::from(slot)] = digit as u8;
        }

        Ok(Self {
            symbols: chars,
            source: symbols.to_string(),
            digits,
        })
    }

    /// Returns the number of symbols, the radix of the encoding.
    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    /// Returns the symbol for `digit`.
    ///
    /// # Panics
    ///
    /// Panics if `digit >= self.base()`.
    pub fn symbol(&self, digit: u8) -> char {
        self.symbols[usize::from(digit)]
    }

    /// Returns the symbol representing zero.
    pub fn zero(&self) -> char {
        self.symbols[0]
    }

    /// Looks up the digit value of a byte, if it is an alphabet symbol.
    pub fn digit(&self, byte: u8) -> Option<u8> {
        match self.digits[usize::from(byte)] {
            NO_DIGIT => None,
            digit => Some(digit),
        }
    }

    /// Returns true if `symbol` belongs to the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        u8::try_from(u32::from(symbol))
            .ok()
            .and_then(|byte| self.digit(byte))
            .is_some()
    }

    /// Returns the alphabet as a string, in digit order.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHABET).expect("default alphabet is valid")
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("symbols", &self.source)
            .field("base", &self.base())
            .finish()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Alphabet {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
