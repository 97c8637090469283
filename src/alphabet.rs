//! Alphabets and the symbols they map to.
//!
//! An alphabet is an ordered list of distinct characters. Its order defines
//! the positional form used by the cipher: the first character is position
//! 1 and the last is position `size`. The space character is reserved; it
//! is never part of an alphabet and always maps to [`Symbol::Space`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AffineCryptError, Result};

/// The reserved pass-through character.
pub const SPACE: char = ' ';

/// Minimum number of symbols in an alphabet.
pub const MIN_ALPHABET_SIZE: usize = 2;

/// One element of a plaintext or ciphertext in positional form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// The reserved space, never transformed.
    Space,
    /// A 1-based alphabet position.
    Position(i64),
}

impl Symbol {
    /// Returns `true` for the reserved space.
    pub fn is_space(&self) -> bool {
        matches!(self, Symbol::Space)
    }

    /// Position carried by the symbol, if any.
    pub fn position(&self) -> Option<i64> {
        match self {
            Symbol::Space => None,
            Symbol::Position(p) => Some(*p),
        }
    }
}

/// Ordered set of distinct characters, immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    positions: HashMap<char, i64>,
}

impl Alphabet {
    /// Builds an alphabet from the characters of `symbols`, in order.
    ///
    /// # Errors
    /// - [`AffineCryptError::AlphabetTooShort`] for fewer than 2 characters.
    /// - [`AffineCryptError::DuplicateSymbol`] if a character repeats.
    /// - [`AffineCryptError::ReservedSymbol`] if the space character appears.
    ///
    /// # Examples
    ///
    /// ```
    /// use affinecrypt::alphabet::Alphabet;
    ///
    /// let abc = Alphabet::new("abc").unwrap();
    /// assert_eq!(abc.size(), 3);
    /// assert_eq!(abc.position('b').unwrap(), 2);
    ///
    /// assert!(Alphabet::new("aa").is_err());
    /// ```
    pub fn new(symbols: &str) -> Result<Self> {
        Self::from_symbols(symbols.chars())
    }

    /// Builds an alphabet from any sequence of characters.
    ///
    /// # Errors
    /// Same as [`new`](Self::new).
    pub fn from_symbols<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let symbols: Vec<char> = symbols.into_iter().collect();
        if symbols.len() < MIN_ALPHABET_SIZE {
            return Err(AffineCryptError::AlphabetTooShort(symbols.len()));
        }

        let mut positions = HashMap::with_capacity(symbols.len());
        for (i, &c) in symbols.iter().enumerate() {
            if c == SPACE {
                return Err(AffineCryptError::ReservedSymbol(c));
            }
            if positions.insert(c, i as i64 + 1).is_some() {
                return Err(AffineCryptError::DuplicateSymbol(c));
            }
        }

        Ok(Alphabet { symbols, positions })
    }

    /// Alphabet for a built-in preset.
    pub fn preset(preset: AlphabetPreset) -> Self {
        let symbols: Vec<char> = preset.symbols().chars().collect();
        let positions = symbols
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i as i64 + 1))
            .collect();
        Alphabet { symbols, positions }
    }

    /// Number of symbols.
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// Number of symbols as a modulus.
    pub fn modulus(&self) -> i64 {
        self.symbols.len() as i64
    }

    /// The symbols in positional order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Returns `true` if `c` belongs to the alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.positions.contains_key(&c)
    }

    /// 1-based position of `c`.
    ///
    /// # Errors
    /// Returns [`AffineCryptError::SymbolNotInAlphabet`] if `c` is not a member.
    pub fn position(&self, c: char) -> Result<i64> {
        self.positions
            .get(&c)
            .copied()
            .ok_or(AffineCryptError::SymbolNotInAlphabet(c))
    }

    /// Character at 1-based `position`.
    ///
    /// # Errors
    /// Returns [`AffineCryptError::PositionOutOfRange`] outside `[1, size]`.
    pub fn symbol_at(&self, position: i64) -> Result<char> {
        usize::try_from(position)
            .ok()
            .and_then(|p| p.checked_sub(1))
            .and_then(|i| self.symbols.get(i))
            .copied()
            .ok_or(AffineCryptError::PositionOutOfRange {
                position,
                size: self.symbols.len(),
            })
    }

    /// Maps text to symbols, one per character.
    ///
    /// # Errors
    /// Returns [`AffineCryptError::SymbolNotInAlphabet`] for the first
    /// character (other than space) with no position.
    pub fn to_symbols(&self, text: &str) -> Result<Vec<Symbol>> {
        text.chars()
            .map(|c| {
                if c == SPACE {
                    Ok(Symbol::Space)
                } else {
                    self.position(c).map(Symbol::Position)
                }
            })
            .collect()
    }

    /// Maps symbols back to text, one character per symbol.
    ///
    /// # Errors
    /// Returns [`AffineCryptError::PositionOutOfRange`] for a position that
    /// has no character.
    pub fn to_text(&self, symbols: &[Symbol]) -> Result<String> {
        symbols
            .iter()
            .map(|s| match s {
                Symbol::Space => Ok(SPACE),
                Symbol::Position(p) => self.symbol_at(*p),
            })
            .collect()
    }
}

impl FromStr for Alphabet {
    type Err = AffineCryptError;

    fn from_str(s: &str) -> Result<Self> {
        Alphabet::new(s)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// Built-in alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlphabetPreset {
    /// `a` to `z` (26 symbols).
    Lowercase,
    /// `A` to `Z` (26 symbols).
    Uppercase,
    /// `a` to `z` then `A` to `Z` (52 symbols).
    Letters,
    /// `a` to `z`, `A` to `Z`, then `0` to `9` (62 symbols).
    Alphanumeric,
}

impl AlphabetPreset {
    /// Every preset, in declaration order.
    pub const ALL: [AlphabetPreset; 4] = [
        AlphabetPreset::Lowercase,
        AlphabetPreset::Uppercase,
        AlphabetPreset::Letters,
        AlphabetPreset::Alphanumeric,
    ];

    /// Characters of the preset, in positional order.
    pub fn symbols(&self) -> &'static str {
        match self {
            AlphabetPreset::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            AlphabetPreset::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            AlphabetPreset::Letters => "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
            AlphabetPreset::Alphanumeric => {
                "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789"
            }
        }
    }

    /// Configuration name of the preset.
    pub fn name(&self) -> &'static str {
        match self {
            AlphabetPreset::Lowercase => "lowercase",
            AlphabetPreset::Uppercase => "uppercase",
            AlphabetPreset::Letters => "letters",
            AlphabetPreset::Alphanumeric => "alphanumeric",
        }
    }
}

impl FromStr for AlphabetPreset {
    type Err = AffineCryptError;

    fn from_str(s: &str) -> Result<Self> {
        AlphabetPreset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AffineCryptError::UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for AlphabetPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
