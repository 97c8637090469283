//! Error types for the AffineCrypt library.

use thiserror::Error;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, AffineCryptError>;

/// Errors produced by the AffineCrypt library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AffineCryptError {
    /// The value shares a factor with the modulus, so no inverse exists.
    #[error("{value} and {modulus} are not coprime")]
    NotCoprime { value: i64, modulus: i64 },
    /// A caller-supplied key is not invertible for the alphabet size.
    #[error("Insecure key {key} for modulus {modulus}")]
    InsecureKey { key: i64, modulus: i64 },
    /// The character has no position in the alphabet.
    #[error("Symbol {0:?} does not belong to the alphabet")]
    SymbolNotInAlphabet(char),
    /// The prime catalog ran out before the number reduced to 1.
    #[error("Prime catalog exhausted while factorizing {number} (unfactored remainder {remainder})")]
    IncompleteFactorization { number: i64, remainder: i64 },
    /// Alphabet has fewer than 2 symbols.
    #[error("Alphabet must contain at least 2 symbols, got {0}")]
    AlphabetTooShort(usize),
    /// Alphabet lists the same symbol twice.
    #[error("Symbol {0:?} appears more than once in the alphabet")]
    DuplicateSymbol(char),
    /// Alphabet contains the reserved space symbol.
    #[error("Symbol {0:?} is reserved and cannot be part of the alphabet")]
    ReservedSymbol(char),
    /// Modulus or number is below 1.
    #[error("Modulus must be positive, got {0}")]
    InvalidModulus(i64),
    /// Position lies outside `[1, size]`.
    #[error("Position {position} is outside the alphabet range [1, {size}]")]
    PositionOutOfRange { position: i64, size: usize },
    /// Configuration names an alphabet preset that does not exist.
    #[error("Unknown alphabet preset {0:?}")]
    UnknownPreset(String),
}
