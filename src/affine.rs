//! AffineCipher: multiplicative substitution over an alphabet.
//!
//! Encryption maps position `p` to `(p * key) mod m` and decryption maps
//! `c` to `(c * key⁻¹) mod m`, where `m` is the alphabet size. Positions are
//! 1-based, so the zero residue is written as position `m`. Spaces pass
//! through untouched.

use std::collections::BTreeSet;

use tracing::{debug, trace, warn};

use crate::alphabet::{Alphabet, Symbol};
use crate::error::{AffineCryptError, Result};
use crate::keys::{KeyClassifier, KeySpace};
use crate::math::euclid::{gcd, modular_inverse};

/// Affine substitution cipher bound to one alphabet.
///
/// # Invariants
///
/// `gcd(key, modulus) == 1` and `modulus == alphabet.size()`. Both are
/// established at construction and the alphabet cannot change afterwards.
#[derive(Debug, Clone)]
pub struct AffineCipher {
    key: i64,
    modulus: i64,
    alphabet: Alphabet,
    key_space: KeySpace,
}

impl AffineCipher {
    /// Creates a cipher with the largest good key for the alphabet.
    ///
    /// # Errors
    /// Returns [`AffineCryptError::IncompleteFactorization`] if the alphabet
    /// size has a prime factor outside the prime catalog.
    ///
    /// # Examples
    ///
    /// ```
    /// use affinecrypt::alphabet::{Alphabet, AlphabetPreset};
    /// use affinecrypt::AffineCipher;
    ///
    /// let cipher = AffineCipher::new_default(Alphabet::preset(AlphabetPreset::Lowercase)).unwrap();
    /// assert_eq!(cipher.key(), 25);
    /// assert_eq!(cipher.modulus(), 26);
    /// ```
    pub fn new_default(alphabet: Alphabet) -> Result<Self> {
        let modulus = alphabet.modulus();
        let key_space = KeyClassifier::new().classify(modulus)?;
        let key = key_space
            .default_key()
            .ok_or(AffineCryptError::InvalidModulus(modulus))?;
        debug!(modulus, key, "cipher created with default key");
        Ok(AffineCipher {
            key,
            modulus,
            alphabet,
            key_space,
        })
    }

    /// Creates a cipher with a caller-supplied key.
    ///
    /// # Errors
    /// - [`AffineCryptError::InsecureKey`] if `key` is not coprime with the
    ///   alphabet size.
    /// - [`AffineCryptError::IncompleteFactorization`] as in
    ///   [`new_default`](Self::new_default).
    ///
    /// # Examples
    ///
    /// ```
    /// use affinecrypt::alphabet::{Alphabet, AlphabetPreset};
    /// use affinecrypt::AffineCipher;
    ///
    /// let lower = Alphabet::preset(AlphabetPreset::Lowercase);
    /// assert!(AffineCipher::new_with_key(lower.clone(), 7).is_ok());
    /// assert!(AffineCipher::new_with_key(lower, 13).is_err());
    /// ```
    pub fn new_with_key(alphabet: Alphabet, key: i64) -> Result<Self> {
        let modulus = alphabet.modulus();
        let key_space = KeyClassifier::new().classify(modulus)?;
        if !key_space.is_good_key(key) {
            warn!(modulus, key, "insecure key rejected");
            return Err(AffineCryptError::InsecureKey { key, modulus });
        }
        debug!(modulus, key, "cipher created with caller key");
        Ok(AffineCipher {
            key,
            modulus,
            alphabet,
            key_space,
        })
    }

    /// The multiplier.
    pub fn key(&self) -> i64 {
        self.key
    }

    /// The alphabet size.
    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    /// The alphabet the cipher was built from.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Good/bad classification of the candidate keys for this alphabet.
    pub fn key_space(&self) -> &KeySpace {
        &self.key_space
    }

    /// Returns `true` if the key is coprime with the modulus.
    pub fn is_coprime(&self) -> bool {
        gcd(self.key, self.modulus) == 1
    }

    /// Returns `true` if `key` would be accepted for this alphabet.
    pub fn is_good_key(&self, key: i64) -> bool {
        self.key_space.is_good_key(key)
    }

    /// Candidate keys `1..=modulus` split into `(bad, good)`.
    pub fn good_and_bad_keys(&self) -> (&BTreeSet<i64>, &BTreeSet<i64>) {
        (self.key_space.bad_keys(), self.key_space.good_keys())
    }

    /// Encrypts symbols, one output symbol per input symbol.
    ///
    /// Positions outside `[1, m]` are taken modulo `m`.
    pub fn encrypt(&self, input: &[Symbol]) -> Vec<Symbol> {
        input
            .iter()
            .map(|&symbol| {
                let encrypted = self.scale(symbol, self.key);
                trace!(?symbol, ?encrypted, "encrypt");
                encrypted
            })
            .collect()
    }

    /// Decrypts symbols with the modular inverse of the key.
    ///
    /// # Errors
    /// Returns [`AffineCryptError::NotCoprime`] if the key has no inverse
    /// modulo the alphabet size.
    pub fn decrypt(&self, input: &[Symbol]) -> Result<Vec<Symbol>> {
        let inverse = modular_inverse(self.key, self.modulus)?;
        trace!(key = self.key, inverse, "key inverse");
        Ok(input
            .iter()
            .map(|&symbol| {
                let decrypted = self.scale(symbol, inverse);
                trace!(?symbol, ?decrypted, "decrypt");
                decrypted
            })
            .collect())
    }

    /// Decrypts symbols without computing the inverse.
    ///
    /// For each ciphertext position `c`, walks `c, c + m, c + 2m, ...` until
    /// it finds a multiple of the key. At most `m` candidates are tried per
    /// symbol. Produces the same output as [`decrypt`](Self::decrypt).
    ///
    /// # Errors
    /// Returns [`AffineCryptError::NotCoprime`] if the key is not coprime
    /// with the modulus or a symbol cannot be resolved within the bound.
    pub fn decrypt_brute_force(&self, input: &[Symbol]) -> Result<Vec<Symbol>> {
        let not_coprime = AffineCryptError::NotCoprime {
            value: self.key,
            modulus: self.modulus,
        };
        let m = i128::from(self.modulus);
        let key = i128::from(self.key).rem_euclid(m);
        if key == 0 || !self.is_coprime() {
            return Err(not_coprime);
        }

        input
            .iter()
            .map(|&symbol| {
                let Symbol::Position(c) = symbol else {
                    return Ok(Symbol::Space);
                };
                let start = i128::from(self.normalize(i128::from(c)));
                let found = (0..m).map(|j| start + j * m).find(|v| v % key == 0);
                match found {
                    Some(v) => {
                        trace!(?symbol, candidate = %v, "brute-force hit");
                        Ok(Symbol::Position(self.normalize(v / key)))
                    }
                    None => Err(not_coprime.clone()),
                }
            })
            .collect()
    }

    /// Maps text to symbols through the alphabet.
    ///
    /// # Errors
    /// Returns [`AffineCryptError::SymbolNotInAlphabet`] for any character
    /// other than space that the alphabet lacks.
    pub fn map_string_to_symbols(&self, text: &str) -> Result<Vec<Symbol>> {
        self.alphabet.to_symbols(text)
    }

    /// Maps symbols back to text through the alphabet.
    ///
    /// # Errors
    /// Returns [`AffineCryptError::PositionOutOfRange`] for positions
    /// outside `[1, m]`.
    pub fn map_symbols_to_string(&self, symbols: &[Symbol]) -> Result<String> {
        self.alphabet.to_text(symbols)
    }

    /// Encrypts a string.
    ///
    /// # Errors
    /// Returns [`AffineCryptError::SymbolNotInAlphabet`] if `plain` holds a
    /// character the alphabet lacks.
    ///
    /// # Examples
    ///
    /// ```
    /// use affinecrypt::alphabet::{Alphabet, AlphabetPreset};
    /// use affinecrypt::AffineCipher;
    ///
    /// let cipher = AffineCipher::new_default(Alphabet::preset(AlphabetPreset::Lowercase)).unwrap();
    /// let secret = cipher.encrypt_text("hello world").unwrap();
    /// assert_ne!(secret, "hello world");
    /// assert_eq!(cipher.decrypt_text(&secret).unwrap(), "hello world");
    /// ```
    pub fn encrypt_text(&self, plain: &str) -> Result<String> {
        let symbols = self.map_string_to_symbols(plain)?;
        let encrypted = self.map_symbols_to_string(&self.encrypt(&symbols))?;
        debug!(len = plain.chars().count(), "text encrypted");
        Ok(encrypted)
    }

    /// Decrypts a string.
    ///
    /// # Errors
    /// - [`AffineCryptError::SymbolNotInAlphabet`] if `ciphertext` holds a
    ///   character the alphabet lacks.
    /// - [`AffineCryptError::NotCoprime`] if the key is not invertible.
    pub fn decrypt_text(&self, ciphertext: &str) -> Result<String> {
        let symbols = self.map_string_to_symbols(ciphertext)?;
        let decrypted = self.map_symbols_to_string(&self.decrypt(&symbols)?)?;
        debug!(len = ciphertext.chars().count(), "text decrypted");
        Ok(decrypted)
    }

    /// Multiplies a position by `factor` modulo `m`. Spaces pass through.
    fn scale(&self, symbol: Symbol, factor: i64) -> Symbol {
        match symbol {
            Symbol::Space => Symbol::Space,
            Symbol::Position(p) => {
                Symbol::Position(self.normalize(i128::from(p) * i128::from(factor)))
            }
        }
    }

    /// Reduces `value` into `[1, m]`, writing the zero residue as `m`.
    fn normalize(&self, value: i128) -> i64 {
        let m = i128::from(self.modulus);
        match value.rem_euclid(m) {
            0 => self.modulus,
            r => r as i64,
        }
    }
}
