//! AffineCrypt multiplicative substitution cipher engine.
//!
//! AffineCrypt enciphers text over a configurable alphabet by mapping each
//! character to its position, multiplying by a key modulo the alphabet size
//! and mapping back. Decryption multiplies by the modular inverse of the key.
//!
//! It is a teaching cipher and offers no real security. The interesting part
//! is the number-theory engine that keeps it invertible: the extended
//! Euclidean algorithm, the modular inverse, and prime factorization of the
//! modulus to tell good (invertible) keys from bad ones.
//!
//! # Architecture
//!
//! ```text
//! math::euclid   (gcd, extended Euclid, modular inverse)
//! math::primes   (embedded prime catalog, trial-division factorization)
//!     ↓
//! keys           (good/bad key classification from the factorization)
//!     ↓
//! AffineCipher   (alphabet ↔ symbols, encrypt with key, decrypt with key⁻¹)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with the default key:
//!
//! ```
//! use affinecrypt::alphabet::{Alphabet, AlphabetPreset};
//! use affinecrypt::AffineCipher;
//!
//! let cipher = AffineCipher::new_default(Alphabet::preset(AlphabetPreset::Lowercase)).unwrap();
//! assert_eq!(cipher.key(), 25);
//!
//! let secret = cipher.encrypt_text("hello").unwrap();
//! assert_eq!(cipher.decrypt_text(&secret).unwrap(), "hello");
//! ```
//!
//! Keys that share a factor with the alphabet size are rejected:
//!
//! ```
//! use affinecrypt::alphabet::{Alphabet, AlphabetPreset};
//! use affinecrypt::error::AffineCryptError;
//! use affinecrypt::AffineCipher;
//!
//! let result = AffineCipher::new_with_key(Alphabet::preset(AlphabetPreset::Lowercase), 13);
//! assert!(matches!(result, Err(AffineCryptError::InsecureKey { key: 13, modulus: 26 })));
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod config;
pub mod error;
pub mod keys;
pub mod math;

mod affine;

pub use affine::AffineCipher;
pub use alphabet::{Alphabet, AlphabetPreset, Symbol};
pub use config::CipherConfig;
pub use error::{AffineCryptError, Result};
