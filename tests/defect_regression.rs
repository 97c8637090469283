//! Regression tests for defects fixed in earlier cipher behavior.
//!
//! - Output buffers were pre-sized and then appended to, leaving leading
//!   empty entries before the real output.
//! - Brute-force decryption looped forever when the key was not coprime
//!   with the modulus.
//! - Factorization stopped silently when the modulus had a prime factor
//!   beyond the prime catalog, misclassifying keys.
//! - The last alphabet position encrypted to residue 0, which has no
//!   character.

use affinecrypt::alphabet::{Alphabet, AlphabetPreset, Symbol};
use affinecrypt::error::AffineCryptError;
use affinecrypt::keys::KeyClassifier;
use affinecrypt::math::primes::PrimeCatalog;
use affinecrypt::AffineCipher;

fn lowercase() -> Alphabet {
    Alphabet::preset(AlphabetPreset::Lowercase)
}

// ═══════════════════════════════════════════════════════════════════════
// One output symbol per input symbol
// ═══════════════════════════════════════════════════════════════════════

/// Encrypt and decrypt return exactly as many symbols as they receive, in
/// order, for every input length up to 64.
#[test]
fn output_length_matches_input_length() {
    let cipher = AffineCipher::new_with_key(lowercase(), 5).unwrap();
    for len in 0..64i64 {
        let input: Vec<Symbol> = (0..len)
            .map(|i| {
                if i % 5 == 4 {
                    Symbol::Space
                } else {
                    Symbol::Position(i % 26 + 1)
                }
            })
            .collect();
        let encrypted = cipher.encrypt(&input);
        assert_eq!(encrypted.len(), input.len(), "encrypt length {}", len);

        let decrypted = cipher.decrypt(&encrypted).unwrap();
        assert_eq!(decrypted, input, "decrypt mismatch at length {}", len);

        let brute = cipher.decrypt_brute_force(&encrypted).unwrap();
        assert_eq!(brute, input, "brute-force mismatch at length {}", len);
    }
}

/// Spaces stay at the same index after encryption.
#[test]
fn spaces_keep_their_index() {
    let cipher = AffineCipher::new_default(lowercase()).unwrap();
    let text = "  a  b ";
    let encrypted = cipher.encrypt_text(text).unwrap();
    let spaces: Vec<usize> = encrypted.match_indices(' ').map(|(i, _)| i).collect();
    let expected: Vec<usize> = text.match_indices(' ').map(|(i, _)| i).collect();
    assert_eq!(spaces, expected);
}

// ═══════════════════════════════════════════════════════════════════════
// Bounded brute-force decryption
// ═══════════════════════════════════════════════════════════════════════

/// Brute force agrees with inverse-based decryption for every good key of
/// every alphabet size up to 100.
#[test]
fn brute_force_agrees_for_all_good_keys() {
    let classifier = KeyClassifier::new();
    for m in 2..=100usize {
        let alphabet = Alphabet::from_symbols((0..m as u32).filter_map(|i| char::from_u32(0x4E00 + i)))
            .unwrap();
        let space = classifier.classify(m as i64).unwrap();
        let input: Vec<Symbol> = (1..=m as i64).map(Symbol::Position).collect();
        for &key in space.good_keys() {
            let cipher = AffineCipher::new_with_key(alphabet.clone(), key).unwrap();
            let encrypted = cipher.encrypt(&input);
            assert_eq!(
                cipher.decrypt_brute_force(&encrypted).unwrap(),
                input,
                "modulus {} key {}",
                m,
                key
            );
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Factorization beyond the catalog
// ═══════════════════════════════════════════════════════════════════════

/// An alphabet whose size has a prime factor above 1021 cannot build a
/// cipher: keys could not be classified.
#[test]
fn oversized_prime_factor_is_reported() {
    let alphabet =
        Alphabet::from_symbols((0..2062u32).filter_map(|i| char::from_u32(0x4E00 + i))).unwrap();
    assert_eq!(alphabet.size(), 2062);
    assert_eq!(
        AffineCipher::new_default(alphabet.clone()).unwrap_err(),
        AffineCryptError::IncompleteFactorization {
            number: 2062,
            remainder: 1031
        }
    );
    assert!(AffineCipher::new_with_key(alphabet, 3).is_err());
}

/// A truncated catalog fails instead of treating multiples of the missing
/// prime as good keys.
#[test]
fn truncated_catalog_does_not_misclassify() {
    const NO_THIRTEEN: &[i64] = &[2, 3, 5, 7, 11];
    let classifier = KeyClassifier::with_catalog(PrimeCatalog::from_static(NO_THIRTEEN));
    assert_eq!(
        classifier.is_good_key(13, 26),
        Err(AffineCryptError::IncompleteFactorization {
            number: 26,
            remainder: 13
        })
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Last position
// ═══════════════════════════════════════════════════════════════════════

/// The last letter survives a round trip under every good key.
#[test]
fn last_letter_roundtrip() {
    for key in [1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25] {
        let cipher = AffineCipher::new_with_key(lowercase(), key).unwrap();
        let encrypted = cipher.encrypt_text("zz z").unwrap();
        assert_eq!(encrypted, "zz z", "key {}", key);
        assert_eq!(cipher.decrypt_text(&encrypted).unwrap(), "zz z");
    }
}
