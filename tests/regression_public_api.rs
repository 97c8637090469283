//! Regression tests for the public API.
//!
//! Expected values are frozen snapshots worked out by hand for small
//! alphabets: any change in output indicates a regression.
//!
//! Coverage:
//! - `math::euclid::{gcd, extended_gcd, extended_gcd_mod, modular_inverse, explain_modular_inverse}`
//! - `math::primes::{PrimeCatalog, factorize}`
//! - `keys::{KeyClassifier, KeySpace}`
//! - `alphabet::{Alphabet, AlphabetPreset, Symbol}`
//! - `config::CipherConfig`
//! - `AffineCipher` (end-to-end)

use affinecrypt::alphabet::{Alphabet, AlphabetPreset, Symbol};
use affinecrypt::config::{AlphabetSource, CipherConfig};
use affinecrypt::error::AffineCryptError;
use affinecrypt::keys::KeyClassifier;
use affinecrypt::math::euclid::{
    explain_modular_inverse, extended_gcd, extended_gcd_mod, gcd, modular_inverse,
};
use affinecrypt::math::primes::{factorize, PrimeCatalog, PRIMES};
use affinecrypt::AffineCipher;

fn lowercase() -> Alphabet {
    Alphabet::preset(AlphabetPreset::Lowercase)
}

// ═══════════════════════════════════════════════════════════════════════
// Euclid — frozen values
// ═══════════════════════════════════════════════════════════════════════

/// `extended_gcd(240, 46)` returns gcd 2 with the textbook coefficients.
#[test]
fn euclid_extended_gcd_240_46() {
    let (g, x, y) = extended_gcd(240, 46);
    assert_eq!(g, 2);
    assert_eq!(240 * x + 46 * y, 2);
    assert_eq!((x, y), (-9, 47));
}

/// Operand order changes the coefficients, not the gcd.
#[test]
fn euclid_extended_gcd_swapped_operands() {
    let (g, x, y) = extended_gcd(46, 240);
    assert_eq!(g, 2);
    assert_eq!((x, y), (47, -9));
}

/// Frozen inverse table for modulus 26.
#[test]
fn euclid_inverse_table_mod_26() {
    let expected = [
        (1, 1),
        (3, 9),
        (5, 21),
        (7, 15),
        (9, 3),
        (11, 19),
        (15, 7),
        (17, 23),
        (19, 11),
        (21, 5),
        (23, 17),
        (25, 25),
    ];
    for (k, inv) in expected {
        assert_eq!(modular_inverse(k, 26).unwrap(), inv, "inverse of {}", k);
    }
}

/// Every even key and 13 have no inverse modulo 26.
#[test]
fn euclid_no_inverse_for_bad_keys_mod_26() {
    for k in (2..=26).step_by(2).chain([13]) {
        assert_eq!(
            modular_inverse(k, 26),
            Err(AffineCryptError::NotCoprime {
                value: k,
                modulus: 26
            })
        );
    }
}

/// `gcd` agrees with `extended_gcd` on sign-mixed inputs.
#[test]
fn euclid_gcd_agrees_with_extended() {
    for (a, b) in [(240, 46), (-240, 46), (17, -5), (0, 12), (12, 0), (-9, -6)] {
        assert_eq!(gcd(a, b) as i64, extended_gcd(a, b).0, "({}, {})", a, b);
    }
}

/// Reduced coefficients are in `[0, b)`.
#[test]
fn euclid_extended_gcd_mod_range() {
    for a in 1..60 {
        let (_, x, y) = extended_gcd_mod(a, 26).unwrap();
        assert!((0..26).contains(&x));
        assert!((0..26).contains(&y));
    }
}

/// The explanation carries the same inverse as `modular_inverse`.
#[test]
fn euclid_explanation_matches_inverse() {
    for k in [1, 3, 5, 7, 25] {
        let e = explain_modular_inverse(k, 26).unwrap();
        assert_eq!(e.inverse(), modular_inverse(k, 26).unwrap());
        assert_eq!(e.identity, 1);
        assert_eq!(e.bezout.gcd, 1);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PrimeCatalog — factorization snapshots
// ═══════════════════════════════════════════════════════════════════════

/// Factorizations of the preset alphabet sizes.
#[test]
fn primes_factorize_preset_sizes() {
    let f26 = factorize(26).unwrap();
    assert_eq!(f26.primes().collect::<Vec<_>>(), vec![2, 13]);

    let f52 = factorize(52).unwrap();
    assert_eq!(f52.exponent(2), 2);
    assert_eq!(f52.exponent(13), 1);

    let f62 = factorize(62).unwrap();
    assert_eq!(f62.primes().collect::<Vec<_>>(), vec![2, 31]);
}

/// The embedded catalog starts at 2 and ends at 1021.
#[test]
fn primes_catalog_bounds() {
    let catalog = PrimeCatalog::embedded();
    assert_eq!(catalog.len(), PRIMES.len());
    assert_eq!(catalog.iter().next(), Some(2));
    assert_eq!(catalog.largest(), Some(1021));
    assert_eq!(catalog.iter().count(), 172);
}

/// A prime just past the catalog cannot be factorized.
#[test]
fn primes_beyond_catalog_fails() {
    assert_eq!(
        factorize(1031),
        Err(AffineCryptError::IncompleteFactorization {
            number: 1031,
            remainder: 1031
        })
    );
}

// ═══════════════════════════════════════════════════════════════════════
// KeyClassifier
// ═══════════════════════════════════════════════════════════════════════

/// Good keys for the preset sizes are the totatives.
#[test]
fn keys_totient_counts() {
    let classifier = KeyClassifier::new();
    for (m, phi) in [(26, 12), (52, 24), (62, 30), (10, 4), (2, 1)] {
        let space = classifier.classify(m).unwrap();
        assert_eq!(space.good_keys().len(), phi, "phi({})", m);
    }
}

/// Default keys for the preset alphabets.
#[test]
fn keys_default_for_presets() {
    let classifier = KeyClassifier::new();
    for preset in AlphabetPreset::ALL {
        let m = Alphabet::preset(preset).modulus();
        assert_eq!(classifier.pick_default_good_key(m).unwrap(), m - 1);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Alphabet
// ═══════════════════════════════════════════════════════════════════════

/// Positional mapping of the lowercase preset.
#[test]
fn alphabet_lowercase_positions() {
    let a = lowercase();
    assert_eq!(a.position('a').unwrap(), 1);
    assert_eq!(a.position('h').unwrap(), 8);
    assert_eq!(a.position('z').unwrap(), 26);
    assert_eq!(a.symbol_at(13).unwrap(), 'm');
}

/// Spaces map to the reserved symbol.
#[test]
fn alphabet_space_is_reserved() {
    let a = lowercase();
    assert_eq!(a.to_symbols(" ").unwrap(), vec![Symbol::Space]);
    assert!(!a.contains(' '));
}

// ═══════════════════════════════════════════════════════════════════════
// AffineCipher — end-to-end snapshots
// ═══════════════════════════════════════════════════════════════════════

/// "hello" under the default key (25) for lowercase.
#[test]
fn cipher_hello_default_key() {
    let cipher = AffineCipher::new_default(lowercase()).unwrap();
    let encrypted = cipher.encrypt_text("hello").unwrap();
    assert_eq!(encrypted, "runnk");
    assert_eq!(cipher.decrypt_text(&encrypted).unwrap(), "hello");
}

/// "hello world" under key 7.
#[test]
fn cipher_hello_world_key_7() {
    let cipher = AffineCipher::new_with_key(lowercase(), 7).unwrap();
    let encrypted = cipher.encrypt_text("hello world").unwrap();
    assert_eq!(encrypted, "diffa eavfb");
    assert_eq!(cipher.decrypt_text(&encrypted).unwrap(), "hello world");
}

/// Key 13 shares the factor 13 with 26.
#[test]
fn cipher_key_13_is_insecure() {
    assert_eq!(
        AffineCipher::new_with_key(lowercase(), 13).unwrap_err(),
        AffineCryptError::InsecureKey {
            key: 13,
            modulus: 26
        }
    );
}

/// Ciphertext symbols outside the alphabet are reported.
#[test]
fn cipher_decrypt_foreign_symbol() {
    let cipher = AffineCipher::new_default(lowercase()).unwrap();
    assert_eq!(
        cipher.decrypt_text("abc1"),
        Err(AffineCryptError::SymbolNotInAlphabet('1'))
    );
}

/// A configured cipher matches a directly built one.
#[test]
fn cipher_from_config_matches_direct() {
    let configured = CipherConfig::new(AlphabetSource::Symbols {
        symbols: "abcdefghijklmnopqrstuvwxyz".to_string(),
    })
    .with_key(7)
    .build()
    .unwrap();
    let direct = AffineCipher::new_with_key(lowercase(), 7).unwrap();
    assert_eq!(
        configured.encrypt_text("attack at dawn").unwrap(),
        direct.encrypt_text("attack at dawn").unwrap()
    );
}
