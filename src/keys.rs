//! Key classification for a given modulus.
//!
//! A key is good when it is coprime with the modulus and therefore
//! invertible. Instead of running a gcd per candidate, the classifier
//! factorizes the modulus once and tests each candidate for divisibility by
//! its prime factors.

use std::collections::BTreeSet;

use crate::error::{AffineCryptError, Result};
use crate::math::primes::{Factorization, PrimeCatalog};

/// Partition of the candidate keys `1..=modulus` into good and bad keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpace {
    factorization: Factorization,
    bad: BTreeSet<i64>,
    good: BTreeSet<i64>,
}

impl KeySpace {
    /// The modulus the key space was built for.
    pub fn modulus(&self) -> i64 {
        self.factorization.number()
    }

    /// Prime factorization of the modulus.
    pub fn factorization(&self) -> &Factorization {
        &self.factorization
    }

    /// Keys that share a prime factor with the modulus.
    pub fn bad_keys(&self) -> &BTreeSet<i64> {
        &self.bad
    }

    /// Keys coprime with the modulus.
    pub fn good_keys(&self) -> &BTreeSet<i64> {
        &self.good
    }

    /// Returns `true` if `key` is invertible modulo the modulus.
    ///
    /// Keys above the modulus are judged by the same divisibility test.
    /// Keys below 1 are never good.
    pub fn is_good_key(&self, key: i64) -> bool {
        if key < 1 {
            return false;
        }
        if key <= self.modulus() {
            return !self.bad.contains(&key);
        }
        !self.factorization.shares_factor_with(key)
    }

    /// Largest good key not above the modulus.
    pub fn default_key(&self) -> Option<i64> {
        self.good.last().copied()
    }

    /// Splits into `(bad, good)`.
    pub fn into_parts(self) -> (BTreeSet<i64>, BTreeSet<i64>) {
        (self.bad, self.good)
    }
}

/// Classifies keys using a prime catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyClassifier {
    catalog: PrimeCatalog,
}

impl KeyClassifier {
    /// Classifier backed by the embedded prime catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier backed by a specific catalog.
    pub fn with_catalog(catalog: PrimeCatalog) -> Self {
        KeyClassifier { catalog }
    }

    /// Partitions `1..=alphabet_size` into bad and good keys.
    ///
    /// # Errors
    /// - [`AffineCryptError::InvalidModulus`] if `alphabet_size < 1`.
    /// - [`AffineCryptError::IncompleteFactorization`] if the catalog cannot
    ///   fully factorize `alphabet_size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use affinecrypt::keys::KeyClassifier;
    ///
    /// let space = KeyClassifier::new().classify(10).unwrap();
    /// assert_eq!(space.good_keys().iter().copied().collect::<Vec<_>>(), vec![1, 3, 7, 9]);
    /// assert_eq!(space.bad_keys().len(), 6);
    /// ```
    pub fn classify(&self, alphabet_size: i64) -> Result<KeySpace> {
        let factorization = self.catalog.factorize(alphabet_size)?;
        let (bad, good): (BTreeSet<i64>, BTreeSet<i64>) =
            (1..=alphabet_size).partition(|&k| factorization.shares_factor_with(k));
        Ok(KeySpace {
            factorization,
            bad,
            good,
        })
    }

    /// Largest good key `<= alphabet_size`.
    ///
    /// # Errors
    /// Same as [`classify`](Self::classify).
    pub fn pick_default_good_key(&self, alphabet_size: i64) -> Result<i64> {
        self.classify(alphabet_size)?
            .default_key()
            .ok_or(AffineCryptError::InvalidModulus(alphabet_size))
    }

    /// Returns `true` if `key` is coprime with `alphabet_size`.
    ///
    /// # Errors
    /// Same as [`classify`](Self::classify).
    pub fn is_good_key(&self, key: i64, alphabet_size: i64) -> Result<bool> {
        Ok(self.classify(alphabet_size)?.is_good_key(key))
    }
}
