//! Embedded prime catalog and trial-division factorization.
//!
//! The catalog is a fixed ascending table of primes. [`Primes`] walks it
//! lazily and reports exhaustion with `None`, so factorization can stop as
//! soon as the number is fully reduced.

use std::collections::BTreeMap;
use std::iter::FusedIterator;

use tracing::trace;

use crate::error::{AffineCryptError, Result};

/// Number of primes in the embedded catalog.
pub const NUM_PRIMES: usize = 172;

/// Every prime below 1024, ascending.
pub const PRIMES: [i64; NUM_PRIMES] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37,
    41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151,
    157, 163, 167, 173, 179, 181, 191, 193, 197, 199, 211, 223,
    227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281,
    283, 293, 307, 311, 313, 317, 331, 337, 347, 349, 353, 359,
    367, 373, 379, 383, 389, 397, 401, 409, 419, 421, 431, 433,
    439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503,
    509, 521, 523, 541, 547, 557, 563, 569, 571, 577, 587, 593,
    599, 601, 607, 613, 617, 619, 631, 641, 643, 647, 653, 659,
    661, 673, 677, 683, 691, 701, 709, 719, 727, 733, 739, 743,
    751, 757, 761, 769, 773, 787, 797, 809, 811, 821, 823, 827,
    829, 839, 853, 857, 859, 863, 877, 881, 883, 887, 907, 911,
    919, 929, 937, 941, 947, 953, 967, 971, 977, 983, 991, 997,
    1009, 1013, 1019, 1021,
];

/// A finite, ascending table of primes used for trial division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeCatalog {
    primes: &'static [i64],
}

impl Default for PrimeCatalog {
    fn default() -> Self {
        Self::embedded()
    }
}

impl PrimeCatalog {
    /// Catalog backed by [`PRIMES`].
    pub const fn embedded() -> Self {
        PrimeCatalog { primes: &PRIMES }
    }

    /// Catalog backed by a caller-supplied table.
    ///
    /// The table must hold distinct primes in ascending order.
    pub const fn from_static(primes: &'static [i64]) -> Self {
        PrimeCatalog { primes }
    }

    /// Number of primes in the catalog.
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    /// Returns `true` if the catalog holds no primes.
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// Largest prime in the catalog.
    pub fn largest(&self) -> Option<i64> {
        self.primes.last().copied()
    }

    /// Returns a fresh lazy sequence over the catalog, smallest prime first.
    ///
    /// Every call restarts from the beginning.
    pub fn iter(&self) -> Primes {
        Primes {
            inner: self.primes.iter(),
        }
    }

    /// Factorizes `n` by trial division against the catalog.
    ///
    /// # Parameters
    /// - `n`: The number to factorize (must be at least 1).
    ///
    /// # Returns
    /// The prime factors of `n` with their exponents. `1` has no factors.
    ///
    /// # Errors
    /// - [`AffineCryptError::InvalidModulus`] if `n < 1`.
    /// - [`AffineCryptError::IncompleteFactorization`] if the catalog runs
    ///   out before `n` reduces to 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use affinecrypt::math::primes::PrimeCatalog;
    ///
    /// let f = PrimeCatalog::embedded().factorize(360).unwrap();
    /// assert_eq!(f.exponent(2), 3);
    /// assert_eq!(f.exponent(3), 2);
    /// assert_eq!(f.exponent(5), 1);
    /// assert_eq!(f.product(), 360);
    /// ```
    pub fn factorize(&self, n: i64) -> Result<Factorization> {
        if n < 1 {
            return Err(AffineCryptError::InvalidModulus(n));
        }

        let mut factors = BTreeMap::new();
        let mut remaining = n;
        let mut primes = self.iter();
        while remaining != 1 {
            let Some(prime) = primes.next() else {
                return Err(AffineCryptError::IncompleteFactorization {
                    number: n,
                    remainder: remaining,
                });
            };
            let (reduced, exponent) = divide_out(remaining, prime);
            if exponent > 0 {
                trace!(n, prime, exponent, "prime factor found");
                factors.insert(prime, exponent);
            }
            remaining = reduced;
        }

        Ok(Factorization { number: n, factors })
    }
}

impl IntoIterator for &PrimeCatalog {
    type Item = i64;
    type IntoIter = Primes;

    fn into_iter(self) -> Primes {
        self.iter()
    }
}

/// Divides `prime` out of `n` as many times as possible.
fn divide_out(mut n: i64, prime: i64) -> (i64, u32) {
    let mut exponent = 0;
    if prime < 2 {
        return (n, exponent);
    }
    while n % prime == 0 {
        n /= prime;
        exponent += 1;
    }
    (n, exponent)
}

/// Lazy ascending sequence of catalog primes. Yields `None` once exhausted.
#[derive(Debug, Clone)]
pub struct Primes {
    inner: std::slice::Iter<'static, i64>,
}

impl Iterator for Primes {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Primes {}

impl FusedIterator for Primes {}

/// Prime factorization of a positive number: prime → exponent.
///
/// Exponents are always at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factorization {
    number: i64,
    factors: BTreeMap<i64, u32>,
}

impl Factorization {
    /// The number that was factorized.
    pub fn number(&self) -> i64 {
        self.number
    }

    /// Prime → exponent map.
    pub fn factors(&self) -> &BTreeMap<i64, u32> {
        &self.factors
    }

    /// Distinct prime factors, ascending.
    pub fn primes(&self) -> impl Iterator<Item = i64> + '_ {
        self.factors.keys().copied()
    }

    /// Exponent of `prime`, or 0 when it does not divide the number.
    pub fn exponent(&self, prime: i64) -> u32 {
        self.factors.get(&prime).copied().unwrap_or(0)
    }

    /// Number of distinct prime factors.
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Returns `true` for the factorization of 1.
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Returns `true` if some prime factor divides `k`.
    pub fn shares_factor_with(&self, k: i64) -> bool {
        self.primes().any(|p| k % p == 0)
    }

    /// Product of `prime^exponent` over all factors.
    pub fn product(&self) -> i64 {
        self.factors
            .iter()
            .map(|(&p, &e)| p.pow(e))
            .product()
    }
}

/// Factorizes `n` against the embedded catalog.
///
/// # Errors
/// See [`PrimeCatalog::factorize`].
pub fn factorize(n: i64) -> Result<Factorization> {
    PrimeCatalog::embedded().factorize(n)
}
