//! Number-theory engine behind the affine cipher.
//!
//! [`euclid`] provides the gcd, the extended Euclidean algorithm and the
//! modular multiplicative inverse; [`primes`] provides the embedded prime
//! catalog and trial-division factorization used to classify keys.

pub mod euclid;
pub mod primes;
