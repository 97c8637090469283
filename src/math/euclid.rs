//! Euclidean algorithms: gcd, Bézout coefficients and modular inverse.
//!
//! The extended algorithm keeps two coefficient pairs and updates them with
//! the quotient of every division step, so the coefficients it returns are
//! relative to the original inputs and not to the reduced pair left at
//! termination.

use tracing::debug;

use crate::error::{AffineCryptError, Result};

/// Output of the extended Euclidean algorithm for a pair `(a, b)`.
///
/// `a * x + b * y == gcd` always holds. `inverse` is present only when
/// `gcd == 1` and `b` is a valid modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BezoutResult {
    /// Greatest common divisor (never negative).
    pub gcd: i64,
    /// Coefficient of `a`.
    pub x: i64,
    /// Coefficient of `b`.
    pub y: i64,
    /// Inverse of `a` modulo `b`, reduced into `[0, b)`.
    pub inverse: Option<i64>,
}

impl BezoutResult {
    /// Runs the extended Euclidean algorithm on `(a, b)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use affinecrypt::math::euclid::BezoutResult;
    ///
    /// let r = BezoutResult::compute(7, 26);
    /// assert_eq!(r.gcd, 1);
    /// assert_eq!(r.inverse, Some(15));
    /// ```
    pub fn compute(a: i64, b: i64) -> Self {
        let (gcd, x, y) = extended_gcd(a, b);
        let inverse = if gcd == 1 && b >= 1 {
            Some(x.rem_euclid(b))
        } else {
            None
        };
        BezoutResult { gcd, x, y, inverse }
    }

    /// Returns `true` if the inputs were coprime.
    pub fn is_coprime(&self) -> bool {
        self.gcd == 1
    }
}

/// Bézout identity values for a coprime pair, kept for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BezoutExplanation {
    /// The underlying algorithm output.
    pub bezout: BezoutResult,
    /// `a*x + b*y` evaluated over the integers.
    pub identity: i128,
    /// `(a mod b)*(x mod b) + (b mod b)*(y mod b)`, before the final reduction.
    pub identity_mod_b: i128,
}

impl BezoutExplanation {
    /// Modular inverse carried by the explanation.
    pub fn inverse(&self) -> i64 {
        self.bezout.inverse.unwrap_or_default()
    }
}

/// Greatest common divisor of `a` and `b`.
///
/// Inputs are normalized to their absolute values, so any sign combination
/// terminates. `gcd(a, 0) == |a|` and `gcd(0, b) == |b|`.
///
/// # Examples
///
/// ```
/// use affinecrypt::math::euclid::gcd;
///
/// assert_eq!(gcd(240, 46), 2);
/// assert_eq!(gcd(-12, 18), 6);
/// assert_eq!(gcd(0, 9), 9);
/// ```
pub fn gcd(a: i64, b: i64) -> u64 {
    euclid(a.unsigned_abs(), b.unsigned_abs())
}

fn euclid(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        euclid(b, a % b)
    }
}

/// Extended Euclidean algorithm.
///
/// # Returns
/// `(gcd, x, y)` such that `a * x + b * y == gcd`, with `gcd >= 0`.
///
/// Inputs must stay above `i64::MIN`, whose magnitude has no `i64` form.
///
/// # Examples
///
/// ```
/// use affinecrypt::math::euclid::extended_gcd;
///
/// let (g, x, y) = extended_gcd(240, 46);
/// assert_eq!(g, 2);
/// assert_eq!(240 * x + 46 * y, 2);
/// ```
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut prev_r, mut curr_r) = (a, b);
    let (mut prev_x, mut curr_x) = (1i64, 0i64);
    let (mut prev_y, mut curr_y) = (0i64, 1i64);

    while curr_r != 0 {
        let q = prev_r / curr_r;
        (prev_r, curr_r) = (curr_r, prev_r - q * curr_r);
        (prev_x, curr_x) = (curr_x, prev_x - q * curr_x);
        (prev_y, curr_y) = (curr_y, prev_y - q * curr_y);
    }

    // Truncated division can leave a negative remainder; flipping every sign
    // keeps the identity intact.
    if prev_r < 0 {
        (-prev_r, -prev_x, -prev_y)
    } else {
        (prev_r, prev_x, prev_y)
    }
}

/// Extended Euclidean algorithm with both coefficients reduced into `[0, b)`.
///
/// # Errors
/// Returns [`AffineCryptError::InvalidModulus`] if `b < 1`.
pub fn extended_gcd_mod(a: i64, b: i64) -> Result<(i64, i64, i64)> {
    if b < 1 {
        return Err(AffineCryptError::InvalidModulus(b));
    }
    let (g, x, y) = extended_gcd(a, b);
    Ok((g, x.rem_euclid(b), y.rem_euclid(b)))
}

/// Modular multiplicative inverse of `a` modulo `m`.
///
/// # Returns
/// The unique `inv` in `[0, m)` with `(a * inv) mod m == 1 mod m`.
///
/// # Errors
/// - [`AffineCryptError::InvalidModulus`] if `m < 1`.
/// - [`AffineCryptError::NotCoprime`] if `gcd(a, m) != 1`.
///
/// # Examples
///
/// ```
/// use affinecrypt::math::euclid::modular_inverse;
///
/// assert_eq!(modular_inverse(25, 26).unwrap(), 25);
/// assert!(modular_inverse(13, 26).is_err());
/// ```
pub fn modular_inverse(a: i64, m: i64) -> Result<i64> {
    if m < 1 {
        return Err(AffineCryptError::InvalidModulus(m));
    }
    BezoutResult::compute(a, m)
        .inverse
        .ok_or(AffineCryptError::NotCoprime { value: a, modulus: m })
}

/// Computes the modular inverse together with the Bézout identity values.
///
/// The identity `a*x + b*y` and its reduction modulo `b` are emitted at
/// `debug` level.
///
/// # Errors
/// Same as [`modular_inverse`].
pub fn explain_modular_inverse(a: i64, b: i64) -> Result<BezoutExplanation> {
    if b < 1 {
        return Err(AffineCryptError::InvalidModulus(b));
    }
    let bezout = BezoutResult::compute(a, b);

    let (wa, wb) = (i128::from(a), i128::from(b));
    let identity = wa * i128::from(bezout.x) + wb * i128::from(bezout.y);
    let identity_mod_b = wa.rem_euclid(wb) * i128::from(bezout.x).rem_euclid(wb)
        + wb.rem_euclid(wb) * i128::from(bezout.y).rem_euclid(wb);

    let inverse = bezout.inverse.ok_or(AffineCryptError::NotCoprime {
        value: a,
        modulus: b,
    })?;

    debug!(
        a,
        b,
        x = bezout.x,
        y = bezout.y,
        identity = %identity,
        "ax + by = {}({}) + {}({}) = {}",
        a,
        bezout.x,
        b,
        bezout.y,
        identity
    );
    debug!(
        identity_mod_b = %identity_mod_b,
        "ax + by mod {} = {}",
        b,
        identity_mod_b.rem_euclid(wb)
    );
    debug!(inverse, "1/{} = {} (mod {})", a, inverse, b);

    Ok(BezoutExplanation {
        bezout,
        identity,
        identity_mod_b,
    })
}
