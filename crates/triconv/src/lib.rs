//! Polynomial multiplication over Z/2^64 in O(n log n) ring operations.
//!
//! The coefficient ring `R = Z/2^64` has no inverse of 2 and no 3^k-th roots
//! of unity, so neither the usual radix-2 FFT nor a direct radix-3 FFT works
//! in it. Both obstructions disappear in the quadratic extension
//! `T = R[ω]/(ω² + ω + 1)`: `ω` is a primitive cube root of unity there and
//! 3 is invertible in `R` (odd numbers are units), so a radix-3 transform
//! with division by powers of 3 goes through.
//!
//! - [`Eisenstein`]: element of `T`, a pair of wrapping `u64`s.
//! - [`multiply`]: the public entry point, an exact linear convolution of
//!   two `i64` coefficient vectors, coefficients reduced mod 2^64.
//! - Modules: `twiddle`, `fft`, `mul`, `cyclic` for the recursive engine.
//!
//! Everything is in-place over one scratch allocation per top-level call;
//! there is no persistent state.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::doc_markdown
)]
// Index arithmetic over one flat buffer and u64↔i64 reinterpretation are
// the substance of this crate; silence the corresponding pedantic lints.
#![allow(
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::needless_range_loop,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]

pub mod cyclic;
pub mod fft;
pub mod mul;
pub mod twiddle;

pub use cyclic::cyclic_mul;

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Element of `T = Z/2^64[ω]/(ω² + ω + 1)`, stored as `a + b·ω`.
///
/// All arithmetic is wrapping 64-bit arithmetic; wrap-around is the defined
/// semantics, not an error. The name nods to the Eisenstein integers
/// `Z[ω]`, of which `T` is the reduction mod 2^64.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Eisenstein {
    /// Rational part.
    pub a: u64,
    /// ω-part.
    pub b: u64,
}

/// ω, a primitive cube root of unity in `T`.
pub const OMEGA: Eisenstein = Eisenstein::new(0, 1);

/// ω² = −ω − 1.
pub const OMEGA2: Eisenstein = Eisenstein::new(u64::MAX, u64::MAX);

/// 3⁻¹ mod 2^64, embedded in `T`.
pub const INV3: Eisenstein = Eisenstein::new(12_297_829_382_473_034_411, 0);

impl Eisenstein {
    /// Zero.
    pub const ZERO: Self = Self::new(0, 0);

    /// One.
    pub const ONE: Self = Self::new(1, 0);

    /// Construct `a + b·ω`.
    #[inline]
    #[must_use]
    pub const fn new(a: u64, b: u64) -> Self {
        Self { a, b }
    }

    /// Embed `R → T`, `x ↦ x + 0·ω`.
    #[inline]
    #[must_use]
    pub const fn from_u64(x: u64) -> Self {
        Self::new(x, 0)
    }

    /// Conjugation `ω ↔ ω²`: maps `a + bω` to `(a − b) − bω`,
    /// using `ω² = −ω − 1`.
    #[inline]
    #[must_use]
    pub const fn conj(self) -> Self {
        Self::new(self.a.wrapping_sub(self.b), self.b.wrapping_neg())
    }
}

impl Add for Eisenstein {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.a.wrapping_add(rhs.a), self.b.wrapping_add(rhs.b))
    }
}

impl Sub for Eisenstein {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.a.wrapping_sub(rhs.a), self.b.wrapping_sub(rhs.b))
    }
}

impl Neg for Eisenstein {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(self.a.wrapping_neg(), self.b.wrapping_neg())
    }
}

impl Mul for Eisenstein {
    type Output = Self;
    /// `(a + bω)(c + dω) = (ac − bd) + (ad + bc − bd)ω`, folding
    /// `bd·ω²` back with `ω² = −ω − 1`.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let ac = self.a.wrapping_mul(rhs.a);
        let bd = self.b.wrapping_mul(rhs.b);
        let ad = self.a.wrapping_mul(rhs.b);
        let bc = self.b.wrapping_mul(rhs.a);
        Self::new(ac.wrapping_sub(bd), ad.wrapping_add(bc).wrapping_sub(bd))
    }
}

impl AddAssign for Eisenstein {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Eisenstein {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Eisenstein {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Multiply two polynomials with coefficients taken mod 2^64.
///
/// Returns the unique vector `r` of length `|p| + |q| − 1` with
/// `r[k] ≡ Σ_{i+j=k} p[i]·q[j] (mod 2^64)`, reinterpreted as signed
/// two's-complement. The signed and unsigned views are isomorphic, so the
/// engine stores and computes unsigned throughout and converts only here.
///
/// If either input is empty the result is the empty vector.
///
/// Internally both inputs are zero-padded to the smallest power of 3 that
/// fits the product, multiplied cyclically via [`cyclic_mul`], and the
/// result truncated.
#[must_use]
pub fn multiply(p: &[i64], q: &[i64]) -> Vec<i64> {
    if p.is_empty() || q.is_empty() {
        return Vec::new();
    }
    let out_len = p.len() + q.len() - 1;

    let mut n = 1usize;
    while n < out_len {
        n *= 3;
    }

    let mut pp = vec![0u64; n];
    let mut qq = vec![0u64; n];
    for (dst, &src) in pp.iter_mut().zip(p) {
        *dst = src as u64;
    }
    for (dst, &src) in qq.iter_mut().zip(q) {
        *dst = src as u64;
    }

    let mut target = vec![0u64; n];
    cyclic_mul(&pp, &qq, &mut target);

    target.truncate(out_len);
    target.into_iter().map(|x| x as i64).collect()
}
