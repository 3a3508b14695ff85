//! Cyclic product in `R[x]/(x^n − 1)` for `R = Z/2^64`, `n` a power of 3.
//!
//! The inputs are real (no ω-component), so only the `x^m − ω` branch needs
//! computing: the `x^m − ω²` branch is its elementwise conjugate, and the
//! CRT lift back to `R` collapses to a symmetric formula whose result has
//! zero ω-component by construction.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

use crate::fft::{fft_dif, fft_dit};
use crate::mul::{inv_pow3, mul};
use crate::{Eisenstein, INV3, OMEGA, OMEGA2};

/// Largest power of 3 whose square is at most `n`, and the cofactor.
///
/// The mirror image of the split in `mul`: here `m ≤ r ≤ 3m`, which is what
/// the outer FFT over `y^r − 1` wants (`3m/r` stays integral and no
/// substitution twiddle is needed).
fn split(n: usize) -> (usize, usize) {
    let mut m = 1;
    while m * m <= n {
        m *= 3;
    }
    m /= 3;
    (m, n / m)
}

fn is_power_of_three(n: usize) -> bool {
    let mut k = 1usize;
    while k < n {
        match k.checked_mul(3) {
            Some(next) => k = next,
            None => return false,
        }
    }
    k == n
}

/// Multiply `p` by `q` in `R[x]/(x^n − 1)`, writing into `target`.
///
/// All three slices must have the same length `n`, a power of 3 (and at
/// least 1). Allocates one working buffer of `3n + 6m` elements, laid out
/// as `pp[n] | qq[n] | to[n + 3m] | tmp[3m]`; nothing persists after the
/// call.
///
/// # Panics
/// Panics if the slice lengths disagree or `n` is not a power of 3.
pub fn cyclic_mul(p: &[u64], q: &[u64], target: &mut [u64]) {
    let n = p.len();
    assert!(
        n >= 1 && is_power_of_three(n),
        "cyclic_mul: length must be a positive power of 3, got {n}"
    );
    assert_eq!(q.len(), n, "cyclic_mul: input lengths must match");
    assert_eq!(target.len(), n, "cyclic_mul: target length must match");

    let (m, r) = split(n);
    let inv = inv_pow3(r);

    let mut buf = vec![Eisenstein::ZERO; 3 * n + 6 * m];
    let (pp, rest) = buf.split_at_mut(n);
    let (qq, rest) = rest.split_at_mut(n);
    let (to, tmp) = rest.split_at_mut(n + 3 * m);

    for (dst, &src) in pp.iter_mut().zip(p) {
        *dst = Eisenstein::from_u64(src);
    }
    for (dst, &src) in qq.iter_mut().zip(q) {
        *dst = Eisenstein::from_u64(src);
    }

    // Viewed through y = x^m, the inputs live in
    // (T[x]/(x^m − ω))[y]/(y^r − 1); transform, multiply blockwise, invert.
    fft_dif(pp, m, r, tmp);
    fft_dif(qq, m, r, tmp);
    for i in 0..r {
        mul(
            &mut pp[i * m..(i + 1) * m],
            &mut qq[i * m..(i + 1) * m],
            &mut to[i * m..],
            tmp,
        );
    }
    fft_dit(&mut to[..n], m, r, tmp);
    for i in 0..n {
        pp[i] = to[i] * inv;
    }

    // CRT lift with B = conj(A), resubstituting y = x^m. Here y^r ≡ 1, so a
    // high-half term that overshoots degree n wraps around with no extra
    // factor and the coefficient is (ω² − ω) in both branches, unlike the
    // ω-twisted wrap inside `mul`.
    let c_lo_a = Eisenstein::ONE - OMEGA;
    let c_lo_b = Eisenstein::ONE - OMEGA2;
    let c_hi = OMEGA2 - OMEGA;

    for slot in to[..n].iter_mut() {
        *slot = Eisenstein::ZERO;
    }
    for i in 0..r {
        for j in 0..m {
            let u = pp[i * m + j];
            let v = u.conj();
            to[i * m + j] += c_lo_a * u + c_lo_b * v;
            let k = i * m + m + j;
            let d = u - v;
            if k < n {
                to[k] += c_hi * d;
            } else {
                to[k - n] += c_hi * d;
            }
        }
    }

    for (dst, &src) in target.iter_mut().zip(to[..n].iter()) {
        let out = src * INV3;
        debug_assert_eq!(out.b, 0, "CRT lift must land in R");
        *dst = out.a;
    }
}
