//! Monomial multiplication mod `x^m − ω`.
//!
//! Multiplying by `x` shifts coefficients up one slot; a coefficient pushed
//! past degree `m` folds back in with a factor of `ω` since `x^m ≡ ω`. It
//! follows that `x^(3m) = ω³ = 1`, so exponents live in `[0, 3m]` and any
//! `t = q·m + tt` factors as multiply-by-`ω^q` then shift-by-`tt`.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

use crate::{Eisenstein, OMEGA, OMEGA2};

/// Write the coefficients of `x^t · src(x) mod (x^m − ω)` into `dst`.
///
/// `src` and `dst` are disjoint length-`m` blocks; `t` must be in `[0, 3m]`.
pub fn twiddle(src: &[Eisenstein], m: usize, t: usize, dst: &mut [Eisenstein]) {
    debug_assert_eq!(src.len(), m);
    debug_assert_eq!(dst.len(), m);
    debug_assert!(t <= 3 * m);

    if t == 0 || t == 3 * m {
        dst.copy_from_slice(src);
        return;
    }

    let (tt, mult) = if t < m {
        (t, Eisenstein::ONE)
    } else if t < 2 * m {
        (t - m, OMEGA)
    } else {
        (t - 2 * m, OMEGA2)
    };

    // The top tt coefficients wrap around and pick up the ω fold factor.
    for j in 0..tt {
        dst[j] = src[m - tt + j] * OMEGA * mult;
    }
    for j in tt..m {
        dst[j] = src[j - tt] * mult;
    }
}
