//! Recursive in-place radix-3 FFT over blocks of `T[x]/(x^m − ω)`.
//!
//! A buffer of `N = m·r` elements (`r` a power of 3) is read as a polynomial
//! in `y` of degree `< r` whose coefficients are the length-`m` blocks, i.e.
//! an element of `(T[x]/(x^m − ω))[y]/(y^r − 1)`. The transform point is
//! `ζ = x^(3m/r)`, which has order `r` because `x^(3m) = ω³ = 1`; this needs
//! `r ≤ 3m`, which every caller satisfies.
//!
//! [`fft_dif`] (decimation in frequency) takes normal order to 3-reversed
//! order; [`fft_dit`] (decimation in time) takes 3-reversed back to normal
//! and yields `r` times the original, the caller folding in `1/r` as an
//! accumulated power of 3⁻¹. The ternary digit reversal is never
//! materialized; the recursion into three sub-transforms encodes it.
//!
//! Both routines share a caller-provided scratch of `3m` cells that holds
//! one butterfly's worth of blocks; it is reused across all recursion
//! depths, which only ever shrink `m`'s multiple `rr`.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

use crate::twiddle::twiddle;
use crate::{Eisenstein, OMEGA, OMEGA2};

/// Forward transform, normal order → 3-reversed order. In place.
///
/// `p` must hold exactly `m·r` elements and `tmp` at least `3m`.
pub fn fft_dif(p: &mut [Eisenstein], m: usize, r: usize, tmp: &mut [Eisenstein]) {
    debug_assert_eq!(p.len(), m * r);
    debug_assert!(tmp.len() >= 3 * m);

    if r == 1 {
        return;
    }
    let rr = r / 3;
    let pos1 = m * rr;
    let pos2 = 2 * m * rr;
    // ζ = x^(3m/r); block i's sub-transforms twiddle by ζ^i and ζ^(2i).
    let step = 3 * m / r;

    for i in 0..rr {
        let off = i * m;
        for j in 0..m {
            let x0 = p[off + j];
            let x1 = p[pos1 + off + j];
            let x2 = p[pos2 + off + j];
            tmp[j] = x0 + x1 + x2;
            tmp[m + j] = x0 + OMEGA * x1 + OMEGA2 * x2;
            tmp[2 * m + j] = x0 + OMEGA2 * x1 + OMEGA * x2;
            p[off + j] = tmp[j];
        }
        twiddle(&tmp[m..2 * m], m, i * step, &mut p[pos1 + off..pos1 + off + m]);
        twiddle(
            &tmp[2 * m..3 * m],
            m,
            2 * i * step,
            &mut p[pos2 + off..pos2 + off + m],
        );
    }

    let (lo, rest) = p.split_at_mut(pos1);
    let (mid, hi) = rest.split_at_mut(pos1);
    fft_dif(lo, m, rr, tmp);
    fft_dif(mid, m, rr, tmp);
    fft_dif(hi, m, rr, tmp);
}

/// Inverse transform, 3-reversed order → normal order. In place.
///
/// Produces `r` times the inverse; the caller divides by `r` via 3⁻¹.
pub fn fft_dit(p: &mut [Eisenstein], m: usize, r: usize, tmp: &mut [Eisenstein]) {
    debug_assert_eq!(p.len(), m * r);
    debug_assert!(tmp.len() >= 3 * m);

    if r == 1 {
        return;
    }
    let rr = r / 3;
    let pos1 = m * rr;
    let pos2 = 2 * m * rr;
    let step = 3 * m / r;

    {
        let (lo, rest) = p.split_at_mut(pos1);
        let (mid, hi) = rest.split_at_mut(pos1);
        fft_dit(lo, m, rr, tmp);
        fft_dit(mid, m, rr, tmp);
        fft_dit(hi, m, rr, tmp);
    }

    for i in 0..rr {
        let off = i * m;
        // Inverse twiddles: x^(3m − t) undoes the forward x^t.
        twiddle(
            &p[pos1 + off..pos1 + off + m],
            m,
            3 * m - i * step,
            &mut tmp[m..2 * m],
        );
        twiddle(
            &p[pos2 + off..pos2 + off + m],
            m,
            3 * m - 2 * i * step,
            &mut tmp[2 * m..3 * m],
        );
        for j in 0..m {
            tmp[j] = p[off + j];
            let t0 = tmp[j];
            let t1 = tmp[m + j];
            let t2 = tmp[2 * m + j];
            p[off + j] = t0 + t1 + t2;
            p[pos1 + off + j] = t0 + OMEGA2 * t1 + OMEGA * t2;
            p[pos2 + off + j] = t0 + OMEGA * t1 + OMEGA2 * t2;
        }
    }
}
