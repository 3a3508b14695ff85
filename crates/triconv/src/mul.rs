//! Recursive product in `T[x]/(x^n − ω)`, `n` a power of 3.
//!
//! For `n` beyond the schoolbook cutoff the problem splits bivariately:
//! with `n = m·r` (`m` the smallest power of 3 with `m² ≥ n`, so `r | m`),
//! substituting `y = x^m` turns a size-`n` product into `r` size-`m`
//! products in `(T[x]/(x^m − ω))[y]/(y^r − ω)`. The `y^r − ω` modulus is
//! rotated to `y^r − 1` by the substitution `y ← x^(m/r)·y` (a twiddle per
//! block), which makes the FFT over `y` applicable. The same is done in the
//! conjugate branch `x^m − ω²`, and the two partial products are glued by
//! the Chinese Remainder Theorem over
//! `x^(2m) + x^m + 1 = (x^m − ω)(x^m − ω²)` while resubstituting `y = x^m`.
//!
//! All intermediates live in the caller's `to` region; see [`mul`] for the
//! layout contract.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

use crate::fft::{fft_dif, fft_dit};
use crate::twiddle::twiddle;
use crate::{Eisenstein, INV3, OMEGA, OMEGA2};

/// Sizes at or below this use the quadratic schoolbook product.
const SCHOOLBOOK_CUTOFF: usize = 27;

/// Cells of `to` that [`mul`] touches for a size-`n` product.
///
/// The output occupies `to[..n]`; the rest is working space. Beyond the two
/// size-`n` working copies, the third region only needs to reach the end of
/// the *last* recursive sub-product, hence the recurrence instead of a flat
/// `3n`.
#[must_use]
pub fn scratch_len(n: usize) -> usize {
    if n <= SCHOOLBOOK_CUTOFF {
        return n;
    }
    let (m, r) = split(n);
    2 * n + (r - 1) * m + scratch_len(m)
}

/// Split `n = m·r` with `m` the smallest power of 3 such that `m² ≥ n`.
///
/// Then `r ≤ m` and `r | m`, which keeps every twiddle exponent `(m/r)·i`
/// integral.
fn split(n: usize) -> (usize, usize) {
    let mut m = 1;
    while m * m < n {
        m *= 3;
    }
    (m, n / m)
}

/// `3^(−log₃ r)` in `T`: the inverse-transform scale factor for size `r`.
pub(crate) fn inv_pow3(r: usize) -> Eisenstein {
    let mut inv = Eisenstein::ONE;
    let mut i = 1;
    while i < r {
        inv *= INV3;
        i *= 3;
    }
    inv
}

/// Multiply `p` by `q` in `T[x]/(x^n − ω)`, writing the result to `to[..n]`.
///
/// `n = p.len() = q.len()` must be a power of 3. Both inputs are clobbered.
/// `to` must provide [`scratch_len`]`(n)` cells and `tmp` at least `3m`
/// cells for the FFT butterflies, where `m` is the block size of the
/// top-most split.
pub fn mul(
    p: &mut [Eisenstein],
    q: &mut [Eisenstein],
    to: &mut [Eisenstein],
    tmp: &mut [Eisenstein],
) {
    let n = p.len();
    debug_assert_eq!(q.len(), n);
    debug_assert!(to.len() >= scratch_len(n));

    if n <= SCHOOLBOOK_CUTOFF {
        for slot in to[..n].iter_mut() {
            *slot = Eisenstein::ZERO;
        }
        for i in 0..n {
            for j in 0..n - i {
                to[i + j] += p[i] * q[j];
            }
            // Products past degree n wrap with the ω factor of x^n ≡ ω.
            for j in n - i..n {
                to[i + j - n] += p[i] * q[j] * OMEGA;
            }
        }
        return;
    }

    let (m, r) = split(n);
    let inv = inv_pow3(r);

    let (lo, rest) = to.split_at_mut(n);
    let (mid, hi) = rest.split_at_mut(n);

    // ---- Phase A: the product in (T[x]/(x^m − ω))[y]/(y^r − ω). ----

    // y ← x^(m/r)·y maps y^r − ω to y^r − 1.
    let step = m / r;
    for i in 0..r {
        twiddle(&p[i * m..(i + 1) * m], m, step * i, &mut lo[i * m..(i + 1) * m]);
        twiddle(&q[i * m..(i + 1) * m], m, step * i, &mut mid[i * m..(i + 1) * m]);
    }

    fft_dif(lo, m, r, tmp);
    fft_dif(mid, m, r, tmp);
    for i in 0..r {
        mul(
            &mut lo[i * m..(i + 1) * m],
            &mut mid[i * m..(i + 1) * m],
            &mut hi[i * m..],
            tmp,
        );
    }
    fft_dit(&mut hi[..n], m, r, tmp);
    for x in hi[..n].iter_mut() {
        *x *= inv;
    }

    // Undo the substitution; park the ω-branch product in `mid`.
    for i in 0..r {
        twiddle(
            &hi[i * m..(i + 1) * m],
            m,
            3 * m - step * i,
            &mut mid[i * m..(i + 1) * m],
        );
    }

    // ---- Phase B: the product in (T[x]/(x^m − ω²))[y]/(y^r − ω). ----

    // Conjugation carries the ω²-branch into the ω-branch, where the modulus
    // on y becomes y^r − ω²; the substitution y ← x^(2m/r)·y rotates it to
    // y^r − 1.
    for x in p.iter_mut() {
        *x = x.conj();
    }
    for x in q.iter_mut() {
        *x = x.conj();
    }
    let step2 = 2 * m / r;
    for i in 0..r {
        twiddle(&p[i * m..(i + 1) * m], m, step2 * i, &mut lo[i * m..(i + 1) * m]);
        twiddle(&q[i * m..(i + 1) * m], m, step2 * i, &mut p[i * m..(i + 1) * m]);
    }

    fft_dif(lo, m, r, tmp);
    fft_dif(p, m, r, tmp);
    for i in 0..r {
        mul(
            &mut lo[i * m..(i + 1) * m],
            &mut p[i * m..(i + 1) * m],
            &mut hi[i * m..],
            tmp,
        );
    }
    fft_dit(&mut hi[..n], m, r, tmp);
    for x in hi[..n].iter_mut() {
        *x *= inv;
    }

    // Park the (still conjugated) ω²-branch product in `q`.
    for i in 0..r {
        twiddle(
            &hi[i * m..(i + 1) * m],
            m,
            3 * m - step2 * i,
            &mut q[i * m..(i + 1) * m],
        );
    }

    // ---- Phase C: CRT over x^(2m) + x^m + 1, resubstituting y = x^m. ----
    //
    // With A ≡ result mod (x^m − ω) and B ≡ result mod (x^m − ω²), three
    // times the lift is (1 − ω)·A + (1 − ω²)·B in the low half and
    // (ω² − ω)·(A − B) in the high half. A high-half term that overshoots
    // degree n wraps with a factor ω, and ω·(ω² − ω) = 1 − ω².
    let c_lo_a = Eisenstein::ONE - OMEGA;
    let c_lo_b = Eisenstein::ONE - OMEGA2;
    let c_hi = OMEGA2 - OMEGA;

    for slot in lo.iter_mut() {
        *slot = Eisenstein::ZERO;
    }
    for i in 0..r {
        for j in 0..m {
            let a = mid[i * m + j];
            let b = q[i * m + j].conj();
            lo[i * m + j] += c_lo_a * a + c_lo_b * b;
            let k = i * m + m + j;
            let d = a - b;
            if k < n {
                lo[k] += c_hi * d;
            } else {
                lo[k - n] += c_lo_b * d;
            }
        }
    }
    for x in lo.iter_mut() {
        *x *= INV3;
    }
}
