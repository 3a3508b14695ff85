//! End-to-end behavior of `multiply`: concrete scenarios, boundary sizes,
//! and schoolbook cross-checks mod 2^64.

use triconv::{cyclic_mul, multiply};

#[inline]
#[track_caller]
fn det_coeffs(n: usize, seed: u64) -> Vec<i64> {
    let mut state = seed.wrapping_mul(0x5851_F42D_4C95_7F2D).wrapping_add(1);
    (0..n)
        .map(|i| {
            state = state
                .wrapping_mul(0x5851_F42D_4C95_7F2D)
                .wrapping_add(0x1405_7B7E_F767_814F);
            (state ^ (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)) as i64
        })
        .collect()
}

/// O(n²) reference convolution with wrapping 64-bit arithmetic.
fn schoolbook(p: &[i64], q: &[i64]) -> Vec<i64> {
    let mut out = vec![0u64; p.len() + q.len() - 1];
    for (i, &pi) in p.iter().enumerate() {
        for (j, &qj) in q.iter().enumerate() {
            out[i + j] = out[i + j].wrapping_add((pi as u64).wrapping_mul(qj as u64));
        }
    }
    out.into_iter().map(|x| x as i64).collect()
}

#[test]
fn binomial_squared() {
    assert_eq!(multiply(&[1, 1], &[1, 1]), vec![1, 2, 1]);
}

#[test]
fn telescoping_product() {
    // (1 − x)(1 + x + x²) = 1 − x³
    assert_eq!(multiply(&[1, -1], &[1, 1, 1]), vec![1, 0, 0, -1]);
}

#[test]
fn wraps_mod_2_to_64() {
    // 2^63 · 2 = 2^64 ≡ 0
    assert_eq!(multiply(&[i64::MIN], &[2]), vec![0]);
}

#[test]
fn negative_coefficients() {
    assert_eq!(
        multiply(&[-1, -1, -1], &[1, 2, 3]),
        vec![-1, -3, -6, -5, -3]
    );
}

#[test]
fn empty_inputs_give_empty_product() {
    assert_eq!(multiply(&[], &[1, 2, 3]), Vec::<i64>::new());
    assert_eq!(multiply(&[1, 2, 3], &[]), Vec::<i64>::new());
}

#[test]
fn multiplicative_identity() {
    let p = det_coeffs(100, 9);
    assert_eq!(multiply(&p, &[1]), p);
}

#[test]
fn zero_annihilates() {
    let p = det_coeffs(57, 10);
    assert_eq!(multiply(&p, &[0]), vec![0; 57]);
}

#[test]
fn monomial_shifts() {
    let p = det_coeffs(40, 11);
    for k in [1usize, 5, 26] {
        let mut monomial = vec![0i64; k + 1];
        monomial[k] = 1;
        let got = multiply(&p, &monomial);
        let mut want = vec![0i64; k];
        want.extend_from_slice(&p);
        assert_eq!(got, want, "shift by {k}");
    }
}

#[test]
fn output_length() {
    for (lp, lq) in [(1usize, 1usize), (1, 500), (17, 4), (243, 243)] {
        let p = det_coeffs(lp, 21);
        let q = det_coeffs(lq, 22);
        assert_eq!(multiply(&p, &q).len(), lp + lq - 1);
    }
}

#[test]
fn matches_schoolbook_random_100() {
    let p = det_coeffs(100, 0xA1);
    let q = det_coeffs(100, 0xB2);
    assert_eq!(multiply(&p, &q), schoolbook(&p, &q));
}

#[test]
fn matches_schoolbook_around_power_of_three_sizes() {
    // |p|+|q|−1 exactly 27, one less, one more: exercises the padding edge.
    for (lp, lq) in [(14usize, 14usize), (13, 14), (14, 15), (1, 27), (41, 41)] {
        let p = det_coeffs(lp, lp as u64);
        let q = det_coeffs(lq, 1000 + lq as u64);
        assert_eq!(
            multiply(&p, &q),
            schoolbook(&p, &q),
            "sizes ({lp}, {lq})"
        );
    }
}

#[test]
fn matches_schoolbook_through_nested_recursion() {
    // Output length beyond 3^8 pushes the cyclic core to n = 3^9, whose
    // block products (size 81) recurse inside `mul` as well.
    let p = det_coeffs(3_300, 77);
    let q = det_coeffs(3_300, 78);
    assert_eq!(multiply(&p, &q), schoolbook(&p, &q));
}

#[test]
fn parity_vectors_small() {
    let len = 500;
    let p: Vec<i64> = (0..len).map(|i| i % 2).collect();
    let q: Vec<i64> = (0..len).map(|i| (i + 1) % 2).collect();
    assert_eq!(multiply(&p, &q), schoolbook(&p, &q));
}

#[test]
fn cyclic_product_wraps_indices() {
    // (1 + x + x²)² mod (x³ − 1): every coefficient is 3.
    let mut target = vec![0u64; 3];
    cyclic_mul(&[1, 1, 1], &[1, 1, 1], &mut target);
    assert_eq!(target, vec![3, 3, 3]);

    // x² · x² = x⁴ ≡ x mod (x³ − 1)
    let mut target = vec![0u64; 3];
    cyclic_mul(&[0, 0, 1], &[0, 0, 1], &mut target);
    assert_eq!(target, vec![0, 1, 0]);
}

#[test]
#[ignore = "large: ~1M-coefficient product"]
fn all_ones_million() {
    // Overlap count has a closed form; the product needs n = 3^13.
    let len = 500_000usize;
    let ones = vec![1i64; len];
    let got = multiply(&ones, &ones);
    assert_eq!(got.len(), 2 * len - 1);
    for (k, &c) in got.iter().enumerate() {
        let lo = k.saturating_sub(len - 1);
        let hi = k.min(len - 1);
        assert_eq!(c as u64, (hi - lo + 1) as u64, "coefficient {k}");
    }
}
