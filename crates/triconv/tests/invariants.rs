//! Property-based invariants of `multiply`, checked against a schoolbook
//! reference in Z/2^64.

use proptest::collection::vec;
use proptest::prelude::*;
use triconv::multiply;

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

fn arb_poly() -> impl Strategy<Value = Vec<i64>> {
    vec(any::<i64>(), 1..=40)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64, // good CI/runtime balance
        .. ProptestConfig::default()
    })]

    #[test]
    fn length_and_congruence(p in arb_poly(), q in arb_poly()) {
        let r = multiply(&p, &q);
        prop_assert_eq!(r.len(), p.len() + q.len() - 1);
        prop_assert_eq!(r, schoolbook(&p, &q));
    }

    #[test]
    fn commutative(p in arb_poly(), q in arb_poly()) {
        prop_assert_eq!(multiply(&p, &q), multiply(&q, &p));
    }

    #[test]
    fn distributes_over_addition(p in arb_poly(), q in arb_poly(), r in arb_poly()) {
        // p·(q + r) = p·q + p·r, componentwise mod 2^64 after padding.
        let len = q.len().max(r.len());
        let mut sum = vec![0i64; len];
        for (i, slot) in sum.iter_mut().enumerate() {
            let a = q.get(i).copied().unwrap_or(0) as u64;
            let b = r.get(i).copied().unwrap_or(0) as u64;
            *slot = a.wrapping_add(b) as i64;
        }

        let lhs = multiply(&p, &sum);

        let pq = multiply(&p, &q);
        let pr = multiply(&p, &r);
        let mut rhs = vec![0i64; p.len() + len - 1];
        for (i, slot) in rhs.iter_mut().enumerate() {
            let a = pq.get(i).copied().unwrap_or(0) as u64;
            let b = pr.get(i).copied().unwrap_or(0) as u64;
            *slot = a.wrapping_add(b) as i64;
        }

        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn one_is_identity(p in arb_poly()) {
        prop_assert_eq!(multiply(&p, &[1]), p);
    }

    #[test]
    fn monomial_shifts(p in arb_poly(), k in 0usize..20) {
        let mut monomial = vec![0i64; k + 1];
        monomial[k] = 1;
        let got = multiply(&p, &monomial);
        let mut want = vec![0i64; k];
        want.extend_from_slice(&p);
        prop_assert_eq!(got, want);
    }
}
