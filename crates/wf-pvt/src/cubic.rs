//! Closed-form real roots of monic cubics.

/// Two roots closer than this (relative, floored at 1) are reported once.
const ROOT_MERGE_TOL: f64 = 1e-10;

/// Real roots of `x³ + a2·x² + a1·x + a0 = 0`, ascending, repeated roots merged.
///
/// Uses the depressed cubic `t³ + p·t + q = 0` with `x = t - a2/3`: one real
/// root (Cardano) when the discriminant is positive, otherwise three real
/// roots from the trigonometric form.
pub fn real_roots(a2: f64, a1: f64, a0: f64) -> Vec<f64> {
    let shift = -a2 / 3.0;
    let p = a1 - a2 * a2 / 3.0;
    let q = 2.0 * a2.powi(3) / 27.0 - a2 * a1 / 3.0 + a0;
    let discriminant = (q / 2.0).powi(2) + (p / 3.0).powi(3);

    let mut roots = if discriminant > 0.0 {
        let sqrt_d = discriminant.sqrt();
        let u = (-q / 2.0 + sqrt_d).cbrt();
        let v = (-q / 2.0 - sqrt_d).cbrt();
        vec![u + v + shift]
    } else if p == 0.0 {
        // discriminant <= 0 with p == 0 forces q == 0: triple root
        vec![shift]
    } else {
        let r = (-p / 3.0).sqrt();
        let cos_arg = ((-q / 2.0) / r.powi(3)).clamp(-1.0, 1.0);
        let phi = cos_arg.acos();
        (0..3)
            .map(|k| {
                let angle = (phi + 2.0 * std::f64::consts::PI * k as f64) / 3.0;
                2.0 * r * angle.cos() + shift
            })
            .collect()
    };

    roots.sort_by(|a, b| a.total_cmp(b));
    roots.dedup_by(|a, b| (*a - *b).abs() <= ROOT_MERGE_TOL * a.abs().max(b.abs()).max(1.0));
    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(a2: f64, a1: f64, a0: f64, x: f64) -> f64 {
        ((x + a2) * x + a1) * x + a0
    }

    fn assert_roots(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "roots: {actual:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "root {a} != {e} (all: {actual:?})");
        }
    }

    #[test]
    fn three_distinct_positive_roots() {
        // (x - 0.1)(x - 0.3)(x - 0.6)
        let roots = real_roots(-1.0, 0.27, -0.018);
        assert_roots(&roots, &[0.1, 0.3, 0.6]);
    }

    #[test]
    fn single_real_root() {
        // (x - 2)(x² + 1)
        let roots = real_roots(-2.0, 1.0, -2.0);
        assert_roots(&roots, &[2.0]);
    }

    #[test]
    fn triple_root() {
        // (x - 1)³
        let roots = real_roots(-3.0, 3.0, -1.0);
        assert_roots(&roots, &[1.0]);
    }

    #[test]
    fn double_root_is_merged() {
        // (x - 1)²(x + 2)
        let roots = real_roots(0.0, -3.0, 2.0);
        assert_roots(&roots, &[-2.0, 1.0]);
    }

    #[test]
    fn roots_satisfy_polynomial() {
        let (a2, a1, a0) = (-1.0, 0.05, -0.002);
        for x in real_roots(a2, a1, a0) {
            assert!(evaluate(a2, a1, a0, x).abs() < 1e-12);
        }
    }
}
