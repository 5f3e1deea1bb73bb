use super::TOLERANCE;

/// Composite trapezoidal rule over ordered `(x, f(x))` samples.
///
/// Returns 0 for fewer than two samples. Sample spacing may be non-uniform.
#[must_use]
pub fn trapezoid(samples: &[(f64, f64)]) -> f64 {
    samples
        .windows(2)
        .map(|w| (w[1].0 - w[0].0) * (w[0].1 + w[1].1) / 2.0)
        .sum()
}

/// Composite Simpson's rule over ordered `(x, f(x))` samples.
///
/// Sample spacing may be non-uniform: each consecutive sample triple is
/// integrated by the parabola through it, so the rule stays exact for
/// quadratics on any spacing. A trailing odd interval is integrated by
/// trapezoid, as is a triple with a degenerate (near-zero) interval.
/// Fewer than three samples fall back to [`trapezoid`].
#[must_use]
pub fn simpson(samples: &[(f64, f64)]) -> f64 {
    if samples.len() < 3 {
        return trapezoid(samples);
    }

    let mut total = 0.0;
    let mut i = 0;
    while i + 2 < samples.len() {
        let (x0, f0) = samples[i];
        let (x1, f1) = samples[i + 1];
        let (x2, f2) = samples[i + 2];
        let h0 = x1 - x0;
        let h1 = x2 - x1;

        if h0.abs() < TOLERANCE || h1.abs() < TOLERANCE {
            total += trapezoid(&samples[i..=i + 2]);
        } else {
            total += (h0 + h1) / 6.0
                * ((2.0 - h1 / h0) * f0
                    + (h0 + h1) * (h0 + h1) / (h0 * h1) * f1
                    + (2.0 - h0 / h1) * f2);
        }
        i += 2;
    }
    if i + 1 < samples.len() {
        total += trapezoid(&samples[i..]);
    }
    total
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample(xs: &[f64], f: impl Fn(f64) -> f64) -> Vec<(f64, f64)> {
        xs.iter().map(|&x| (x, f(x))).collect()
    }

    #[test]
    fn trapezoid_empty_and_single() {
        assert!(trapezoid(&[]).abs() < TOLERANCE);
        assert!(trapezoid(&[(1.0, 5.0)]).abs() < TOLERANCE);
    }

    #[test]
    fn trapezoid_linear_exact() {
        let samples = sample(&[0.0, 0.7, 1.5, 4.0], |x| 3.0 * x - 1.0);
        // ∫ (3x - 1) dx over [0, 4] = 24 - 4 = 20
        let integral = trapezoid(&samples);
        assert!((integral - 20.0).abs() < 1e-12, "expected 20, got {integral}");
    }

    #[test]
    fn simpson_constant_exact() {
        let samples = sample(&[0.0, 1.0, 2.5, 3.0, 4.2], |_| 2.0);
        let integral = simpson(&samples);
        assert!((integral - 8.4).abs() < 1e-12, "expected 8.4, got {integral}");
    }

    #[test]
    fn simpson_quadratic_exact_nonuniform() {
        let samples = sample(&[0.0, 1.0, 2.5, 3.0, 4.2], |x| x * x);
        let expected = 4.2_f64.powi(3) / 3.0;
        let integral = simpson(&samples);
        assert!(
            (integral - expected).abs() < 1e-10,
            "expected {expected}, got {integral}"
        );
    }

    #[test]
    fn simpson_linear_exact_with_odd_tail() {
        // Three intervals: Simpson pair plus one trapezoid interval.
        let samples = sample(&[0.0, 1.0, 2.0, 3.5], |x| 2.0 * x + 1.0);
        // ∫ (2x + 1) dx over [0, 3.5] = 12.25 + 3.5 = 15.75
        let integral = simpson(&samples);
        assert!((integral - 15.75).abs() < 1e-12, "expected 15.75, got {integral}");
    }

    #[test]
    fn simpson_two_samples_falls_back() {
        let samples = [(0.0, 1.0), (2.0, 3.0)];
        let integral = simpson(&samples);
        assert!((integral - 4.0).abs() < 1e-12, "expected 4, got {integral}");
    }

    #[test]
    fn simpson_cubic_uniform_exact() {
        // The classic 1-4-1 rule is exact for cubics on uniform spacing.
        let samples = sample(&[0.0, 0.5, 1.0, 1.5, 2.0], |x| x.powi(3));
        let integral = simpson(&samples);
        assert!((integral - 4.0).abs() < 1e-10, "expected 4, got {integral}");
    }
}
