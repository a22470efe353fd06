//! Bracketed hybrid Newton/bisection root finding.

use tracing::trace;

/// Maximum number of refinement steps taken by [`find_root`].
pub const MAX_ITERATIONS: usize = 10;

/// `|f(t)|` below which [`find_root`] accepts an estimate.
pub const VALUE_EPSILON: f64 = 1e-4;

/// A scalar function together with its derivative.
pub trait RootFunction {
    /// Evaluates `f(t)`.
    fn value(&self, t: f64) -> f64;

    /// Evaluates `f'(t)`.
    fn derivative(&self, t: f64) -> f64;
}

/// Finds the root of `f` inside `[lower, upper]`, assuming there is at most one.
///
/// Returns `None` when `f(lower)` and `f(upper)` have the same sign or either
/// value is not finite. A bound where `f` is exactly zero is returned as is.
///
/// Each step tries a Newton update from the current estimate; if that update
/// leaves the bracket the bracket is bisected instead. The search stops once
/// `|f| < VALUE_EPSILON` or after [`MAX_ITERATIONS`] steps, in which case the
/// last estimate is returned unconverged.
#[must_use]
pub fn find_root<F>(f: &F, lower: f64, upper: f64) -> Option<f64>
where
    F: RootFunction + ?Sized,
{
    let mut f_lower = f.value(lower);
    let f_upper = f.value(upper);
    if !f_lower.is_finite() || !f_upper.is_finite() {
        return None;
    }
    if f_lower == 0.0 {
        return Some(lower);
    }
    if f_upper == 0.0 {
        return Some(upper);
    }
    if f_lower.signum() == f_upper.signum() {
        return None;
    }

    let (mut a, mut b) = (lower, upper);
    let mut t = 0.5 * (a + b);

    for iteration in 0..MAX_ITERATIONS {
        let value = f.value(t);
        if value.abs() < VALUE_EPSILON {
            trace!(iteration, t, value, "root converged");
            return Some(t);
        }

        let newton = t - value / f.derivative(t);
        if newton.is_finite() && newton >= a && newton <= b {
            t = newton;
            continue;
        }

        let mid = 0.5 * (a + b);
        let f_mid = f.value(mid);
        if f_mid.signum() == f_lower.signum() {
            a = mid;
            f_lower = f_mid;
        } else {
            b = mid;
        }
        t = mid;
    }

    trace!(t, "root finder exhausted its iterations");
    Some(t)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// `t² - k`
    struct Parabola(f64);

    impl RootFunction for Parabola {
        fn value(&self, t: f64) -> f64 {
            t * t - self.0
        }

        fn derivative(&self, t: f64) -> f64 {
            2.0 * t
        }
    }

    /// `atan(10 (t - 0.3))`: Newton overshoots far outside the bracket near the ends.
    struct Steep;

    impl RootFunction for Steep {
        fn value(&self, t: f64) -> f64 {
            (10.0 * (t - 0.3)).atan()
        }

        fn derivative(&self, t: f64) -> f64 {
            let u = 10.0 * (t - 0.3);
            10.0 / (1.0 + u * u)
        }
    }

    #[test]
    fn finds_simple_root() {
        let t = find_root(&Parabola(0.25), 0.0, 1.0).unwrap();
        assert!((t - 0.5).abs() < 1e-4, "t={t}");
    }

    #[test]
    fn converges_off_center() {
        let t = find_root(&Parabola(0.81), 0.0, 1.0).unwrap();
        assert!(Parabola(0.81).value(t).abs() < VALUE_EPSILON, "t={t}");
        assert!((t - 0.9).abs() < 1e-3, "t={t}");
    }

    #[test]
    fn no_sign_change_is_none() {
        assert!(find_root(&Parabola(4.0), 0.0, 1.0).is_none());
        assert!(find_root(&Parabola(-1.0), 0.0, 1.0).is_none());
    }

    #[test]
    fn exact_zero_at_bound() {
        assert_eq!(find_root(&Parabola(0.0), 0.0, 1.0), Some(0.0));
        assert_eq!(find_root(&Parabola(1.0), 0.0, 1.0), Some(1.0));
    }

    #[test]
    fn bisection_rescues_overshooting_newton() {
        let t = find_root(&Steep, 0.0, 1.0).unwrap();
        assert!((0.0..=1.0).contains(&t));
        assert!((t - 0.3).abs() < 1e-3, "t={t}");
    }

    #[test]
    fn non_finite_values_are_rejected() {
        struct Pole;
        impl RootFunction for Pole {
            fn value(&self, t: f64) -> f64 {
                1.0 / t
            }
            fn derivative(&self, t: f64) -> f64 {
                -1.0 / (t * t)
            }
        }
        assert!(find_root(&Pole, 0.0, 1.0).is_none());
    }
}
