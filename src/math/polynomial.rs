use super::TOLERANCE;

/// Finds the real roots of `a * t² + b * t + c = 0`.
///
/// Falls back to the linear equation `b * t + c = 0` when `a` is negligible.
/// Complex roots are discarded, as is the linear case with `b = 0`. A double
/// root is reported once. Roots come back in no particular order.
#[must_use]
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Vec<f64> {
    let mut roots = Vec::with_capacity(2);

    if a.abs() < TOLERANCE {
        let root = -c / b;
        if root.is_finite() {
            roots.push(root);
        }
        return roots;
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 || !discriminant.is_finite() {
        return roots;
    }
    if discriminant == 0.0 {
        roots.push(-b / (2.0 * a));
        return roots;
    }

    // Citardauq form: avoids cancellation between -b and the square root.
    let q = -0.5 * (b + discriminant.sqrt().copysign(b));
    roots.push(q / a);
    roots.push(c / q);
    roots
}
