//! Angle of a triangle from its three sides (law of cosines)

use crate::kinematics_error::KinematicsError;
use tracing::trace;

/// Returns the angle (in radians) between sides `a` and `b` of the triangle with sides
/// `a`, `b`, `c`. The result is in [0, PI].
///
/// `a` and `b` must be positive, `c` must not be negative and the three sides must
/// satisfy the triangle inequality. Collinear triangles (inequality holding with equality)
/// are accepted and give 0 or PI. NaN sides are rejected.
pub fn ab_angle(a: f64, b: f64, c: f64) -> Result<f64, KinematicsError> {
    let degenerate = || {
        trace!("Sides {}, {}, {} do not form a triangle", a, b, c);
        KinematicsError::DegenerateTriangle { a, b, c }
    };

    if a <= 0.0 || b <= 0.0 || c < 0.0 {
        return Err(degenerate());
    }
    if b + c < a || a + c < b || a + b < c {
        return Err(degenerate());
    }

    // Scaled to the longest side so the squares do not overflow.
    let scale = a.max(b).max(c);
    let (a, b, c) = (a / scale, b / scale, c / scale);

    // Rounding may push the cosine of a collinear triangle slightly past ±1.
    let cos = ((a * a + b * b - c * c) / (2.0 * a * b)).clamp(-1.0, 1.0);
    let angle = cos.acos();
    if angle.is_nan() {
        return Err(degenerate());
    }
    Ok(angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const TOLERANCE: f64 = 0.0001;

    fn check(a: f64, b: f64, c: f64, expected: f64) {
        let angle = ab_angle(a, b, c)
            .unwrap_or_else(|e| panic!("Expected {} for ({}, {}, {}), got {}", expected, a, b, c, e));
        assert!((angle - expected).abs() < TOLERANCE,
                "Angle for ({}, {}, {}) is {}, expected {}", a, b, c, angle, expected);
    }

    fn check_invalid(a: f64, b: f64, c: f64) {
        let result = ab_angle(a, b, c);
        assert_eq!(result, Err(KinematicsError::DegenerateTriangle { a, b, c }),
                   "({}, {}, {}) must not be a triangle", a, b, c);
    }

    #[test]
    fn test_right_triangle() {
        check(3.0, 4.0, 5.0, PI / 2.0);
        check(4.0, 5.0, 3.0, 0.6435);
        check(3.0, 5.0, 4.0, 0.9273);
    }

    #[test]
    fn test_equilateral() {
        check(1.0, 1.0, 1.0, PI / 3.0);
    }

    #[test]
    fn test_collinear() {
        check(1.0, 2.0, 3.0, PI);
        check(2.0, 3.0, 1.0, 0.0);
        check(3.0, 1.0, 2.0, 0.0);
    }

    #[test]
    fn test_collinear_with_rounding() {
        // 0.1 + 0.2 is slightly above 0.3 in binary, the cosine lands near -1.
        let angle = ab_angle(0.1, 0.2, 0.30000000000000004).expect("collinear is valid");
        assert!((angle - PI).abs() < 1e-6);
        assert!(!angle.is_nan());
    }

    #[test]
    fn test_large_and_small_sides() {
        check(1e200, 1e200, 1e200, PI / 3.0);
        check(3e300, 4e300, 5e300, PI / 2.0);
        check(1e-200, 1e-200, 1e-200, PI / 3.0);
    }

    #[test]
    fn test_infinite_side() {
        assert!(ab_angle(f64::INFINITY, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_triangle_inequality() {
        check_invalid(0.0, 0.0, 0.0);
        check_invalid(1.0, 3.0, 5.0);
        check_invalid(3.0, 5.0, 1.0);
        check_invalid(5.0, 1.0, 3.0);
    }

    #[test]
    fn test_non_positive_sides() {
        check_invalid(-1.0, 1.0, 1.0);
        check_invalid(1.0, 0.0, 1.0);
        check_invalid(1.0, 1.0, -0.5);
    }

    #[test]
    fn test_zero_opposite_side() {
        // c = 0 is a degenerate but valid triangle with a == b
        check(2.0, 2.0, 0.0, 0.0);
        check_invalid(2.0, 3.0, 0.0);
    }

    #[test]
    fn test_nan_side() {
        assert!(matches!(ab_angle(f64::NAN, 1.0, 1.0),
                         Err(KinematicsError::DegenerateTriangle { .. })));
        assert!(matches!(ab_angle(1.0, 1.0, f64::NAN),
                         Err(KinematicsError::DegenerateTriangle { .. })));
    }
}
