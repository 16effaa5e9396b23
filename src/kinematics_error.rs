//! Failures of the triangle solver and of the inverse kinematics

/// Reported instead of NaN angles. Neither case is fatal; the caller decides what to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KinematicsError {
    /// Sides `a`, `b`, `c` do not form a triangle (or `a`, `b` are not positive).
    DegenerateTriangle { a: f64, b: f64, c: f64 },

    /// The wrist would need to be `distance` away from the shoulder, but the upper arm
    /// and forearm only span distances between `min` and `max`.
    UnreachableTarget { distance: f64, min: f64, max: f64 },
}

impl std::fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            KinematicsError::DegenerateTriangle { a, b, c } =>
                write!(f, "Not a valid triangle: sides {}, {}, {}", a, b, c),
            KinematicsError::UnreachableTarget { distance, min, max } =>
                write!(f, "Unreachable target: wrist distance {} outside [{}, {}]",
                       distance, min, max),
        }
    }
}

impl std::error::Error for KinematicsError {}
