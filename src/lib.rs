//! Rust implementation of inverse and forward kinematics for a planar arm with three
//! rotational joints: shoulder, elbow and wrist.
//!
//! # Features
//!
//! - Forward kinematics returns the positions of the elbow, the wrist and the end of the palm.
//! - Inverse kinematics finds the joint angles for a given palm tip position and palm
//!   orientation, using the law of cosines on the shoulder-elbow-wrist triangle.
//! - Unreachable targets are reported as an explicit error (or as NaN angles through
//!   `inverse_or_nan` if NaN propagation is wanted).
//! - The arm can be placed on a base, planning in world coordinates.
//! - Link lengths can be read from YAML.
//!
//! # Conventions
//!
//! The shoulder is at the origin. The shoulder angle is measured from the x axis. Elbow and
//! wrist angles are interior angles between the adjacent links, so a straight arm has
//! elbow = wrist = PI. The target orientation `alpha` is the angle between the palm and the
//! horizontal axis, with the palm pointing along `-alpha`. Angles are never normalized.
//!
//! The inverse kinematics returns a single solution: the elbow angle is the principal
//! value of the arc cosine, in [0, PI]. The mirrored elbow configuration is not explored.
//!
//! ```
//! use rs_planar_kinematics::kinematic_traits::{Kinematics, Pose};
//! use rs_planar_kinematics::kinematics_impl::PlanarKinematics;
//! use rs_planar_kinematics::parameters::planar_kinematics::Parameters;
//!
//! let arm = PlanarKinematics::new(Parameters::new());
//! let target = Pose::new(100.0, 50.0, 0.3);
//! if let Ok(joints) = arm.inverse(&target) {
//!     let tip = arm.forward(&joints);
//!     assert!((tip - target.position).norm() < 1e-6);
//! }
//! ```

pub mod parameters;
pub mod parameters_robots;
pub mod parameter_error;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;

pub mod utils;
pub mod kinematic_traits;
pub mod kinematics_error;
pub mod kinematics_impl;

pub mod triangle;

pub mod base;

#[cfg(test)]
mod tests;
