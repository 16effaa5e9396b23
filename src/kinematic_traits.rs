//! Types shared by all kinematics implementations and the `Kinematics` trait.

extern crate nalgebra as na;

use crate::kinematics_error::KinematicsError;

/// Position in the plane of the arm. The origin is at the shoulder joint.
pub type Point = na::Point2<f64>;

/// Joint rotations in radians, in the order shoulder, elbow, wrist.
/// The shoulder angle is absolute (from the horizontal axis). Elbow and wrist are the
/// interior angles at that joint, so the straight joint is PI, not 0.
/// Angles are never normalized and may exceed ±PI.
pub type Joints = [f64; 3];

/// Positions of the elbow, the wrist and the end of the palm (end-effector), in that order.
pub type JointPositions = [Point; 3];

/// The sentinel returned by [Kinematics::inverse_or_nan] when the pose cannot be reached.
pub const JOINTS_UNREACHABLE: Joints = [f64::NAN; 3];

/// Target of the inverse kinematics: where the tip of the palm must be and how the
/// palm must be turned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// End-effector (palm tip) position.
    pub position: Point,

    /// Angle between the palm and the horizontal axis, in radians. The palm heading
    /// (direction from the wrist to the palm tip) is `-alpha`.
    pub alpha: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, alpha: f64) -> Self {
        Pose {
            position: Point::new(x, y),
            alpha,
        }
    }
}

pub trait Kinematics: Send + Sync {
    /// Find the joint angles that bring the palm tip to the given pose.
    /// Only one of the two elbow configurations is ever returned: the elbow interior
    /// angle comes from the law of cosines and is always in [0, PI].
    fn inverse(&self, pose: &Pose) -> Result<Joints, KinematicsError>;

    /// Same as [Kinematics::inverse] but reports failure as [JOINTS_UNREACHABLE].
    /// NaN angles stay NaN through any further arithmetic, including [Kinematics::forward].
    fn inverse_or_nan(&self, pose: &Pose) -> Joints {
        self.inverse(pose).unwrap_or(JOINTS_UNREACHABLE)
    }

    /// Position of the end-effector for the given joint angles.
    fn forward(&self, joints: &Joints) -> Point {
        self.forward_with_joint_positions(joints)[2]
    }

    /// Positions of elbow, wrist and end-effector for the given joint angles.
    /// Defined for any input; NaN joints produce NaN coordinates.
    fn forward_with_joint_positions(&self, joints: &Joints) -> JointPositions;
}
