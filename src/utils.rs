//! Helper functions

use std::f64::consts::PI;
use rand::Rng;

use crate::kinematic_traits::{JointPositions, Joints, Pose};
use crate::parameters::planar_kinematics::Parameters;

pub mod planar_kinematics {
    use crate::kinematic_traits::Joints;

    /// Checks if all elements in the array are finite
    pub fn is_valid(qs: &Joints) -> bool {
        qs.iter().all(|&q| q.is_finite())
    }
}

/// Allows to specify joint values in degrees (converts to radians)
pub fn as_radians(degrees: [f64; 3]) -> Joints {
    degrees.map(f64::to_radians)
}

/// Convert joints in radians to degrees
pub fn to_degrees(joints: &Joints) -> [f64; 3] {
    joints.map(f64::to_degrees)
}

/// Print joint values, converting radians to degrees.
pub fn dump_joints(joints: &Joints) {
    println!("{}", format_joints(joints));
}

pub(crate) fn format_joints(joints: &Joints) -> String {
    let row = joints
        .iter()
        .map(|q| format!("{:7.2}", q.to_degrees()))
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{}]", row)
}

/// Print positions of elbow, wrist and end-effector
pub fn dump_positions(positions: &JointPositions) {
    for (name, p) in ["elbow", "wrist", "palm"].iter().zip(positions.iter()) {
        println!("{:>5}: x: {:.5}, y: {:.5}", name, p.x, p.y);
    }
}

/// Random pose with x, y uniform in the square around the full reach of the arm and
/// alpha uniform in [0, 2 PI). Many of these poses are not reachable.
pub fn random_pose<R: Rng>(rng: &mut R, parameters: &Parameters) -> Pose {
    let size = parameters.full_reach();
    let x = rng.r#gen::<f64>() * 2.0 * size - size;
    let y = rng.r#gen::<f64>() * 2.0 * size - size;
    let alpha = rng.r#gen::<f64>() * 2.0 * PI;
    Pose::new(x, y, alpha)
}
