use std::f64::consts::PI;
use nalgebra::Vector2;
use tracing::debug;

use crate::kinematic_traits::{JointPositions, Joints, Kinematics, Point, Pose};
use crate::kinematics_error::KinematicsError;
use crate::parameters::planar_kinematics::Parameters;
use crate::triangle::ab_angle;

#[derive(Debug, Clone, Copy)]
pub struct PlanarKinematics {
    /// The parameters that were used to construct this solver.
    parameters: Parameters,
}

impl PlanarKinematics {
    /// Creates a new `PlanarKinematics` instance with the given parameters.
    /// Parameters are not validated here; non-positive links make every target unreachable.
    pub fn new(parameters: Parameters) -> Self {
        PlanarKinematics { parameters }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}

/// Offset of the given length along the given absolute heading.
fn link(length: f64, heading: f64) -> Vector2<f64> {
    Vector2::new(length * heading.cos(), length * heading.sin())
}

impl Kinematics for PlanarKinematics {
    fn inverse(&self, pose: &Pose) -> Result<Joints, KinematicsError> {
        let p = &self.parameters;
        let (min, max) = p.wrist_reach();

        // The palm heading is -alpha, so the wrist is one palm length back from the tip.
        let wrist_pos = pose.position + link(p.palm, PI - pose.alpha);
        let distance = wrist_pos.coords.norm();
        debug!("IK wrist: ({:.4}, {:.4}), distance from shoulder {:.4}",
               wrist_pos.x, wrist_pos.y, distance);

        let unreachable = |_: KinematicsError| {
            debug!("IK target ({:.4}, {:.4}) alpha {:.4} is unreachable",
                   pose.position.x, pose.position.y, pose.alpha);
            KinematicsError::UnreachableTarget { distance, min, max }
        };

        let elbow = ab_angle(p.upper_arm, p.forearm, distance).map_err(unreachable)?;
        let angle_to_wrist = wrist_pos.y.atan2(wrist_pos.x);

        // Angle at the shoulder vertex of the same triangle, turned to the world frame.
        let shoulder = ab_angle(p.upper_arm, distance, p.forearm).map_err(unreachable)?
            + angle_to_wrist;
        let wrist = -pose.alpha - shoulder - elbow;

        Ok([shoulder, elbow, wrist])
    }

    fn forward_with_joint_positions(&self, joints: &Joints) -> JointPositions {
        let p = &self.parameters;
        let [shoulder, elbow, wrist] = *joints;

        let elbow_pos = Point::origin() + link(p.upper_arm, shoulder);

        // Elbow and wrist angles are interior angles, straight link is PI.
        let forearm_heading = shoulder + elbow - PI;
        let wrist_pos = elbow_pos + link(p.forearm, forearm_heading);

        let palm_heading = forearm_heading + wrist - PI;
        let palm_pos = wrist_pos + link(p.palm, palm_heading);

        [elbow_pos, wrist_pos, palm_pos]
    }
}
