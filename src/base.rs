//! Provides the base for the arm.
//! The base takes arbitrary implementation of Kinematics and is such implementation
//! itself, so bases can be cascaded.
//! ```
//! use std::sync::Arc;
//! use nalgebra::{Isometry2, Vector2};
//! use rs_planar_kinematics::kinematic_traits::{Joints, Kinematics, Point};
//! use rs_planar_kinematics::kinematics_impl::PlanarKinematics;
//! use rs_planar_kinematics::parameters::planar_kinematics::Parameters;
//!
//! let arm = PlanarKinematics::new(Parameters::new());
//!
//! // Shoulder mounted 100 units to the right of the world origin, turned by 90 degrees.
//! let mounted = rs_planar_kinematics::base::Base {
//!   robot: Arc::new(arm),
//!   base: Isometry2::new(Vector2::new(100.0, 0.0), std::f64::consts::FRAC_PI_2),
//! };
//!
//! let joints: Joints = [0.3, 2.0, 2.5];
//! let tip: Point = mounted.forward(&joints);
//! println!("The palm tip is at: {:?}", tip);
//! ```

use std::sync::Arc;
use nalgebra::Isometry2;

use crate::kinematic_traits::{JointPositions, Joints, Kinematics, Pose};
use crate::kinematics_error::KinematicsError;

/// Defines the fixed base that holds the arm. The base moves the shoulder to its
/// installed location and may also rotate the whole arm.
#[derive(Clone)]
pub struct Base {
    pub robot: Arc<dyn Kinematics>, // The arm

    /// Transformation from the world origin to the shoulder.
    pub base: Isometry2<f64>,
}

impl Kinematics for Base {
    fn inverse(&self, pose: &Pose) -> Result<Joints, KinematicsError> {
        // Palm heading is -alpha, rotating the frame by theta adds theta to alpha.
        let local = Pose {
            position: self.base.inverse_transform_point(&pose.position),
            alpha: pose.alpha + self.base.rotation.angle(),
        };
        self.robot.inverse(&local)
    }

    fn forward_with_joint_positions(&self, joints: &Joints) -> JointPositions {
        self.robot
            .forward_with_joint_positions(joints)
            .map(|p| self.base.transform_point(&p))
    }
}
