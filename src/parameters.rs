//! Defines the link length data structure

pub mod planar_kinematics {
    use crate::parameter_error::ParameterError;

    /// Link lengths of the arm. See [parameters_robots.rs](parameters_robots.rs) for
    /// predefined sets. Units are up to the application, only ratios matter.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Parameters {
        /// Distance between the shoulder and the elbow.
        pub upper_arm: f64,

        /// Distance between the elbow and the wrist.
        pub forearm: f64,

        /// Distance between the wrist and the end-effector (tip of the palm).
        pub palm: f64,
    }

    impl Parameters {
        /// Checks that all links are finite and strictly positive.
        pub fn validate(&self) -> Result<(), ParameterError> {
            for (name, value) in [
                ("upper_arm", self.upper_arm),
                ("forearm", self.forearm),
                ("palm", self.palm),
            ] {
                if !(value.is_finite() && value > 0.0) {
                    return Err(ParameterError::WrongLength { name: name.to_string(), value });
                }
            }
            Ok(())
        }

        pub fn is_valid(&self) -> bool {
            self.validate().is_ok()
        }

        /// Range of shoulder-to-wrist distances the upper arm and forearm can span,
        /// as (min, max).
        pub fn wrist_reach(&self) -> (f64, f64) {
            ((self.upper_arm - self.forearm).abs(), self.upper_arm + self.forearm)
        }

        /// Radius of the disk containing every reachable end-effector position.
        pub fn full_reach(&self) -> f64 {
            self.upper_arm + self.forearm + self.palm
        }

        /// Convert to string yaml representation (quick viewing, etc).
        pub fn to_yaml(&self) -> String {
            format!(
                "planar_kinematics_link_lengths:\n  \
              upper_arm: {}\n  \
              forearm: {}\n  \
              palm: {}\n",
                self.upper_arm,
                self.forearm,
                self.palm,
            )
        }
    }

}
