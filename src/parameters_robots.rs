//! Hardcoded link lengths for a few arms

pub mod planar_kinematics {
    use crate::parameters::planar_kinematics::Parameters;

    #[allow(dead_code)]
    impl Parameters {
        /// The reference arm: upper arm 150, forearm 120, palm 90.
        pub fn new() -> Self {
            Parameters {
                upper_arm: 150.0,
                forearm: 120.0,
                palm: 90.0,
            }
        }

        /// All three links of the same length. The wrist can then reach the shoulder itself.
        pub fn equal_links(length: f64) -> Self {
            Parameters {
                upper_arm: length,
                forearm: length,
                palm: length,
            }
        }

        /// Upper arm shorter than the forearm: the wrist cannot come closer than 0.4
        /// to the shoulder.
        pub fn short_shoulder() -> Self {
            Parameters {
                upper_arm: 0.8,
                forearm: 1.2,
                palm: 0.3,
            }
        }
    }

    impl Default for Parameters {
        fn default() -> Self {
            Self::new()
        }
    }
}
