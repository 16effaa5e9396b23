use crate::kinematic_traits::Point;

#[cfg(feature = "allow_filesystem")]
pub(crate) use yaml_cases::load_yaml;

#[cfg(feature = "allow_filesystem")]
mod yaml_cases {
    use std::path::Path;

    use anyhow::{Context, Result};
    use serde::Deserialize;

    use crate::kinematic_traits::{Joints, Point};

    #[derive(Debug, Clone)]
    pub struct Case {
        pub id: i32,
        pub(crate) joints: [f64; 3], // degrees
        pub(crate) palm: Point,
    }

    impl Case {
        /// Returns joints converted from degrees to radians.
        pub fn joints_in_radians(&self) -> Joints {
            crate::utils::as_radians(self.joints)
        }
    }

    #[derive(Debug, Deserialize)]
    struct CaseYaml {
        id: i32,
        joints: [f64; 3],
        palm: [f64; 2],
    }

    #[derive(Debug, Deserialize)]
    struct TestsRoot {
        cases: Vec<CaseYaml>,
    }

    /// Load forward kinematics test cases from YAML.
    pub(crate) fn load_yaml(file_path: impl AsRef<Path>) -> Result<Vec<Case>> {
        let p = file_path.as_ref();
        let contents = std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read YAML file: {}", p.display()))?;

        let root: TestsRoot = serde_saphyr::from_str(&contents)
            .context("Failed to parse YAML with serde_saphyr")?;

        Ok(root
            .cases
            .into_iter()
            .map(|c| Case {
                id: c.id,
                joints: c.joints,
                palm: Point::new(c.palm[0], c.palm[1]),
            })
            .collect())
    }
}

pub(crate) fn distance(a: &Point, b: &Point) -> f64 {
    (b - a).norm()
}

pub(crate) fn assert_point_eq(actual: &Point, expected: &Point, tolerance: f64, what: &str) {
    assert!(
        (actual.x - expected.x).abs() <= tolerance && (actual.y - expected.y).abs() <= tolerance,
        "{}: got ({:.6}, {:.6}), expected ({:.6}, {:.6})",
        what, actual.x, actual.y, expected.x, expected.y
    );
}
