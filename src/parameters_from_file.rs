//! Supports extracting link lengths from YAML file (optional)

use std::path::Path;
use serde::Deserialize;

use crate::parameter_error::ParameterError;
use crate::parameters::planar_kinematics::Parameters;

#[derive(Deserialize)]
struct LinkLengths {
    #[serde(default)]
    pub upper_arm: Option<f64>,
    #[serde(default)]
    pub forearm: Option<f64>,
    #[serde(default)]
    pub palm: Option<f64>,
}

#[derive(Deserialize)]
struct Root {
    #[serde(rename = "planar_kinematics_link_lengths")]
    pub links: Option<LinkLengths>,
}

impl Parameters {
    /// Read the arm configuration from YAML file. YAML file like this is supported:
    /// ```yaml
    /// planar_kinematics_link_lengths:
    ///   upper_arm: 150.0
    ///   forearm: 120.0
    ///   palm: 90.0
    /// ```
    /// All three lengths are required and must be finite and positive.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Same as [Parameters::from_yaml_file] but takes YAML text.
    pub fn from_yaml(contents: &str) -> Result<Self, ParameterError> {
        let root: Root = serde_saphyr::from_str(contents)
            .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;

        let links = root.links.ok_or_else(|| {
            ParameterError::MissingField("planar_kinematics_link_lengths".to_string())
        })?;

        let field = |value: Option<f64>, name: &str| {
            value.ok_or_else(|| ParameterError::MissingField(name.to_string()))
        };

        let parameters = Parameters {
            upper_arm: field(links.upper_arm, "upper_arm")?,
            forearm: field(links.forearm, "forearm")?,
            palm: field(links.palm, "palm")?,
        };
        parameters.validate()?;
        Ok(parameters)
    }
}
