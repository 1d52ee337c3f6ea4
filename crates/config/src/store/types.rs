//! Storage backend selector for resource upload.

use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;

/// Backend a deployment uploads task resources to.
///
/// `None` is the sentinel for "resource upload disabled".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResUploadType {
    None,
    Hdfs,
    S3,
    Oss,
    Gcs,
    Abs,
    Obs,
}

impl ResUploadType {
    /// Canonical upper-case name, as written in property files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResUploadType::None => "NONE",
            ResUploadType::Hdfs => "HDFS",
            ResUploadType::S3 => "S3",
            ResUploadType::Oss => "OSS",
            ResUploadType::Gcs => "GCS",
            ResUploadType::Abs => "ABS",
            ResUploadType::Obs => "OBS",
        }
    }
}

impl fmt::Display for ResUploadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResUploadType {
    type Err = ConfigError;

    /// Exact-match resolution against the canonical names; no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NONE" => Ok(ResUploadType::None),
            "HDFS" => Ok(ResUploadType::Hdfs),
            "S3" => Ok(ResUploadType::S3),
            "OSS" => Ok(ResUploadType::Oss),
            "GCS" => Ok(ResUploadType::Gcs),
            "ABS" => Ok(ResUploadType::Abs),
            "OBS" => Ok(ResUploadType::Obs),
            other => Err(ConfigError::UnknownStorageType(other.to_string())),
        }
    }
}
