use crate::errors::AppError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Camera identifier -> serial number, as read from the serials file.
pub type SerialMap = BTreeMap<String, String>;

pub type ConfigurationBatch = Vec<ConfigurationRecord>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CameraType {
    #[serde(rename = "TYPE_A")]
    TypeA,
    #[serde(rename = "TYPE_B")]
    TypeB,
}

impl CameraType {
    pub const ALL: [CameraType; 2] = [CameraType::TypeA, CameraType::TypeB];

    pub fn as_str(&self) -> &'static str {
        match self {
            CameraType::TypeA => "TYPE_A",
            CameraType::TypeB => "TYPE_B",
        }
    }
}

impl fmt::Display for CameraType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CameraType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CameraType::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| AppError::InvalidSelection(format!(
                "'{}' is not a camera type, expected one of TYPE_A, TYPE_B",
                s
            )))
    }
}

/// One entry of the PUT body sent to the camera config API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigurationRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Serial")]
    pub serial: String,
    #[serde(rename = "Type")]
    pub camera_type: CameraType,
    #[serde(rename = "Gain")]
    pub gain: f64,
}
