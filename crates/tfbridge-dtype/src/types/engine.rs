//! Engine tensor element types

use crate::error::ParseDataTypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Element type of an engine tensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineDataType {
    Float32,
    Float64,
    Float16,
    Uint8,
    Int8,
    Int32,
    Int64,
    Boolean,
    /// Placeholder for tensors whose element type is not known yet
    Unknown,
}

impl EngineDataType {
    /// Every engine data type, in declaration order
    pub const ALL: [EngineDataType; 9] = [
        EngineDataType::Float32,
        EngineDataType::Float64,
        EngineDataType::Float16,
        EngineDataType::Uint8,
        EngineDataType::Int8,
        EngineDataType::Int32,
        EngineDataType::Int64,
        EngineDataType::Boolean,
        EngineDataType::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EngineDataType::Float32 => "float32",
            EngineDataType::Float64 => "float64",
            EngineDataType::Float16 => "float16",
            EngineDataType::Uint8 => "uint8",
            EngineDataType::Int8 => "int8",
            EngineDataType::Int32 => "int32",
            EngineDataType::Int64 => "int64",
            EngineDataType::Boolean => "boolean",
            EngineDataType::Unknown => "unknown",
        }
    }

    /// Width of one element in bytes (0 for `Unknown`)
    pub fn num_of_bytes(self) -> usize {
        match self {
            EngineDataType::Float64 | EngineDataType::Int64 => 8,
            EngineDataType::Float32 | EngineDataType::Int32 => 4,
            EngineDataType::Float16 => 2,
            EngineDataType::Uint8 | EngineDataType::Int8 | EngineDataType::Boolean => 1,
            EngineDataType::Unknown => 0,
        }
    }

    pub fn is_floating_point(self) -> bool {
        matches!(
            self,
            EngineDataType::Float32 | EngineDataType::Float64 | EngineDataType::Float16
        )
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            EngineDataType::Uint8
                | EngineDataType::Int8
                | EngineDataType::Int32
                | EngineDataType::Int64
        )
    }
}

impl fmt::Display for EngineDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineDataType {
    type Err = ParseDataTypeError;

    /// Parse an engine type name, case-insensitively
    ///
    /// Examples:
    /// - "float32" → `Float32`
    /// - "INT64" → `Int64`
    /// - "bool" → `Boolean`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if name == "bool" {
            return Ok(EngineDataType::Boolean);
        }

        EngineDataType::ALL
            .into_iter()
            .find(|t| t.as_str() == name)
            .ok_or_else(|| ParseDataTypeError::UnknownEngineName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("float32".parse::<EngineDataType>(), Ok(EngineDataType::Float32));
        assert_eq!("FLOAT64".parse::<EngineDataType>(), Ok(EngineDataType::Float64));
        assert_eq!(" uint8 ".parse::<EngineDataType>(), Ok(EngineDataType::Uint8));
        assert_eq!("bool".parse::<EngineDataType>(), Ok(EngineDataType::Boolean));
        assert_eq!("boolean".parse::<EngineDataType>(), Ok(EngineDataType::Boolean));
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(
            "complex64".parse::<EngineDataType>(),
            Err(ParseDataTypeError::UnknownEngineName("complex64".to_string()))
        );
        assert!("".parse::<EngineDataType>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for t in EngineDataType::ALL {
            assert_eq!(t.to_string().parse::<EngineDataType>(), Ok(t));
        }
    }

    #[test]
    fn test_num_of_bytes() {
        assert_eq!(EngineDataType::Float32.num_of_bytes(), 4);
        assert_eq!(EngineDataType::Float64.num_of_bytes(), 8);
        assert_eq!(EngineDataType::Float16.num_of_bytes(), 2);
        assert_eq!(EngineDataType::Uint8.num_of_bytes(), 1);
        assert_eq!(EngineDataType::Int64.num_of_bytes(), 8);
        assert_eq!(EngineDataType::Unknown.num_of_bytes(), 0);
    }

    #[test]
    fn test_categories() {
        assert!(EngineDataType::Float16.is_floating_point());
        assert!(!EngineDataType::Float16.is_integer());
        assert!(EngineDataType::Int8.is_integer());
        assert!(!EngineDataType::Boolean.is_integer());
        assert!(!EngineDataType::Boolean.is_floating_point());
        assert!(!EngineDataType::Unknown.is_integer());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&EngineDataType::Float32).unwrap(),
            "\"float32\""
        );
        assert_eq!(
            serde_json::from_str::<EngineDataType>("\"int64\"").unwrap(),
            EngineDataType::Int64
        );
    }
}
