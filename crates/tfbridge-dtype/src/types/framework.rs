//! TensorFlow native data types

use crate::error::ParseDataTypeError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Optional `tf.` / `DT_` prefix in front of a TensorFlow type name
static TYPE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:tf\.|dt_)?([a-z][a-z0-9]*)$").unwrap());

/// Element type of a TensorFlow tensor, as exposed by the native binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkDataType {
    /// 32-bit IEEE 754 floating point
    Float,
    /// 64-bit IEEE 754 floating point
    Double,
    Int32,
    Uint8,
    /// Variable-length byte string
    String,
    Int64,
    Bool,
}

impl FrameworkDataType {
    /// Every framework data type, in native code order
    pub const ALL: [FrameworkDataType; 7] = [
        FrameworkDataType::Float,
        FrameworkDataType::Double,
        FrameworkDataType::Int32,
        FrameworkDataType::Uint8,
        FrameworkDataType::String,
        FrameworkDataType::Int64,
        FrameworkDataType::Bool,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FrameworkDataType::Float => "float",
            FrameworkDataType::Double => "double",
            FrameworkDataType::Int32 => "int32",
            FrameworkDataType::Uint8 => "uint8",
            FrameworkDataType::String => "string",
            FrameworkDataType::Int64 => "int64",
            FrameworkDataType::Bool => "bool",
        }
    }

    /// The `TF_DataType` value used by the C API
    pub fn native_code(self) -> i32 {
        match self {
            FrameworkDataType::Float => 1,
            FrameworkDataType::Double => 2,
            FrameworkDataType::Int32 => 3,
            FrameworkDataType::Uint8 => 4,
            FrameworkDataType::String => 7,
            FrameworkDataType::Int64 => 9,
            FrameworkDataType::Bool => 10,
        }
    }

    /// Reconstruct a type from its `TF_DataType` value
    pub fn from_native_code(code: i32) -> Result<Self, ParseDataTypeError> {
        FrameworkDataType::ALL
            .into_iter()
            .find(|t| t.native_code() == code)
            .ok_or(ParseDataTypeError::UnknownNativeCode(code))
    }

    /// Width of one element in bytes, `None` for variable-length strings
    pub fn byte_size(self) -> Option<usize> {
        match self {
            FrameworkDataType::Double | FrameworkDataType::Int64 => Some(8),
            FrameworkDataType::Float | FrameworkDataType::Int32 => Some(4),
            FrameworkDataType::Uint8 | FrameworkDataType::Bool => Some(1),
            FrameworkDataType::String => None,
        }
    }
}

impl fmt::Display for FrameworkDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrameworkDataType {
    type Err = ParseDataTypeError;

    /// Parse a TensorFlow type name, case-insensitively
    ///
    /// Examples:
    /// - "float" → `Float`
    /// - "tf.float64" → `Double`
    /// - "DT_INT64" → `Int64`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ParseDataTypeError::UnknownFrameworkName(s.to_string());

        let caps = TYPE_NAME.captures(s.trim()).ok_or_else(unknown)?;
        let name = caps
            .get(1)
            .map(|m| m.as_str().to_ascii_lowercase())
            .ok_or_else(unknown)?;

        match name.as_str() {
            "float" | "float32" => Ok(FrameworkDataType::Float),
            "double" | "float64" => Ok(FrameworkDataType::Double),
            "int32" => Ok(FrameworkDataType::Int32),
            "uint8" => Ok(FrameworkDataType::Uint8),
            "string" => Ok(FrameworkDataType::String),
            "int64" => Ok(FrameworkDataType::Int64),
            "bool" | "boolean" => Ok(FrameworkDataType::Bool),
            _ => Err(unknown()),
        }
    }
}
