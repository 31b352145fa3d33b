//! Error types for data type translation

use crate::types::{EngineDataType, FrameworkDataType};
use thiserror::Error;

/// A lookup key outside the declared equivalence pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnsupportedTypeError {
    #[error("engine data type `{0}` has no TensorFlow equivalent")]
    Engine(EngineDataType),
    #[error("TensorFlow data type `{0}` has no engine equivalent")]
    Framework(FrameworkDataType),
}

/// Failure to read a data type from its name or native code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDataTypeError {
    #[error("unknown engine data type: {0:?}")]
    UnknownEngineName(String),
    #[error("unknown TensorFlow data type: {0:?}")]
    UnknownFrameworkName(String),
    #[error("unknown TensorFlow native type code: {0}")]
    UnknownNativeCode(i32),
}

/// A pair sequence that cannot produce two mutually inverse tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("engine data type `{0}` is paired more than once")]
    DuplicateEngineType(EngineDataType),
    #[error("TensorFlow data type `{0}` is paired more than once")]
    DuplicateFrameworkType(FrameworkDataType),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_messages() {
        assert_eq!(
            UnsupportedTypeError::Framework(FrameworkDataType::Bool).to_string(),
            "TensorFlow data type `bool` has no engine equivalent"
        );
        assert_eq!(
            UnsupportedTypeError::Engine(EngineDataType::Float16).to_string(),
            "engine data type `float16` has no TensorFlow equivalent"
        );
    }

    #[test]
    fn test_parse_messages() {
        assert_eq!(
            ParseDataTypeError::UnknownNativeCode(42).to_string(),
            "unknown TensorFlow native type code: 42"
        );
        assert_eq!(
            ParseDataTypeError::UnknownEngineName("complex64".to_string()).to_string(),
            "unknown engine data type: \"complex64\""
        );
    }
}
