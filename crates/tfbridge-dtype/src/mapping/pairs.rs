//! Declared engine ⇄ TensorFlow equivalences

use crate::types::{EngineDataType, FrameworkDataType};

/// The single source both lookup directions are derived from
pub const EQUIVALENT_TYPES: [(EngineDataType, FrameworkDataType); 5] = [
    (EngineDataType::Float32, FrameworkDataType::Float),
    (EngineDataType::Float64, FrameworkDataType::Double),
    (EngineDataType::Int32, FrameworkDataType::Int32),
    (EngineDataType::Int64, FrameworkDataType::Int64),
    (EngineDataType::Uint8, FrameworkDataType::Uint8),
];
