//! Engine ⇄ TensorFlow type translation
//!
//! The free functions read the process-wide [`TypeMapper::global`] tables.

mod mapper;
mod pairs;

pub use mapper::TypeMapper;
pub use pairs::EQUIVALENT_TYPES;

use crate::error::UnsupportedTypeError;
use crate::types::{EngineDataType, FrameworkDataType};

/// Engine equivalent of a TensorFlow type
///
/// Examples:
/// - `Double` → `Ok(Float64)`
/// - `Int64` → `Ok(Int64)`
/// - `Bool` → `Err(UnsupportedTypeError::Framework(Bool))`
pub fn to_engine_type(
    framework: FrameworkDataType,
) -> Result<EngineDataType, UnsupportedTypeError> {
    TypeMapper::global().to_engine_type(framework)
}

/// TensorFlow equivalent of an engine type
///
/// Examples:
/// - `Float32` → `Ok(Float)`
/// - `Uint8` → `Ok(Uint8)`
/// - `Float16` → `Err(UnsupportedTypeError::Engine(Float16))`
pub fn to_framework_type(
    engine: EngineDataType,
) -> Result<FrameworkDataType, UnsupportedTypeError> {
    TypeMapper::global().to_framework_type(engine)
}

/// Like [`to_engine_type`], with `None` for unmapped types
pub fn engine_type(framework: FrameworkDataType) -> Option<EngineDataType> {
    TypeMapper::global().engine_type(framework)
}

/// Like [`to_framework_type`], with `None` for unmapped types
pub fn framework_type(engine: EngineDataType) -> Option<FrameworkDataType> {
    TypeMapper::global().framework_type(engine)
}
