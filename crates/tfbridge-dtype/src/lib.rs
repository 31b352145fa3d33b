//! Engine ⇄ TensorFlow data type bridge
//!
//! Translates tensor element types between the engine's data type enumeration
//! and the data types of the TensorFlow native binding.

pub mod error;
pub mod mapping;
pub mod types;

pub use error::{MappingError, ParseDataTypeError, UnsupportedTypeError};
pub use mapping::{
    engine_type, framework_type, to_engine_type, to_framework_type, TypeMapper,
    EQUIVALENT_TYPES,
};
pub use types::{EngineDataType, FrameworkDataType};
