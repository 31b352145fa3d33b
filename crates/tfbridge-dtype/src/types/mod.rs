//! The two data type enumerations bridged by this crate

mod engine;
mod framework;

pub use engine::EngineDataType;
pub use framework::FrameworkDataType;
