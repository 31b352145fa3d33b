//! Bidirectional lookup tables over a set of equivalence pairs

use super::pairs::EQUIVALENT_TYPES;
use crate::error::{MappingError, UnsupportedTypeError};
use crate::types::{EngineDataType, FrameworkDataType};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Process-wide mapper over [`EQUIVALENT_TYPES`], built on first use
static GLOBAL_MAPPER: LazyLock<TypeMapper> = LazyLock::new(|| {
    let mapper = TypeMapper::from_pairs(EQUIVALENT_TYPES).unwrap();
    log::debug!(
        "Initialized data type mapper with {} equivalence pairs",
        mapper.len()
    );
    mapper
});

/// Translates data types between the engine and TensorFlow
///
/// Both tables are derived from one pair sequence and are never modified
/// after construction, so a shared mapper can be read from any thread.
#[derive(Debug, Clone)]
pub struct TypeMapper {
    pairs: Vec<(EngineDataType, FrameworkDataType)>,
    forward: HashMap<EngineDataType, FrameworkDataType>,
    backward: HashMap<FrameworkDataType, EngineDataType>,
}

impl TypeMapper {
    /// The shared mapper over the declared equivalence pairs
    pub fn global() -> &'static TypeMapper {
        &GLOBAL_MAPPER
    }

    /// Build a mapper from `(engine, framework)` pairs
    ///
    /// Fails if either side of a pair is already paired, since the two
    /// tables could then no longer be inverses of each other.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = (EngineDataType, FrameworkDataType)>,
    {
        let mut mapper = TypeMapper {
            pairs: Vec::new(),
            forward: HashMap::new(),
            backward: HashMap::new(),
        };

        for (engine, framework) in pairs {
            if mapper.forward.contains_key(&engine) {
                return Err(MappingError::DuplicateEngineType(engine));
            }
            if mapper.backward.contains_key(&framework) {
                return Err(MappingError::DuplicateFrameworkType(framework));
            }
            mapper.forward.insert(engine, framework);
            mapper.backward.insert(framework, engine);
            mapper.pairs.push((engine, framework));
        }

        Ok(mapper)
    }

    /// Engine equivalent of a TensorFlow type
    pub fn to_engine_type(
        &self,
        framework: FrameworkDataType,
    ) -> Result<EngineDataType, UnsupportedTypeError> {
        self.engine_type(framework)
            .ok_or(UnsupportedTypeError::Framework(framework))
    }

    /// TensorFlow equivalent of an engine type
    pub fn to_framework_type(
        &self,
        engine: EngineDataType,
    ) -> Result<FrameworkDataType, UnsupportedTypeError> {
        self.framework_type(engine)
            .ok_or(UnsupportedTypeError::Engine(engine))
    }

    pub fn engine_type(&self, framework: FrameworkDataType) -> Option<EngineDataType> {
        self.backward.get(&framework).copied()
    }

    pub fn framework_type(&self, engine: EngineDataType) -> Option<FrameworkDataType> {
        self.forward.get(&engine).copied()
    }

    pub fn supports_engine_type(&self, engine: EngineDataType) -> bool {
        self.forward.contains_key(&engine)
    }

    pub fn supports_framework_type(&self, framework: FrameworkDataType) -> bool {
        self.backward.contains_key(&framework)
    }

    /// Equivalence pairs in the order they were declared
    pub fn pairs(&self) -> &[(EngineDataType, FrameworkDataType)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
