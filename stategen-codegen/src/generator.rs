//! Code generation orchestration.

use std::fs;
use std::path::Path;

use stategen_schema::ir::ModelIr;
use tracing::debug;

use crate::error::CodegenError;
use crate::rust::{DeGenerator, ListGenerator, SerGenerator, TypeGenerator};

/// Configuration for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Namespace prefixed to entity names in the conversion sources.
    pub namespace: String,
    /// Name of the emitted state enum.
    pub type_name: String,
    /// Maximum entities per dispatch unit in the conversion sources.
    pub chunk_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: "minecraft".to_string(),
            type_name: "BlockState".to_string(),
            chunk_size: 200,
        }
    }
}

impl GeneratorConfig {
    /// Replaces the namespace prefix.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Replaces the emitted type name.
    #[must_use]
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    /// Replaces the dispatch chunk size.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }
}

/// Generated source artifacts for one run.
#[derive(Debug, Clone)]
pub struct GeneratedSource {
    /// Property value enum definitions (`types.rs`).
    pub types: String,
    /// Typed state enum definition (`list.rs`).
    pub list: String,
    /// Generic-to-typed conversion (`de.rs`).
    pub de: String,
    /// Typed-to-generic conversion (`ser.rs`).
    pub ser: String,
}

impl GeneratedSource {
    /// Writes the artifacts into a directory under their module file names.
    ///
    /// # Arguments
    /// * `dir` - Target directory, created if absent
    ///
    /// # Errors
    /// Returns `CodegenError` if creating the directory or writing a file
    /// fails.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<(), CodegenError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        fs::write(dir.join("types.rs"), &self.types)?;
        fs::write(dir.join("list.rs"), &self.list)?;
        fs::write(dir.join("de.rs"), &self.de)?;
        fs::write(dir.join("ser.rs"), &self.ser)?;
        Ok(())
    }
}

/// Orchestrates the emitters over a resolved model.
pub struct Generator<'a> {
    ir: &'a ModelIr,
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(ir: &'a ModelIr, config: &'a GeneratorConfig) -> Self {
        Self { ir, config }
    }

    /// Runs every emitter and collects the artifacts.
    #[must_use]
    pub fn generate(&self) -> GeneratedSource {
        let types = TypeGenerator::new(self.ir).generate();
        let list = ListGenerator::new(self.ir, self.config).generate();
        let de = DeGenerator::new(self.ir, self.config).generate();
        let ser = SerGenerator::new(self.ir, self.config).generate();

        debug!(
            types = types.len(),
            list = list.len(),
            de = de.len(),
            ser = ser.len(),
            "generated source artifacts"
        );

        GeneratedSource {
            types,
            list,
            de,
            ser,
        }
    }
}
