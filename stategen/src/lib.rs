//! # Stategen
//!
//! Strongly-typed state representations generated from loosely-typed game
//! data.
//!
//! Stategen ingests block and entity state descriptions captured from a
//! running game (tagged line corpora and JSON documents) and emits Rust
//! source: closed enums for every property value set, a typed state enum
//! with a catch-all for unknown entities, and total conversions between the
//! generic string form and the typed form in both directions.
//!
//! ## Features
//!
//! - **Corpus ingestion** - Tagged line records and JSON state documents
//! - **Type resolution** - Booleans, small integers, and enum catalogs
//!   inferred from raw values, with per-entity disambiguation overrides
//! - **Bidirectional conversions** - Generated `From` implementations that
//!   degrade unknown input to a catch-all instead of failing
//! - **Chunked dispatch** - Generated matches stay within compiler limits
//!   at any corpus size
//! - **Entity declarations** - Declarative `entities!` input for the
//!   downstream macro layer
//!
//! ## Quick Start
//!
//! ```ignore
//! use stategen::prelude::*;
//!
//! let config = GeneratorConfig::default();
//! let source = generate_from_corpus(corpus, &CorpusFormat::blocks(), &config)?;
//! source.write_to("src/block_state")?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Corpus parsing, the intermediate model, type resolution,
//!   and validation
//! - [`codegen`] - Source emitters, generation configuration, and
//!   orchestration

pub mod prelude;

/// Corpus parsing, the intermediate model, and type resolution.
pub mod schema {
    pub use stategen_schema::*;
}

/// Source code generation from ingested models.
pub mod codegen {
    pub use stategen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use stategen_codegen::{
    CodegenError, GeneratedSource, Generator, GeneratorConfig, generate, generate_entity_decls,
    generate_entity_decls_file, generate_from_corpus, generate_from_corpus_file,
    generate_from_document, generate_from_document_file,
};

pub use stategen_schema::{
    CorpusFormat, ModelError, ModelIr, ParseError, StateDocument, StateModel, parse_corpus,
    parse_entity_data, validate_model,
};

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_facade_generation_round() {
        let corpus = "BLOCKINFO --- stone - \n\
BLOCKINFO --- lever - facing:north \n\
ENUMINFO --- Direction - north,south,east,west\n";

        let config = GeneratorConfig::default();
        let source = generate_from_corpus(corpus, &CorpusFormat::blocks(), &config)
            .expect("Failed to generate");

        assert!(source.types.contains("pub enum Direction {"));
        assert!(source.list.contains("pub enum BlockState<'a> {"));
        assert!(source.de.contains("\"minecraft:lever\""));
        assert!(source.ser.contains("\"minecraft:lever\""));
    }
}
