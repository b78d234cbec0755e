//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use stategen::prelude::*;
//! ```

// Schema types
pub use stategen_schema::{
    CorpusFormat, ModelError, ModelIr, ParseError, StateDocument, StateModel, parse_corpus,
    parse_entity_data, validate_model,
};

// Codegen types
pub use stategen_codegen::{
    CodegenError, GeneratedSource, Generator, GeneratorConfig, generate, generate_entity_decls,
    generate_entity_decls_file, generate_from_corpus, generate_from_corpus_file,
    generate_from_document, generate_from_document_file,
};
