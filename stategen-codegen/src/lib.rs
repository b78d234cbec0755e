//! # Stategen Codegen
//!
//! Rust code generation from ingested state models.
//!
//! This crate provides:
//! - Property value enum generation
//! - Typed state enum generation with a catch-all constructor
//! - Bidirectional conversion generation between generic and typed states
//! - Declarative entity list generation
//! - Chunked dispatch so generated matches stay within compiler limits

pub mod chunk;
pub mod error;
pub mod generator;
pub mod rust;

pub use error::CodegenError;
pub use generator::{GeneratedSource, Generator, GeneratorConfig};

use stategen_schema::corpus::{CorpusFormat, parse_corpus};
use stategen_schema::document::{StateDocument, parse_entity_data};
use stategen_schema::ir::ModelIr;
use stategen_schema::types::StateModel;
use stategen_schema::validation::validate_model;

use crate::rust::EntitiesGenerator;

/// Generates source artifacts from an intermediate model.
///
/// The model is validated before any emitter runs; a validation failure
/// produces no partial output.
///
/// # Arguments
/// * `model` - Parsed intermediate model
/// * `config` - Generation configuration
///
/// # Returns
/// The generated source artifacts.
///
/// # Errors
/// Returns `CodegenError` if the model fails validation.
pub fn generate(
    model: &StateModel,
    config: &GeneratorConfig,
) -> Result<GeneratedSource, CodegenError> {
    validate_model(model)?;
    let ir = ModelIr::from_model(model);
    Ok(Generator::new(&ir, config).generate())
}

/// Generates source artifacts from line-corpus text.
///
/// # Arguments
/// * `text` - Raw corpus text
/// * `format` - Corpus record tag configuration
/// * `config` - Generation configuration
///
/// # Returns
/// The generated source artifacts.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation, or generation fails.
pub fn generate_from_corpus(
    text: &str,
    format: &CorpusFormat,
    config: &GeneratorConfig,
) -> Result<GeneratedSource, CodegenError> {
    let model = parse_corpus(text, format)?;
    generate(&model, config)
}

/// Generates source artifacts from a line-corpus file.
///
/// # Arguments
/// * `path` - Path to the corpus file
/// * `format` - Corpus record tag configuration
/// * `config` - Generation configuration
///
/// # Returns
/// The generated source artifacts.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation, or generation
/// fails.
pub fn generate_from_corpus_file(
    path: &std::path::Path,
    format: &CorpusFormat,
    config: &GeneratorConfig,
) -> Result<GeneratedSource, CodegenError> {
    let text = std::fs::read_to_string(path)?;
    generate_from_corpus(&text, format, config)
}

/// Generates source artifacts from state-document JSON text.
///
/// # Arguments
/// * `json` - State override document text
/// * `config` - Generation configuration
///
/// # Returns
/// The generated source artifacts.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation, or generation fails.
pub fn generate_from_document(
    json: &str,
    config: &GeneratorConfig,
) -> Result<GeneratedSource, CodegenError> {
    let model = StateDocument::parse(json)?.into_model()?;
    generate(&model, config)
}

/// Generates source artifacts from a state-document JSON file.
///
/// # Arguments
/// * `path` - Path to the state override document
/// * `config` - Generation configuration
///
/// # Returns
/// The generated source artifacts.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation, or generation
/// fails.
pub fn generate_from_document_file(
    path: &std::path::Path,
    config: &GeneratorConfig,
) -> Result<GeneratedSource, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_document(&json, config)
}

/// Generates the declarative entity list from entity-data JSON text.
///
/// # Arguments
/// * `json` - Entity-data document text
/// * `config` - Generation configuration
///
/// # Returns
/// The generated `entities!` invocation.
///
/// # Errors
/// Returns `CodegenError` if parsing fails.
pub fn generate_entity_decls(
    json: &str,
    config: &GeneratorConfig,
) -> Result<String, CodegenError> {
    let entities = parse_entity_data(json)?;
    Ok(EntitiesGenerator::new(&entities, config).generate())
}

/// Generates the declarative entity list from an entity-data JSON file.
///
/// # Arguments
/// * `path` - Path to the entity-data document
/// * `config` - Generation configuration
///
/// # Returns
/// The generated `entities!` invocation.
///
/// # Errors
/// Returns `CodegenError` if reading or parsing fails.
pub fn generate_entity_decls_file(
    path: &std::path::Path,
    config: &GeneratorConfig,
) -> Result<String, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_entity_decls(&json, config)
}
